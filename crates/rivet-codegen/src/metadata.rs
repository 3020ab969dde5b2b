//! Ordered, conditional emission of definition configuration facets
//!
//! Every facet is emitted only when it differs from its default, in the
//! fixed order of the `FACETS` table. The order is data, not control flow:
//! downstream tooling relies on byte-identical regeneration.

use rivet_model::{ComponentDefinition, Role, SCOPE_SINGLETON};

use crate::code::{str_literal, MultiStatement};
use crate::encode::ValueEncoder;
use crate::error::GenResult;
use crate::naming;

/// Inclusion predicate for custom attributes.
pub type AttributeFilter = fn(&str) -> bool;

/// Default attribute filter: attributes may carry arbitrary runtime objects,
/// so nothing is emitted unless a caller opts in.
pub(crate) fn exclude_all_attributes(_name: &str) -> bool {
    false
}

type AppliesFn = fn(&ComponentDefinition) -> bool;
type EmitFn = fn(
    &MetadataGenerator<'_>,
    &str,
    &mut ValueEncoder<'_, '_>,
    &mut MultiStatement,
) -> GenResult<()>;

struct Facet {
    applies: AppliesFn,
    emit: EmitFn,
}

/// The fixed emission order.
const FACETS: &[Facet] = &[
    Facet {
        applies: |d| !d.init_method_names().is_empty(),
        emit: emit_init_methods,
    },
    Facet {
        applies: |d| !d.destroy_method_names().is_empty(),
        emit: emit_destroy_methods,
    },
    Facet {
        applies: ComponentDefinition::is_primary,
        emit: emit_primary,
    },
    Facet {
        applies: |d| !d.scope().is_empty() && d.scope() != SCOPE_SINGLETON,
        emit: emit_scope,
    },
    Facet {
        applies: |d| !d.depends_on().is_empty(),
        emit: emit_depends_on,
    },
    Facet {
        applies: ComponentDefinition::is_lazy_init,
        emit: emit_lazy_init,
    },
    Facet {
        applies: |d| !d.is_autowire_candidate(),
        emit: emit_autowire_candidate,
    },
    Facet {
        applies: ComponentDefinition::is_synthetic,
        emit: emit_synthetic,
    },
    Facet {
        applies: |d| d.role() != Role::Application,
        emit: emit_role,
    },
    Facet {
        applies: |d| !d.constructor_args().is_empty(),
        emit: emit_constructor_args,
    },
    Facet {
        applies: ComponentDefinition::has_property_values,
        emit: emit_property_values,
    },
    Facet {
        applies: |d| !d.attributes().is_empty(),
        emit: emit_attributes,
    },
];

/// Builds the configuration statements for one definition.
pub struct MetadataGenerator<'a> {
    definition: &'a ComponentDefinition,
    depth: usize,
    attribute_filter: AttributeFilter,
}

impl<'a> MetadataGenerator<'a> {
    /// A generator for `definition` at the given nesting depth, with the
    /// default exclude-all attribute filter.
    pub fn new(definition: &'a ComponentDefinition, depth: usize) -> Self {
        Self {
            definition,
            depth,
            attribute_filter: exclude_all_attributes,
        }
    }

    /// Replace the attribute inclusion predicate.
    pub fn with_attribute_filter(mut self, filter: AttributeFilter) -> Self {
        self.attribute_filter = filter;
        self
    }

    /// Evaluate the facet table against the definition. An empty result
    /// means no configuration callback should be emitted at all.
    pub fn build(
        &self,
        var: &str,
        encoder: &mut ValueEncoder<'_, '_>,
    ) -> GenResult<MultiStatement> {
        let mut statements = MultiStatement::new();
        for facet in FACETS {
            if (facet.applies)(self.definition) {
                (facet.emit)(self, var, encoder, &mut statements)?;
            }
        }
        Ok(statements)
    }
}

fn emit_init_methods(
    gen: &MetadataGenerator<'_>,
    var: &str,
    _encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    emit_lifecycle(
        var,
        "set_init_method",
        "set_init_methods",
        gen.definition.init_method_names(),
        statements,
    );
    Ok(())
}

fn emit_destroy_methods(
    gen: &MetadataGenerator<'_>,
    var: &str,
    _encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    emit_lifecycle(
        var,
        "set_destroy_method",
        "set_destroy_methods",
        gen.definition.destroy_method_names(),
        statements,
    );
    Ok(())
}

fn emit_primary(
    _gen: &MetadataGenerator<'_>,
    var: &str,
    _encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    statements.add_statement(format!("{var}.set_primary(true)"));
    Ok(())
}

fn emit_scope(
    gen: &MetadataGenerator<'_>,
    var: &str,
    _encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    statements.add_statement(format!(
        "{var}.set_scope({})",
        str_literal(gen.definition.scope())
    ));
    Ok(())
}

fn emit_depends_on(
    gen: &MetadataGenerator<'_>,
    var: &str,
    _encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    statements.add_statement(format!(
        "{var}.set_depends_on({})",
        str_list(gen.definition.depends_on())
    ));
    Ok(())
}

fn emit_lazy_init(
    _gen: &MetadataGenerator<'_>,
    var: &str,
    _encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    statements.add_statement(format!("{var}.set_lazy_init(true)"));
    Ok(())
}

fn emit_autowire_candidate(
    _gen: &MetadataGenerator<'_>,
    var: &str,
    _encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    statements.add_statement(format!("{var}.set_autowire_candidate(false)"));
    Ok(())
}

fn emit_synthetic(
    _gen: &MetadataGenerator<'_>,
    var: &str,
    _encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    statements.add_statement(format!("{var}.set_synthetic(true)"));
    Ok(())
}

fn emit_role(
    gen: &MetadataGenerator<'_>,
    var: &str,
    _encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    statements.add_statement(format!(
        "{var}.set_role({})",
        gen.definition.role().ordinal()
    ));
    Ok(())
}

fn emit_constructor_args(
    gen: &MetadataGenerator<'_>,
    var: &str,
    encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    let args = gen.definition.constructor_args();
    if args.len() == 1 {
        if let Some((index, holder)) = args.iter().next() {
            let value = encoder.encode(&holder.value)?;
            statements.add_statement(format!(
                "{var}.constructor_args().add_indexed({index}, {value})"
            ));
        }
        return Ok(());
    }
    let holder_var = naming::local_variable("args", gen.depth);
    statements.add_statement(format!("let {holder_var} = {var}.constructor_args()"));
    for (index, holder) in args {
        let value = encoder.encode(&holder.value)?;
        statements.add_statement(format!("{holder_var}.add_indexed({index}, {value})"));
    }
    Ok(())
}

fn emit_property_values(
    gen: &MetadataGenerator<'_>,
    var: &str,
    encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    let properties = gen.definition.property_values();
    if properties.len() == 1 {
        let property = &properties[0];
        let value = encoder.encode(&property.value)?;
        statements.add_statement(format!(
            "{var}.property_values().add({}, {value})",
            str_literal(&property.name)
        ));
        return Ok(());
    }
    let holder_var = naming::local_variable("props", gen.depth);
    statements.add_statement(format!("let {holder_var} = {var}.property_values()"));
    for property in properties {
        let value = encoder.encode(&property.value)?;
        statements.add_statement(format!(
            "{holder_var}.add({}, {value})",
            str_literal(&property.name)
        ));
    }
    Ok(())
}

fn emit_attributes(
    gen: &MetadataGenerator<'_>,
    var: &str,
    encoder: &mut ValueEncoder<'_, '_>,
    statements: &mut MultiStatement,
) -> GenResult<()> {
    for (name, value) in gen.definition.attributes() {
        if (gen.attribute_filter)(name) {
            let value = encoder.encode(value)?;
            statements.add_statement(format!(
                "{var}.set_attribute({}, {value})",
                str_literal(name)
            ));
        }
    }
    Ok(())
}

fn emit_lifecycle(
    var: &str,
    single: &str,
    plural: &str,
    names: &[String],
    statements: &mut MultiStatement,
) {
    if names.len() == 1 {
        statements.add_statement(format!("{var}.{single}({})", str_literal(&names[0])));
    } else {
        statements.add_statement(format!("{var}.{plural}({})", str_list(names)));
    }
}

fn str_list(items: &[String]) -> String {
    let rendered: Vec<String> = items.iter().map(|s| str_literal(s)).collect();
    format!("vec![{}]", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rivet_model::{TypeDescriptor, Value, SCOPE_PROTOTYPE};

    fn definition() -> ComponentDefinition {
        ComponentDefinition::new(TypeDescriptor::named("app::UserService"))
    }

    fn build(definition: &ComponentDefinition) -> Vec<String> {
        let mut encoder = ValueEncoder::new();
        MetadataGenerator::new(definition, 0)
            .build("bd", &mut encoder)
            .unwrap()
            .statements()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_all_defaults_emit_nothing() {
        let def = definition();
        assert!(build(&def).is_empty());
    }

    #[test]
    fn test_singleton_scope_is_suppressed() {
        let mut def = definition();
        def.set_scope(SCOPE_SINGLETON);
        assert!(build(&def).is_empty());
    }

    #[test]
    fn test_single_init_method_uses_singular_accessor() {
        let mut def = definition();
        def.add_init_method("init");
        assert_eq!(build(&def), ["bd.set_init_method(\"init\")"]);
    }

    #[test]
    fn test_multiple_init_methods_use_plural_accessor() {
        let mut def = definition();
        def.add_init_method("init");
        def.add_init_method("warm_up");
        assert_eq!(
            build(&def),
            ["bd.set_init_methods(vec![\"init\", \"warm_up\"])"]
        );
    }

    #[test]
    fn test_facet_table_order() {
        let mut def = definition();
        def.set_attribute("origin", Value::string("xml"));
        def.add_property("name", Value::string("Ada"));
        def.add_constructor_arg(0, Value::Int(1));
        def.set_role(rivet_model::Role::Infrastructure);
        def.set_synthetic(true);
        def.set_autowire_candidate(false);
        def.set_lazy_init(true);
        def.set_depends_on(vec!["audit".to_string()]);
        def.set_scope(SCOPE_PROTOTYPE);
        def.set_primary(true);
        def.add_destroy_method("shutdown");
        def.add_init_method("init");

        assert_eq!(
            build(&def),
            [
                "bd.set_init_method(\"init\")",
                "bd.set_destroy_method(\"shutdown\")",
                "bd.set_primary(true)",
                "bd.set_scope(\"prototype\")",
                "bd.set_depends_on(vec![\"audit\"])",
                "bd.set_lazy_init(true)",
                "bd.set_autowire_candidate(false)",
                "bd.set_synthetic(true)",
                "bd.set_role(2)",
                "bd.constructor_args().add_indexed(0, 1)",
                "bd.property_values().add(\"name\", \"Ada\")",
                // Attributes fall to the default exclude-all filter.
            ]
        );
    }

    #[test]
    fn test_prototype_primary_single_property_scenario() {
        let mut def = definition();
        def.set_scope(SCOPE_PROTOTYPE);
        def.set_primary(true);
        def.add_property("name", Value::string("Ada"));

        assert_eq!(
            build(&def),
            [
                "bd.set_primary(true)",
                "bd.set_scope(\"prototype\")",
                "bd.property_values().add(\"name\", \"Ada\")",
            ]
        );
    }

    #[test]
    fn test_single_constructor_arg_has_no_holder() {
        let mut def = definition();
        def.add_constructor_arg(2, Value::string("alpha"));
        assert_eq!(
            build(&def),
            ["bd.constructor_args().add_indexed(2, \"alpha\")"]
        );
    }

    #[test]
    fn test_multiple_constructor_args_bind_one_holder() {
        let mut def = definition();
        def.add_constructor_arg(1, Value::Int(10));
        def.add_constructor_arg(0, Value::string("alpha"));
        assert_eq!(
            build(&def),
            [
                "let args = bd.constructor_args()",
                "args.add_indexed(0, \"alpha\")",
                "args.add_indexed(1, 10)",
            ]
        );
    }

    #[test]
    fn test_multiple_properties_bind_one_holder() {
        let mut def = definition();
        def.add_property("name", Value::string("Ada"));
        def.add_property("limit", Value::Int(3));
        assert_eq!(
            build(&def),
            [
                "let props = bd.property_values()",
                "props.add(\"name\", \"Ada\")",
                "props.add(\"limit\", 3)",
            ]
        );
    }

    #[test]
    fn test_holder_variables_carry_depth_suffix() {
        let mut def = definition();
        def.add_constructor_arg(0, Value::Int(0));
        def.add_constructor_arg(1, Value::Int(1));

        let mut encoder = ValueEncoder::new();
        let statements = MetadataGenerator::new(&def, 2)
            .build("bd__", &mut encoder)
            .unwrap();
        assert_eq!(
            statements.statements()[0].as_str(),
            "let args__ = bd__.constructor_args()"
        );
    }

    #[test]
    fn test_attribute_filter_opt_in() {
        let mut def = definition();
        def.set_attribute("origin", Value::string("xml"));
        def.set_attribute("internal", Value::Int(1));

        let mut encoder = ValueEncoder::new();
        let statements = MetadataGenerator::new(&def, 0)
            .with_attribute_filter(|name| name == "origin")
            .build("bd", &mut encoder)
            .unwrap();
        let rendered: Vec<&str> = statements.statements().iter().map(|s| s.as_str()).collect();
        assert_eq!(rendered, ["bd.set_attribute(\"origin\", \"xml\")"]);
    }

    #[test]
    fn test_autowire_default_emits_nothing() {
        let mut def = definition();
        def.set_autowire_candidate(true);
        assert!(build(&def).is_empty());
    }
}
