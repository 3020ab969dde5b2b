//! Registration orchestration
//!
//! Composes one definition into a single fluent registration expression:
//! type reference, optional creator reference, deferred-construction
//! supplier, and the configuration callback. Nested definitions recurse
//! through the same pipeline in the detached output shape.

use rivet_hints::RuntimeHints;
use rivet_model::{ComponentDefinition, Creator, TypeDescriptor, TypeModel};

use crate::access::AccessRegistrar;
use crate::code::{str_literal, CodeBlock, CodeBlockBuilder, MultiStatement};
use crate::encode::{resolvable_type_literal, type_literal, ValueEncoder};
use crate::error::{GenError, GenResult};
use crate::metadata::{exclude_all_attributes, AttributeFilter, MetadataGenerator};
use crate::naming;

/// Transient per-invocation state: the current nesting depth, used purely to
/// derive disambiguated local identifiers. Passed by value down the
/// recursion, never shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationContext {
    depth: usize,
}

impl RegistrationContext {
    /// Top-level context.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context one nesting level deeper.
    pub fn nested(self) -> Self {
        Self { depth: self.depth + 1 }
    }

    /// Current nesting depth.
    pub fn depth(self) -> usize {
        self.depth
    }
}

/// External source of instance-construction statements for one definition.
pub trait InstantiationProvider {
    /// The constructor or factory method used to instantiate the component.
    fn creator(&self) -> &Creator;

    /// Deferred-construction statements. The provider may record its own
    /// access permissions into `hints`.
    fn instantiation(&self, hints: &mut RuntimeHints) -> MultiStatement;
}

/// Name and instantiation provider for one nested definition.
pub struct InnerRegistration<'a> {
    /// Registered name of the nested component.
    pub name: String,
    /// Provider for the nested component's construction statements.
    pub provider: Box<dyn InstantiationProvider + 'a>,
}

/// Supplies the registration inputs for nested definitions. Required only
/// when the processed tree contains `Value::Definition` payloads.
pub trait InnerDefinitionHandler {
    /// Inputs for generating `definition` as a nested component.
    fn inner_registration<'a>(
        &'a self,
        definition: &'a ComponentDefinition,
    ) -> InnerRegistration<'a>;
}

enum Closing {
    Register,
    Detached,
}

/// Composes registration source for one definition.
pub struct RegistrationGenerator<'a> {
    name: String,
    definition: &'a ComponentDefinition,
    model: &'a TypeModel,
    provider: &'a dyn InstantiationProvider,
    inner_handler: Option<&'a dyn InnerDefinitionHandler>,
    attribute_filter: AttributeFilter,
}

impl<'a> RegistrationGenerator<'a> {
    /// A generator for `definition`, registered under `name`.
    pub fn new(
        name: impl Into<String>,
        definition: &'a ComponentDefinition,
        model: &'a TypeModel,
        provider: &'a dyn InstantiationProvider,
    ) -> Self {
        Self {
            name: name.into(),
            definition,
            model,
            provider,
            inner_handler: None,
            attribute_filter: exclude_all_attributes,
        }
    }

    /// Enable nested-definition generation.
    pub fn with_inner_handler(mut self, handler: &'a dyn InnerDefinitionHandler) -> Self {
        self.inner_handler = Some(handler);
        self
    }

    /// Replace the attribute inclusion predicate.
    pub fn with_attribute_filter(mut self, filter: AttributeFilter) -> Self {
        self.attribute_filter = filter;
        self
    }

    /// Registered component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The processed definition.
    pub fn definition(&self) -> &ComponentDefinition {
        self.definition
    }

    /// Name for the generated entry point that performs this registration.
    pub fn entry_point_name(&self) -> String {
        naming::entry_point_name(self.model, &self.name, self.definition, self.provider.creator())
    }

    /// Record reflective-access permissions for this definition's by-name
    /// method references. The driver calls this once per top-level
    /// definition; the inner recursion covers nested definitions itself.
    pub fn register_runtime_hints(&self, hints: &mut RuntimeHints) {
        AccessRegistrar::new(self.model).register(self.definition, hints);
    }

    /// Bound output shape: the composed expression registers the definition
    /// directly into the live registry.
    pub fn generate_registration(&self, hints: &mut RuntimeHints) -> GenResult<CodeBlock> {
        self.generate(RegistrationContext::root(), hints, Closing::Register)
    }

    /// Detached output shape: the composed expression yields a standalone
    /// definition value.
    pub fn generate_definition(&self, hints: &mut RuntimeHints) -> GenResult<CodeBlock> {
        self.generate(RegistrationContext::root(), hints, Closing::Detached)
    }

    fn generate(
        &self,
        ctx: RegistrationContext,
        hints: &mut RuntimeHints,
        closing: Closing,
    ) -> GenResult<CodeBlock> {
        let instance_statements = self.provider.instantiation(hints);
        let mut code = CodeBlock::builder();
        code.add(&format!(
            "Registrar::of({}, {})",
            str_literal(&self.name),
            self.registrar_type()
        ));
        let creator = self.provider.creator();
        if self.should_declare_creator(creator) {
            code.add("\n    ").add(&creator_reference(creator));
        }
        code.add("\n    .instance_supplier(")
            .add_block(&instance_statements.to_closure("||", 4))
            .add(")");
        self.append_metadata(ctx, hints, &mut code)?;
        match closing {
            Closing::Register => code.add("\n    .register(registry);"),
            Closing::Detached => code.add("\n    .into_definition()"),
        };
        Ok(code.build())
    }

    /// The type reference opening the registrar: the fully-specific generic
    /// type when every generic parameter resolved, otherwise the erased
    /// user-facing class, since a partially-resolved generic signature is
    /// not safely reproducible as a type literal.
    fn registrar_type(&self) -> CodeBlock {
        let ty = self.definition.ty();
        if ty.has_generics() && ty.is_fully_resolved() {
            resolvable_type_literal(ty)
        } else {
            let user = self.model.user_class_name(ty.name());
            type_literal(&TypeDescriptor::named(user))
        }
    }

    /// A factory method is always declared. A constructor is declared only
    /// when it takes arguments (two or more for a non-static nested
    /// declaring type, which carries an implicit enclosing-instance
    /// argument); a no-argument constructor is the implicit default.
    fn should_declare_creator(&self, creator: &Creator) -> bool {
        match creator {
            Creator::FactoryMethod { .. } => true,
            Creator::Constructor { declaring, params } => {
                let min_args = if self.model.class(declaring).is_some_and(|c| c.is_inner()) {
                    2
                } else {
                    1
                };
                params.len() >= min_args
            }
        }
    }

    fn append_metadata(
        &self,
        ctx: RegistrationContext,
        hints: &mut RuntimeHints,
        code: &mut CodeBlockBuilder,
    ) -> GenResult<()> {
        let var = naming::local_variable("bd", ctx.depth());
        let mut inner =
            |definition: &ComponentDefinition| self.generate_inner(definition, ctx.nested(), hints);
        let mut encoder = ValueEncoder::with_inner(&mut inner);
        let statements = MetadataGenerator::new(self.definition, ctx.depth())
            .with_attribute_filter(self.attribute_filter)
            .build(&var, &mut encoder)?;
        if statements.is_empty() {
            return Ok(());
        }
        code.add("\n    .customize(")
            .add_block(&statements.to_closure(&format!("|{var}|"), 4))
            .add(")");
        Ok(())
    }

    fn generate_inner(
        &self,
        definition: &ComponentDefinition,
        ctx: RegistrationContext,
        hints: &mut RuntimeHints,
    ) -> GenResult<CodeBlock> {
        let Some(handler) = self.inner_handler else {
            return Err(GenError::UnsupportedInnerDefinition {
                type_name: definition.ty().name().to_string(),
            });
        };
        let InnerRegistration { name, provider } = handler.inner_registration(definition);
        let child = RegistrationGenerator {
            name,
            definition,
            model: self.model,
            provider: provider.as_ref(),
            inner_handler: Some(handler),
            attribute_filter: exclude_all_attributes,
        };
        child.register_runtime_hints(hints);
        child.generate(ctx, hints, Closing::Detached)
    }
}

fn creator_reference(creator: &Creator) -> String {
    match creator {
        Creator::FactoryMethod { declaring, name, params } => {
            if params.is_empty() {
                format!(
                    ".with_factory_method({}, {})",
                    str_literal(declaring),
                    str_literal(name)
                )
            } else {
                format!(
                    ".with_factory_method({}, {}, {})",
                    str_literal(declaring),
                    str_literal(name),
                    param_types(params)
                )
            }
        }
        Creator::Constructor { params, .. } => {
            format!(".with_constructor({})", param_types(params))
        }
    }
}

fn param_types(params: &[TypeDescriptor]) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|p| type_literal(p).as_str().to_string())
        .collect();
    format!("&[{}]", rendered.join(", "))
}
