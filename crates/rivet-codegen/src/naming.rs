//! Naming policy for generated identifiers
//!
//! Local variables are disambiguated by nesting depth; top-level entry-point
//! names derive from the creator's declaring type and the declared component
//! name, with a fixed fallback order that keeps names collision-free when
//! many definitions share a factory's declaring type.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use unicode_xid::UnicodeXID;

use rivet_model::{ComponentDefinition, Creator, TypeModel};

static RESERVED: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while",
    ]
    .into_iter()
    .collect()
});

/// Disambiguate `base` for the given nesting depth: one `_` marker per level,
/// so sibling scopes never collide with ancestor scopes sharing a base name.
pub fn local_variable(base: &str, depth: usize) -> String {
    format!("{}{}", base, "_".repeat(depth))
}

/// Whether `name` is a legal, non-reserved identifier of the generated
/// language.
pub fn is_valid_identifier(name: &str) -> bool {
    if name.is_empty() || name == "_" || RESERVED.contains(name) {
        return false;
    }
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if first != '_' && !first.is_xid_start() {
        return false;
    }
    chars.all(|c| c.is_xid_continue())
}

/// Name of the generated entry point that registers one definition.
///
/// Fallback order: a named factory method combines its declaring type with
/// the declared name (or the method name when the declared name is not a
/// legal identifier); a constructor on a nested type combines the enclosing
/// type with the declared name (or the user-facing type's simple name);
/// anything else takes the fixed verb prefix and the derived target alone.
pub fn entry_point_name(
    model: &TypeModel,
    component_name: &str,
    definition: &ComponentDefinition,
    creator: &Creator,
) -> String {
    match creator {
        Creator::FactoryMethod { declaring, name, .. } => {
            let target = if is_valid_identifier(component_name) {
                component_name
            } else {
                name
            };
            format!("register_{}_{}", simple_name(declaring), target)
        }
        Creator::Constructor { declaring, .. } => {
            let user_simple = simple_name(model.user_class_name(definition.ty().name()));
            let target = if is_valid_identifier(component_name) {
                component_name
            } else {
                user_simple
            };
            match model.class(declaring).and_then(|c| c.enclosing()) {
                Some(enclosing) => format!("register_{}_{}", simple_name(enclosing), target),
                None => format!("register_{target}"),
            }
        }
    }
}

fn simple_name(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rivet_model::{ClassDescriptor, TypeDescriptor};

    fn definition(ty: &str) -> ComponentDefinition {
        ComponentDefinition::new(TypeDescriptor::named(ty))
    }

    #[test]
    fn test_local_variable_depth_suffix() {
        assert_eq!(local_variable("bd", 0), "bd");
        assert_eq!(local_variable("bd", 1), "bd_");
        assert_eq!(local_variable("bd", 2), "bd__");
    }

    #[test]
    fn test_identifier_validity() {
        assert!(is_valid_identifier("userService"));
        assert!(is_valid_identifier("user_service2"));
        assert!(is_valid_identifier("_private"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("_"));
        assert!(!is_valid_identifier("2users"));
        assert!(!is_valid_identifier("user-service"));
        assert!(!is_valid_identifier("user service"));
        assert!(!is_valid_identifier("fn"));
        assert!(!is_valid_identifier("match"));
    }

    #[test]
    fn test_factory_method_uses_declared_name() {
        let model = TypeModel::new();
        let def = definition("app::UserService");
        let creator = Creator::factory_method("app::AppConfig", "user_service", vec![]);
        assert_eq!(
            entry_point_name(&model, "users", &def, &creator),
            "register_AppConfig_users"
        );
    }

    #[test]
    fn test_factory_method_falls_back_to_method_name() {
        let model = TypeModel::new();
        let def = definition("app::UserService");
        let creator = Creator::factory_method("app::AppConfig", "user_service", vec![]);
        assert_eq!(
            entry_point_name(&model, "users#0", &def, &creator),
            "register_AppConfig_user_service"
        );
    }

    #[test]
    fn test_shared_declaring_type_stays_collision_free() {
        let model = TypeModel::new();
        let def = definition("app::UserService");
        let first = Creator::factory_method("app::AppConfig", "user_service", vec![]);
        let second = Creator::factory_method("app::AppConfig", "audit_service", vec![]);
        let a = entry_point_name(&model, "users", &def, &first);
        let b = entry_point_name(&model, "audit", &def, &second);
        assert_ne!(a, b);
    }

    #[test]
    fn test_nested_constructor_uses_enclosing_type() {
        let mut model = TypeModel::new();
        let mut nested = ClassDescriptor::new("app::Outer::Inner");
        nested.set_enclosing("app::Outer", false);
        model.add_class(nested);

        let def = definition("app::Outer::Inner");
        let creator = Creator::constructor("app::Outer::Inner", vec![]);
        assert_eq!(
            entry_point_name(&model, "inner!", &def, &creator),
            "register_Outer_Inner"
        );
    }

    #[test]
    fn test_plain_constructor_uses_verb_prefix() {
        let model = TypeModel::new();
        let def = definition("app::UserService");
        let creator = Creator::constructor("app::UserService", vec![]);
        assert_eq!(
            entry_point_name(&model, "users", &def, &creator),
            "register_users"
        );
        assert_eq!(
            entry_point_name(&model, "users#0", &def, &creator),
            "register_UserService"
        );
    }
}
