//! Reflective-access registration for by-name method references
//!
//! A definition refers to init methods, destroy methods, and property write
//! accessors by name only. This pass records invoke permissions for every
//! name that resolves against the structural class model, so a restricted
//! runtime can still call them. Names that do not resolve are skipped; they
//! may be resolved dynamically elsewhere.

use rivet_hints::{InvocationMode, RuntimeHints};
use rivet_model::{ClassDescriptor, ComponentDefinition, TypeModel};

/// Records reflective-access permissions for one definition.
pub struct AccessRegistrar<'a> {
    model: &'a TypeModel,
}

impl<'a> AccessRegistrar<'a> {
    /// A registrar resolving names against `model`.
    pub fn new(model: &'a TypeModel) -> Self {
        Self { model }
    }

    /// Record access permissions for every resolvable by-name reference in
    /// `definition`. Best effort: an unknown class skips the whole pass.
    pub fn register(&self, definition: &ComponentDefinition, hints: &mut RuntimeHints) {
        let Some(class) = self.model.user_class(definition.ty().name()) else {
            return;
        };
        self.register_lifecycle_methods(class, definition.init_method_names(), hints);
        self.register_lifecycle_methods(class, definition.destroy_method_names(), hints);
        self.register_property_writers(class, definition, hints);
    }

    fn register_lifecycle_methods(
        &self,
        class: &ClassDescriptor,
        names: &[String],
        hints: &mut RuntimeHints,
    ) {
        for name in names {
            if let Some(method) = class.method(name) {
                hints
                    .reflection_mut()
                    .register_method(class.name(), &method.name, InvocationMode::Invoke);
            }
        }
    }

    fn register_property_writers(
        &self,
        class: &ClassDescriptor,
        definition: &ComponentDefinition,
        hints: &mut RuntimeHints,
    ) {
        if !definition.has_property_values() {
            return;
        }
        // Introspection failure abandons the whole property scan.
        let Some(properties) = class.properties() else {
            return;
        };
        for property in definition.property_values() {
            let write_method = properties
                .iter()
                .find(|p| p.name == property.name)
                .and_then(|p| p.write_method.as_deref());
            if let Some(write_method) = write_method {
                hints
                    .reflection_mut()
                    .register_method(class.name(), write_method, InvocationMode::Invoke);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rivet_model::{MethodDescriptor, PropertyDescriptor, TypeDescriptor, Value};

    fn model_with_service() -> TypeModel {
        let mut class = ClassDescriptor::new("app::UserService");
        class.add_method(MethodDescriptor::new("init"));
        class.add_method(MethodDescriptor::new("shutdown"));
        class.add_property(PropertyDescriptor::writable("name", "set_name"));
        class.add_property(PropertyDescriptor::read_only("id"));

        let mut model = TypeModel::new();
        model.add_class(class);
        model
    }

    fn definition() -> ComponentDefinition {
        ComponentDefinition::new(TypeDescriptor::named("app::UserService"))
    }

    #[test]
    fn test_resolvable_lifecycle_methods_are_hinted() {
        let model = model_with_service();
        let mut def = definition();
        def.add_init_method("init");
        def.add_destroy_method("shutdown");

        let mut hints = RuntimeHints::new();
        AccessRegistrar::new(&model).register(&def, &mut hints);

        assert!(hints.reflection().contains("app::UserService", "init"));
        assert!(hints.reflection().contains("app::UserService", "shutdown"));
        assert_eq!(hints.reflection().len(), 2);
    }

    #[test]
    fn test_unresolvable_method_names_are_skipped() {
        let model = model_with_service();
        let mut def = definition();
        def.add_init_method("does_not_exist");

        let mut hints = RuntimeHints::new();
        AccessRegistrar::new(&model).register(&def, &mut hints);
        assert!(hints.reflection().is_empty());
    }

    #[test]
    fn test_property_writers_are_hinted() {
        let model = model_with_service();
        let mut def = definition();
        def.add_property("name", Value::string("Ada"));
        def.add_property("id", Value::Int(7));
        def.add_property("ghost", Value::Int(0));

        let mut hints = RuntimeHints::new();
        AccessRegistrar::new(&model).register(&def, &mut hints);

        // Only the property with a discovered write accessor is recorded.
        assert_eq!(hints.reflection().len(), 1);
        assert!(hints.reflection().contains("app::UserService", "set_name"));
    }

    #[test]
    fn test_introspection_failure_abandons_property_scan() {
        let mut class = ClassDescriptor::new("app::Opaque");
        class.add_method(MethodDescriptor::new("init"));
        class.mark_introspection_failed();
        let mut model = TypeModel::new();
        model.add_class(class);

        let mut def = ComponentDefinition::new(TypeDescriptor::named("app::Opaque"));
        def.add_init_method("init");
        def.add_property("name", Value::string("Ada"));

        let mut hints = RuntimeHints::new();
        AccessRegistrar::new(&model).register(&def, &mut hints);

        // Lifecycle hints survive; the property scan is dropped wholesale.
        assert_eq!(hints.reflection().len(), 1);
        assert!(hints.reflection().contains("app::Opaque", "init"));
    }

    #[test]
    fn test_proxy_is_unwrapped_before_lookup() {
        let mut proxy = ClassDescriptor::new("app::UserService$Proxy");
        proxy.set_user_class("app::UserService");
        let mut model = model_with_service();
        model.add_class(proxy);

        let mut def = ComponentDefinition::new(TypeDescriptor::named("app::UserService$Proxy"));
        def.add_init_method("init");

        let mut hints = RuntimeHints::new();
        AccessRegistrar::new(&model).register(&def, &mut hints);
        assert!(hints.reflection().contains("app::UserService", "init"));
    }
}
