//! Component definitions
//!
//! A `ComponentDefinition` is the unit the generator processes: how to
//! instantiate one component and how to configure it afterwards. Definitions
//! are built by the (out-of-scope) loading layer and consumed read-only here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ty::TypeDescriptor;
use crate::value::Value;

/// Default scope.
pub const SCOPE_SINGLETON: &str = "singleton";
/// Per-request scope.
pub const SCOPE_PROTOTYPE: &str = "prototype";

/// Role of a definition within the application, emitted as an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// A user-defined application component (the default).
    #[default]
    Application,
    /// A supporting component of some larger configuration.
    Support,
    /// A purely internal infrastructure component.
    Infrastructure,
}

impl Role {
    /// Ordinal used in emitted configuration statements.
    pub fn ordinal(self) -> u8 {
        match self {
            Role::Application => 0,
            Role::Support => 1,
            Role::Infrastructure => 2,
        }
    }
}

/// Holder for one indexed constructor argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueHolder {
    /// The argument value.
    pub value: Value,
}

impl From<Value> for ValueHolder {
    fn from(value: Value) -> Self {
        Self { value }
    }
}

/// One named property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: Value,
}

/// A declarative description of how to construct and configure one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    ty: TypeDescriptor,
    scope: String,
    primary: bool,
    lazy_init: bool,
    autowire_candidate: bool,
    synthetic: bool,
    role: Role,
    depends_on: Vec<String>,
    init_method_names: Vec<String>,
    destroy_method_names: Vec<String>,
    constructor_args: BTreeMap<u32, ValueHolder>,
    property_values: Vec<PropertyValue>,
    attributes: Vec<(String, Value)>,
}

impl ComponentDefinition {
    /// A definition with every facet at its default.
    pub fn new(ty: TypeDescriptor) -> Self {
        Self {
            ty,
            scope: String::new(),
            primary: false,
            lazy_init: false,
            autowire_candidate: true,
            synthetic: false,
            role: Role::Application,
            depends_on: Vec::new(),
            init_method_names: Vec::new(),
            destroy_method_names: Vec::new(),
            constructor_args: BTreeMap::new(),
            property_values: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Resolved component type.
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    /// Set the scope name.
    pub fn set_scope(&mut self, scope: impl Into<String>) {
        self.scope = scope.into();
    }

    /// Scope name; empty means the default singleton scope.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Mark as the primary candidate among same-typed components.
    pub fn set_primary(&mut self, primary: bool) {
        self.primary = primary;
    }

    /// Primary flag.
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Defer instantiation until first use.
    pub fn set_lazy_init(&mut self, lazy_init: bool) {
        self.lazy_init = lazy_init;
    }

    /// Lazy-init flag.
    pub fn is_lazy_init(&self) -> bool {
        self.lazy_init
    }

    /// Opt in or out of autowiring into other components.
    pub fn set_autowire_candidate(&mut self, candidate: bool) {
        self.autowire_candidate = candidate;
    }

    /// Autowire-eligibility flag; true by default.
    pub fn is_autowire_candidate(&self) -> bool {
        self.autowire_candidate
    }

    /// Mark as synthetic (not user-declared).
    pub fn set_synthetic(&mut self, synthetic: bool) {
        self.synthetic = synthetic;
    }

    /// Synthetic flag.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// Set the role.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Role; `Role::Application` by default.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Replace the depends-on list.
    pub fn set_depends_on(&mut self, names: Vec<String>) {
        self.depends_on = names;
    }

    /// Names this definition depends on, in declaration order.
    pub fn depends_on(&self) -> &[String] {
        &self.depends_on
    }

    /// Append an init method name.
    pub fn add_init_method(&mut self, name: impl Into<String>) {
        self.init_method_names.push(name.into());
    }

    /// Init method names, in declaration order.
    pub fn init_method_names(&self) -> &[String] {
        &self.init_method_names
    }

    /// Append a destroy method name.
    pub fn add_destroy_method(&mut self, name: impl Into<String>) {
        self.destroy_method_names.push(name.into());
    }

    /// Destroy method names, in declaration order.
    pub fn destroy_method_names(&self) -> &[String] {
        &self.destroy_method_names
    }

    /// Set the constructor argument at `index`.
    pub fn add_constructor_arg(&mut self, index: u32, value: Value) {
        self.constructor_args.insert(index, ValueHolder::from(value));
    }

    /// Indexed constructor arguments, in index order.
    pub fn constructor_args(&self) -> &BTreeMap<u32, ValueHolder> {
        &self.constructor_args
    }

    /// Add a property value; setting an existing name replaces it in place,
    /// preserving the original insertion position.
    pub fn add_property(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.property_values.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => self.property_values.push(PropertyValue { name, value }),
        }
    }

    /// Property values, in insertion order.
    pub fn property_values(&self) -> &[PropertyValue] {
        &self.property_values
    }

    /// Whether any property values are present.
    pub fn has_property_values(&self) -> bool {
        !self.property_values.is_empty()
    }

    /// Set a custom attribute; setting an existing key replaces it in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Custom attributes, in insertion order.
    pub fn attributes(&self) -> &[(String, Value)] {
        &self.attributes
    }
}
