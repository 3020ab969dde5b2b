//! Extracted class universe
//!
//! The generator never touches runtime reflection; it works against this
//! structural model extracted ahead of time: classes, their methods, their
//! writable properties, and proxy-unwrap links back to the user-facing class.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ty::TypeDescriptor;

/// A method known on a class, by name and parameter types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name.
    pub name: String,
    /// Parameter types, in declaration order.
    pub params: Vec<TypeDescriptor>,
}

impl MethodDescriptor {
    /// A method with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }
}

/// A bean-style property and its write accessor, if one was discovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name.
    pub name: String,
    /// Name of the write accessor method, when introspection found one.
    pub write_method: Option<String>,
}

impl PropertyDescriptor {
    /// A property with a discovered write accessor.
    pub fn writable(name: impl Into<String>, write_method: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            write_method: Some(write_method.into()),
        }
    }

    /// A property without a write accessor.
    pub fn read_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            write_method: None,
        }
    }
}

/// Structural description of one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    name: String,
    enclosing: Option<String>,
    static_nested: bool,
    user_class: Option<String>,
    methods: Vec<MethodDescriptor>,
    /// `None` means introspection of this class failed; the property scan is
    /// then abandoned rather than partially trusted.
    properties: Option<Vec<PropertyDescriptor>>,
}

impl ClassDescriptor {
    /// A new top-level class with successful (empty) introspection data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enclosing: None,
            static_nested: false,
            user_class: None,
            methods: Vec::new(),
            properties: Some(Vec::new()),
        }
    }

    /// Fully qualified class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last path segment of the name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }

    /// Mark this class as nested inside `enclosing`.
    pub fn set_enclosing(&mut self, enclosing: impl Into<String>, static_nested: bool) {
        self.enclosing = Some(enclosing.into());
        self.static_nested = static_nested;
    }

    /// Enclosing class name, for nested declarations.
    pub fn enclosing(&self) -> Option<&str> {
        self.enclosing.as_deref()
    }

    /// A non-static nested class: constructing one takes an implicit
    /// enclosing-instance argument.
    pub fn is_inner(&self) -> bool {
        self.enclosing.is_some() && !self.static_nested
    }

    /// Link a proxy class to the user-facing class it wraps.
    pub fn set_user_class(&mut self, user_class: impl Into<String>) {
        self.user_class = Some(user_class.into());
    }

    /// Proxy-unwrap target, if this class is a proxy.
    pub fn user_class(&self) -> Option<&str> {
        self.user_class.as_deref()
    }

    /// Register a method.
    pub fn add_method(&mut self, method: MethodDescriptor) {
        self.methods.push(method);
    }

    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Register a property.
    pub fn add_property(&mut self, property: PropertyDescriptor) {
        self.properties.get_or_insert_with(Vec::new).push(property);
    }

    /// Record that introspection of this class failed.
    pub fn mark_introspection_failed(&mut self) {
        self.properties = None;
    }

    /// Introspected properties, or `None` when introspection failed.
    pub fn properties(&self) -> Option<&[PropertyDescriptor]> {
        self.properties.as_deref()
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties
            .as_deref()
            .and_then(|props| props.iter().find(|p| p.name == name))
    }
}

/// Name-indexed registry of class descriptors.
#[derive(Debug, Default)]
pub struct TypeModel {
    classes: FxHashMap<String, ClassDescriptor>,
}

impl TypeModel {
    /// New empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class descriptor, replacing any previous entry.
    pub fn add_class(&mut self, class: ClassDescriptor) {
        self.classes.insert(class.name().to_string(), class);
    }

    /// Look up a class by fully qualified name.
    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    /// Look up a method on a class, with an explicit absent case.
    pub fn find_method(&self, class: &str, method: &str) -> Option<&MethodDescriptor> {
        self.class(class).and_then(|c| c.method(method))
    }

    /// Resolve a class to its user-facing descriptor, following proxy-unwrap
    /// links. Unknown names resolve to `None`.
    pub fn user_class(&self, name: &str) -> Option<&ClassDescriptor> {
        let mut current = self.classes.get(name)?;
        let mut hops = 0;
        while let Some(target) = current.user_class() {
            if hops >= self.classes.len() {
                break;
            }
            match self.classes.get(target) {
                Some(next) => current = next,
                None => break,
            }
            hops += 1;
        }
        Some(current)
    }

    /// The user-facing class name for `name`; identity when the class is
    /// unknown or not a proxy.
    pub fn user_class_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.user_class(name).map(ClassDescriptor::name).unwrap_or(name)
    }
}
