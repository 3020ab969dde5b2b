//! Structural type descriptors
//!
//! Types are described structurally, as extracted by the (out-of-scope)
//! definition-loading layer: a fully qualified name, optional generic
//! arguments, and a marker for type parameters that could not be pinned to a
//! concrete type.

use serde::{Deserialize, Serialize};

/// A structural description of a target-language type, possibly generic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully qualified type name, e.g. `app::user::UserService`.
    name: String,
    /// Generic arguments, each itself a descriptor.
    generics: Vec<TypeDescriptor>,
    /// Set when this node stands for a type parameter the extraction step
    /// could not resolve.
    unresolved: bool,
}

impl TypeDescriptor {
    /// A plain, non-generic type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            unresolved: false,
        }
    }

    /// A generic type reference with the given arguments.
    pub fn generic(name: impl Into<String>, generics: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            generics,
            unresolved: false,
        }
    }

    /// A type parameter that could not be resolved to a concrete type.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            unresolved: true,
        }
    }

    /// Fully qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last path segment of the name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }

    /// Generic arguments.
    pub fn generics(&self) -> &[TypeDescriptor] {
        &self.generics
    }

    /// Whether this descriptor carries generic arguments.
    pub fn has_generics(&self) -> bool {
        !self.generics.is_empty()
    }

    /// Whether this node itself is an unresolved type parameter.
    pub fn is_unresolved(&self) -> bool {
        self.unresolved
    }

    /// Whether this type and every generic argument, recursively, resolved
    /// to a concrete type. A leaf with no generics is resolved.
    pub fn is_fully_resolved(&self) -> bool {
        !self.unresolved && self.generics.iter().all(TypeDescriptor::is_fully_resolved)
    }
}
