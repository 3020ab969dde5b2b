//! Configuration values

use serde::{Deserialize, Serialize};

use crate::definition::ComponentDefinition;
use crate::ty::TypeDescriptor;

/// The payload of a constructor argument, property, or attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Character scalar.
    Char(char),
    /// String.
    Str(String),
    /// Type literal.
    Type(TypeDescriptor),
    /// Ordered sequence; element order is significant.
    List(Vec<Value>),
    /// Nested component definition. Nested definitions form a tree, never a
    /// graph; each node is generated as an independent sub-unit.
    Definition(Box<ComponentDefinition>),
}

impl Value {
    /// A string value.
    pub fn string(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    /// A nested definition value.
    pub fn definition(definition: ComponentDefinition) -> Self {
        Value::Definition(Box::new(definition))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
