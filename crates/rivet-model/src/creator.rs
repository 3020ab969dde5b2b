//! Instance creator references

use serde::{Deserialize, Serialize};

use crate::ty::TypeDescriptor;

/// The constructor or factory method used to instantiate a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Creator {
    /// A constructor declared on `declaring`.
    Constructor {
        /// Declaring class, fully qualified.
        declaring: String,
        /// Parameter types, in declaration order.
        params: Vec<TypeDescriptor>,
    },
    /// A named factory method declared on `declaring`.
    FactoryMethod {
        /// Declaring class, fully qualified.
        declaring: String,
        /// Factory method name.
        name: String,
        /// Parameter types, in declaration order.
        params: Vec<TypeDescriptor>,
    },
}

impl Creator {
    /// A constructor creator.
    pub fn constructor(declaring: impl Into<String>, params: Vec<TypeDescriptor>) -> Self {
        Creator::Constructor {
            declaring: declaring.into(),
            params,
        }
    }

    /// A factory-method creator.
    pub fn factory_method(
        declaring: impl Into<String>,
        name: impl Into<String>,
        params: Vec<TypeDescriptor>,
    ) -> Self {
        Creator::FactoryMethod {
            declaring: declaring.into(),
            name: name.into(),
            params,
        }
    }

    /// Declaring class name.
    pub fn declaring(&self) -> &str {
        match self {
            Creator::Constructor { declaring, .. } => declaring,
            Creator::FactoryMethod { declaring, .. } => declaring,
        }
    }

    /// Parameter types.
    pub fn params(&self) -> &[TypeDescriptor] {
        match self {
            Creator::Constructor { params, .. } => params,
            Creator::FactoryMethod { params, .. } => params,
        }
    }

    /// Whether this creator is a factory method.
    pub fn is_factory_method(&self) -> bool {
        matches!(self, Creator::FactoryMethod { .. })
    }
}
