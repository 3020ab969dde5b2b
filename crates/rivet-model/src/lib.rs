//! Rivet Component Model
//!
//! The declarative data model consumed by the Rivet wiring compiler: component
//! definitions, configuration values, structural type descriptors, and the
//! extracted class universe that stands in for runtime reflection.

#![warn(missing_docs)]

pub mod class;
pub mod creator;
pub mod definition;
pub mod ty;
pub mod value;

pub use class::{ClassDescriptor, MethodDescriptor, PropertyDescriptor, TypeModel};
pub use creator::Creator;
pub use definition::{
    ComponentDefinition, PropertyValue, Role, ValueHolder, SCOPE_PROTOTYPE, SCOPE_SINGLETON,
};
pub use ty::TypeDescriptor;
pub use value::Value;
