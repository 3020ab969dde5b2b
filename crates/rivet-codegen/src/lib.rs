//! Rivet Codegen - Definition to Registration Source Generation
//!
//! This crate implements the snapshot compiler core: it turns a
//! `ComponentDefinition` tree into the registration source text that
//! reconstructs the same configured component without re-running the
//! original introspection.

pub mod access;
pub mod code;
pub mod encode;
pub mod error;
pub mod metadata;
pub mod naming;
pub mod registration;

pub use access::AccessRegistrar;
pub use code::{CodeBlock, CodeBlockBuilder, MultiStatement};
pub use encode::ValueEncoder;
pub use error::{GenError, GenResult};
pub use metadata::{AttributeFilter, MetadataGenerator};
pub use registration::{
    InnerDefinitionHandler, InnerRegistration, InstantiationProvider, RegistrationContext,
    RegistrationGenerator,
};
