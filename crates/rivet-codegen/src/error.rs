//! Generation errors
//!
//! Generation is a pure function of its input: the only fatal condition is a
//! misconfigured generator. Unresolvable method names and failed
//! introspection are modelled as absent lookups and skipped, never raised.

use thiserror::Error;

/// Result alias for generation.
pub type GenResult<T> = Result<T, GenError>;

/// Fatal generation errors.
#[derive(Debug, Error)]
pub enum GenError {
    /// A nested definition was encountered but the generator was not
    /// configured with an inner-definition handler.
    #[error("inner definition of type {type_name} requires an inner-definition handler")]
    UnsupportedInnerDefinition {
        /// Type of the nested definition that could not be generated.
        type_name: String,
    },
}
