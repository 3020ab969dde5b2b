//! Rivet Runtime Hints
//!
//! Reflective-access records accumulated during generation: declarations that
//! a named method must remain invocable under restricted runtime reflection.
//! The generator only produces these records; a runtime-restriction
//! configuration layer consumes them later.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// How a hinted method may be accessed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InvocationMode {
    /// The method may be looked up but not called.
    Introspect,
    /// The method may be looked up and called. Subsumes `Introspect`.
    Invoke,
}

/// A declaration that one method on one class needs reflective access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodHint {
    /// Fully qualified owning class name.
    pub owner: String,
    /// Method name.
    pub method: String,
    /// Required access mode.
    pub mode: InvocationMode,
}

/// Insertion-ordered, de-duplicating accumulator of method hints.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionHints {
    methods: Vec<MethodHint>,
}

impl ReflectionHints {
    /// New empty hints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `method` on `owner` needs `mode` access. Re-registering
    /// the same method upgrades `Introspect` to `Invoke`, never downgrades.
    pub fn register_method(&mut self, owner: &str, method: &str, mode: InvocationMode) {
        if let Some(existing) = self
            .methods
            .iter_mut()
            .find(|h| h.owner == owner && h.method == method)
        {
            existing.mode = existing.mode.max(mode);
            return;
        }
        self.methods.push(MethodHint {
            owner: owner.to_string(),
            method: method.to_string(),
            mode,
        });
    }

    /// All recorded hints, in first-registration order.
    pub fn methods(&self) -> &[MethodHint] {
        &self.methods
    }

    /// Whether a hint for `method` on `owner` exists.
    pub fn contains(&self, owner: &str, method: &str) -> bool {
        self.methods.iter().any(|h| h.owner == owner && h.method == method)
    }

    /// Number of recorded hints.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether no hints were recorded.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Top-level hint sink handed through one generation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeHints {
    reflection: ReflectionHints,
}

impl RuntimeHints {
    /// New empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reflective-access records.
    pub fn reflection(&self) -> &ReflectionHints {
        &self.reflection
    }

    /// Mutable reflective-access records.
    pub fn reflection_mut(&mut self) -> &mut ReflectionHints {
        &mut self.reflection
    }
}
