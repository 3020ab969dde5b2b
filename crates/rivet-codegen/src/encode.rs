//! Value encoding into registration source expressions

use rivet_model::{ComponentDefinition, TypeDescriptor, Value};

use crate::code::{char_literal, str_literal, CodeBlock};
use crate::error::{GenError, GenResult};

/// Callback rendering a nested definition as a detached-definition
/// expression. Supplied by the orchestrator, which owns the recursion.
pub type InnerValueFn<'b> = dyn FnMut(&ComponentDefinition) -> GenResult<CodeBlock> + 'b;

/// Renders configuration values as generated-source expressions.
pub struct ValueEncoder<'a, 'b> {
    inner: Option<&'a mut InnerValueFn<'b>>,
}

impl<'a, 'b> ValueEncoder<'a, 'b> {
    /// An encoder without inner-definition support; encountering a nested
    /// definition fails with `GenError::UnsupportedInnerDefinition`.
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// An encoder that delegates nested definitions to `inner`.
    pub fn with_inner(inner: &'a mut InnerValueFn<'b>) -> Self {
        Self { inner: Some(inner) }
    }

    /// Render `value` as a source expression.
    pub fn encode(&mut self, value: &Value) -> GenResult<CodeBlock> {
        match value {
            Value::Null => Ok(CodeBlock::of("Value::null()")),
            Value::Bool(b) => Ok(CodeBlock::of(b.to_string())),
            Value::Int(i) => Ok(CodeBlock::of(i.to_string())),
            Value::Float(f) => Ok(CodeBlock::of(format!("{f:?}"))),
            Value::Char(c) => Ok(CodeBlock::of(char_literal(*c))),
            Value::Str(s) => Ok(CodeBlock::of(str_literal(s))),
            Value::Type(ty) => Ok(type_literal(ty)),
            Value::List(items) => self.encode_list(items),
            Value::Definition(definition) => match self.inner.as_mut() {
                Some(inner) => inner(definition),
                None => Err(GenError::UnsupportedInnerDefinition {
                    type_name: definition.ty().name().to_string(),
                }),
            },
        }
    }

    fn encode_list(&mut self, items: &[Value]) -> GenResult<CodeBlock> {
        let mut rendered = Vec::with_capacity(items.len());
        for item in items {
            rendered.push(self.encode(item)?.as_str().to_string());
        }
        Ok(CodeBlock::of(format!("vec![{}]", rendered.join(", "))))
    }
}

impl Default for ValueEncoder<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Erased type reference: the raw type with generic arguments dropped.
pub fn type_literal(ty: &TypeDescriptor) -> CodeBlock {
    CodeBlock::of(format!("TypeSpec::of({})", str_literal(ty.name())))
}

/// Fully-specific type reference, generic arguments rendered recursively.
/// Only safe for descriptors where `is_fully_resolved()` holds.
pub fn resolvable_type_literal(ty: &TypeDescriptor) -> CodeBlock {
    if !ty.has_generics() {
        return type_literal(ty);
    }
    let args: Vec<String> = ty
        .generics()
        .iter()
        .map(|g| resolvable_type_literal(g).as_str().to_string())
        .collect();
    CodeBlock::of(format!(
        "TypeSpec::generic({}, &[{}])",
        str_literal(ty.name()),
        args.join(", ")
    ))
}
