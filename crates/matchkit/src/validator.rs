//! The matching protocol: which values may be used as patterns.

use crate::describe::describe;
use crate::error::{BuildError, Result};
use matchkit_object::{Symbol, Value};
use std::sync::Arc;

/// Whether `value` can be used as a pattern.
///
/// Patterns and one-argument procs qualify. Any other value qualifies when
/// it supports case equality (`===`); a capability query that raises means
/// it does not.
pub fn is_pattern(value: &Value) -> bool {
    match value {
        Value::Pattern(_) => true,
        Value::Proc(proc) => proc.arity() == 1,
        _ => value.respond_to(&Symbol::new("===")).unwrap_or(false),
    }
}

/// Alias of [`is_pattern`].
pub fn satisfy(value: &Value) -> bool {
    is_pattern(value)
}

/// Rejects the arguments of `builder` unless every one of them is a pattern.
pub(crate) fn validate_patterns(builder: &'static str, patterns: &[Value]) -> Result<()> {
    let invalid: Vec<String> = patterns
        .iter()
        .filter(|pattern| !is_pattern(pattern))
        .map(describe)
        .collect();
    if invalid.is_empty() {
        return Ok(());
    }
    let err = BuildError::InvalidPatterns(invalid.join(", "));
    tracing::debug!(builder, error = %err, "rejected pattern arguments");
    Err(err)
}

/// Collects variadic builder arguments, checking count before validity.
pub(crate) fn collect_patterns<I>(
    builder: &'static str,
    patterns: I,
    at_least: usize,
) -> Result<Arc<[Value]>>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let patterns: Vec<Value> = patterns.into_iter().map(Into::into).collect();
    check_arity(builder, patterns.len(), at_least)?;
    validate_patterns(builder, &patterns)?;
    Ok(patterns.into())
}

pub(crate) fn check_arity(builder: &'static str, given: usize, at_least: usize) -> Result<()> {
    if given >= at_least {
        return Ok(());
    }
    let err = BuildError::Arity {
        builder,
        given,
        at_least,
    };
    tracing::debug!(builder, error = %err, "rejected pattern arguments");
    Err(err)
}
