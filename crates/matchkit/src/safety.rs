//! Combinators that intercept errors raised by their children.

use crate::describe::{describe, product};
use crate::error::{BuildError, Result};
use crate::validator::{collect_patterns, validate_patterns};
use matchkit_object::{Pattern, Value};
use std::slice;

/// Matches when every pattern matches without raising. Never raises.
///
/// Children run in order; the first one that returns false or raises
/// decides the result as false.
pub fn quiet<I>(patterns: I) -> Result<Pattern>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let patterns = collect_patterns("QUIET", patterns, 1)?;
    let children = patterns.clone();
    Ok(product("QUIET", &patterns, move |input| {
        for child in children.iter() {
            match child.case_eq(input) {
                Ok(true) => {}
                Ok(false) => return Ok(false),
                Err(err) => {
                    tracing::trace!(
                        pattern = %describe(child),
                        class = %err.class(),
                        "QUIET suppressed error"
                    );
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }))
}

/// Matches when `pattern` raises an error of class `category`.
///
/// A pattern that completes normally, whatever its result, does not match.
/// Errors of other classes are swallowed and do not match either.
pub fn rescue(category: impl Into<Value>, pattern: impl Into<Value>) -> Result<Pattern> {
    let category = category.into();
    let pattern = pattern.into();
    validate_patterns("RESCUE", slice::from_ref(&pattern))?;
    let Value::Module(class) = &category else {
        let err = BuildError::InvalidModule(describe(&category));
        tracing::debug!(builder = "RESCUE", error = %err, "rejected pattern arguments");
        return Err(err);
    };
    let class = class.clone();
    let arguments = [category, pattern.clone()];
    Ok(product("RESCUE", &arguments, move |input| {
        match pattern.case_eq(input) {
            Ok(_) => Ok(false),
            Err(err) if err.is_a(&class) => {
                tracing::trace!(class = %err.class(), "RESCUE caught error");
                Ok(true)
            }
            Err(err) => {
                tracing::trace!(
                    class = %err.class(),
                    expected = %class,
                    "RESCUE swallowed error"
                );
                Ok(false)
            }
        }
    }))
}
