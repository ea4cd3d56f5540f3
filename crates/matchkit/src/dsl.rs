//! Building patterns in a scope where every builder is in reach.
//!
//! The variadic builders get macros so that arguments of different types
//! can be listed without converting them by hand:
//!
//! ```
//! use matchkit::prelude::*;
//!
//! let id = or![nil(), and![Module::integer(), 1..100]?]?;
//! assert_eq!(id.description(), "OR(NIL(), AND(Integer, 1...100))");
//! assert!(id.matches(&Value::Integer(7))?);
//! assert!(!id.matches(&Value::from("7"))?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::describe::describe;
use crate::error::{BuildError, Result};
use matchkit_object::{Pattern, Value};
use std::slice;

/// Runs `block` once and checks that it produced a usable pattern.
///
/// Errors from builders inside the block pass through unchanged. The
/// product must be a one-argument function with a description: a
/// [`Pattern`], or a one-argument proc whose inspection is a string, which
/// is then wrapped into a pattern described by that inspection. Anything
/// else is [`BuildError::InvalidProduct`].
pub fn build<F, T>(block: F) -> Result<Pattern>
where
    F: FnOnce() -> Result<T>,
    T: Into<Value>,
{
    let product = block()?.into();
    let pattern = match &product {
        Value::Pattern(pattern) => Some(pattern.clone()),
        Value::Proc(proc) if proc.arity() == 1 => match proc.inspect() {
            Ok(Value::String(description)) => {
                let proc = proc.clone();
                Some(Pattern::new(description, move |input| {
                    Ok(proc.call(slice::from_ref(input))?.truthy())
                }))
            }
            _ => None,
        },
        _ => None,
    };
    pattern.ok_or_else(|| {
        let err = BuildError::InvalidProduct(describe(&product));
        tracing::debug!(error = %err, "rejected build product");
        err
    })
}

#[macro_export]
macro_rules! and {
    ($($pattern:expr),+ $(,)?) => {
        $crate::and([$($crate::Value::from($pattern)),+])
    };
}

#[macro_export]
macro_rules! or {
    ($($pattern:expr),+ $(,)?) => {
        $crate::or([$($crate::Value::from($pattern)),+])
    };
}

#[macro_export]
macro_rules! nand {
    ($($pattern:expr),+ $(,)?) => {
        $crate::nand([$($crate::Value::from($pattern)),+])
    };
}

#[macro_export]
macro_rules! nor {
    ($($pattern:expr),+ $(,)?) => {
        $crate::nor([$($crate::Value::from($pattern)),+])
    };
}

#[macro_export]
macro_rules! quiet {
    ($($pattern:expr),+ $(,)?) => {
        $crate::quiet([$($crate::Value::from($pattern)),+])
    };
}

#[macro_export]
macro_rules! all {
    ($($pattern:expr),+ $(,)?) => {
        $crate::all([$($crate::Value::from($pattern)),+])
    };
}

#[macro_export]
macro_rules! can {
    ($($name:expr),+ $(,)?) => {
        $crate::can([$($crate::Value::from($name)),+])
    };
}
