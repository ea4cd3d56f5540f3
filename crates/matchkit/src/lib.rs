//! Composable runtime value matchers.
//!
//! A pattern is a one-argument boolean test over a [`Value`]. Patterns are
//! built from primitive matchers (equality, identity, capability presence)
//! and composed with logical and error handling combinators. Every builder
//! validates its operands when it is called, and every product carries a
//! description of its structure that is computed once:
//!
//! ```
//! use matchkit::{and, or, Module, Value};
//!
//! let pattern = or([
//!     Value::from(and([Value::from(Module::integer()), Value::from(24..=42)])?),
//!     Value::Nil,
//! ])?;
//! assert_eq!(pattern.description(), "OR(AND(Integer, 24..42), nil)");
//! assert!(pattern.matches(&Value::Integer(30))?);
//! assert!(pattern.matches(&Value::Nil)?);
//! assert!(!pattern.matches(&Value::Integer(43))?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Anything that supports case equality can be an operand: classes match
//! their instances, ranges match what they cover, regular expressions match
//! strings and symbols, one-argument procs match when they return a truthy
//! value, and plain values match what they equal. See [`is_pattern`].
//!
//! Evaluation errors raised by operands propagate as [`Exception`]s, except
//! through [`quiet`] and [`rescue`].

mod constants;
mod describe;
mod dsl;
mod error;
mod leaf;
mod logical;
pub mod prelude;
mod safety;
mod validator;

pub use constants::{anything, boolean, never, nil};
pub use describe::{describe, INSPECTION_FALLBACK};
pub use dsl::build;
pub use error::{BuildError, Result};
pub use leaf::{can, eq, same, send};
pub use logical::{all, and, nand, nor, not, or, xnor, xor};
pub use safety::{quiet, rescue};
pub use validator::{is_pattern, satisfy};

pub use matchkit_object::{Exception, Module, Object, Pattern, Proc, Range, Symbol, Value};
