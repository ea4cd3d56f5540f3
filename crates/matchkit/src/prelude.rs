//! Everything needed to build patterns unqualified.
//!
//! ```
//! use matchkit::prelude::*;
//!
//! let pattern = build(|| and![Module::integer(), 24..=42])?;
//! assert!(pattern.matches(&Value::Integer(24))?);
//! assert!(!pattern.matches(&Value::Float(24.0))?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Leaf builders, with the `can!` macro
pub use crate::{can, eq, same, send};

// Logical combinators and their macros
pub use crate::{all, and, nand, nor, not, or, xnor, xor};

// Error handling combinators
pub use crate::{quiet, rescue};

// Constant patterns
pub use crate::constants::{anything, boolean, never, nil};

// Protocol and scope
pub use crate::describe::{describe, INSPECTION_FALLBACK};
pub use crate::dsl::build;
pub use crate::error::BuildError;
pub use crate::validator::{is_pattern, satisfy};

// Values patterns are built from
pub use matchkit_object::{Exception, Module, Object, Pattern, Proc, Symbol, Value};
