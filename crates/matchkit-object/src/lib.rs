//! Dynamic value and object model for matchkit patterns.
//!
//! Patterns are asked about arbitrary values: numbers, strings, symbols,
//! ranges, regular expressions, classes, user objects that may or may not
//! expose some capability, and other patterns. This crate gives all of them
//! one shape, [`Value`], with the operations patterns are built from:
//!
//! - identity: [`Value::same`]
//! - equality: [`Value::equals`]
//! - case equality, i.e. "used as a pattern, does it accept the input":
//!   [`Value::case_eq`]
//! - capability query and invocation: [`Value::respond_to`], [`Value::send`]
//! - inspection: [`Value::inspect`]
//!
//! Failures while evaluating are [`Exception`]s, classified by a [`Module`].
//!
//! # Example
//!
//! ```
//! use matchkit_object::{Module, Object, Symbol, Value};
//!
//! let duck = Object::builder(Module::object())
//!     .define("quack", |_, _| Ok(Value::string("Quack!")))
//!     .build();
//! let duck = Value::from(duck);
//!
//! assert!(duck.respond_to(&Symbol::new("quack")).unwrap());
//! assert!(Value::from(Module::object()).case_eq(&duck).unwrap());
//! assert!(!Value::from(Module::integer()).case_eq(&duck).unwrap());
//! ```

mod builtins;
mod exception;
mod function;
mod module;
mod object;
mod range;
mod symbol;
mod value;

pub use exception::Exception;
pub use function::{Pattern, Proc};
pub use module::{Module, ModuleKind};
pub use object::{MethodFn, Object, ObjectBuilder};
pub use range::Range;
pub use symbol::Symbol;
pub use value::Value;
