//! Fields guarded by a pattern.
//!
//! A [`Validated`] field stores a [`Value`] only when its pattern accepts
//! it. An optional adjuster normalizes incoming values first, so the stored
//! value is always the adjusted one.
//!
//! ```
//! use matchkit::prelude::*;
//! use matchkit_validation::{Validated, ValidationError};
//!
//! let mut id = Validated::new("id", or![nil(), and![Module::integer(), 1..=100]?]?)?;
//! id.set(100)?;
//! assert!(id.get().equals(&Value::Integer(100))?);
//! assert!(matches!(id.set(101), Err(ValidationError::Rejected { .. })));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use matchkit::{describe, is_pattern, Exception, Value};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("`{pattern}` can not validate {field}: it is not a pattern")]
    InvalidPattern { field: String, pattern: String },
    #[error("{value} is deficient for {field} (expected {pattern})")]
    Rejected {
        field: String,
        value: String,
        pattern: String,
    },
    #[error("validating {field} failed: {source}")]
    Evaluation {
        field: String,
        #[source]
        source: Exception,
    },
}

type Adjuster = dyn Fn(Value) -> Result<Value, Exception> + Send + Sync;

/// A named field that only holds values its pattern accepts.
pub struct Validated {
    field: String,
    pattern: Value,
    adjuster: Option<Box<Adjuster>>,
    value: Value,
}

impl Validated {
    /// Binds `pattern` to the field `field`. The field starts out `nil`.
    pub fn new(field: impl Into<String>, pattern: impl Into<Value>) -> Result<Self, ValidationError> {
        let field = field.into();
        let pattern = pattern.into();
        if !is_pattern(&pattern) {
            return Err(ValidationError::InvalidPattern {
                field,
                pattern: describe(&pattern),
            });
        }
        Ok(Self {
            field,
            pattern,
            adjuster: None,
            value: Value::Nil,
        })
    }

    /// Transforms every written value before it is validated and stored.
    pub fn with_adjuster<F>(mut self, adjuster: F) -> Self
    where
        F: Fn(Value) -> Result<Value, Exception> + Send + Sync + 'static,
    {
        self.adjuster = Some(Box::new(adjuster));
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn pattern(&self) -> &Value {
        &self.pattern
    }

    /// The last accepted value, `nil` before the first write.
    pub fn get(&self) -> &Value {
        &self.value
    }

    /// Adjusts `value`, then stores it if the pattern accepts it. A rejected
    /// write leaves the previous value in place.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<(), ValidationError> {
        let value = value.into();
        let value = match &self.adjuster {
            Some(adjust) => adjust(value).map_err(|source| self.evaluation_error(source))?,
            None => value,
        };
        let accepted = self
            .pattern
            .case_eq(&value)
            .map_err(|source| self.evaluation_error(source))?;
        if !accepted {
            let err = ValidationError::Rejected {
                field: self.field.clone(),
                value: describe(&value),
                pattern: describe(&self.pattern),
            };
            tracing::debug!(field = %self.field, error = %err, "rejected write");
            return Err(err);
        }
        self.value = value;
        Ok(())
    }

    fn evaluation_error(&self, source: Exception) -> ValidationError {
        tracing::debug!(field = %self.field, error = %source, "write raised");
        ValidationError::Evaluation {
            field: self.field.clone(),
            source,
        }
    }
}

impl fmt::Debug for Validated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, describe(&self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchkit::{Module, Object, Proc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_nil() {
        let field = Validated::new("name", Module::string()).unwrap();
        assert!(matches!(field.get(), Value::Nil));
        assert_eq!(field.field(), "name");
    }

    #[test]
    fn test_rejects_non_patterns() {
        let err = Validated::new("name", Object::basic()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPattern { .. }));
        assert!(Validated::new("name", Proc::new(2, |_| Ok(Value::Nil))).is_err());
    }

    #[test]
    fn test_rejected_write_keeps_value() {
        let mut field = Validated::new("name", Module::string()).unwrap();
        field.set("Ken").unwrap();
        let err = field.set(8).unwrap_err();
        assert_eq!(err.to_string(), "8 is deficient for name (expected String)");
        assert!(field.get().equals(&Value::from("Ken")).unwrap());
    }

    #[test]
    fn test_adjuster_runs_before_validation() {
        let strip = |value: Value| match &value {
            Value::String(s) => Ok(Value::from(s.trim())),
            _ => Ok(value),
        };
        let mut field = Validated::new("name", Value::regex(r"\A\w+\z").unwrap())
            .unwrap()
            .with_adjuster(strip);
        field.set("  Ken ").unwrap();
        assert_eq!(format!("{field:?}"), "name=\"Ken\"");
    }

    #[test]
    fn test_raising_pattern() {
        let mut field = Validated::new("items", matchkit::send("all?", Module::integer()).unwrap())
            .unwrap();
        let err = field.set(42).unwrap_err();
        let ValidationError::Evaluation { source, .. } = err else {
            panic!("unexpected error: {err:?}");
        };
        assert!(source.is_a(Module::no_method_error()));
    }
}
