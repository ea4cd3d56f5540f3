use crate::module::Module;
use crate::symbol::Symbol;
use thiserror::Error;

/// An error raised while evaluating a value: a capability that is missing,
/// a wrong argument count, or anything a user capability chooses to raise.
///
/// The class decides how the error is classified; [`Exception::is_a`]
/// answers whether it belongs to a given error class or module.
#[derive(Error, Debug, Clone)]
#[error("{message} ({class})")]
pub struct Exception {
    class: Module,
    message: String,
}

impl Exception {
    pub fn new(class: &Module, message: impl Into<String>) -> Self {
        Self {
            class: class.clone(),
            message: message.into(),
        }
    }

    pub fn no_method_error(name: &Symbol, receiver: &str) -> Self {
        Self::new(
            Module::no_method_error(),
            format!("undefined method '{}' for {}", name, receiver),
        )
    }

    pub fn argument_error(message: impl Into<String>) -> Self {
        Self::new(Module::argument_error(), message)
    }

    pub fn arity_error(given: usize, expected: usize) -> Self {
        Self::argument_error(format!(
            "wrong number of arguments (given {}, expected {})",
            given, expected
        ))
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(Module::type_error(), message)
    }

    pub fn class(&self) -> &Module {
        &self.class
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_a(&self, category: &Module) -> bool {
        self.class.is_a(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Exception::no_method_error(&Symbol::new("any?"), "an instance of Integer");
        assert_eq!(
            err.to_string(),
            "undefined method 'any?' for an instance of Integer (NoMethodError)"
        );
    }

    #[test]
    fn test_classification() {
        let err = Exception::arity_error(2, 1);
        assert!(err.is_a(Module::argument_error()));
        assert!(err.is_a(Module::exception()));
        assert!(!err.is_a(Module::no_method_error()));
    }
}
