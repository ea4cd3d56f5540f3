use thiserror::Error;

/// Why a builder refused its arguments, or why `build` refused its product.
///
/// Every variant carries safe descriptions only, never the offending values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("wrong number of patterns for {builder} (given {given}, expected {at_least}+)")]
    Arity {
        builder: &'static str,
        given: usize,
        at_least: usize,
    },
    #[error("given `{0}` are invalid as pattern objects")]
    InvalidPatterns(String),
    #[error("given `{0}` can not be used as a message name")]
    InvalidMessageName(String),
    #[error("given `{0}` is not a class or module")]
    InvalidModule(String),
    #[error("`{0}` might be mis used the `build` in your code")]
    InvalidProduct(String),
}

pub type Result<T> = std::result::Result<T, BuildError>;
