//! Message names.

use regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

static PLAIN_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*[?!=]?$").unwrap());

static LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*[?!]?$").unwrap());

const OPERATOR_SYMBOLS: &[&str] = &[
    "==", "!=", "===", "=~", "!~", "!", "<=>", "<", "<=", ">", ">=", "+", "-", "*", "/", "%",
    "**", "<<", ">>", "&", "|", "^", "~", "+@", "-@", "[]", "[]=",
];

/// A message name such as `:all?` or `:respond_to?`.
///
/// Symbols compare by content, so two symbols built from the same name are
/// the same symbol.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name can be written as a bare hash key (`name: value`).
    pub fn is_label(&self) -> bool {
        LABEL.is_match(&self.0)
    }

    pub fn inspect(&self) -> String {
        if PLAIN_SYMBOL.is_match(&self.0) || OPERATOR_SYMBOLS.contains(&&*self.0) {
            format!(":{}", self.0)
        } else {
            format!(":{:?}", &*self.0)
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_compare_by_content() {
        assert_eq!(Symbol::new("foo"), Symbol::from(String::from("foo")));
        assert_ne!(Symbol::new("foo"), Symbol::new("bar"));
    }

    #[test]
    fn test_inspect() {
        assert_eq!(Symbol::new("all?").inspect(), ":all?");
        assert_eq!(Symbol::new("==").inspect(), ":==");
        assert_eq!(Symbol::new("foo bar").inspect(), ":\"foo bar\"");
        for operator in ["<<", ">>", "**", "[]=", "!~", "+@", "-@", "&", "|", "^", "~"] {
            assert_eq!(Symbol::new(operator).inspect(), format!(":{operator}"));
        }
    }

    #[test]
    fn test_is_label() {
        assert!(Symbol::new("all?").is_label());
        assert!(Symbol::new("_id").is_label());
        assert!(!Symbol::new("name=").is_label());
        assert!(!Symbol::new("a b").is_label());
        assert!(!Symbol::new("<<").is_label());
    }
}
