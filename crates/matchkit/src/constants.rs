//! Patterns without arguments, shared process-wide.

use crate::describe::product;
use matchkit_object::{Pattern, Value};
use std::sync::LazyLock;

static ANYTHING: LazyLock<Pattern> = LazyLock::new(|| product("ANYTHING", &[], |_| Ok(true)));
static NEVER: LazyLock<Pattern> = LazyLock::new(|| product("NEVER", &[], |_| Ok(false)));
static BOOLEAN: LazyLock<Pattern> = LazyLock::new(|| {
    product("BOOLEAN", &[], |input| {
        Ok(input.same(&Value::Bool(true)) || input.same(&Value::Bool(false)))
    })
});
static NIL: LazyLock<Pattern> =
    LazyLock::new(|| product("NIL", &[], |input| Ok(input.same(&Value::Nil))));

/// Matches every value, basic objects included.
pub fn anything() -> Pattern {
    ANYTHING.clone()
}

/// Matches no value.
pub fn never() -> Pattern {
    NEVER.clone()
}

/// Matches `true` and `false` only.
pub fn boolean() -> Pattern {
    BOOLEAN.clone()
}

/// Matches `nil` only, regardless of what other values claim about
/// themselves.
pub fn nil() -> Pattern {
    NIL.clone()
}
