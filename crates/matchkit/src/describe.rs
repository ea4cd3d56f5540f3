//! Safe descriptions of arbitrary values.

use matchkit_object::{Exception, Pattern, Value};

/// Shown when a value can neither be inspected nor identified.
pub const INSPECTION_FALLBACK: &str = "UninspectableObject";

/// A human readable description of `value` that never fails.
///
/// The value's own inspection is preferred. When inspection raises, the
/// description falls back to `#<Class:0x...>` from the reported class and
/// the identity; when even that raises, or inspection produced something
/// other than a string, [`INSPECTION_FALLBACK`] is used.
pub fn describe(value: &Value) -> String {
    match value.inspect() {
        Ok(Value::String(shown)) => shown.to_string(),
        Ok(_) => INSPECTION_FALLBACK.to_owned(),
        Err(_) => match value.reported_class() {
            Ok(class) => format!("#<{}:{:#018x}>", class, value.object_id() << 1),
            Err(_) => INSPECTION_FALLBACK.to_owned(),
        },
    }
}

/// `NAME(d1, d2, ...)` over the safe descriptions of `arguments`.
pub(crate) fn describe_call(name: &str, arguments: &[Value]) -> String {
    let arguments: Vec<String> = arguments.iter().map(describe).collect();
    format!("{}({})", name, arguments.join(", "))
}

/// A pattern described as `NAME(arguments...)`.
pub(crate) fn product<F>(name: &str, arguments: &[Value], test: F) -> Pattern
where
    F: Fn(&Value) -> Result<bool, Exception> + Send + Sync + 'static,
{
    Pattern::new(describe_call(name, arguments), test)
}
