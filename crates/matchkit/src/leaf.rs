//! Builders over raw values and capability names.

use crate::describe::{describe, product};
use crate::error::{BuildError, Result};
use crate::validator::{check_arity, validate_patterns};
use matchkit_object::{Pattern, Symbol, Value};
use std::slice;

/// Matches inputs equal (`==`) to `value`, so `EQ(42)` accepts `42.0`.
pub fn eq(value: impl Into<Value>) -> Pattern {
    let value = value.into();
    let expected = value.clone();
    product("EQ", slice::from_ref(&value), move |input| expected.equals(input))
}

/// Matches only `value` itself, by identity.
pub fn same(value: impl Into<Value>) -> Pattern {
    let value = value.into();
    let expected = value.clone();
    product("SAME", slice::from_ref(&value), move |input| {
        Ok(expected.same(input))
    })
}

/// Matches inputs that support every named capability.
///
/// A capability query that raises counts as "does not support", so basic
/// objects never match.
pub fn can<I>(names: I) -> Result<Pattern>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let names: Vec<Value> = names.into_iter().map(Into::into).collect();
    check_arity("CAN", names.len(), 1)?;
    let names = names
        .iter()
        .map(|name| message_name("CAN", name))
        .collect::<Result<Vec<Symbol>>>()?;
    let arguments: Vec<Value> = names.iter().cloned().map(Value::Symbol).collect();
    Ok(product("CAN", &arguments, move |input| {
        Ok(names
            .iter()
            .all(|name| input.respond_to(name).unwrap_or(false)))
    }))
}

/// Invokes capability `name` on the input with `pattern` as its only
/// argument; the input matches when the call returns a truthy value.
///
/// A missing capability raises `NoMethodError` at evaluation time.
pub fn send(name: impl Into<Value>, pattern: impl Into<Value>) -> Result<Pattern> {
    let name = message_name("SEND", &name.into())?;
    let pattern = pattern.into();
    validate_patterns("SEND", slice::from_ref(&pattern))?;
    let arguments = [Value::Symbol(name.clone()), pattern.clone()];
    Ok(product("SEND", &arguments, move |input| {
        Ok(input.send(&name, slice::from_ref(&pattern))?.truthy())
    }))
}

fn message_name(builder: &'static str, name: &Value) -> Result<Symbol> {
    name.to_sym().map_err(|source| {
        let err = BuildError::InvalidMessageName(describe(name));
        tracing::debug!(builder, error = %err, %source, "rejected message name");
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchkit_object::{Module, Object};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eq_is_numeric_equality() {
        let pattern = eq(42);
        assert_eq!(pattern.description(), "EQ(42)");
        assert!(pattern.matches(&Value::Integer(42)).unwrap());
        assert!(pattern.matches(&Value::Float(42.0)).unwrap());
        assert!(!pattern.matches(&Value::Integer(43)).unwrap());
        assert!(!pattern.matches(&Value::from(Object::basic())).unwrap());
    }

    #[test]
    fn test_eq_does_not_round_large_integers() {
        let pattern = eq(9_007_199_254_740_993i64);
        assert!(!pattern.matches(&Value::Float(9_007_199_254_740_992.0)).unwrap());
        assert!(pattern.matches(&Value::Integer(9_007_199_254_740_993)).unwrap());
    }

    #[test]
    fn test_same_is_identity() {
        let pattern = same(42);
        assert_eq!(pattern.description(), "SAME(42)");
        assert!(pattern.matches(&Value::Integer(42)).unwrap());
        assert!(!pattern.matches(&Value::Float(42.0)).unwrap());

        let obj = Value::from(Object::new());
        let pattern = same(&obj);
        assert!(pattern.matches(&obj).unwrap());
        assert!(!pattern.matches(&Value::from(Object::new())).unwrap());
    }

    #[test]
    fn test_can() {
        let pattern = can(["foo", "bar"]).unwrap();
        assert_eq!(pattern.description(), "CAN(:foo, :bar)");

        let both = Object::builder(Module::object())
            .define("foo", |_, _| Ok(Value::Nil))
            .define("bar", |_, _| Ok(Value::Nil))
            .build();
        let one = Object::builder(Module::object())
            .define("foo", |_, _| Ok(Value::Nil))
            .build();
        assert!(pattern.matches(&Value::from(both)).unwrap());
        assert!(!pattern.matches(&Value::from(one)).unwrap());
        assert!(!pattern.matches(&Value::Nil).unwrap());
        assert!(!pattern.matches(&Value::from(Object::basic())).unwrap());

        let pattern = can([Value::symbol("to_s")]).unwrap();
        assert!(pattern.matches(&Value::Integer(1)).unwrap());
    }

    #[test]
    fn test_can_rejects_bad_names() {
        assert!(matches!(
            can(Vec::<Value>::new()),
            Err(BuildError::Arity { builder: "CAN", given: 0, at_least: 1 })
        ));
        assert_eq!(
            can([42]).unwrap_err(),
            BuildError::InvalidMessageName("42".into())
        );
    }

    #[test]
    fn test_send() {
        let pattern = send(Value::symbol("all?"), Value::regex("foo").unwrap()).unwrap();
        assert_eq!(pattern.description(), "SEND(:all?, /foo/)");
        let words = Value::array(["foo", "foobar"].map(Value::from));
        assert!(pattern.matches(&words).unwrap());
        let mixed = Value::array(["foo", "bar"].map(Value::from));
        assert!(!pattern.matches(&mixed).unwrap());

        let err = pattern.matches(&Value::from(Object::new())).unwrap_err();
        assert!(err.is_a(Module::no_method_error()));
    }

    #[test]
    fn test_send_validates_pattern() {
        let err = send("any?", Object::basic()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidPatterns(_)));
        assert!(matches!(
            send(Value::Nil, Module::integer()),
            Err(BuildError::InvalidMessageName(_))
        ));
    }
}
