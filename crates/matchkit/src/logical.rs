//! Boolean composition of patterns.
//!
//! Children are evaluated left to right and errors they raise propagate
//! unchanged. `and` and `or` stop at the first child that decides the result.

use crate::describe::product;
use crate::error::Result;
use crate::validator::{collect_patterns, validate_patterns};
use matchkit_object::{Exception, Pattern, Value};

/// Matches when every pattern matches.
pub fn and<I>(patterns: I) -> Result<Pattern>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let patterns = collect_patterns("AND", patterns, 2)?;
    let children = patterns.clone();
    Ok(product("AND", &patterns, move |input| every(&children, input)))
}

/// Matches when any pattern matches.
pub fn or<I>(patterns: I) -> Result<Pattern>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let patterns = collect_patterns("OR", patterns, 2)?;
    let children = patterns.clone();
    Ok(product("OR", &patterns, move |input| {
        for child in children.iter() {
            if child.case_eq(input)? {
                return Ok(true);
            }
        }
        Ok(false)
    }))
}

/// Negated [`and`], described as `NOT(AND(...))`.
pub fn nand<I>(patterns: I) -> Result<Pattern>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let patterns = collect_patterns("NAND", patterns, 2)?;
    not(and(patterns.iter())?)
}

/// Negated [`or`], described as `NOT(OR(...))`.
pub fn nor<I>(patterns: I) -> Result<Pattern>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let patterns = collect_patterns("NOR", patterns, 2)?;
    not(or(patterns.iter())?)
}

/// Matches when exactly one of the two patterns matches.
pub fn xor(left: impl Into<Value>, right: impl Into<Value>) -> Result<Pattern> {
    let patterns = [left.into(), right.into()];
    validate_patterns("XOR", &patterns)?;
    let [left, right] = patterns.clone();
    Ok(product("XOR", &patterns, move |input| {
        Ok(left.case_eq(input)? != right.case_eq(input)?)
    }))
}

/// Negated [`xor`], described as `NOT(XOR(...))`.
pub fn xnor(left: impl Into<Value>, right: impl Into<Value>) -> Result<Pattern> {
    let patterns = [left.into(), right.into()];
    validate_patterns("XNOR", &patterns)?;
    let [left, right] = patterns;
    not(xor(left, right)?)
}

/// Matches when `pattern` does not.
pub fn not(pattern: impl Into<Value>) -> Result<Pattern> {
    let patterns = [pattern.into()];
    validate_patterns("NOT", &patterns)?;
    let [child] = patterns.clone();
    Ok(product("NOT", &patterns, move |input| {
        Ok(!child.case_eq(input)?)
    }))
}

/// Matches collections whose every element matches every pattern.
///
/// Arrays contribute their elements and hashes their values. Anything else
/// is not a collection and does not match.
pub fn all<I>(patterns: I) -> Result<Pattern>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let patterns = collect_patterns("ALL", patterns, 1)?;
    let children = patterns.clone();
    Ok(product("ALL", &patterns, move |input| {
        let elements: Vec<&Value> = match input {
            Value::Array(items) => items.iter().collect(),
            Value::Hash(pairs) => pairs.iter().map(|(_, value)| value).collect(),
            _ => return Ok(false),
        };
        for element in elements {
            if !every(&children, element)? {
                return Ok(false);
            }
        }
        Ok(true)
    }))
}

fn every(children: &[Value], input: &Value) -> std::result::Result<bool, Exception> {
    for child in children {
        if !child.case_eq(input)? {
            return Ok(false);
        }
    }
    Ok(true)
}
