//! Capability tables and dispatch for builtin values.
//!
//! [`responds`] and [`dispatch`] must agree: every name a table lists is
//! handled by the matching dispatch arm.

use crate::exception::Exception;
use crate::module::Module;
use crate::range::compare;
use crate::symbol::Symbol;
use crate::value::{hash_lookup, Value};
use std::cmp::Ordering;

const BASIC_KERNEL: &[&str] = &["==", "!", "equal?", "__send__"];

const KERNEL: &[&str] = &[
    "==",
    "!",
    "===",
    "equal?",
    "__send__",
    "inspect",
    "to_s",
    "class",
    "respond_to?",
    "nil?",
    "is_a?",
];

const ENUMERABLE: &[&str] = &[
    "all?", "any?", "none?", "one?", "include?", "size", "empty?", "grep",
];
const NUMERIC: &[&str] = &["<", "<=", ">", ">=", "zero?", "positive?", "negative?"];
const INTEGER: &[&str] = &["even?", "odd?"];
const STRING: &[&str] = &[
    "<", "<=", ">", ">=", "size", "empty?", "include?", "upcase", "strip", "to_sym",
];
const SYMBOL: &[&str] = &["size", "upcase", "to_sym"];
const RANGE: &[&str] = &["cover?"];
const REGEXP: &[&str] = &["match?"];
const MODULE: &[&str] = &["name"];
const CALLABLE: &[&str] = &["call", "arity"];

fn type_capabilities(value: &Value) -> &'static [&'static [&'static str]] {
    match value {
        Value::Integer(_) => &[NUMERIC, INTEGER],
        Value::Float(_) => &[NUMERIC],
        Value::String(_) => &[STRING],
        Value::Symbol(_) => &[SYMBOL],
        Value::Array(_) | Value::Hash(_) => &[ENUMERABLE],
        Value::Range(_) => &[RANGE],
        Value::Regex(_) => &[REGEXP],
        Value::Module(_) => &[MODULE],
        Value::Proc(_) | Value::Pattern(_) => &[CALLABLE],
        Value::Nil | Value::Bool(_) | Value::Object(_) => &[],
    }
}

/// Whether a value natively supports `name`, ignoring an object's own table.
pub(crate) fn responds(value: &Value, name: &str) -> bool {
    match value {
        Value::Object(obj) => {
            if obj.is_undefined(name) {
                return false;
            }
            let kernel = if obj.is_basic() { BASIC_KERNEL } else { KERNEL };
            kernel.contains(&name)
        }
        _ => {
            KERNEL.contains(&name)
                || type_capabilities(value)
                    .iter()
                    .any(|table| table.contains(&name))
        }
    }
}

/// Runs a native capability. Callers check [`responds`] first.
pub(crate) fn dispatch(receiver: &Value, name: &str, args: &[Value]) -> Result<Value, Exception> {
    if let Some(result) = kernel(receiver, name, args) {
        return result;
    }
    match receiver {
        Value::Array(_) | Value::Hash(_) => enumerable(receiver, name, args),
        Value::Integer(_) | Value::Float(_) => numeric(receiver, name, args),
        Value::String(s) => string(receiver, s, name, args),
        Value::Symbol(s) => match name {
            "size" => arg0(args).map(|()| Value::Integer(s.as_str().chars().count() as i64)),
            "upcase" => arg0(args).map(|()| Value::symbol(s.as_str().to_uppercase())),
            "to_sym" => arg0(args).map(|()| receiver.clone()),
            _ => Err(undefined(receiver, name)),
        },
        Value::Range(range) => match name {
            "cover?" => arg1(args).map(|v| Value::Bool(range.cover(v))),
            _ => Err(undefined(receiver, name)),
        },
        Value::Regex(re) => match name {
            "match?" => match arg1(args)? {
                Value::String(s) => Ok(Value::Bool(re.is_match(s))),
                Value::Symbol(s) => Ok(Value::Bool(re.is_match(s.as_str()))),
                Value::Nil => Ok(Value::Bool(false)),
                other => Err(no_implicit_conversion(other, "String")),
            },
            _ => Err(undefined(receiver, name)),
        },
        Value::Module(module) => match name {
            "name" => arg0(args).map(|()| Value::from(module.name().map(Value::string))),
            _ => Err(undefined(receiver, name)),
        },
        Value::Proc(proc) => match name {
            "call" => proc.call(args),
            "arity" => arg0(args).map(|()| Value::Integer(proc.arity() as i64)),
            _ => Err(undefined(receiver, name)),
        },
        Value::Pattern(pattern) => match name {
            "call" => Ok(Value::Bool(pattern.matches(arg1(args)?)?)),
            "arity" => arg0(args).map(|()| Value::Integer(1)),
            _ => Err(undefined(receiver, name)),
        },
        Value::Nil | Value::Bool(_) | Value::Object(_) => Err(undefined(receiver, name)),
    }
}

fn kernel(receiver: &Value, name: &str, args: &[Value]) -> Option<Result<Value, Exception>> {
    let result = match name {
        "==" => arg1(args)
            .and_then(|other| receiver.equals(other))
            .map(Value::Bool),
        "!" => arg0(args).map(|()| Value::Bool(!receiver.truthy())),
        "===" => arg1(args)
            .and_then(|other| receiver.case_eq(other))
            .map(Value::Bool),
        "equal?" => arg1(args).map(|other| Value::Bool(receiver.same(other))),
        "__send__" => match args.split_first() {
            Some((name, rest)) => name.to_sym().and_then(|name| receiver.send(&name, rest)),
            None => Err(Exception::argument_error("no method name given")),
        },
        "inspect" => arg0(args).and_then(|()| receiver.inspect()),
        "to_s" => arg0(args)
            .and_then(|()| receiver.to_s())
            .map(Value::string),
        "class" => arg0(args).map(|()| Value::Module(receiver.class_of())),
        "respond_to?" => arg1(args)
            .and_then(Value::to_sym)
            .and_then(|name| receiver.respond_to(&name))
            .map(Value::Bool),
        "nil?" => arg0(args).map(|()| Value::Bool(matches!(receiver, Value::Nil))),
        "is_a?" => arg1(args)
            .and_then(module_arg)
            .map(|module| Value::Bool(receiver.class_of().is_a(module))),
        _ => return None,
    };
    Some(result)
}

fn elements(receiver: &Value) -> Vec<Value> {
    match receiver {
        Value::Array(items) => items.to_vec(),
        Value::Hash(pairs) => pairs
            .iter()
            .map(|(k, v)| Value::array([k.clone(), v.clone()]))
            .collect(),
        _ => Vec::new(),
    }
}

fn enumerable(receiver: &Value, name: &str, args: &[Value]) -> Result<Value, Exception> {
    match name {
        "all?" | "any?" | "none?" | "one?" => {
            let pattern = opt_arg(args)?;
            let test = |item: &Value| match pattern {
                Some(pattern) => pattern.case_eq(item),
                None => Ok(item.truthy()),
            };
            let items = elements(receiver);
            let result = match name {
                "all?" => {
                    for item in &items {
                        if !test(item)? {
                            return Ok(Value::Bool(false));
                        }
                    }
                    true
                }
                "any?" | "none?" => {
                    let mut found = false;
                    for item in &items {
                        if test(item)? {
                            found = true;
                            break;
                        }
                    }
                    if name == "any?" {
                        found
                    } else {
                        !found
                    }
                }
                _ => {
                    let mut count = 0;
                    for item in &items {
                        if test(item)? {
                            count += 1;
                            if count > 1 {
                                break;
                            }
                        }
                    }
                    count == 1
                }
            };
            Ok(Value::Bool(result))
        }
        "include?" => {
            let needle = arg1(args)?;
            match receiver {
                Value::Hash(pairs) => {
                    Ok(Value::Bool(hash_lookup(pairs, needle)?.is_some()))
                }
                _ => {
                    for item in elements(receiver) {
                        if item.equals(needle)? {
                            return Ok(Value::Bool(true));
                        }
                    }
                    Ok(Value::Bool(false))
                }
            }
        }
        "size" => arg0(args).map(|()| Value::Integer(elements(receiver).len() as i64)),
        "empty?" => arg0(args).map(|()| Value::Bool(elements(receiver).is_empty())),
        "grep" => {
            let pattern = arg1(args)?;
            let mut kept = Vec::new();
            for item in elements(receiver) {
                if pattern.case_eq(&item)? {
                    kept.push(item);
                }
            }
            Ok(Value::array(kept))
        }
        _ => Err(undefined(receiver, name)),
    }
}

fn ordering(receiver: &Value, name: &str, args: &[Value]) -> Result<Value, Exception> {
    let other = arg1(args)?;
    let ordering = compare(receiver, other).ok_or_else(|| comparison_failed(receiver, other))?;
    Ok(Value::Bool(match name {
        "<" => ordering.is_lt(),
        "<=" => ordering.is_le(),
        ">" => ordering.is_gt(),
        _ => ordering.is_ge(),
    }))
}

fn numeric(receiver: &Value, name: &str, args: &[Value]) -> Result<Value, Exception> {
    let sign = compare(receiver, &Value::Integer(0));
    match name {
        "<" | "<=" | ">" | ">=" => ordering(receiver, name, args),
        "zero?" => arg0(args).map(|()| Value::Bool(sign.is_some_and(Ordering::is_eq))),
        "positive?" => arg0(args).map(|()| Value::Bool(sign.is_some_and(Ordering::is_gt))),
        "negative?" => arg0(args).map(|()| Value::Bool(sign.is_some_and(Ordering::is_lt))),
        "even?" | "odd?" => {
            arg0(args)?;
            let Value::Integer(i) = receiver else {
                return Err(undefined(receiver, name));
            };
            Ok(Value::Bool((i % 2 == 0) == (name == "even?")))
        }
        _ => Err(undefined(receiver, name)),
    }
}

fn string(receiver: &Value, s: &str, name: &str, args: &[Value]) -> Result<Value, Exception> {
    match name {
        "<" | "<=" | ">" | ">=" => ordering(receiver, name, args),
        "size" => arg0(args).map(|()| Value::Integer(s.chars().count() as i64)),
        "empty?" => arg0(args).map(|()| Value::Bool(s.is_empty())),
        "include?" => match arg1(args)? {
            Value::String(needle) => Ok(Value::Bool(s.contains(&**needle))),
            other => Err(no_implicit_conversion(other, "String")),
        },
        "upcase" => arg0(args).map(|()| Value::string(s.to_uppercase())),
        "strip" => arg0(args).map(|()| Value::string(s.trim())),
        "to_sym" => arg0(args).map(|()| Value::symbol(s)),
        _ => Err(undefined(receiver, name)),
    }
}

fn arg0(args: &[Value]) -> Result<(), Exception> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(Exception::arity_error(args.len(), 0))
    }
}

fn arg1(args: &[Value]) -> Result<&Value, Exception> {
    match args {
        [arg] => Ok(arg),
        _ => Err(Exception::arity_error(args.len(), 1)),
    }
}

fn opt_arg(args: &[Value]) -> Result<Option<&Value>, Exception> {
    match args {
        [] => Ok(None),
        [arg] => Ok(Some(arg)),
        _ => Err(Exception::argument_error(format!(
            "wrong number of arguments (given {}, expected 0..1)",
            args.len()
        ))),
    }
}

fn module_arg(arg: &Value) -> Result<&Module, Exception> {
    match arg {
        Value::Module(module) => Ok(module),
        _ => Err(Exception::type_error("class or module required")),
    }
}

fn undefined(receiver: &Value, name: &str) -> Exception {
    Exception::no_method_error(&Symbol::new(name), &receiver.receiver_description())
}

fn no_implicit_conversion(value: &Value, target: &str) -> Exception {
    Exception::type_error(format!(
        "no implicit conversion of {} into {}",
        value.class_of(),
        target
    ))
}

fn comparison_failed(receiver: &Value, other: &Value) -> Exception {
    let other = match other.inspect_string() {
        Ok(shown) if matches!(other, Value::Nil | Value::Bool(_) | Value::Integer(_) | Value::Float(_)) => shown,
        _ => other.class_of().to_string(),
    };
    Exception::argument_error(format!(
        "comparison of {} with {} failed",
        receiver.class_of(),
        other
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(receiver: &Value, name: &str, args: &[Value]) -> Result<Value, Exception> {
        receiver.send(&Symbol::new(name), args)
    }

    #[test]
    fn test_every_listed_capability_dispatches() {
        let samples = [
            Value::Nil,
            Value::Integer(3),
            Value::Float(2.5),
            Value::string("abc"),
            Value::symbol("abc"),
            Value::array([Value::Integer(1)]),
            Value::hash([(Value::symbol("k"), Value::Integer(1))]),
            Value::from(1..=3),
            Value::regex("b").unwrap(),
            Value::from(Module::integer()),
        ];
        for sample in &samples {
            for table in type_capabilities(sample) {
                for name in table.iter() {
                    if let Err(err) = send(sample, name, &[]) {
                        assert!(
                            !err.is_a(Module::no_method_error()),
                            "{:?} lists {} but does not dispatch it",
                            sample,
                            name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_enumerable_with_pattern() {
        let words = Value::array([Value::string("foo"), Value::symbol("foo"), Value::string("foobar")]);
        let foo = Value::regex("foo").unwrap();
        assert!(send(&words, "all?", &[foo.clone()]).unwrap().truthy());
        let mixed = Value::array([Value::string("foo"), Value::string("baz")]);
        assert!(!send(&mixed, "all?", &[foo.clone()]).unwrap().truthy());
        assert!(send(&mixed, "one?", &[foo.clone()]).unwrap().truthy());
        assert!(!send(&mixed, "none?", &[foo]).unwrap().truthy());
    }

    #[test]
    fn test_empty_collections() {
        let integer = Value::from(Module::integer());
        let string = Value::from(Module::string());
        for empty in [Value::array([]), Value::hash([])] {
            assert!(!send(&empty, "any?", &[integer.clone()]).unwrap().truthy());
            assert!(send(&empty, "all?", &[string.clone()]).unwrap().truthy());
        }
    }

    #[test]
    fn test_grep() {
        let items = Value::array([Value::Integer(42), Value::Nil, Value::string("s")]);
        let kept = send(&items, "grep", &[Value::from(Module::integer())]).unwrap();
        assert_eq!(format!("{:?}", kept), "[42]");
    }

    #[test]
    fn test_kernel_on_objects() {
        let obj = Value::from(crate::Object::new());
        assert!(send(&obj, "respond_to?", &[Value::symbol("inspect")]).unwrap().truthy());
        assert!(send(&obj, "is_a?", &[Value::from(Module::object())]).unwrap().truthy());
        assert!(send(&obj, "is_a?", &[Value::Integer(1)]).is_err());
        assert!(send(&obj, "nil?", &[]).map(|v| !v.truthy()).unwrap());
        let basic = Value::from(crate::Object::basic());
        assert!(send(&basic, "inspect", &[]).is_err());
        assert!(send(&basic, "equal?", &[basic.clone()]).unwrap().truthy());
    }

    #[test]
    fn test_wrong_arity() {
        let err = send(&Value::Integer(1), "zero?", &[Value::Integer(1)]).unwrap_err();
        assert!(err.is_a(Module::argument_error()));
    }

    #[test]
    fn test_ordering_is_exact() {
        let big = Value::Integer(9_007_199_254_740_993);
        let rounded = Value::Float(9_007_199_254_740_992.0);
        assert!(send(&big, ">", &[rounded.clone()]).unwrap().truthy());
        assert!(send(&rounded, "<", &[big]).unwrap().truthy());
        assert!(send(&Value::Integer(1), "<", &[Value::Float(f64::NAN)]).is_err());
        assert!(send(&Value::Float(-0.5), "negative?", &[]).unwrap().truthy());
        assert!(!send(&Value::Float(f64::NAN), "zero?", &[]).unwrap().truthy());
    }

    #[test]
    fn test_comparison_failure() {
        let err = send(&Value::Integer(1), "<", &[Value::string("a")]).unwrap_err();
        assert_eq!(err.message(), "comparison of Integer with String failed");
    }
}
