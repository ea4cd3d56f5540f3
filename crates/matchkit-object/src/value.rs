use crate::builtins;
use crate::exception::Exception;
use crate::function::{Pattern, Proc};
use crate::module::{Module, ModuleKind};
use crate::object::Object;
use crate::range::{compare_integer_float, Range};
use crate::symbol::Symbol;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;
use std::sync::Arc;

// ============ Value Types ============

/// Any value a pattern can be asked about, or built from.
///
/// Heap variants share their data, so cloning is cheap and preserves
/// identity (see [`Value::same`]).
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(Arc<str>),
    Symbol(Symbol),
    Array(Arc<[Value]>),
    Hash(Arc<[(Value, Value)]>),
    Range(Arc<Range>),
    Regex(Arc<Regex>),
    Module(Module),
    Proc(Proc),
    Pattern(Pattern),
    Object(Object),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::from(s.into()))
    }

    pub fn symbol(name: impl AsRef<str>) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    /// A hash keeping the given insertion order.
    pub fn hash(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Hash(pairs.into_iter().collect())
    }

    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Ok(Value::Regex(Arc::new(Regex::new(source)?)))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Hash(_) => "hash",
            Value::Range(_) => "range",
            Value::Regex(_) => "regexp",
            Value::Module(_) => "module",
            Value::Proc(_) => "proc",
            Value::Pattern(_) => "pattern",
            Value::Object(_) => "object",
        }
    }

    /// Only `nil` and `false` are falsy.
    pub fn truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn class_of(&self) -> Module {
        let class = match self {
            Value::Nil => Module::nil_class(),
            Value::Bool(true) => Module::true_class(),
            Value::Bool(false) => Module::false_class(),
            Value::Integer(_) => Module::integer(),
            Value::Float(_) => Module::float(),
            Value::String(_) => Module::string(),
            Value::Symbol(_) => Module::symbol(),
            Value::Array(_) => Module::array(),
            Value::Hash(_) => Module::hash(),
            Value::Range(_) => Module::range(),
            Value::Regex(_) => Module::regexp(),
            Value::Module(m) => match m.kind() {
                ModuleKind::Class => Module::class(),
                ModuleKind::Module => Module::module(),
            },
            Value::Proc(_) | Value::Pattern(_) => Module::proc_class(),
            Value::Object(obj) => obj.class(),
        };
        class.clone()
    }

    /// The class a value claims for itself in diagnostics. Objects may
    /// override it with their own `class` capability, which may fail.
    pub fn reported_class(&self) -> Result<Module, Exception> {
        if let Value::Object(obj) = self {
            if let Some(method) = obj.own_method(&Symbol::new("class")) {
                return match method(self, &[])? {
                    Value::Module(module) => Ok(module),
                    other => Err(Exception::type_error(format!(
                        "class must be a Module, got {}",
                        other.type_name()
                    ))),
                };
            }
        }
        Ok(self.class_of())
    }

    pub fn object_id(&self) -> u64 {
        match self {
            Value::Nil => 8,
            Value::Bool(true) => 20,
            Value::Bool(false) => 0,
            Value::Integer(n) => (*n as u64).wrapping_mul(2).wrapping_add(1),
            Value::Float(f) => f.to_bits(),
            Value::Symbol(s) => {
                let mut hasher = DefaultHasher::new();
                s.hash(&mut hasher);
                hasher.finish()
            }
            Value::String(s) => Arc::as_ptr(s) as *const u8 as usize as u64,
            Value::Array(a) => Arc::as_ptr(a) as *const u8 as usize as u64,
            Value::Hash(h) => Arc::as_ptr(h) as *const u8 as usize as u64,
            Value::Range(r) => Arc::as_ptr(r) as *const u8 as usize as u64,
            Value::Regex(r) => Arc::as_ptr(r) as *const u8 as usize as u64,
            Value::Module(m) => m.object_id(),
            Value::Proc(p) => p.object_id(),
            Value::Pattern(p) => p.object_id(),
            Value::Object(o) => o.object_id(),
        }
    }

    /// How an error message refers to this value as a receiver.
    pub(crate) fn receiver_description(&self) -> String {
        match self {
            Value::Nil => "nil".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Module(m) => match m.kind() {
                ModuleKind::Class => format!("class {}", m),
                ModuleKind::Module => format!("module {}", m),
            },
            _ => format!("an instance of {}", self.class_of()),
        }
    }

    // ============ Comparison ============

    /// Identity: immediates by value, everything else by allocation.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::String(a), Value::String(b)) => Arc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Arc::ptr_eq(a, b),
            (Value::Range(a), Value::Range(b)) => Arc::ptr_eq(a, b),
            (Value::Regex(a), Value::Regex(b)) => Arc::ptr_eq(a, b),
            (Value::Module(a), Value::Module(b)) => a.ptr_eq(b),
            (Value::Proc(a), Value::Proc(b)) => a.ptr_eq(b),
            (Value::Pattern(a), Value::Pattern(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Value equality (`==`) as seen from `self`. Numbers compare across
    /// integer and float; objects use their own `==` when they define one.
    pub fn equals(&self, other: &Value) -> Result<bool, Exception> {
        let equal = match (self, other) {
            (Value::Object(obj), _) => {
                let name = Symbol::new("==");
                if let Some(method) = obj.own_method(&name) {
                    return Ok(method(self, slice::from_ref(other))?.truthy());
                }
                if !builtins::responds(self, "==") {
                    return Err(Exception::no_method_error(
                        &name,
                        &self.receiver_description(),
                    ));
                }
                self.same(other)
            }
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Integer(i), Value::Float(f)) | (Value::Float(f), Value::Integer(i)) => {
                compare_integer_float(*i, *f) == Some(Ordering::Equal)
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (x, y) in a.iter().zip(b.iter()) {
                    if !x.equals(y)? {
                        return Ok(false);
                    }
                }
                true
            }
            (Value::Hash(a), Value::Hash(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (key, value) in a.iter() {
                    match hash_lookup(b, key)? {
                        Some(found) if value.equals(found)? => {}
                        _ => return Ok(false),
                    }
                }
                true
            }
            (Value::Range(a), Value::Range(b)) => a.equals(b)?,
            (Value::Regex(a), Value::Regex(b)) => a.as_str() == b.as_str(),
            (Value::Module(a), Value::Module(b)) => a.ptr_eq(b),
            (Value::Proc(a), Value::Proc(b)) => a.ptr_eq(b),
            (Value::Pattern(a), Value::Pattern(b)) => a.ptr_eq(b),
            _ => false,
        };
        Ok(equal)
    }

    /// Strict equality used for hash keys: same variant and `==`.
    pub fn eql(&self, other: &Value) -> Result<bool, Exception> {
        if std::mem::discriminant(self) != std::mem::discriminant(other) {
            return Ok(false);
        }
        self.equals(other)
    }

    /// Case equality (`===`): does `self`, used as a pattern, accept `other`?
    pub fn case_eq(&self, other: &Value) -> Result<bool, Exception> {
        match self {
            Value::Pattern(pattern) => pattern.matches(other),
            Value::Proc(proc) => Ok(proc.call(slice::from_ref(other))?.truthy()),
            Value::Module(module) => Ok(other.class_of().is_a(module)),
            Value::Range(range) => Ok(range.cover(other)),
            Value::Regex(re) => Ok(match other {
                Value::String(s) => re.is_match(s),
                Value::Symbol(s) => re.is_match(s.as_str()),
                _ => false,
            }),
            Value::Object(obj) => {
                let name = Symbol::new("===");
                if let Some(method) = obj.own_method(&name) {
                    return Ok(method(self, slice::from_ref(other))?.truthy());
                }
                if !builtins::responds(self, "===") {
                    return Err(Exception::no_method_error(
                        &name,
                        &self.receiver_description(),
                    ));
                }
                self.equals(other)
            }
            _ => self.equals(other),
        }
    }

    // ============ Capabilities ============

    /// Whether this value supports the named capability. Asking a basic
    /// object fails, as does an object's own `respond_to?` if it raises.
    pub fn respond_to(&self, name: &Symbol) -> Result<bool, Exception> {
        if let Value::Object(obj) = self {
            let query = Symbol::new("respond_to?");
            if let Some(method) = obj.own_method(&query) {
                return Ok(method(self, &[Value::Symbol(name.clone())])?.truthy());
            }
            if !builtins::responds(self, query.as_str()) {
                return Err(Exception::no_method_error(
                    &query,
                    &self.receiver_description(),
                ));
            }
            return Ok(obj.own_method(name).is_some() || builtins::responds(self, name.as_str()));
        }
        Ok(builtins::responds(self, name.as_str()))
    }

    /// Invokes the named capability with `args`.
    pub fn send(&self, name: &Symbol, args: &[Value]) -> Result<Value, Exception> {
        if let Value::Object(obj) = self {
            if let Some(method) = obj.own_method(name) {
                return method(self, args);
            }
        }
        if !builtins::responds(self, name.as_str()) {
            return Err(Exception::no_method_error(
                name,
                &self.receiver_description(),
            ));
        }
        builtins::dispatch(self, name.as_str(), args)
    }

    /// Coerces a message name: symbols as-is, strings by content, objects
    /// through their own `to_sym`.
    pub fn to_sym(&self) -> Result<Symbol, Exception> {
        match self {
            Value::Symbol(s) => Ok(s.clone()),
            Value::String(s) => Ok(Symbol::new(s)),
            Value::Object(obj) if obj.own_method(&Symbol::new("to_sym")).is_some() => {
                match self.send(&Symbol::new("to_sym"), &[])? {
                    Value::Symbol(s) => Ok(s),
                    other => Err(Exception::type_error(format!(
                        "can't convert {} to Symbol (to_sym gives {})",
                        self.class_of(),
                        other.class_of()
                    ))),
                }
            }
            _ => Err(Exception::no_method_error(
                &Symbol::new("to_sym"),
                &self.receiver_description(),
            )),
        }
    }

    // ============ Inspection ============

    /// The natural textual representation. User hooks may fail or return
    /// something other than a string.
    pub fn inspect(&self) -> Result<Value, Exception> {
        match self {
            Value::Pattern(pattern) => Ok(Value::String(pattern.description_arc())),
            Value::Proc(proc) => proc.inspect(),
            Value::Object(obj) => {
                let name = Symbol::new("inspect");
                if let Some(method) = obj.own_method(&name) {
                    return method(self, &[]);
                }
                if !builtins::responds(self, name.as_str()) {
                    return Err(Exception::no_method_error(
                        &name,
                        &self.receiver_description(),
                    ));
                }
                Ok(Value::string(format!("#<{}>", obj.class())))
            }
            _ => Ok(Value::string(self.inspect_builtin()?)),
        }
    }

    pub fn inspect_string(&self) -> Result<String, Exception> {
        match self.inspect()? {
            Value::String(s) => Ok(s.to_string()),
            other => Err(Exception::type_error(format!(
                "inspect returned {} instead of a String",
                other.class_of()
            ))),
        }
    }

    pub fn to_s(&self) -> Result<String, Exception> {
        match self {
            Value::Nil => Ok(String::new()),
            Value::String(s) => Ok(s.to_string()),
            Value::Symbol(s) => Ok(s.as_str().to_owned()),
            Value::Object(obj) => Ok(format!("#<{}>", obj.class())),
            _ => self.inspect_string(),
        }
    }

    fn inspect_builtin(&self) -> Result<String, Exception> {
        Ok(match self {
            Value::Nil => "nil".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(f) => format_float(*f),
            Value::String(s) => quote(s),
            Value::Symbol(s) => s.inspect(),
            Value::Array(items) => {
                let parts = items
                    .iter()
                    .map(Value::inspect_string)
                    .collect::<Result<Vec<_>, _>>()?;
                format!("[{}]", parts.join(", "))
            }
            Value::Hash(pairs) => {
                if pairs.is_empty() {
                    return Ok("{}".to_owned());
                }
                let mut parts = Vec::with_capacity(pairs.len());
                for (key, value) in pairs.iter() {
                    let value = value.inspect_string()?;
                    match key {
                        Value::Symbol(s) if s.is_label() => {
                            parts.push(format!("{}: {}", s, value));
                        }
                        Value::Symbol(s) => parts.push(format!("{}: {}", quote(s.as_str()), value)),
                        key => parts.push(format!("{} => {}", key.inspect_string()?, value)),
                    }
                }
                format!("{{{}}}", parts.join(", "))
            }
            Value::Range(range) => range.inspect()?,
            Value::Regex(re) => format!("/{}/", re.as_str()),
            Value::Module(m) => m.inspect(),
            Value::Proc(_) | Value::Pattern(_) | Value::Object(_) => {
                return self.inspect_string();
            }
        })
    }
}

pub(crate) fn hash_lookup<'a>(
    pairs: &'a [(Value, Value)],
    key: &Value,
) -> Result<Option<&'a Value>, Exception> {
    for (k, v) in pairs {
        if k.eql(key)? {
            return Ok(Some(v));
        }
    }
    Ok(None)
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{1b}' => out.push_str("\\e"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_owned();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let magnitude = f.abs();
    if magnitude >= 1e16 || (magnitude < 1e-4 && magnitude != 0.0) {
        let formatted = format!("{:e}", f);
        let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        let mantissa = if mantissa.contains('.') {
            mantissa.to_owned()
        } else {
            format!("{}.0", mantissa)
        };
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{}e{}{:0>2}", mantissa, sign, digits);
    }
    if f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inspect_string() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "#<{}>", self.class_of()),
        }
    }
}

// ============ Conversions ============

macro_rules! integer_conversions {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(n as i64)
                }
            }

            impl From<std::ops::RangeInclusive<$t>> for Value {
                fn from(range: std::ops::RangeInclusive<$t>) -> Self {
                    let (start, end) = range.into_inner();
                    Value::Range(Arc::new(Range::new(start, end)))
                }
            }

            impl From<std::ops::Range<$t>> for Value {
                fn from(range: std::ops::Range<$t>) -> Self {
                    Value::Range(Arc::new(Range::exclusive(range.start, range.end)))
                }
            }
        )+
    };
}

integer_conversions!(i32, i64, u8, u32);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }
}

impl From<Range> for Value {
    fn from(range: Range) -> Self {
        Value::Range(Arc::new(range))
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Value::Regex(Arc::new(re))
    }
}

impl From<Module> for Value {
    fn from(m: Module) -> Self {
        Value::Module(m)
    }
}

impl From<&Module> for Value {
    fn from(m: &Module) -> Self {
        Value::Module(m.clone())
    }
}

impl From<Proc> for Value {
    fn from(p: Proc) -> Self {
        Value::Proc(p)
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        Value::Pattern(p)
    }
}

impl From<&Pattern> for Value {
    fn from(p: &Pattern) -> Self {
        Value::Pattern(p.clone())
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inspect(v: impl Into<Value>) -> String {
        v.into().inspect_string().unwrap()
    }

    #[test]
    fn test_inspect_literals() {
        assert_eq!(inspect(42), "42");
        assert_eq!(inspect(42.0), "42.0");
        assert_eq!(inspect(1.5), "1.5");
        assert_eq!(inspect(1e20), "1.0e+20");
        assert_eq!(inspect(Value::Nil), "nil");
        assert_eq!(inspect(true), "true");
        assert_eq!(inspect("a \"b\"\n"), r#""a \"b\"\n""#);
        assert_eq!(inspect(Value::symbol("foo")), ":foo");
        assert_eq!(inspect(24..=42), "24..42");
        assert_eq!(inspect(Value::regex(r"\d").unwrap()), r"/\d/");
        assert_eq!(inspect(Module::integer()), "Integer");
    }

    #[test]
    fn test_inspect_collections() {
        let array = Value::array([Value::Integer(1), Value::string("x"), Value::Nil]);
        assert_eq!(inspect(array), r#"[1, "x", nil]"#);
        let hash = Value::hash([
            (Value::symbol("a"), Value::Integer(1)),
            (Value::Integer(2), Value::Bool(false)),
        ]);
        assert_eq!(inspect(hash), "{a: 1, 2 => false}");
        let odd_keys = Value::hash([
            (Value::symbol("a b"), Value::Integer(1)),
            (Value::symbol("<<"), Value::Integer(2)),
            (Value::string("s"), Value::Integer(3)),
        ]);
        assert_eq!(inspect(odd_keys), r#"{"a b": 1, "<<": 2, "s" => 3}"#);
        assert_eq!(inspect(Value::hash([])), "{}");
    }

    #[test]
    fn test_numeric_equality_crosses_types() {
        assert!(Value::Integer(42).equals(&Value::Float(42.0)).unwrap());
        assert!(Value::Float(42.0).equals(&Value::Integer(42)).unwrap());
        assert!(!Value::Integer(42).eql(&Value::Float(42.0)).unwrap());
        assert!(!Value::Integer(42).equals(&Value::string("42")).unwrap());
    }

    #[test]
    fn test_numeric_equality_is_exact() {
        let big = Value::Integer(9_007_199_254_740_993);
        let rounded = Value::Float(9_007_199_254_740_992.0);
        assert!(!big.equals(&rounded).unwrap());
        assert!(!rounded.equals(&big).unwrap());
        assert!(Value::Integer(9_007_199_254_740_992).equals(&rounded).unwrap());
        assert!(!Value::Integer(0).equals(&Value::Float(f64::NAN)).unwrap());
        assert!(!Value::Integer(i64::MAX).equals(&Value::Float(9.223_372_036_854_775_807e18)).unwrap());
    }

    #[test]
    fn test_identity() {
        let s = Value::string("foo");
        assert!(s.same(&s.clone()));
        assert!(!s.same(&Value::string("foo")));
        assert!(s.equals(&Value::string("foo")).unwrap());
        assert!(Value::Integer(42).same(&Value::Integer(42)));
        assert!(!Value::Integer(42).same(&Value::Float(42.0)));
        assert!(Value::Nil.same(&Value::Nil));
    }

    #[test]
    fn test_case_equality() {
        let integer = Value::from(Module::integer());
        assert!(integer.case_eq(&Value::Integer(3)).unwrap());
        assert!(!integer.case_eq(&Value::Float(3.0)).unwrap());
        let digits = Value::regex(r"\d").unwrap();
        assert!(digits.case_eq(&Value::symbol("foo42")).unwrap());
        assert!(!digits.case_eq(&Value::Integer(42)).unwrap());
        assert!(Value::from(24..=42).case_eq(&Value::Float(24.0)).unwrap());
        assert!(Value::Integer(42).case_eq(&Value::Float(42.0)).unwrap());
    }

    #[test]
    fn test_basic_object_refuses_everything() {
        let basic = Value::from(Object::basic());
        assert!(basic.respond_to(&Symbol::new("foo")).is_err());
        assert!(basic.inspect().is_err());
        assert!(basic.case_eq(&Value::Nil).is_err());
        assert!(basic.equals(&basic.clone()).unwrap());
    }

    #[test]
    fn test_respond_to_and_send() {
        let array = Value::array([Value::Integer(1), Value::Integer(2)]);
        assert!(array.respond_to(&Symbol::new("any?")).unwrap());
        assert!(!Value::Integer(1).respond_to(&Symbol::new("any?")).unwrap());

        let any_integer = array
            .send(&Symbol::new("any?"), &[Module::integer().into()])
            .unwrap();
        assert!(any_integer.truthy());

        let err = Value::Integer(42)
            .send(&Symbol::new("any?"), &[Module::integer().into()])
            .unwrap_err();
        assert!(err.is_a(Module::no_method_error()));
    }

    #[test]
    fn test_object_capabilities() {
        let greeter = Value::from(
            Object::builder(Module::object())
                .define("greet", |_, _| Ok(Value::string("hi")))
                .build(),
        );
        assert!(greeter.respond_to(&Symbol::new("greet")).unwrap());
        assert!(greeter.respond_to(&Symbol::new("inspect")).unwrap());
        assert!(!greeter.respond_to(&Symbol::new("fly")).unwrap());
        assert!(greeter.inspect_string().unwrap().starts_with("#<Object"));
    }

    #[test]
    fn test_to_sym() {
        assert_eq!(Value::string("foo").to_sym().unwrap(), Symbol::new("foo"));
        assert!(Value::Integer(42).to_sym().is_err());
    }

    #[test]
    fn test_reported_class_override() {
        let liar = Value::from(
            Object::builder(Module::object())
                .define("class", |_, _| Ok(Value::from(Module::string())))
                .build(),
        );
        assert!(liar.reported_class().unwrap().ptr_eq(Module::string()));
        assert!(liar.class_of().ptr_eq(Module::object()));
    }
}
