//! Callable values: user functions ([`Proc`]) and engine products
//! ([`Pattern`]).

use crate::exception::Exception;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

type ProcBody = dyn Fn(&[Value]) -> Result<Value, Exception> + Send + Sync;
type InspectHook = dyn Fn() -> Result<Value, Exception> + Send + Sync;
type TestFn = dyn Fn(&Value) -> Result<bool, Exception> + Send + Sync;

struct ProcData {
    arity: usize,
    body: Box<ProcBody>,
    inspect: Option<Box<InspectHook>>,
}

/// A user function taking exactly `arity` arguments.
#[derive(Clone)]
pub struct Proc(Arc<ProcData>);

impl Proc {
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Exception> + Send + Sync + 'static,
    {
        Self(Arc::new(ProcData {
            arity,
            body: Box::new(body),
            inspect: None,
        }))
    }

    /// A one-argument function.
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, Exception> + Send + Sync + 'static,
    {
        Self::new(1, move |args| body(&args[0]))
    }

    /// Like [`Proc::new`], but `inspect` replaces the default rendering.
    /// The hook may fail or produce a non-string.
    pub fn with_inspect<F, I>(arity: usize, body: F, inspect: I) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Exception> + Send + Sync + 'static,
        I: Fn() -> Result<Value, Exception> + Send + Sync + 'static,
    {
        Self(Arc::new(ProcData {
            arity,
            body: Box::new(body),
            inspect: Some(Box::new(inspect)),
        }))
    }

    pub fn arity(&self) -> usize {
        self.0.arity
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, Exception> {
        if args.len() != self.0.arity {
            return Err(Exception::arity_error(args.len(), self.0.arity));
        }
        (self.0.body)(args)
    }

    pub fn inspect(&self) -> Result<Value, Exception> {
        match &self.0.inspect {
            Some(hook) => hook(),
            None => Ok(Value::string(format!(
                "#<Proc:{:#018x} (lambda)>",
                self.object_id()
            ))),
        }
    }

    pub fn ptr_eq(&self, other: &Proc) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn object_id(&self) -> u64 {
        Arc::as_ptr(&self.0) as *const u8 as usize as u64
    }
}

impl fmt::Debug for Proc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<Proc:{:#018x} (arity {})>", self.object_id(), self.arity())
    }
}

struct PatternData {
    description: Arc<str>,
    test: Box<TestFn>,
}

/// A one-argument boolean test with a description fixed at construction.
///
/// Cloning shares the same pattern; [`Pattern::ptr_eq`] tells whether two
/// handles refer to the same instance.
#[derive(Clone)]
pub struct Pattern(Arc<PatternData>);

impl Pattern {
    pub fn new<F>(description: impl Into<Arc<str>>, test: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, Exception> + Send + Sync + 'static,
    {
        Self(Arc::new(PatternData {
            description: description.into(),
            test: Box::new(test),
        }))
    }

    pub fn description(&self) -> &str {
        &self.0.description
    }

    /// The frozen description, shared rather than copied.
    pub fn description_arc(&self) -> Arc<str> {
        self.0.description.clone()
    }

    pub fn matches(&self, value: &Value) -> Result<bool, Exception> {
        (self.0.test)(value)
    }

    /// Keeps the values this pattern matches, in order.
    pub fn filter(&self, values: &[Value]) -> Result<Vec<Value>, Exception> {
        let mut kept = Vec::new();
        for value in values {
            if self.matches(value)? {
                kept.push(value.clone());
            }
        }
        Ok(kept)
    }

    pub fn ptr_eq(&self, other: &Pattern) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn object_id(&self) -> u64 {
        Arc::as_ptr(&self.0) as *const u8 as usize as u64
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
