//! User objects: an instance of some class plus its own named capabilities.

use crate::exception::Exception;
use crate::module::Module;
use crate::symbol::Symbol;
use crate::value::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// A capability implementation: receives the receiver and the arguments.
pub type MethodFn = dyn Fn(&Value, &[Value]) -> Result<Value, Exception> + Send + Sync;

struct ObjectData {
    class: Module,
    basic: bool,
    methods: HashMap<Symbol, Arc<MethodFn>>,
    undefined: HashSet<Symbol>,
}

/// An instance of a class with its own table of capabilities.
///
/// Instances of classes below `Object` get the kernel capabilities
/// (`inspect`, `respond_to?`, `===`, ...). Instances of `BasicObject` itself
/// are *basic*: they cannot even be asked what they respond to.
#[derive(Clone)]
pub struct Object(Arc<ObjectData>);

impl Object {
    /// A plain `Object` instance.
    pub fn new() -> Self {
        Self::builder(Module::object()).build()
    }

    /// A `BasicObject` instance.
    pub fn basic() -> Self {
        Self::builder(Module::basic_object()).build()
    }

    pub fn builder(class: &Module) -> ObjectBuilder {
        ObjectBuilder {
            class: class.clone(),
            methods: HashMap::new(),
            undefined: HashSet::new(),
        }
    }

    pub fn class(&self) -> &Module {
        &self.0.class
    }

    pub fn is_basic(&self) -> bool {
        self.0.basic
    }

    /// A capability defined on this object itself.
    pub fn own_method(&self, name: &Symbol) -> Option<&Arc<MethodFn>> {
        self.0.methods.get(name)
    }

    pub(crate) fn is_undefined(&self, name: &str) -> bool {
        self.0.undefined.contains(&Symbol::new(name))
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn object_id(&self) -> u64 {
        Arc::as_ptr(&self.0) as *const u8 as usize as u64
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<{}:{:#018x}>", self.class(), self.object_id())
    }
}

pub struct ObjectBuilder {
    class: Module,
    methods: HashMap<Symbol, Arc<MethodFn>>,
    undefined: HashSet<Symbol>,
}

impl ObjectBuilder {
    /// Defines (or overrides) a capability.
    pub fn define<F>(mut self, name: impl Into<Symbol>, method: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, Exception> + Send + Sync + 'static,
    {
        let name = name.into();
        self.undefined.remove(&name);
        self.methods.insert(name, Arc::new(method));
        self
    }

    /// Removes a capability, including a kernel one.
    pub fn undef(mut self, name: impl Into<Symbol>) -> Self {
        let name = name.into();
        self.methods.remove(&name);
        self.undefined.insert(name);
        self
    }

    pub fn build(self) -> Object {
        let basic = !self.class.is_a(Module::object());
        Object(Arc::new(ObjectData {
            class: self.class,
            basic,
            methods: self.methods,
            undefined: self.undefined,
        }))
    }
}
