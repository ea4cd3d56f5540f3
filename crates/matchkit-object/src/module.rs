//! Classes and modules.
//!
//! A [`Module`] is both the structural type of a value (`Integer`, `String`,
//! a user class) and the classification of a raised error. Ancestry is
//! resolved by identity through superclasses and included modules.

use std::fmt;
use std::sync::{Arc, LazyLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Class,
    Module,
}

struct ModuleData {
    name: Option<String>,
    kind: ModuleKind,
    superclass: Option<Module>,
    includes: Vec<Module>,
}

/// A class or module. Cloning shares the same module; equality is identity.
#[derive(Clone)]
pub struct Module(Arc<ModuleData>);

impl Module {
    /// Defines a class. `name` is `None` for anonymous classes.
    pub fn new_class(name: Option<&str>, superclass: &Module, includes: &[Module]) -> Self {
        Self(Arc::new(ModuleData {
            name: name.map(str::to_owned),
            kind: ModuleKind::Class,
            superclass: Some(superclass.clone()),
            includes: includes.to_vec(),
        }))
    }

    /// Defines a module that classes can include.
    pub fn new_module(name: Option<&str>) -> Self {
        Self(Arc::new(ModuleData {
            name: name.map(str::to_owned),
            kind: ModuleKind::Module,
            superclass: None,
            includes: Vec::new(),
        }))
    }

    fn root(name: &str) -> Self {
        Self(Arc::new(ModuleData {
            name: Some(name.to_owned()),
            kind: ModuleKind::Class,
            superclass: None,
            includes: Vec::new(),
        }))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn kind(&self) -> ModuleKind {
        self.0.kind
    }

    pub fn superclass(&self) -> Option<&Module> {
        self.0.superclass.as_ref()
    }

    pub fn ptr_eq(&self, other: &Module) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// True when `ancestor` is this module, one of its superclasses, or a
    /// module included anywhere along that chain.
    pub fn is_a(&self, ancestor: &Module) -> bool {
        if self.ptr_eq(ancestor) {
            return true;
        }
        if self.0.includes.iter().any(|m| m.is_a(ancestor)) {
            return true;
        }
        self.superclass().is_some_and(|s| s.is_a(ancestor))
    }

    /// Linearized ancestry: self, its includes, then each superclass in turn.
    pub fn ancestors(&self) -> Vec<Module> {
        let mut out = Vec::new();
        let mut current = Some(self.clone());
        while let Some(module) = current {
            out.push(module.clone());
            for included in module.0.includes.iter().rev() {
                out.push(included.clone());
            }
            current = module.superclass().cloned();
        }
        out
    }

    pub fn object_id(&self) -> u64 {
        Arc::as_ptr(&self.0) as usize as u64
    }

    pub fn inspect(&self) -> String {
        match self.name() {
            Some(name) => name.to_owned(),
            None => {
                let kind = match self.kind() {
                    ModuleKind::Class => "Class",
                    ModuleKind::Module => "Module",
                };
                format!("#<{}:{:#018x}>", kind, self.object_id())
            }
        }
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Module {}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

struct Builtins {
    basic_object: Module,
    object: Module,
    module: Module,
    class: Module,
    numeric: Module,
    integer: Module,
    float: Module,
    string: Module,
    symbol: Module,
    nil_class: Module,
    true_class: Module,
    false_class: Module,
    array: Module,
    hash: Module,
    range: Module,
    regexp: Module,
    proc_class: Module,
    exception: Module,
    standard_error: Module,
    argument_error: Module,
    type_error: Module,
    name_error: Module,
    no_method_error: Module,
    zero_division_error: Module,
    runtime_error: Module,
}

impl Builtins {
    fn new() -> Self {
        let basic_object = Module::root("BasicObject");
        let object = Module::new_class(Some("Object"), &basic_object, &[]);
        let class_of = |name: &str, superclass: &Module| Module::new_class(Some(name), superclass, &[]);

        let module = class_of("Module", &object);
        let class = class_of("Class", &module);
        let numeric = class_of("Numeric", &object);
        let exception = class_of("Exception", &object);
        let standard_error = class_of("StandardError", &exception);
        let name_error = class_of("NameError", &standard_error);

        Self {
            integer: class_of("Integer", &numeric),
            float: class_of("Float", &numeric),
            string: class_of("String", &object),
            symbol: class_of("Symbol", &object),
            nil_class: class_of("NilClass", &object),
            true_class: class_of("TrueClass", &object),
            false_class: class_of("FalseClass", &object),
            array: class_of("Array", &object),
            hash: class_of("Hash", &object),
            range: class_of("Range", &object),
            regexp: class_of("Regexp", &object),
            proc_class: class_of("Proc", &object),
            argument_error: class_of("ArgumentError", &standard_error),
            type_error: class_of("TypeError", &standard_error),
            no_method_error: class_of("NoMethodError", &name_error),
            zero_division_error: class_of("ZeroDivisionError", &standard_error),
            runtime_error: class_of("RuntimeError", &standard_error),
            basic_object,
            object,
            module,
            class,
            numeric,
            exception,
            standard_error,
            name_error,
        }
    }
}

static BUILTINS: LazyLock<Builtins> = LazyLock::new(Builtins::new);

macro_rules! builtin_modules {
    ($($(#[$doc:meta])* $fn_name:ident => $field:ident),+ $(,)?) => {
        impl Module {
            $(
                $(#[$doc])*
                pub fn $fn_name() -> &'static Module {
                    &BUILTINS.$field
                }
            )+
        }
    };
}

builtin_modules! {
    /// Root of the hierarchy; instances have no kernel capabilities.
    basic_object => basic_object,
    object => object,
    module => module,
    class => class,
    numeric => numeric,
    integer => integer,
    float => float,
    string => string,
    symbol => symbol,
    nil_class => nil_class,
    true_class => true_class,
    false_class => false_class,
    array => array,
    hash => hash,
    range => range,
    regexp => regexp,
    proc_class => proc_class,
    exception => exception,
    standard_error => standard_error,
    argument_error => argument_error,
    type_error => type_error,
    name_error => name_error,
    no_method_error => no_method_error,
    zero_division_error => zero_division_error,
    runtime_error => runtime_error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ancestry() {
        assert!(Module::integer().is_a(Module::numeric()));
        assert!(Module::integer().is_a(Module::basic_object()));
        assert!(!Module::integer().is_a(Module::float()));
        assert!(Module::no_method_error().is_a(Module::standard_error()));
        assert!(!Module::argument_error().is_a(Module::name_error()));
    }

    #[test]
    fn test_builtins_are_singletons() {
        assert!(Module::integer().ptr_eq(Module::integer()));
        assert_eq!(Module::integer().inspect(), "Integer");
    }

    #[test]
    fn test_included_module_ancestry() {
        let tag = Module::new_module(Some("Retryable"));
        let base = Module::new_class(Some("BaseError"), Module::exception(), &[]);
        let tagged = Module::new_class(Some("TaggedError"), &base, &[tag.clone()]);

        assert!(tagged.is_a(&tag));
        assert!(tagged.is_a(&base));
        assert!(!base.is_a(&tag));
        assert_eq!(
            tagged.ancestors().iter().map(Module::inspect).take(3).collect::<Vec<_>>(),
            vec!["TaggedError", "Retryable", "BaseError"]
        );
    }

    #[test]
    fn test_anonymous_inspect() {
        let anon = Module::new_class(None, Module::object(), &[]);
        assert!(anon.inspect().starts_with("#<Class:0x"));
        let anon = Module::new_module(None);
        assert!(anon.inspect().starts_with("#<Module:0x"));
    }
}
