//! Frames of variable and callable bindings.
//!
//! Frames are parent-linked. The interpreter keeps a stack of active frames;
//! a function call pushes a frame whose parent is the function's *defining*
//! frame rather than the caller's, so lookups are lexical.
//!
//! Variables and callables share one namespace of string keys: a variable
//! `$x` is stored under `x`, a function under `x[function]`, a mixin under
//! `x[mixin]`, and an arity-specific overload under `x[function]N`.
//!
//! Assignment is resolve-then-mutate: the frame that already binds a name is
//! found first and written in place; an unbound name is created in the
//! innermost frame.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use vellum_ir::Value;

use crate::callable::Callable;

/// A single-threaded, shared, mutable frame handle.
///
/// All frame allocations go through `LocalScope::new()`. The type is not
/// `Send`: evaluation of one stylesheet is single-threaded.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Non-owning handle, used by closures so a frame that binds a function
    /// doesn't keep itself alive through that function.
    pub fn downgrade(&self) -> WeakScope<T> {
        WeakScope(Rc::downgrade(&self.0))
    }

    /// Whether both handles point at the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Weak counterpart of [`LocalScope`].
pub struct WeakScope<T>(Weak<RefCell<T>>);

impl<T> WeakScope<T> {
    pub fn upgrade(&self) -> Option<LocalScope<T>> {
        self.0.upgrade().map(LocalScope)
    }
}

impl<T> Clone for WeakScope<T> {
    fn clone(&self) -> Self {
        WeakScope(Weak::clone(&self.0))
    }
}

impl<T> fmt::Debug for WeakScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WeakScope")
    }
}

// Binding keys

/// Key of a function binding.
pub fn function_key(name: &str) -> String {
    format!("{name}[function]")
}

/// Key of a mixin binding.
pub fn mixin_key(name: &str) -> String {
    format!("{name}[mixin]")
}

/// Key of the overload of `name` taking `arity` arguments.
pub fn overload_key(name: &str, arity: usize) -> String {
    format!("{name}[function]{arity}")
}

/// What a key is bound to.
#[derive(Clone, Debug)]
pub enum Binding {
    Variable(Value),
    Callable(Rc<Callable>),
}

/// A single frame.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// A root frame.
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    pub fn parent(&self) -> Option<&LocalScope<Scope>> {
        self.parent.as_ref()
    }

    /// Bind a variable in this frame.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings
            .insert(name.to_string(), Binding::Variable(value));
    }

    /// Bind a callable in this frame under a full key (see [`function_key`]).
    pub fn define_callable(&mut self, key: String, callable: Rc<Callable>) {
        self.bindings.insert(key, Binding::Callable(callable));
    }

    /// Binding in this frame only.
    pub fn get_local(&self, key: &str) -> Option<&Binding> {
        self.bindings.get(key)
    }

    #[inline]
    pub fn contains_local(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    /// Binding in this frame or any ancestor.
    pub fn lookup(&self, key: &str) -> Option<Binding> {
        if let Some(binding) = self.bindings.get(key) {
            return Some(binding.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(key);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The frame in `start`'s chain that binds `key`.
fn resolve(start: &LocalScope<Scope>, key: &str) -> Option<LocalScope<Scope>> {
    let mut frame = Some(start.clone());
    while let Some(current) = frame {
        let (found, parent) = {
            let scope = current.borrow();
            (scope.contains_local(key), scope.parent.clone())
        };
        if found {
            return Some(current);
        }
        frame = parent;
    }
    None
}

/// Stack of active frames over a root frame.
pub struct Environment {
    /// Active frames, innermost last.
    scopes: Vec<LocalScope<Scope>>,
    /// Root frame (always at the bottom).
    global: LocalScope<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }

    /// Number of active frames, including the root.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push a fresh child of the current frame.
    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current();
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
    }

    /// Make an existing frame current (call frames, thunk forcing).
    #[inline]
    pub fn push_frame(&mut self, frame: LocalScope<Scope>) {
        self.scopes.push(frame);
    }

    /// Pop the current frame. The root frame is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// The innermost active frame.
    #[inline]
    pub fn current(&self) -> LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global).clone()
    }

    #[inline]
    pub fn global(&self) -> &LocalScope<Scope> {
        &self.global
    }

    fn innermost(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global)
    }

    /// Look up a variable through the frame chain.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        match self.innermost().borrow().lookup(name)? {
            Binding::Variable(value) => Some(value),
            Binding::Callable(_) => None,
        }
    }

    /// Look up a variable in the current frame only.
    pub fn lookup_local(&self, name: &str) -> Option<Value> {
        match self.innermost().borrow().get_local(name)? {
            Binding::Variable(value) => Some(value.clone()),
            Binding::Callable(_) => None,
        }
    }

    /// Look up a callable by full key.
    pub fn lookup_callable(&self, key: &str) -> Option<Rc<Callable>> {
        match self.innermost().borrow().lookup(key)? {
            Binding::Callable(callable) => Some(callable),
            Binding::Variable(_) => None,
        }
    }

    /// Bind a variable in the current frame, shadowing outer bindings.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.innermost().borrow_mut().define(name, value);
    }

    /// Bind a callable in the current frame.
    pub fn define_callable(&mut self, key: String, callable: Rc<Callable>) {
        self.innermost().borrow_mut().define_callable(key, callable);
    }

    /// Bind a callable in the root frame.
    pub fn define_global_callable(&mut self, key: String, callable: Rc<Callable>) {
        self.global.borrow_mut().define_callable(key, callable);
    }

    /// `$name: value [!default] [!global]`.
    ///
    /// A bound name is overwritten in the frame where it was found, unless
    /// `guarded`, in which case nothing happens. An unbound name is created
    /// in the current frame. With `global` the same rules apply to the root
    /// frame alone.
    pub fn assign(&mut self, name: &str, value: Value, guarded: bool, global: bool) {
        let start = if global {
            self.global.clone()
        } else {
            self.current()
        };
        match resolve(&start, name) {
            Some(_) if guarded => {}
            Some(frame) => frame.borrow_mut().define(name, value),
            None => start.borrow_mut().define(name, value),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
