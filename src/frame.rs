//! Module for representing lexical environments.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::builtins::BUILTINS;
use crate::error::LangErr;
use crate::value::Value;


/// A lexical scope: a binding map plus a parent link walked toward the
/// root on lookup.
///
/// Frames are shared through `Rc`: a frame stays alive for as long as an
/// active call or a capturing closure holds it, and a parent never depends
/// on its children for its own lifetime.
pub struct Frame {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Frame>>,
}

impl Frame {
    /// The ancestor of all frames, pre-populated with every registered
    /// builtin. Nothing updates its entries after construction.
    pub fn root() -> Rc<Frame> {
        let mut bindings = HashMap::new();
        for (name, builtin) in BUILTINS.iter() {
            bindings.insert(name.to_string(), Value::BuiltIn(*builtin));
        }
        Rc::new(Frame {
            bindings: RefCell::new(bindings),
            parent: None,
        })
    }

    pub fn child(parent: &Rc<Frame>) -> Rc<Frame> {
        Rc::new(Frame {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(Rc::clone(parent)),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        if self.bindings.borrow().contains_key(name) {
            return true;
        }
        match &self.parent {
            Some(parent) => parent.contains(name),
            None => false,
        }
    }

    /// Resolves through the chain; unbound anywhere is a name error.
    pub fn get(&self, name: &str) -> Result<Value, LangErr> {
        if let Some(val) = self.bindings.borrow().get(name) {
            return Ok(val.clone());
        }
        match &self.parent {
            Some(parent) => parent.get(name),
            None => err!(UnboundSymbol(name.to_string())),
        }
    }

    /// Inserts or overwrites in this frame only, shadowing any ancestor
    /// binding of the same name.
    pub fn define(&self, name: &str, val: Value) -> Value {
        self.bindings
            .borrow_mut()
            .insert(name.to_string(), val.clone());
        val
    }

    /// Mutates the nearest existing binding of `name` up the chain.
    pub fn set(&self, name: &str, val: Value) -> Result<Value, LangErr> {
        if self.bindings.borrow().contains_key(name) {
            self.bindings
                .borrow_mut()
                .insert(name.to_string(), val.clone());
            return Ok(val);
        }
        match &self.parent {
            Some(parent) => parent.set(name, val),
            None => err!(UnboundSymbol(name.to_string())),
        }
    }

    /// Removes from this frame only; ancestors are never searched.
    pub fn delete(&self, name: &str) -> Result<Value, LangErr> {
        match self.bindings.borrow_mut().remove(name) {
            Some(val) => Ok(val),
            None => err!(UndefinedLocal(name.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "./frame_test.rs"]
mod frame_test;
