//! Runtime value representation.
//!
//! Values are cheap to clone: pairs and closures are shared behind `Rc`,
//! so structure built once (e.g. a captured list) can be referenced from
//! several places, including shared tails across `cons` results.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::number::Number;
use crate::procedure::{BuiltIn, Closure};
use crate::sexp::Marker;


#[derive(Clone, Debug)]
pub enum Value {
    Number(Number),
    Marker(Marker),
    Pair(Rc<RefCell<Pair>>),
    Closure(Rc<Closure>),
    BuiltIn(BuiltIn),
}

/// A two-slot cons cell. `rest` is mutable in place; chains of pairs ending
/// in the nil marker form proper lists.
#[derive(Clone, Debug, PartialEq)]
pub struct Pair {
    first: Value,
    rest: Value,
}


impl Pair {
    pub fn new(first: Value, rest: Value) -> Pair {
        Pair { first, rest }
    }

    pub fn first(&self) -> Value {
        self.first.clone()
    }

    pub fn rest(&self) -> Value {
        self.rest.clone()
    }

    pub fn set_rest(&mut self, new: Value) {
        self.rest = new;
    }
}

impl Value {
    pub fn pair(first: Value, rest: Value) -> Value {
        Value::Pair(Rc::new(RefCell::new(Pair::new(first, rest))))
    }

    pub fn nil() -> Value {
        Value::Marker(Marker::Nil)
    }

    pub fn truth(cond: bool) -> Value {
        if cond {
            Value::Marker(Marker::True)
        } else {
            Value::Marker(Marker::False)
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Value::Marker(Marker::True))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Value::Marker(Marker::False))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Marker(Marker::Nil))
    }
}


/// Equality is structural for numbers, markers and pairs; closures compare
/// by identity and builtins by name.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Marker(a), Value::Marker(b)) => a == b,
            (Value::Pair(a), Value::Pair(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::BuiltIn(a), Value::BuiltIn(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(num) => write!(f, "{}", num),
            Value::Marker(marker) => write!(f, "{}", marker),
            Value::Pair(pair) => list_fmt(pair, f),
            Value::Closure(closure) => write!(f, "{}", closure),
            Value::BuiltIn(builtin) => write!(f, "{}", builtin),
        }
    }
}

/// Note: this does not check for loops; the length cap is the only bound
/// when displaying untrusted structures.
fn list_fmt(pair: &Rc<RefCell<Pair>>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const MAX_DISPLAY_LENGTH: usize = 64;

    let mut pos: usize = 0;
    let mut curr = Rc::clone(pair);
    write!(f, "(")?;
    loop {
        if pos >= MAX_DISPLAY_LENGTH {
            write!(f, "...")?;
            break;
        }

        let (first, rest) = {
            let p = curr.borrow();
            (p.first(), p.rest())
        };
        write!(f, "{}", first)?;

        match rest {
            Value::Marker(Marker::Nil) => break,
            Value::Pair(next) => {
                write!(f, " ")?;
                curr = next;
                pos += 1;
            }
            improper => {
                write!(f, " . {}", improper)?;
                break;
            }
        }
    }
    write!(f, ")")
}


/// Builds a proper list front to back through a handle on the most recent
/// pair, avoiding O(n) insertion => O(n^2) total construction.
///
/// Not concurrency-safe; meant to be used serially.
pub struct ListBuilder {
    head: Value,
    end: Option<Rc<RefCell<Pair>>>,
}

impl ListBuilder {
    pub fn new() -> ListBuilder {
        ListBuilder {
            head: Value::nil(),
            end: None,
        }
    }

    pub fn append(&mut self, val: Value) {
        let tail = Rc::new(RefCell::new(Pair::new(val, Value::nil())));
        match self.end.take() {
            None => self.head = Value::Pair(Rc::clone(&tail)),
            Some(end) => end.borrow_mut().set_rest(Value::Pair(Rc::clone(&tail))),
        }
        self.end = Some(tail);
    }

    pub fn release(self) -> Value {
        self.head
    }

    /// Like `release`, but closes the chain with `tail` instead of nil;
    /// with nothing appended the tail itself is the result.
    pub fn release_with_tail(self, tail: Value) -> Value {
        match self.end {
            None => tail,
            Some(end) => {
                end.borrow_mut().set_rest(tail);
                self.head
            }
        }
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        ListBuilder::new()
    }
}
