//! Recursive evaluation of expressions against a frame chain.
//!
//! Dispatch follows expression shape: numbers and markers are
//! self-evaluating, symbols resolve through the frame, and lists select
//! either a special form (by head keyword) or procedure application.
//! Evaluation is purely recursive with no tail-call elimination, so guest
//! recursion depth maps 1:1 onto native call depth.

use std::rc::Rc;

use crate::error::{ExpectedCount, LangErr};
use crate::frame::Frame;
use crate::procedure::{Args, Closure, Func, Ret};
use crate::sexp::{Atom, Sexp};
use crate::value::Value;


pub fn evaluate(expr: &Sexp, frame: &Rc<Frame>) -> Ret {
    match expr {
        Sexp::Atom(Atom::Number(num)) => Ok(Value::Number(*num)),
        // Reserved atoms designate themselves and are never looked up.
        Sexp::Atom(Atom::Marker(marker)) => Ok(Value::Marker(*marker)),
        Sexp::Atom(Atom::Symbol(name)) => frame.get(name),
        Sexp::List(elements) => evaluate_list(elements, frame),
    }
}

/// Invokes a procedure value on already-evaluated arguments.
pub fn apply(proc: &Value, args: Args) -> Ret {
    match proc {
        Value::BuiltIn(builtin) => builtin.call(args),
        Value::Closure(closure) => closure.call(args),
        other => err!(NotCallable(other.clone())),
    }
}


fn evaluate_list(elements: &[Sexp], frame: &Rc<Frame>) -> Ret {
    let head = match elements.first() {
        Some(head) => head,
        None => return err!(InvalidSexp(Sexp::List(Vec::new()))),
    };

    if let Sexp::Atom(Atom::Symbol(keyword)) = head {
        match keyword.as_str() {
            "define" => return define(&elements[1..], frame),
            "lambda" => return lambda(&elements[1..], frame),
            "or" => return or(&elements[1..], frame),
            "and" => return and(&elements[1..], frame),
            "if" => return branch(&elements[1..], frame),
            "del" => return del(&elements[1..], frame),
            "let" => return let_scope(&elements[1..], frame),
            "set!" => return assign(&elements[1..], frame),
            _ => { /* Fallthrough to application. */ }
        }
    }

    let proc = evaluate(head, frame)?;
    let args = evlis(&elements[1..], frame)?;
    apply(&proc, args)
}

fn evlis(exprs: &[Sexp], frame: &Rc<Frame>) -> Result<Args, LangErr> {
    let mut res = Args::with_capacity(exprs.len());
    for expr in exprs {
        res.push(evaluate(expr, frame)?);
    }
    Ok(res)
}


fn define(args: &[Sexp], frame: &Rc<Frame>) -> Ret {
    if args.len() != 2 {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::Exactly(2),
        });
    }

    match &args[0] {
        Sexp::Atom(Atom::Symbol(name)) => {
            let val = evaluate(&args[1], frame)?;
            Ok(frame.define(name, val))
        }
        // (define (name params...) body) sugars a lambda definition.
        Sexp::List(signature) => {
            let name = match signature.first() {
                Some(Sexp::Atom(Atom::Symbol(name))) => name,
                _ => return err!(InvalidSexp(args[0].clone())),
            };
            let params = param_names(&signature[1..])?;
            let closure = Closure::new(params, args[1].clone(), Rc::clone(frame));
            Ok(frame.define(name, Value::Closure(Rc::new(closure))))
        }
        other => err!(InvalidSexp(other.clone())),
    }
}

fn lambda(args: &[Sexp], frame: &Rc<Frame>) -> Ret {
    if args.len() != 2 {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::Exactly(2),
        });
    }

    let params = match &args[0] {
        Sexp::List(params) => param_names(params)?,
        other => return err!(InvalidSexp(other.clone())),
    };
    let closure = Closure::new(params, args[1].clone(), Rc::clone(frame));
    Ok(Value::Closure(Rc::new(closure)))
}

fn param_names(params: &[Sexp]) -> Result<Vec<String>, LangErr> {
    let mut names = Vec::with_capacity(params.len());
    for param in params {
        match param {
            Sexp::Atom(Atom::Symbol(name)) => names.push(name.clone()),
            other => return err!(InvalidSexp(other.clone())),
        }
    }
    Ok(names)
}

fn or(args: &[Sexp], frame: &Rc<Frame>) -> Ret {
    for arg in args {
        if evaluate(arg, frame)?.is_true() {
            return Ok(Value::truth(true));
        }
    }
    Ok(Value::truth(false))
}

fn and(args: &[Sexp], frame: &Rc<Frame>) -> Ret {
    for arg in args {
        if evaluate(arg, frame)?.is_false() {
            return Ok(Value::truth(false));
        }
    }
    Ok(Value::truth(true))
}

fn branch(args: &[Sexp], frame: &Rc<Frame>) -> Ret {
    if args.len() != 3 {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::Exactly(3),
        });
    }

    // The non-chosen arm is never evaluated.
    if evaluate(&args[0], frame)?.is_true() {
        evaluate(&args[1], frame)
    } else {
        evaluate(&args[2], frame)
    }
}

fn del(args: &[Sexp], frame: &Rc<Frame>) -> Ret {
    if args.len() != 1 {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::Exactly(1),
        });
    }

    match &args[0] {
        Sexp::Atom(Atom::Symbol(name)) => frame.delete(name),
        other => err!(InvalidSexp(other.clone())),
    }
}

fn let_scope(args: &[Sexp], frame: &Rc<Frame>) -> Ret {
    if args.len() != 2 {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::Exactly(2),
        });
    }
    let bindings = match &args[0] {
        Sexp::List(bindings) => bindings,
        other => return err!(InvalidSexp(other.clone())),
    };

    // Bindings evaluate sequentially in the new scope itself, so each one
    // sees those bound before it.
    let scope = Frame::child(frame);
    for binding in bindings {
        match binding {
            Sexp::List(pair) if pair.len() == 2 => {
                let name = match &pair[0] {
                    Sexp::Atom(Atom::Symbol(name)) => name,
                    other => return err!(InvalidSexp(other.clone())),
                };
                let val = evaluate(&pair[1], &scope)?;
                scope.define(name, val);
            }
            other => return err!(InvalidSexp(other.clone())),
        }
    }

    evaluate(&args[1], &scope)
}

fn assign(args: &[Sexp], frame: &Rc<Frame>) -> Ret {
    if args.len() != 2 {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::Exactly(2),
        });
    }

    match &args[0] {
        Sexp::Atom(Atom::Symbol(name)) => {
            let val = evaluate(&args[1], frame)?;
            frame.set(name, val)
        }
        other => err!(InvalidSexp(other.clone())),
    }
}

#[cfg(test)]
#[path = "./evaluator_test.rs"]
mod evaluator_test;
