//! Creation of the built-in procedure registry.
//!
//! Builtins receive their already-evaluated argument sequence and enforce
//! their own arity/type contracts; the higher-order ones (`map`, `filter`,
//! `reduce`) re-enter the evaluator through `apply`.

use lazy_static::lazy_static;

use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::{ExpectedCount, LangErr};
use crate::evaluator;
use crate::number::Number;
use crate::procedure::{Args, BuiltIn, Ret};
use crate::sexp::Marker;
use crate::value::{ListBuilder, Value};

macro_rules! builtins {
    [$($n:tt : $x:expr),*$(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($n, BuiltIn::new(stringify!($x), $x));
            )*
            m
        }
    };
}

lazy_static! {
    /// Name -> procedure registry backing every root frame; process-wide,
    /// initialized once, never mutated afterwards.
    pub static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "+": add,
        "-": sub,
        "*": mul,
        "/": div,
        ">": gt,
        ">=": geq,
        "<": lt,
        "<=": leq,
        "equal?": equal,
        "not": not,
        "cons": cons,
        "car": car,
        "cdr": cdr,
        "list": list,
        "list?": is_list,
        "length": length,
        "list-ref": list_ref,
        "append": append,
        "map": map,
        "filter": filter,
        "reduce": reduce,
        "begin": begin,
    ];
}


fn number(arg: &Value) -> Result<Number, LangErr> {
    if let Value::Number(num) = arg {
        Ok(*num)
    } else {
        err!(InvalidArgument {
            given: arg.clone(),
            expected: Cow::Borrowed("a Number"),
        })
    }
}

fn exactly(args: &Args, count: usize) -> Result<(), LangErr> {
    if args.len() != count {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::Exactly(count),
        });
    }
    Ok(())
}


fn add(args: Args) -> Ret {
    let mut curr = Number::default();
    for arg in &args {
        curr = curr + number(arg)?;
    }
    Ok(Value::Number(curr))
}

fn sub(args: Args) -> Ret {
    let base = match args.first() {
        Some(arg) => number(arg)?,
        None => {
            return err!(WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            });
        }
    };

    if args.len() == 1 {
        return Ok(Value::Number(-base));
    }

    let mut rest = Number::default();
    for arg in &args[1..] {
        rest = rest + number(arg)?;
    }
    Ok(Value::Number(base - rest))
}

fn mul(args: Args) -> Ret {
    let mut curr = Number::Integer(1);
    for arg in &args {
        curr = curr * number(arg)?;
    }
    Ok(Value::Number(curr))
}

fn div(args: Args) -> Ret {
    let base = match args.first() {
        Some(arg) => number(arg)?,
        None => {
            return err!(WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            });
        }
    };

    // Base over the product of the rest; a single argument divides by one,
    // which still forces the float subtype.
    let mut denom = Number::Integer(1);
    for arg in &args[1..] {
        denom = denom * number(arg)?;
    }
    Ok(Value::Number(base / denom))
}


// Comparison chains check adjacent pairs left to right and stop at the
// first failing pair; zero or one argument is vacuously true.
fn chain(args: &Args, holds: fn(Number, Number) -> bool) -> Ret {
    for pair in args.windows(2) {
        if !holds(number(&pair[0])?, number(&pair[1])?) {
            return Ok(Value::truth(false));
        }
    }
    Ok(Value::truth(true))
}

fn gt(args: Args) -> Ret {
    chain(&args, |a, b| a > b)
}

fn geq(args: Args) -> Ret {
    chain(&args, |a, b| a >= b)
}

fn lt(args: Args) -> Ret {
    chain(&args, |a, b| a < b)
}

fn leq(args: Args) -> Ret {
    chain(&args, |a, b| a <= b)
}

fn equal(args: Args) -> Ret {
    let first = match args.first() {
        Some(first) => first,
        None => {
            return err!(WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            });
        }
    };

    for other in &args[1..] {
        if first != other {
            return Ok(Value::truth(false));
        }
    }
    Ok(Value::truth(true))
}

fn not(args: Args) -> Ret {
    exactly(&args, 1)?;
    Ok(Value::truth(!args[0].is_true()))
}


fn cons(mut args: Args) -> Ret {
    exactly(&args, 2)?;
    let rest = args.pop().unwrap();
    let first = args.pop().unwrap();
    Ok(Value::pair(first, rest))
}

fn car(args: Args) -> Ret {
    exactly(&args, 1)?;
    match &args[0] {
        Value::Pair(pair) => Ok(pair.borrow().first()),
        other => err!(InvalidArgument {
            given: other.clone(),
            expected: Cow::Borrowed("a Pair"),
        }),
    }
}

fn cdr(args: Args) -> Ret {
    exactly(&args, 1)?;
    match &args[0] {
        Value::Pair(pair) => Ok(pair.borrow().rest()),
        other => err!(InvalidArgument {
            given: other.clone(),
            expected: Cow::Borrowed("a Pair"),
        }),
    }
}

fn list(args: Args) -> Ret {
    let mut builder = ListBuilder::new();
    for arg in args {
        builder.append(arg);
    }
    Ok(builder.release())
}

/// Walks the rest chain; true iff it ends at nil. Does not terminate on a
/// cyclic structure.
fn is_proper_list(obj: &Value) -> bool {
    let mut curr = obj.clone();
    loop {
        match curr {
            Value::Pair(pair) => {
                let rest = pair.borrow().rest();
                curr = rest;
            }
            Value::Marker(marker) => return marker == Marker::Nil,
            _ => return false,
        }
    }
}

fn is_list(args: Args) -> Ret {
    exactly(&args, 1)?;
    Ok(Value::truth(is_proper_list(&args[0])))
}

fn length(args: Args) -> Ret {
    exactly(&args, 1)?;
    if !is_proper_list(&args[0]) {
        return err!(InvalidArgument {
            given: args[0].clone(),
            expected: Cow::Borrowed("a proper list"),
        });
    }

    // Elements that are themselves nil are not counted; the walk conflates
    // them with the terminator.
    let mut sofar: i64 = 0;
    let mut curr = args[0].clone();
    while let Value::Pair(pair) = curr {
        let (first, rest) = {
            let p = pair.borrow();
            (p.first(), p.rest())
        };
        if !first.is_nil() {
            sofar += 1;
        }
        curr = rest;
    }
    Ok(Value::Number(Number::Integer(sofar)))
}

fn list_ref(args: Args) -> Ret {
    exactly(&args, 2)?;
    let index = match number(&args[1])? {
        Number::Integer(i) => i,
        float => {
            return err!(InvalidArgument {
                given: Value::Number(float),
                expected: Cow::Borrowed("an integer index"),
            });
        }
    };

    if !is_proper_list(&args[0]) {
        // A bare pair still answers index 0 with its first slot.
        if index == 0 {
            if let Value::Pair(pair) = &args[0] {
                return Ok(pair.borrow().first());
            }
        }
        return err!(InvalidArgument {
            given: args[0].clone(),
            expected: Cow::Borrowed("an indexable list"),
        });
    }

    if index < 0 {
        return err!(InvalidArgument {
            given: args[1].clone(),
            expected: Cow::Borrowed("a non-negative index"),
        });
    }

    let mut sofar: i64 = 0;
    let mut curr = args[0].clone();
    while let Value::Pair(pair) = curr {
        let (first, rest) = {
            let p = pair.borrow();
            (p.first(), p.rest())
        };
        if sofar == index {
            return Ok(first);
        }
        sofar += 1;
        curr = rest;
    }
    err!(IndexOutOfRange { index })
}

fn append(mut args: Args) -> Ret {
    let tail = match args.pop() {
        Some(tail) => tail,
        None => return Ok(Value::nil()),
    };

    let mut builder = ListBuilder::new();
    for arg in args {
        if !is_proper_list(&arg) {
            return err!(InvalidArgument {
                given: arg,
                expected: Cow::Borrowed("a proper list"),
            });
        }
        let mut curr = arg;
        while let Value::Pair(pair) = curr {
            let (first, rest) = {
                let p = pair.borrow();
                (p.first(), p.rest())
            };
            builder.append(first);
            curr = rest;
        }
    }

    // The final argument becomes the result's tail as-is: it is never
    // list-checked, and its structure is shared rather than copied.
    Ok(builder.release_with_tail(tail))
}

fn map(mut args: Args) -> Ret {
    exactly(&args, 2)?;
    let target = args.pop().unwrap();
    let proc = args.pop().unwrap();
    if !is_proper_list(&target) {
        return err!(InvalidArgument {
            given: target,
            expected: Cow::Borrowed("a proper list"),
        });
    }

    let mut builder = ListBuilder::new();
    let mut curr = target;
    while let Value::Pair(pair) = curr {
        let (first, rest) = {
            let p = pair.borrow();
            (p.first(), p.rest())
        };
        builder.append(evaluator::apply(&proc, vec![first])?);
        curr = rest;
    }
    Ok(builder.release())
}

fn filter(mut args: Args) -> Ret {
    exactly(&args, 2)?;
    let target = args.pop().unwrap();
    let proc = args.pop().unwrap();
    if !is_proper_list(&target) {
        return err!(InvalidArgument {
            given: target,
            expected: Cow::Borrowed("a proper list"),
        });
    }

    let mut builder = ListBuilder::new();
    let mut curr = target;
    while let Value::Pair(pair) = curr {
        let (first, rest) = {
            let p = pair.borrow();
            (p.first(), p.rest())
        };
        if evaluator::apply(&proc, vec![first.clone()])?.is_true() {
            builder.append(first);
        }
        curr = rest;
    }
    Ok(builder.release())
}

fn reduce(mut args: Args) -> Ret {
    exactly(&args, 3)?;
    let init = args.pop().unwrap();
    let target = args.pop().unwrap();
    let proc = args.pop().unwrap();
    if !is_proper_list(&target) {
        return err!(InvalidArgument {
            given: target,
            expected: Cow::Borrowed("a proper list"),
        });
    }

    let mut acc = init;
    let mut curr = target;
    while let Value::Pair(pair) = curr {
        let (first, rest) = {
            let p = pair.borrow();
            (p.first(), p.rest())
        };
        acc = evaluator::apply(&proc, vec![acc, first])?;
        curr = rest;
    }
    Ok(acc)
}

// Operands were already evaluated left to right by the time we are called;
// only the last result is kept.
fn begin(mut args: Args) -> Ret {
    match args.pop() {
        Some(last) => Ok(last),
        None => err!(WrongArgumentCount {
            given: 0,
            expected: ExpectedCount::AtLeast(1),
        }),
    }
}

#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
