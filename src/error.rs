//! Representation of errors raised across the interpreter pipeline.
//!
//! Every failure in the tokenizer/parser/evaluator/builtin chain is a
//! `LangErr`; `LangErr::kind` projects it onto the coarse taxonomy that
//! embedders (e.g. the interactive loop) dispatch on. Errors are raised at
//! the point of detection and propagate unhandled to the nearest caller
//! outside the evaluator.

use std::borrow::Cow;
use std::fmt;

use self::ErrorKind::*;
use self::ExpectedCount::*;
use self::LangErr::*;
use crate::sexp::Sexp;
use crate::value::Value;


/// Creates a LangErr wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::LangErr::$($kind)+)
    };
}


#[derive(Debug)]
pub enum LangErr {
    // Syntax errors.
    UnbalancedParens {
        open: usize,
        close: usize,
    },
    UnenclosedSequence {
        given: usize,
    },

    // Name errors.
    UnboundSymbol(String),
    UndefinedLocal(String),

    // Evaluation errors.
    InvalidArgument {
        given: Value,
        expected: Cow<'static, str>,
    },
    InvalidSexp(Sexp),
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    NotCallable(Value),
    IndexOutOfRange {
        index: i64,
    },
}

/// The coarse classes consumed by embedders; `LangErr` itself is the base.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Syntax,
    Name,
    Evaluation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}


impl LangErr {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UnbalancedParens { .. } | UnenclosedSequence { .. } => Syntax,
            UnboundSymbol(..) | UndefinedLocal(..) => Name,
            InvalidArgument { .. }
            | InvalidSexp(..)
            | WrongArgumentCount { .. }
            | NotCallable(..)
            | IndexOutOfRange { .. } => Evaluation,
        }
    }
}


impl fmt::Display for LangErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Syntax => write!(f, "[Syntax Error] ")?,
            Name => write!(f, "[Name Error] ")?,
            Evaluation => write!(f, "[Evaluation Error] ")?,
        }

        match self {
            UnbalancedParens { open, close } => write!(
                f,
                "Unbalanced parentheses: {} open vs {} close",
                open, close
            ),
            UnenclosedSequence { given } => write!(
                f,
                "Multiple top-level tokens without enclosing parens: {} given",
                given
            ),
            UnboundSymbol(symbol) => write!(f, "Unbound symbol: \"{}\"", symbol),
            UndefinedLocal(symbol) => {
                write!(f, "Symbol not defined in this frame: \"{}\"", symbol)
            }
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                given, expected
            ),
            InvalidSexp(val) => write!(f, "Invalid S-exp for evaluation: {}", val),
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            NotCallable(val) => write!(f, "Not callable: {}", val),
            IndexOutOfRange { index } => write!(f, "Index out of range: {}", index),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
            AtMost(maximum) => write!(f, "at most {}", maximum),
        };
    }
}

impl std::error::Error for LangErr {}
