//! A tree-walking interpreter for a small Scheme-like language.
//!
//! Pipeline: text -> tokenizer -> parser -> evaluator, over lexically
//! scoped frames with closures and a cons-pair/list library registered in
//! every root frame. Evaluation is single-threaded and purely recursive;
//! deep non-tail guest recursion exhausts the native stack by design.
//!
//! Note that this library does *not* setup logging, clients should take
//! care of that. See: https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod error;

pub mod builtins;
pub mod evaluator;
pub mod frame;
pub mod interpreter;
pub mod number;
pub mod parser;
pub mod procedure;
pub mod sexp;
pub mod tokenizer;
pub mod value;

pub mod prelude {
    pub use crate::builtins::BUILTINS;
    pub use crate::error::{ErrorKind, ExpectedCount, LangErr};
    pub use crate::evaluator::{apply, evaluate};
    pub use crate::frame::Frame;
    pub use crate::interpreter::{eval_file, eval_str, session_frame, RunError};
    pub use crate::number::Number;
    pub use crate::parser::parse;
    pub use crate::procedure::{Args, BuiltIn, Closure, Func, Ret};
    pub use crate::sexp::{Atom, Marker, Sexp};
    pub use crate::tokenizer::{tokenize, Token, TokenInfo, Tokens};
    pub use crate::value::{ListBuilder, Pair, Value};
    // Macros.
    pub use crate::err;
}
