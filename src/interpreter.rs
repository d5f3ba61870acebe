//! Pipeline glue: source text in, value out.

use log::debug;

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;

use crate::error::LangErr;
use crate::evaluator;
use crate::frame::Frame;
use crate::parser;
use crate::tokenizer;
use crate::value::Value;


/// Failure surface of `eval_file`: the read stage or the language stages.
#[derive(Debug)]
pub enum RunError {
    Io(io::Error),
    Lang(LangErr),
}


/// Tokenizes, parses, and evaluates one source text against `frame`.
pub fn eval_str<S: AsRef<str>>(source: S, frame: &Rc<Frame>) -> Result<Value, LangErr> {
    let tokens = tokenizer::tokenize(source);
    debug!("tokens> {:?}", tokens);

    let expr = parser::parse(tokens)?;
    debug!("expression> {}", expr);

    evaluator::evaluate(&expr, frame)
}

/// Loads a source file into `frame`, e.g. to preload definitions before
/// interactive use.
pub fn eval_file<P: AsRef<Path>>(path: P, frame: &Rc<Frame>) -> Result<Value, RunError> {
    let source = fs::read_to_string(path)?;
    Ok(eval_str(&source, frame)?)
}

/// One persistent frame descended from a fresh root. `define` effects
/// accumulate here across inputs for the lifetime of a session.
pub fn session_frame() -> Rc<Frame> {
    Frame::child(&Frame::root())
}


impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Io(err) => write!(f, "{}", err),
            RunError::Lang(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RunError {}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        RunError::Io(err)
    }
}

impl From<LangErr> for RunError {
    fn from(err: LangErr) -> Self {
        RunError::Lang(err)
    }
}
