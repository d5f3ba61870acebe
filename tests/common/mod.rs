use std::rc::Rc;

use minischeme::prelude::*;


pub fn setup() -> Rc<Frame> {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    session_frame()
}

pub fn results(frame: &Rc<Frame>, lines: &[&str]) -> Vec<Value> {
    lines
        .iter()
        .map(|line| eval_str(line, frame).unwrap())
        .collect()
}

pub fn error(frame: &Rc<Frame>, line: &str) -> LangErr {
    eval_str(line, frame).unwrap_err()
}
