use colored::*;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use std::env;
use std::rc::Rc;

use minischeme::frame::Frame;
use minischeme::interpreter::{eval_file, eval_str, session_frame};


fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    // One frame for the whole session; files named on the command line are
    // loaded into it before the first prompt.
    let frame = session_frame();
    for path in &args[1..] {
        if let Err(err) = eval_file(path, &frame) {
            return Err(format!("{}: {}", path, err));
        }
    }

    repl(&frame)
}

fn repl(frame: &Rc<Frame>) -> Result<(), String> {
    println!();
    println!("Welcome to the minischeme interpreter!");
    println!("Type 'QUIT' to exit.");
    println!();

    let mut editor = Editor::<()>::new();
    loop {
        let line = match editor.readline("in> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(format!("{}", err)),
        };

        if line.trim() == "QUIT" {
            break;
        }
        editor.add_history_entry(line.as_str());

        // Only language errors are recoverable; report and keep going.
        match eval_str(&line, frame) {
            Ok(val) => println!("  out> {}", val),
            Err(err) => println!("{} {}", "Error>".red(), err),
        }
    }

    println!();
    println!("Thanks for using minischeme.");
    Ok(())
}
