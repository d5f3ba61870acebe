//! Module for breaking minischeme text into tokens.

use std::collections::VecDeque;

use crate::number::Number;
use crate::sexp::{Atom, Marker};


#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    LeftParen,
    RightParen,
    Atom(Atom),
    Comment(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenInfo {
    pub token: Token,
    pub line: usize,
}

pub type Tokens = VecDeque<TokenInfo>;


pub fn tokenize<S: AsRef<str>>(source: S) -> Tokens {
    let mut result = Tokens::new();
    for (i, line) in source.as_ref().split('\n').enumerate() {
        tokenize_line(line, i, &mut result);
    }
    result
}

fn tokenize_line<S: AsRef<str>>(line: S, linum: usize, result: &mut Tokens) {
    let mut sexp_slice = line.as_ref();

    // A comment consumes the rest of the line, parens included.
    let mut comment: Option<TokenInfo> = None;
    if let Some(j) = sexp_slice.find(';') {
        comment = Some(TokenInfo {
            token: Token::Comment(sexp_slice[j + 1..].to_string()),
            line: linum + 1,
        });
        sexp_slice = &sexp_slice[..j];
    }

    let expanded = sexp_slice.replace('(', " ( ").replace(')', " ) ");

    for ptoken in expanded.split_whitespace() {
        let token = match ptoken {
            "(" => Token::LeftParen,
            ")" => Token::RightParen,
            _ => Token::Atom(classify(ptoken)),
        };
        result.push_back(TokenInfo {
            token,
            line: linum + 1,
        });
    }

    if let Some(comment) = comment {
        result.push_back(comment);
    }
}

// Markers are carved out of symbol space here, so no later stage compares
// raw text against a reserved spelling.
fn classify(ptoken: &str) -> Atom {
    if let Some(marker) = Marker::parse(ptoken) {
        return Atom::Marker(marker);
    }
    if let Ok(num) = ptoken.parse::<Number>() {
        return Atom::Number(num);
    }
    Atom::Symbol(ptoken.to_string())
}

#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
