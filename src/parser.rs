//! Module for parsing minischeme tokens into an AST.
//!
//! Validation happens over the whole token sequence before descent:
//! parenthesis counts must balance, and anything longer than a single bare
//! atom must be wrapped as one parenthesized form.

use crate::error::LangErr;
use crate::sexp::{Marker, Sexp};
use crate::tokenizer::{Token, Tokens};


pub fn parse(tokens: Tokens) -> Result<Sexp, LangErr> {
    let tokens: Vec<Token> = tokens
        .into_iter()
        .filter_map(|info| match info.token {
            Token::Comment(..) => None,
            token => Some(token),
        })
        .collect();

    let open = tokens.iter().filter(|t| **t == Token::LeftParen).count();
    let close = tokens.iter().filter(|t| **t == Token::RightParen).count();
    if open != close {
        return err!(UnbalancedParens { open, close });
    }

    if tokens.len() > 1
        && (tokens.first() != Some(&Token::LeftParen)
            || tokens.last() != Some(&Token::RightParen))
    {
        return err!(UnenclosedSequence {
            given: tokens.len(),
        });
    }

    let (mut forms, _) = parse_helper(&tokens, 0);
    if forms.is_empty() {
        Ok(Marker::Nil.into())
    } else {
        // Of several wrapped top-level forms, the first wins.
        Ok(forms.remove(0))
    }
}

fn parse_helper(tokens: &[Token], mut i: usize) -> (Vec<Sexp>, usize) {
    let mut tree = Vec::new();
    while i < tokens.len() {
        match &tokens[i] {
            Token::RightParen => return (tree, i + 1),
            Token::LeftParen => {
                let (nested, next) = parse_helper(tokens, i + 1);
                tree.push(Sexp::List(nested));
                i = next;
            }
            Token::Atom(atom) => {
                tree.push(Sexp::Atom(atom.clone()));
                i += 1;
            }
            // Comments were filtered before descent.
            Token::Comment(..) => i += 1,
        }
    }
    (tree, i)
}

#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
