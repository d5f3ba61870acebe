mod common;

use minischeme::prelude::*;


#[test]
fn basic_arithmetic() {
    let frame = common::setup();

    let results = common::results(&frame, &["(+ 1 2)", "(+ 2 2)"]);
    assert_eq!(
        results,
        vec![
            Value::Number(Number::Integer(3)),
            Value::Number(Number::Integer(4)),
        ]
    );

    let results = common::results(&frame, &["(* (+ 1 1) 3)", "(* (+ 1 1) 3.0)"]);
    assert_eq!(
        results,
        vec![
            Value::Number(Number::Integer(6)),
            Value::Number(Number::Float(6.0)),
        ]
    );

    let results = common::results(&frame, &["(/ (- 1 1) 2)", "(/ (+ 1 1) 2)"]);
    assert_eq!(
        results,
        vec![
            Value::Number(Number::Float(0.)),
            Value::Number(Number::Float(1.)),
        ]
    );
}

#[test]
fn define_square() {
    let frame = common::setup();

    let results = common::results(&frame, &["(define (square x) (* x x))", "(square 5)"]);
    assert_eq!(results[1], Value::Number(Number::Integer(25)));
}

#[test]
fn defines_persist_across_lines() {
    let frame = common::setup();

    let results = common::results(
        &frame,
        &["(define a 2)", "(define b (+ a 1))", "(+ a b)"],
    );
    assert_eq!(results[2], Value::Number(Number::Integer(5)));
}

#[test]
fn lexical_capture() {
    let frame = common::setup();

    // The returned closure keeps resolving n against the frame captured at
    // creation, long after make-adder has returned.
    let results = common::results(
        &frame,
        &[
            "(define (make-adder n) (lambda (x) (+ x n)))",
            "(define add2 (make-adder 2))",
            "(define add10 (make-adder 10))",
            "(add2 40)",
            "(add10 40)",
        ],
    );
    assert_eq!(results[3], Value::Number(Number::Integer(42)));
    assert_eq!(results[4], Value::Number(Number::Integer(50)));
}

#[test]
fn closure_counter() {
    let frame = common::setup();

    let results = common::results(
        &frame,
        &[
            "(define count 0)",
            "(define (bump) (set! count (+ count 1)))",
            "(bump)",
            "(bump)",
            "(bump)",
            "count",
        ],
    );
    assert_eq!(results[5], Value::Number(Number::Integer(3)));
}

#[test]
fn sequential_let() {
    let frame = common::setup();

    let results = common::results(&frame, &["(let ((x 2) (y (* x 3))) y)"]);
    assert_eq!(results[0], Value::Number(Number::Integer(6)));
}

#[test]
fn recursive_lambda() {
    let frame = common::setup();

    let results = common::results(
        &frame,
        &[
            "(define (fact n) (if (equal? n 1) 1 (* n (fact (- n 1)))))",
            "(fact 5)",
        ],
    );
    assert_eq!(results[1], Value::Number(Number::Integer(120)));
}

#[test]
fn append_length_list_ref() {
    let frame = common::setup();

    let results = common::results(
        &frame,
        &[
            "(define joined (append (list 1 2) (list 3 4)))",
            "(equal? joined (list 1 2 3 4))",
            "(length joined)",
            "(list-ref joined 2)",
        ],
    );
    assert_eq!(results[1], Value::Marker(Marker::True));
    assert_eq!(results[2], Value::Number(Number::Integer(4)));
    assert_eq!(results[3], Value::Number(Number::Integer(3)));
}

#[test]
fn map_filter_reduce() {
    let frame = common::setup();

    let results = common::results(
        &frame,
        &[
            "(define (square x) (* x x))",
            "(equal? (map square (list 1 2 3)) (list 1 4 9))",
            "(define (big? x) (> x 2))",
            "(equal? (filter big? (list 1 2 3 4)) (list 3 4))",
            "(reduce + (list 1 2 3 4) 0)",
        ],
    );
    assert_eq!(results[1], Value::Marker(Marker::True));
    assert_eq!(results[3], Value::Marker(Marker::True));
    assert_eq!(results[4], Value::Number(Number::Integer(10)));
}

#[test]
fn cons_car_cdr() {
    let frame = common::setup();

    let results = common::results(
        &frame,
        &[
            "(define p (cons 1 (cons 2 nil)))",
            "(car p)",
            "(car (cdr p))",
            "(list? p)",
            "(list? (cons 1 2))",
        ],
    );
    assert_eq!(results[1], Value::Number(Number::Integer(1)));
    assert_eq!(results[2], Value::Number(Number::Integer(2)));
    assert_eq!(results[3], Value::Marker(Marker::True));
    assert_eq!(results[4], Value::Marker(Marker::False));
}

#[test]
fn del_and_shadowing() {
    let frame = common::setup();

    let results = common::results(
        &frame,
        &["(define x 7)", "(del x)"],
    );
    assert_eq!(results[1], Value::Number(Number::Integer(7)));
    assert_eq!(
        common::error(&frame, "x").kind(),
        ErrorKind::Name
    );
}

#[test]
fn error_taxonomy() {
    let frame = common::setup();

    // Parser failures are syntax errors.
    assert_eq!(common::error(&frame, "(( )").kind(), ErrorKind::Syntax);
    assert_eq!(common::error(&frame, "a b").kind(), ErrorKind::Syntax);

    // Unbound lookups are name errors.
    assert_eq!(common::error(&frame, "ghost").kind(), ErrorKind::Name);
    assert_eq!(common::error(&frame, "(set! ghost 1)").kind(), ErrorKind::Name);

    // Arity and shape failures are evaluation errors.
    assert_eq!(common::error(&frame, "(cons 1)").kind(), ErrorKind::Evaluation);
    assert_eq!(common::error(&frame, "(car 5)").kind(), ErrorKind::Evaluation);
    assert_eq!(common::error(&frame, "()").kind(), ErrorKind::Evaluation);
    assert_eq!(
        common::error(&frame, "(length (cons 1 2))").kind(),
        ErrorKind::Evaluation
    );
}

#[test]
fn session_survives_errors() {
    let frame = common::setup();

    common::results(&frame, &["(define x 1)"]);
    let _ = common::error(&frame, "(car 5)");

    // Bindings from before the failure are still visible.
    let results = common::results(&frame, &["(+ x 1)"]);
    assert_eq!(results[0], Value::Number(Number::Integer(2)));
}
