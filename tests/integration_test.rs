// ABOUTME: Comprehensive integration tests verifying all features work together

use mini_lisp::builtins::register_builtins;
use mini_lisp::env::Environment;
use mini_lisp::error::EvalError;
use mini_lisp::eval::eval;
use mini_lisp::parser::parse_all;
use mini_lisp::value::Value;

/// Evaluates every top-level form in `source` against a fresh environment
/// and returns the value of the last one.
fn run(source: &str) -> Result<Value, EvalError> {
    let env = Environment::new();
    register_builtins(&env);
    let exprs = parse_all(source).expect("parse failed");
    let mut last = Value::Nil;
    for expr in &exprs {
        last = eval(expr, &env)?;
    }
    Ok(last)
}

fn run_ok(source: &str) -> Value {
    run(source).unwrap_or_else(|e| panic!("eval of {:?} failed: {}", source, e))
}

#[test]
fn test_arithmetic_pipeline() {
    assert_eq!(format!("{}", run_ok("(+ 1 2 (* 3 4) (- 10 5))")), "20");
    assert_eq!(format!("{}", run_ok("(/ 10 4)")), "2.5");
    assert_eq!(format!("{}", run_ok("(quotient 7 2)")), "3");
    assert_eq!(format!("{}", run_ok("(remainder -7 2)")), "-1");
    assert_eq!(format!("{}", run_ok("(modulo -7 2)")), "1");
}

#[test]
fn test_comparison_chain_like_usage() {
    assert!(matches!(run_ok("(< 1 2)"), Value::Bool(true)));
    assert!(matches!(run_ok("(>= 3 3)"), Value::Bool(true)));
    assert!(matches!(run_ok("(= 2 2)"), Value::Bool(true)));
}

#[test]
fn test_define_and_lambda_closures() {
    let source = r#"
        (define (make-adder n)
          (lambda (x) (+ x n)))
        (define add5 (make-adder 5))
        (define add10 (make-adder 10))
        (list (add5 1) (add10 1))
    "#;
    assert_eq!(format!("{}", run_ok(source)), "(6 11)");
}

#[test]
fn test_recursive_factorial() {
    let source = r#"
        (define (fact n)
          (if (= n 0) 1 (* n (fact (- n 1)))))
        (fact 6)
    "#;
    assert_eq!(format!("{}", run_ok(source)), "720");
}

#[test]
fn test_cond_and_let() {
    let source = r#"
        (define (classify n)
          (cond ((< n 0) "negative")
                ((= n 0) "zero")
                (else "positive")))
        (let ((a (classify -5))
              (b (classify 0))
              (c (classify 5)))
          (list a b c))
    "#;
    assert_eq!(
        format!("{}", run_ok(source)),
        "(\"negative\" \"zero\" \"positive\")"
    );
}

#[test]
fn test_quote_and_quasiquote() {
    assert_eq!(format!("{}", run_ok("'(1 2 3)")), "(1 2 3)");
    assert_eq!(format!("{}", run_ok("(let ((x 5)) `(a ,x c))")), "(a 5 c)");
}

#[test]
fn test_dotted_pair_round_trip() {
    assert_eq!(format!("{}", run_ok("(cons 1 2)")), "(1 . 2)");
    assert_eq!(format!("{}", run_ok("'(1 . (2 . (3 . ())))")), "(1 2 3)");
}

#[test]
fn test_higher_order_builtins() {
    let source = r#"
        (define (square x) (* x x))
        (map square '(1 2 3 4))
    "#;
    assert_eq!(format!("{}", run_ok(source)), "(1 4 9 16)");

    let source = r#"(filter (lambda (x) (= 0 (modulo x 2))) '(1 2 3 4 5 6))"#;
    assert_eq!(format!("{}", run_ok(source)), "(2 4 6)");

    let source = r#"(reduce + '(1 2 3 4 5))"#;
    assert_eq!(format!("{}", run_ok(source)), "15");
}

#[test]
fn test_define_macro_fexpr_semantics() {
    let source = r#"
        (define-macro my-if (c t f) (cond (c t) (else f)))
        (my-if (> 3 2) "yes" "no")
    "#;
    assert_eq!(format!("{}", run_ok(source)), "\"yes\"");
}

#[test]
fn test_eval_and_apply_builtins() {
    assert_eq!(format!("{}", run_ok("(eval '(+ 1 2))")), "3");
    assert_eq!(format!("{}", run_ok("(apply + '(1 2 3 4))")), "10");
}

#[test]
fn test_equality_builtins() {
    assert!(matches!(run_ok("(equal? '(1 2 3) '(1 2 3))"), Value::Bool(true)));
    assert!(matches!(run_ok("(eq? 'a 'a)"), Value::Bool(true)));
    assert!(matches!(run_ok("(equal? \"abc\" \"abc\")"), Value::Bool(true)));
}

#[test]
fn test_type_predicates() {
    assert!(matches!(run_ok("(pair? '(1 2))"), Value::Bool(true)));
    assert!(matches!(run_ok("(null? '())"), Value::Bool(true)));
    assert!(matches!(run_ok("(procedure? car)"), Value::Bool(true)));
    assert!(matches!(run_ok("(integer? 3.0)"), Value::Bool(true)));
    assert!(matches!(run_ok("(integer? 3.5)"), Value::Bool(false)));
}

#[test]
fn test_undefined_symbol_error() {
    let err = run("(+ 1 undefined-name)").unwrap_err();
    assert!(matches!(err, EvalError::UndefinedSymbol(_)));
}

#[test]
fn test_arity_mismatch_error() {
    let err = run("(define (f x y) (+ x y)) (f 1)").unwrap_err();
    assert!(matches!(err, EvalError::ArityMismatch { .. }));
}

#[test]
fn test_not_callable_error() {
    let err = run("(1 2 3)").unwrap_err();
    assert!(matches!(err, EvalError::NotCallable(_)));
}

#[test]
fn test_append_builtin() {
    assert_eq!(format!("{}", run_ok("(append '(1 2) '(3 4) '(5))")), "(1 2 3 4 5)");
    assert_eq!(format!("{}", run_ok("(append '(1 2) 3)")), "(1 2 . 3)");
}
