//! Equality predicates: eq?, equal?, not
//!
//! `and`/`or` are special forms (they must see unevaluated arguments to
//! short-circuit) and live in `special_forms`, not here.

use std::rc::Rc;

use lisp_macros::builtin;

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;

const EPSILON: f64 = 1e-9;

/// Identity equality: same pair cell, numbers within epsilon, atoms by value.
fn eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => (x - y).abs() < EPSILON,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Pair(x, _), Value::Pair(y, _)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// Structural recursive equality.
fn equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Pair(car_a, cdr_a), Value::Pair(car_b, cdr_b)) => {
            equal(&car_a.borrow(), &car_b.borrow()) && equal(&cdr_a.borrow(), &cdr_b.borrow())
        }
        _ => eq(a, b),
    }
}

#[builtin(name = "eq?")]
pub fn builtin_eq(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("eq?", "2", args.len()));
    }
    Ok(Value::Bool(eq(&args[0], &args[1])))
}

#[builtin(name = "equal?")]
pub fn builtin_equal(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("equal?", "2", args.len()));
    }
    Ok(Value::Bool(equal(&args[0], &args[1])))
}

#[builtin(name = "not")]
pub fn builtin_not(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("not", "1", args.len()));
    }
    Ok(Value::Bool(!args[0].is_truthy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value as V;

    fn env() -> Rc<Environment> {
        Environment::new()
    }

    #[test]
    fn test_eq_may_differ_for_structurally_equal_pairs() {
        let e = env();
        let a = V::list(vec![V::Number(1.0), V::Number(2.0)]);
        let b = V::list(vec![V::Number(1.0), V::Number(2.0)]);
        assert!(matches!(builtin_eq(&[a, b], &e), Ok(Value::Bool(false))));
    }

    #[test]
    fn test_equal_is_structural() {
        let e = env();
        let a = V::list(vec![V::Number(1.0), V::Number(2.0)]);
        let b = V::list(vec![V::Number(1.0), V::Number(2.0)]);
        assert!(matches!(builtin_equal(&[a, b], &e), Ok(Value::Bool(true))));
    }

    #[test]
    fn test_not() {
        let e = env();
        assert!(matches!(builtin_not(&[V::Bool(false)], &e), Ok(Value::Bool(true))));
        assert!(matches!(builtin_not(&[V::Number(0.0)], &e), Ok(Value::Bool(false))));
    }
}
