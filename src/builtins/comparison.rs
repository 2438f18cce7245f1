//! Strictly binary numeric comparisons: =, <, >, <=, >=

use std::rc::Rc;

use lisp_macros::builtin;

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;

fn binary_numbers(function: &str, args: &[Value]) -> Result<(f64, f64), EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error(function, "2", args.len()));
    }
    let a = match &args[0] {
        Value::Number(n) => *n,
        other => return Err(EvalError::type_error(function, "number", other, 0)),
    };
    let b = match &args[1] {
        Value::Number(n) => *n,
        other => return Err(EvalError::type_error(function, "number", other, 1)),
    };
    Ok((a, b))
}

#[builtin(name = "=")]
pub fn builtin_num_eq(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (a, b) = binary_numbers("=", args)?;
    Ok(Value::Bool(a == b))
}

#[builtin(name = "<")]
pub fn builtin_lt(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (a, b) = binary_numbers("<", args)?;
    Ok(Value::Bool(a < b))
}

#[builtin(name = ">")]
pub fn builtin_gt(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (a, b) = binary_numbers(">", args)?;
    Ok(Value::Bool(a > b))
}

#[builtin(name = "<=")]
pub fn builtin_le(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (a, b) = binary_numbers("<=", args)?;
    Ok(Value::Bool(a <= b))
}

#[builtin(name = ">=")]
pub fn builtin_ge(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (a, b) = binary_numbers(">=", args)?;
    Ok(Value::Bool(a >= b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Rc<Environment> {
        Environment::new()
    }

    #[test]
    fn test_numeric_comparisons() {
        let e = env();
        assert!(matches!(
            builtin_lt(&[Value::Number(1.0), Value::Number(2.0)], &e),
            Ok(Value::Bool(true))
        ));
        assert!(matches!(
            builtin_ge(&[Value::Number(2.0), Value::Number(2.0)], &e),
            Ok(Value::Bool(true))
        ));
    }

    #[test]
    fn test_wrong_arity_errors() {
        let e = env();
        assert!(builtin_lt(&[Value::Number(1.0)], &e).is_err());
    }

    #[test]
    fn test_non_number_errors() {
        let e = env();
        assert!(builtin_lt(&[Value::Number(1.0), Value::String("x".into())], &e).is_err());
    }
}
