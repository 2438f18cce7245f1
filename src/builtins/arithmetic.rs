//! Arithmetic operations: +, -, *, /, abs, expt, quotient, modulo, remainder
//!
//! `+` and `*` are variadic with identities 0 and 1; `-` and `/` negate or
//! reciprocate on a single argument and left-fold on more than one.

use std::rc::Rc;

use lisp_macros::builtin;

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;

fn as_number(function: &str, value: &Value, position: usize) -> Result<f64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(EvalError::type_error(function, "number", other, position)),
    }
}

/// (+ ...) sums its arguments; the empty sum is 0.
#[builtin(name = "+")]
pub fn builtin_add(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let mut sum = 0.0;
    for (i, arg) in args.iter().enumerate() {
        sum += as_number("+", arg, i)?;
    }
    Ok(Value::Number(sum))
}

/// (- a) negates; (- a b ...) left-folds subtraction from `a`.
#[builtin(name = "-")]
pub fn builtin_sub(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity_error("-", "at least 1", 0));
    }
    let first = as_number("-", &args[0], 0)?;
    if args.len() == 1 {
        return Ok(Value::Number(-first));
    }
    let mut result = first;
    for (i, arg) in args[1..].iter().enumerate() {
        result -= as_number("-", arg, i + 1)?;
    }
    Ok(Value::Number(result))
}

/// (* ...) multiplies its arguments; the empty product is 1.
#[builtin(name = "*")]
pub fn builtin_mul(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let mut product = 1.0;
    for (i, arg) in args.iter().enumerate() {
        product *= as_number("*", arg, i)?;
    }
    Ok(Value::Number(product))
}

/// (/ a) reciprocates; (/ a b ...) left-folds division from `a`.
#[builtin(name = "/")]
pub fn builtin_div(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity_error("/", "at least 1", 0));
    }
    let first = as_number("/", &args[0], 0)?;
    if args.len() == 1 {
        if first == 0.0 {
            return Err(EvalError::arithmetic("/", "division by zero"));
        }
        return Ok(Value::Number(1.0 / first));
    }
    let mut result = first;
    for (i, arg) in args[1..].iter().enumerate() {
        let divisor = as_number("/", arg, i + 1)?;
        if divisor == 0.0 {
            return Err(EvalError::arithmetic("/", "division by zero"));
        }
        result /= divisor;
    }
    Ok(Value::Number(result))
}

#[builtin(name = "abs")]
pub fn builtin_abs(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("abs", "1", args.len()));
    }
    Ok(Value::Number(as_number("abs", &args[0], 0)?.abs()))
}

#[builtin(name = "expt")]
pub fn builtin_expt(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("expt", "2", args.len()));
    }
    let base = as_number("expt", &args[0], 0)?;
    let exponent = as_number("expt", &args[1], 1)?;
    Ok(Value::Number(base.powf(exponent)))
}

/// Truncates toward zero, like C integer division.
#[builtin(name = "quotient")]
pub fn builtin_quotient(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (a, b) = binary_integer_args("quotient", args)?;
    Ok(Value::Number((a / b).trunc()))
}

/// Has the sign of the dividend, matching C's `fmod`.
#[builtin(name = "remainder")]
pub fn builtin_remainder(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (a, b) = binary_integer_args("remainder", args)?;
    Ok(Value::Number(a % b))
}

/// Has the sign of the divisor.
#[builtin(name = "modulo")]
pub fn builtin_modulo(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (a, b) = binary_integer_args("modulo", args)?;
    let result = a % b;
    if result != 0.0 && (result < 0.0) != (b < 0.0) {
        Ok(Value::Number(result + b))
    } else {
        Ok(Value::Number(result))
    }
}

fn binary_integer_args(function: &str, args: &[Value]) -> Result<(f64, f64), EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error(function, "2", args.len()));
    }
    let a = as_number(function, &args[0], 0)?;
    let b = as_number(function, &args[1], 1)?;
    if b == 0.0 {
        return Err(EvalError::arithmetic(function, "division by zero"));
    }
    Ok((a, b))
}
