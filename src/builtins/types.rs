//! Type predicates: atom?, boolean?, integer?, list?, number?, null?, pair?,
//! procedure?, string?, symbol?, even?, odd?, zero?

use std::rc::Rc;

use lisp_macros::builtin;

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;

fn unary(function: &str, args: &[Value]) -> Result<&Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error(function, "1", args.len()));
    }
    Ok(&args[0])
}

fn unary_number(function: &str, args: &[Value]) -> Result<f64, EvalError> {
    match unary(function, args)? {
        Value::Number(n) => Ok(*n),
        other => Err(EvalError::type_error(function, "number", other, 0)),
    }
}

#[builtin(name = "atom?")]
pub fn builtin_atom_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let v = unary("atom?", args)?;
    Ok(Value::Bool(matches!(
        v,
        Value::Nil | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Symbol(_)
    )))
}

#[builtin(name = "boolean?")]
pub fn builtin_boolean_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    Ok(Value::Bool(matches!(unary("boolean?", args)?, Value::Bool(_))))
}

/// A Number whose value equals its truncation, per the spec's resolution of
/// the reference implementation's narrowing-cast bug.
#[builtin(name = "integer?")]
pub fn builtin_integer_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    match unary("integer?", args)? {
        Value::Number(n) => Ok(Value::Bool(n.trunc() == *n)),
        _ => Ok(Value::Bool(false)),
    }
}

#[builtin(name = "list?")]
pub fn builtin_list_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let v = unary("list?", args)?;
    Ok(Value::Bool(v.is_proper_list()))
}

#[builtin(name = "number?")]
pub fn builtin_number_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    Ok(Value::Bool(matches!(unary("number?", args)?, Value::Number(_))))
}

#[builtin(name = "null?")]
pub fn builtin_null_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    Ok(Value::Bool(unary("null?", args)?.is_nil()))
}

#[builtin(name = "pair?")]
pub fn builtin_pair_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    Ok(Value::Bool(unary("pair?", args)?.is_pair()))
}

#[builtin(name = "procedure?")]
pub fn builtin_procedure_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    Ok(Value::Bool(matches!(
        unary("procedure?", args)?,
        Value::Lambda { .. } | Value::BuiltinProc { .. }
    )))
}

#[builtin(name = "string?")]
pub fn builtin_string_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    Ok(Value::Bool(matches!(unary("string?", args)?, Value::String(_))))
}

#[builtin(name = "symbol?")]
pub fn builtin_symbol_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    Ok(Value::Bool(matches!(unary("symbol?", args)?, Value::Symbol(_))))
}

#[builtin(name = "even?")]
pub fn builtin_even_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let n = unary_number("even?", args)?;
    Ok(Value::Bool(n.rem_euclid(2.0) == 0.0))
}

#[builtin(name = "odd?")]
pub fn builtin_odd_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let n = unary_number("odd?", args)?;
    Ok(Value::Bool(n.rem_euclid(2.0) != 0.0))
}

#[builtin(name = "zero?")]
pub fn builtin_zero_p(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let n = unary_number("zero?", args)?;
    Ok(Value::Bool(n == 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Rc<Environment> {
        Environment::new()
    }

    #[test]
    fn test_atom_p() {
        let e = env();
        assert!(matches!(builtin_atom_p(&[Value::Number(1.0)], &e), Ok(Value::Bool(true))));
        let pair = Value::cons(Value::Number(1.0), Value::Nil);
        assert!(matches!(builtin_atom_p(&[pair], &e), Ok(Value::Bool(false))));
    }

    #[test]
    fn test_list_p_requires_proper_tail() {
        let e = env();
        let proper = Value::list(vec![Value::Number(1.0)]);
        assert!(matches!(builtin_list_p(&[proper], &e), Ok(Value::Bool(true))));
        let improper = Value::cons(Value::Number(1.0), Value::Number(2.0));
        assert!(matches!(builtin_list_p(&[improper], &e), Ok(Value::Bool(false))));
    }

    #[test]
    fn test_integer_p() {
        let e = env();
        assert!(matches!(builtin_integer_p(&[Value::Number(4.0)], &e), Ok(Value::Bool(true))));
        assert!(matches!(builtin_integer_p(&[Value::Number(4.5)], &e), Ok(Value::Bool(false))));
    }

    #[test]
    fn test_even_odd_zero() {
        let e = env();
        assert!(matches!(builtin_even_p(&[Value::Number(4.0)], &e), Ok(Value::Bool(true))));
        assert!(matches!(builtin_odd_p(&[Value::Number(3.0)], &e), Ok(Value::Bool(true))));
        assert!(matches!(builtin_zero_p(&[Value::Number(0.0)], &e), Ok(Value::Bool(true))));
    }
}
