//! Pair/list operations: car, cdr, cons, list, length, append

use std::rc::Rc;

use lisp_macros::builtin;

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;

#[builtin(name = "car")]
pub fn builtin_car(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("car", "1", args.len()));
    }
    args[0].car()
}

#[builtin(name = "cdr")]
pub fn builtin_cdr(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("cdr", "1", args.len()));
    }
    args[0].cdr()
}

#[builtin(name = "cons")]
pub fn builtin_cons(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("cons", "2", args.len()));
    }
    Ok(Value::cons(args[0].clone(), args[1].clone()))
}

#[builtin(name = "list")]
pub fn builtin_list(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    Ok(Value::list(args.to_vec()))
}

#[builtin(name = "length")]
pub fn builtin_length(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("length", "1", args.len()));
    }
    let len = args[0]
        .list_len()
        .map_err(|_| EvalError::type_error("length", "proper list", &args[0], 0))?;
    Ok(Value::Number(len as f64))
}

/// Copies every argument but the last into a fresh spine; the last argument
/// becomes the tail as-is (it may be improper, or any value at all).
#[builtin(name = "append")]
pub fn builtin_append(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let Some((last, init)) = args.split_last() else {
        return Ok(Value::Nil);
    };

    let mut items = Vec::new();
    for (i, arg) in init.iter().enumerate() {
        let elems = arg
            .to_vec()
            .map_err(|_| EvalError::type_error("append", "proper list", arg, i))?;
        items.extend(elems);
    }

    Ok(items
        .into_iter()
        .rev()
        .fold(last.clone(), |tail, item| Value::cons(item, tail)))
}
