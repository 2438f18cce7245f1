//! Higher-order list operations: map, filter, reduce

use std::rc::Rc;

use lisp_macros::builtin;

use crate::env::Environment;
use crate::error::EvalError;
use crate::eval::apply;
use crate::value::Value;

#[builtin(name = "map")]
pub fn builtin_map(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("map", "2", args.len()));
    }
    let items = args[1]
        .to_vec()
        .map_err(|_| EvalError::type_error("map", "proper list", &args[1], 1))?;
    let mapped: Result<Vec<Value>, EvalError> = items
        .iter()
        .map(|item| apply(&args[0], &[item.clone()], env))
        .collect();
    Ok(Value::list(mapped?))
}

#[builtin(name = "filter")]
pub fn builtin_filter(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("filter", "2", args.len()));
    }
    let items = args[1]
        .to_vec()
        .map_err(|_| EvalError::type_error("filter", "proper list", &args[1], 1))?;
    let mut kept = Vec::new();
    for item in items {
        if apply(&args[0], &[item.clone()], env)?.is_truthy() {
            kept.push(item);
        }
    }
    Ok(Value::list(kept))
}

#[builtin(name = "reduce")]
pub fn builtin_reduce(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("reduce", "2", args.len()));
    }
    let items = args[1]
        .to_vec()
        .map_err(|_| EvalError::type_error("reduce", "proper list", &args[1], 1))?;
    let (first, rest) = items
        .split_first()
        .ok_or_else(|| EvalError::arity_error("reduce", "non-empty list", 0))?;
    let mut acc = first.clone();
    for item in rest {
        acc = apply(&args[0], &[acc, item.clone()], env)?;
    }
    Ok(acc)
}
