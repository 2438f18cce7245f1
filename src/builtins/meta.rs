//! Meta operations: exit, error, eval, apply

use std::process;
use std::rc::Rc;

use lisp_macros::builtin;

use crate::env::Environment;
use crate::error::EvalError;
use crate::eval::apply as apply_procedure;
use crate::eval::eval as eval_expr;
use crate::value::Value;

#[builtin(name = "exit")]
pub fn builtin_exit(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() > 1 {
        return Err(EvalError::arity_error("exit", "0-1", args.len()));
    }
    let code = match args.first() {
        None => 0,
        Some(Value::Number(n)) if n.trunc() == *n => *n as i32,
        Some(other) => return Err(EvalError::type_error("exit", "integer", other, 0)),
    };
    process::exit(code);
}

/// Raises an interpreter error carrying the user-supplied numeric code as
/// text. An omitted code defaults to `0`, mirroring `exit`'s optional arg.
#[builtin(name = "error")]
pub fn builtin_error(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() > 1 {
        return Err(EvalError::arity_error("error", "0-1", args.len()));
    }
    let code = match args.first() {
        None => 0,
        Some(Value::Number(n)) if n.trunc() == *n => *n as i64,
        Some(other) => return Err(EvalError::type_error("error", "integer", other, 0)),
    };
    Err(EvalError::user_error(code.to_string()))
}

#[builtin(name = "eval")]
pub fn builtin_eval(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("eval", "1", args.len()));
    }
    eval_expr(&args[0], env)
}

#[builtin(name = "apply")]
pub fn builtin_apply(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity_error("apply", "2", args.len()));
    }
    if matches!(&args[0], Value::Macro { .. }) {
        return Err(EvalError::not_callable(&args[0]));
    }
    let call_args = args[1]
        .to_vec()
        .map_err(|_| EvalError::type_error("apply", "proper list", &args[1], 1))?;
    apply_procedure(&args[0], &call_args, env)
}
