// ABOUTME: Evaluator module dispatching on value shape: symbols, self-evaluating atoms,
// ABOUTME: special forms, macro expansion, and procedure application

use std::rc::Rc;

use crate::env::Environment;
use crate::error::EvalError;
use crate::special_forms;
use crate::value::Value;

/// Evaluates a single expression in the given environment.
pub fn eval(expr: &Value, env: &Rc<Environment>) -> Result<Value, EvalError> {
    match expr {
        Value::Number(_) | Value::Bool(_) | Value::String(_) => Ok(expr.clone()),
        Value::Lambda { .. } | Value::Macro { .. } | Value::BuiltinProc { .. } => {
            Ok(expr.clone())
        }
        Value::Nil => Ok(Value::Nil),
        Value::Symbol(name) => env
            .get(name)
            .ok_or_else(|| EvalError::undefined_symbol(name.clone())),
        Value::Pair(..) => eval_application(expr, env),
    }
}

/// Evaluates `(op arg1 arg2 ...)`.
fn eval_application(expr: &Value, env: &Rc<Environment>) -> Result<Value, EvalError> {
    let items = expr
        .to_vec()
        .map_err(|_| EvalError::syntax("improper application form"))?;
    let (op_expr, arg_exprs) = items
        .split_first()
        .ok_or_else(|| EvalError::syntax("cannot evaluate empty application"))?;

    if let Value::Symbol(name) = op_expr {
        if let Some(handler) = special_forms::lookup(name) {
            return handler(arg_exprs, env);
        }
    }

    let op = eval(op_expr, env)?;

    if let Value::Macro { params, body } = &op {
        let expansion_env = Environment::with_parent(Rc::clone(env));
        bind_macro_params(params, arg_exprs, &expansion_env)?;
        let expansion = eval(&body, &expansion_env)?;
        return eval(&expansion, env);
    }

    let args = eval_list(arg_exprs, env)?;
    apply(&op, &args, env)
}

fn bind_macro_params(
    params: &[String],
    arg_exprs: &[Value],
    env: &Rc<Environment>,
) -> Result<(), EvalError> {
    if params.len() != arg_exprs.len() {
        return Err(EvalError::arity_error(
            "macro",
            params.len().to_string(),
            arg_exprs.len(),
        ));
    }
    for (param, arg_expr) in params.iter().zip(arg_exprs) {
        env.define(param.clone(), arg_expr.clone());
    }
    Ok(())
}

/// Evaluates a proper list of argument expressions left-to-right.
pub fn eval_list(exprs: &[Value], env: &Rc<Environment>) -> Result<Vec<Value>, EvalError> {
    exprs.iter().map(|e| eval(e, env)).collect()
}

/// Evaluates a body of expressions in order, returning the last value.
pub fn eval_body(exprs: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    let mut result = Value::Nil;
    for expr in exprs {
        result = eval(expr, env)?;
    }
    Ok(result)
}

/// Applies a procedure to already-evaluated arguments. `caller_env` is the
/// environment the call is happening in; built-ins that need to re-enter the
/// evaluator (`eval`, `apply`) evaluate in it. Lambdas ignore it and build
/// their call frame on their own captured environment instead.
pub fn apply(proc: &Value, args: &[Value], caller_env: &Rc<Environment>) -> Result<Value, EvalError> {
    match proc {
        Value::BuiltinProc { func, .. } => func(args, caller_env),
        Value::Lambda {
            params, body, env, ..
        } => {
            if params.len() != args.len() {
                return Err(EvalError::arity_error(
                    "lambda",
                    params.len().to_string(),
                    args.len(),
                ));
            }
            let call_env = Environment::with_parent(Rc::clone(env));
            for (param, arg) in params.iter().zip(args) {
                call_env.define(param.clone(), arg.clone());
            }
            if body.is_empty() {
                return Ok(Value::Nil);
            }
            eval_body(body, &call_env)
        }
        other => Err(EvalError::not_callable(other)),
    }
}

/// Structural expansion of a quasiquote template: atoms pass through
/// unchanged, `(unquote x)` evaluates `x`, everything else recurses over
/// car/cdr. No splicing.
pub fn expand_quasiquote(template: &Value, env: &Rc<Environment>) -> Result<Value, EvalError> {
    match template {
        Value::Pair(car, cdr) => {
            if let Value::Symbol(s) = &*car.borrow() {
                if s == "unquote" {
                    let rest = cdr.borrow().to_vec().map_err(|_| {
                        EvalError::syntax("unquote requires a single expression")
                    })?;
                    if rest.len() != 1 {
                        return Err(EvalError::arity_error("unquote", "1", rest.len()));
                    }
                    return eval(&rest[0], env);
                }
            }
            let new_car = expand_quasiquote(&car.borrow(), env)?;
            let new_cdr = expand_quasiquote(&cdr.borrow(), env)?;
            Ok(Value::cons(new_car, new_cdr))
        }
        other => Ok(other.clone()),
    }
}
