// ABOUTME: Special form handlers dispatched by symbol name before operator evaluation

use std::rc::Rc;

use crate::env::Environment;
use crate::error::EvalError;
use crate::eval::{eval, eval_body, expand_quasiquote};
use crate::value::Value;

pub type SpecialFormFn = fn(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError>;

/// Fixed table of special-form keywords, mirroring the reference
/// implementation's `SPECIAL_FORMS` dispatch table but expressed as a Rust
/// `match` over the enumerable keyword set.
pub fn lookup(name: &str) -> Option<SpecialFormFn> {
    match name {
        "quote" => Some(form_quote),
        "quasiquote" => Some(form_quasiquote),
        "if" => Some(form_if),
        "and" => Some(form_and),
        "or" => Some(form_or),
        "cond" => Some(form_cond),
        "begin" => Some(form_begin),
        "let" => Some(form_let),
        "lambda" => Some(form_lambda),
        "define" => Some(form_define),
        "define-macro" => Some(form_define_macro),
        _ => None,
    }
}

/// Reads a parameter list into symbol names; rejects improper lists and
/// non-symbol entries.
fn parameter_names(params: &Value) -> Result<Vec<String>, EvalError> {
    let mut names = Vec::new();
    let mut current = params.clone();
    loop {
        match current {
            Value::Nil => return Ok(names),
            Value::Pair(car, cdr) => {
                match &*car.borrow() {
                    Value::Symbol(s) => names.push(s.clone()),
                    other => {
                        return Err(EvalError::syntax(format!(
                            "parameter list must contain only symbols, found {}",
                            other.type_name()
                        )))
                    }
                }
                current = cdr.borrow().clone();
            }
            _ => {
                return Err(EvalError::syntax(
                    "parameter list must be a proper list of symbols",
                ))
            }
        }
    }
}

fn form_quote(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("quote", "1", args.len()));
    }
    Ok(args[0].clone())
}

fn form_quasiquote(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("quasiquote", "1", args.len()));
    }
    expand_quasiquote(&args[0], env)
}

fn form_if(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 2 && args.len() != 3 {
        return Err(EvalError::arity_error("if", "2-3", args.len()));
    }
    let condition = eval(&args[0], env)?;
    if condition.is_truthy() {
        eval(&args[1], env)
    } else if args.len() == 3 {
        eval(&args[2], env)
    } else {
        Ok(Value::Nil)
    }
}

fn form_and(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    let mut result = Value::Bool(true);
    for arg in args {
        result = eval(arg, env)?;
        if !result.is_truthy() {
            return Ok(Value::Bool(false));
        }
    }
    Ok(result)
}

fn form_or(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    for arg in args {
        let result = eval(arg, env)?;
        if result.is_truthy() {
            return Ok(result);
        }
    }
    Ok(Value::Bool(false))
}

fn form_cond(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    for (i, clause) in args.iter().enumerate() {
        let clause_items = clause
            .to_vec()
            .map_err(|_| EvalError::syntax("cond clause must be a proper list"))?;
        let (test, body) = clause_items
            .split_first()
            .ok_or_else(|| EvalError::syntax("cond clause must have a test"))?;

        let is_else = matches!(test, Value::Symbol(s) if s == "else");
        if is_else && i != args.len() - 1 {
            return Err(EvalError::syntax("else clause must be last in cond"));
        }

        if is_else {
            return eval_body(body, env);
        }

        let test_value = eval(test, env)?;
        if test_value.is_truthy() {
            if body.is_empty() {
                return Ok(test_value);
            }
            return eval_body(body, env);
        }
    }
    Ok(Value::Nil)
}

fn form_begin(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity_error("begin", "at least 1", 0));
    }
    eval_body(args, env)
}

fn form_let(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (bindings, body) = args
        .split_first()
        .ok_or_else(|| EvalError::arity_error("let", "at least 1", 0))?;

    let binding_forms = bindings
        .to_vec()
        .map_err(|_| EvalError::syntax("let bindings must be a proper list"))?;

    let child = Environment::with_parent(Rc::clone(env));
    for binding in &binding_forms {
        let parts = binding
            .to_vec()
            .map_err(|_| EvalError::syntax("let binding must be a (name expr) pair"))?;
        if parts.len() != 2 {
            return Err(EvalError::syntax("let binding must have exactly a name and an expression"));
        }
        let name = match &parts[0] {
            Value::Symbol(s) => s.clone(),
            other => {
                return Err(EvalError::syntax(format!(
                    "let binding name must be a symbol, found {}",
                    other.type_name()
                )))
            }
        };
        let value = eval(&parts[1], env)?;
        child.define(name, value);
    }

    eval_body(body, &child)
}

fn form_lambda(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    let (params, body) = args
        .split_first()
        .ok_or_else(|| EvalError::arity_error("lambda", "at least 1", 0))?;
    if body.is_empty() {
        return Err(EvalError::syntax("lambda body cannot be empty"));
    }
    let param_names = parameter_names(params)?;
    Ok(Value::Lambda {
        name: None,
        params: param_names,
        body: Rc::new(body.to_vec()),
        env: Rc::clone(env),
    })
}

fn form_define(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() < 2 {
        return Err(EvalError::arity_error("define", "at least 2", args.len()));
    }

    match &args[0] {
        Value::Symbol(name) => {
            if args.len() != 2 {
                return Err(EvalError::arity_error("define", "2", args.len()));
            }
            let value = eval(&args[1], env)?;
            env.define(name.clone(), value);
            Ok(Value::Nil)
        }
        Value::Pair(car, cdr) => {
            let name = match &*car.borrow() {
                Value::Symbol(s) => s.clone(),
                other => {
                    return Err(EvalError::syntax(format!(
                        "function name must be a symbol, found {}",
                        other.type_name()
                    )))
                }
            };
            let param_names = parameter_names(&cdr.borrow())?;
            let body = args[1..].to_vec();
            if body.is_empty() {
                return Err(EvalError::syntax("function body cannot be empty"));
            }
            let lambda = Value::Lambda {
                name: Some(name.clone()),
                params: param_names,
                body: Rc::new(body),
                env: Rc::clone(env),
            };
            env.define(name, lambda);
            Ok(Value::Nil)
        }
        other => Err(EvalError::syntax(format!(
            "define requires a symbol or a parameter list, found {}",
            other.type_name()
        ))),
    }
}

fn form_define_macro(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 3 {
        return Err(EvalError::arity_error("define-macro", "3", args.len()));
    }
    let name = match &args[0] {
        Value::Symbol(s) => s.clone(),
        other => {
            return Err(EvalError::syntax(format!(
                "define-macro name must be a symbol, found {}",
                other.type_name()
            )))
        }
    };
    let param_names = parameter_names(&args[1])?;
    let macro_value = Value::Macro {
        params: param_names,
        body: Rc::new(args[2].clone()),
    };
    env.define(name, macro_value);
    Ok(Value::Nil)
}
