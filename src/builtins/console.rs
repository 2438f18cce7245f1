//! Console I/O: display, displayln, newline, print

use std::rc::Rc;

use lisp_macros::builtin;

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{display_string, Value};

/// Prints a single value; strings are printed without quotes.
#[builtin(name = "display")]
pub fn builtin_display(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("display", "1", args.len()));
    }
    print!("{}", display_string(&args[0]));
    Ok(Value::Nil)
}

/// Like `display`, with a trailing newline.
#[builtin(name = "displayln")]
pub fn builtin_displayln(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity_error("displayln", "1", args.len()));
    }
    println!("{}", display_string(&args[0]));
    Ok(Value::Nil)
}

#[builtin(name = "newline")]
pub fn builtin_newline(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    if !args.is_empty() {
        return Err(EvalError::arity_error("newline", "0", args.len()));
    }
    println!();
    Ok(Value::Nil)
}

/// Prints every argument in canonical (quoted-string) form, space-separated,
/// followed by a newline.
#[builtin(name = "print")]
pub fn builtin_print(args: &[Value], _env: &Rc<Environment>) -> Result<Value, EvalError> {
    let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Ok(Value::Nil)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Rc<Environment> {
        Environment::new()
    }

    #[test]
    fn test_display_returns_nil() {
        let e = env();
        assert!(builtin_display(&[Value::String("hi".into())], &e).unwrap().is_nil());
    }

    #[test]
    fn test_newline_rejects_args() {
        let e = env();
        assert!(builtin_newline(&[Value::Number(1.0)], &e).is_err());
    }
}
