// ABOUTME: Error types for evaluation failures in the Lisp interpreter

use crate::value::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EvalError {
    /// Malformed input at the tokenizer/parser stage.
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Reference to a symbol with no binding in the active environment chain.
    #[error("Undefined symbol: {0}")]
    UndefinedSymbol(String),

    /// An operator received an argument of the wrong kind.
    #[error("{function}: expected {expected}, got {actual} at argument {position}")]
    TypeMismatch {
        function: String,
        expected: String,
        actual: String,
        position: usize,
    },

    /// An operator or lambda received the wrong number of arguments.
    #[error("{function}: expected {expected} argument{plural}, got {actual}", plural = if expected == "1" { "" } else { "s" })]
    ArityMismatch {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Division/modulo by zero, or an integer-only operator given a
    /// non-integral number.
    #[error("{function}: {message}")]
    Arithmetic { function: String, message: String },

    /// The operator position of a call evaluated to something that isn't a
    /// procedure, macro, or special form.
    #[error("Not callable: {0}")]
    NotCallable(String),

    /// Raised by the `error` built-in, carrying the user-supplied message.
    #[error("{0}")]
    UserError(String),
}

impl EvalError {
    pub fn syntax(message: impl Into<String>) -> Self {
        EvalError::Syntax(message.into())
    }

    pub fn undefined_symbol(name: impl Into<String>) -> Self {
        EvalError::UndefinedSymbol(name.into())
    }

    pub fn type_error(function: &str, expected: &str, actual: &Value, position: usize) -> Self {
        EvalError::TypeMismatch {
            function: function.to_string(),
            expected: expected.to_string(),
            actual: actual.type_name().to_string(),
            position,
        }
    }

    pub fn arity_error(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        EvalError::ArityMismatch {
            function: function.to_string(),
            expected: expected.into(),
            actual,
        }
    }

    pub fn arithmetic(function: &str, message: impl Into<String>) -> Self {
        EvalError::Arithmetic {
            function: function.to_string(),
            message: message.into(),
        }
    }

    pub fn not_callable(value: &Value) -> Self {
        EvalError::NotCallable(value.to_string())
    }

    pub fn user_error(message: impl Into<String>) -> Self {
        EvalError::UserError(message.into())
    }
}
