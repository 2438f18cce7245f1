// ABOUTME: rustyline Helper driving multi-line continuation via paren balance

use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::Helper;

/// Tracks running `(`/`)` balance outside of string literals so rustyline
/// knows when a logical input is complete. Syntax highlighting is not
/// implemented; all Highlighter methods use the default no-op behavior.
pub struct LispHelper;

impl LispHelper {
    pub fn new() -> Self {
        LispHelper
    }
}

impl Default for LispHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for LispHelper {}

impl Completer for LispHelper {
    type Candidate = String;
}

impl Hinter for LispHelper {
    type Hint = String;
}

impl Highlighter for LispHelper {}

impl Validator for LispHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        if paren_balance(ctx.input()) > 0 {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// Counts `(` minus `)`, skipping characters inside string literals so a
/// paren in a string doesn't throw off the continuation prompt.
fn paren_balance(input: &str) -> i64 {
    let mut balance = 0i64;
    let mut in_string = false;
    let mut escaped = false;
    for c in input.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
    }
    balance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_input() {
        assert_eq!(paren_balance("(+ 1 2)"), 0);
    }

    #[test]
    fn test_unbalanced_input_is_positive() {
        assert_eq!(paren_balance("(define (f x"), 2);
    }

    #[test]
    fn test_parens_inside_strings_are_ignored() {
        assert_eq!(paren_balance("(display \"(\")"), 0);
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        assert_eq!(paren_balance(r#"(display "\"(")"#), 0);
    }
}
