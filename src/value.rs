// ABOUTME: Value types representing Lisp data structures and expressions

use crate::env::Environment;
use crate::error::EvalError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A cons cell. Car and cdr are individually mutable so list-building code
/// can patch a cell's tail in place instead of rebuilding the whole spine.
pub type Cell = Rc<RefCell<Value>>;

#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(String),
    Pair(Cell, Cell),
    Lambda {
        name: Option<String>,
        params: Vec<String>,
        body: Rc<Vec<Value>>,
        env: Rc<Environment>,
    },
    Macro {
        params: Vec<String>,
        body: Rc<Value>,
    },
    BuiltinProc {
        name: &'static str,
        func: fn(&[Value], &Rc<Environment>) -> Result<Value, EvalError>,
    },
}

impl Value {
    /// Build a pair out of two already-evaluated values.
    pub fn cons(car: Value, cdr: Value) -> Value {
        Value::Pair(Rc::new(RefCell::new(car)), Rc::new(RefCell::new(cdr)))
    }

    /// Build a proper list from a vector of values.
    pub fn list(items: Vec<Value>) -> Value {
        items
            .into_iter()
            .rev()
            .fold(Value::Nil, |tail, item| Value::cons(item, tail))
    }

    /// True for every value except the boolean `#f` (spec's falsity rule).
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Value::Pair(..))
    }

    /// Nil, or a Pair whose cdr chain terminates in Nil.
    pub fn is_proper_list(&self) -> bool {
        let mut current = self.clone();
        loop {
            match current {
                Value::Nil => return true,
                Value::Pair(_, cdr) => current = cdr.borrow().clone(),
                _ => return false,
            }
        }
    }

    pub fn car(&self) -> Result<Value, EvalError> {
        match self {
            Value::Pair(car, _) => Ok(car.borrow().clone()),
            other => Err(EvalError::type_error("car", "pair", other, 0)),
        }
    }

    pub fn cdr(&self) -> Result<Value, EvalError> {
        match self {
            Value::Pair(_, cdr) => Ok(cdr.borrow().clone()),
            other => Err(EvalError::type_error("cdr", "pair", other, 0)),
        }
    }

    /// Bridges a proper list Value into a Vec, for builtins that want to
    /// iterate arguments collected via `list`/`cons`/`apply`.
    pub fn to_vec(&self) -> Result<Vec<Value>, EvalError> {
        let mut items = Vec::new();
        let mut current = self.clone();
        loop {
            match current {
                Value::Nil => return Ok(items),
                Value::Pair(car, cdr) => {
                    items.push(car.borrow().clone());
                    current = cdr.borrow().clone();
                }
                other => {
                    return Err(EvalError::type_error("list operation", "proper list", &other, 0))
                }
            }
        }
    }

    /// Length of a proper list (or Nil). Errors on improper lists.
    pub fn list_len(&self) -> Result<usize, EvalError> {
        Ok(self.to_vec()?.len())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Pair(..) => "pair",
            Value::Lambda { .. } => "procedure",
            Value::Macro { .. } => "macro",
            Value::BuiltinProc { .. } => "procedure",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", if *b { "#t" } else { "#f" }),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => write_quoted_string(f, s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Pair(car, cdr) => write_pair(f, car, cdr),
            Value::Lambda { .. } => write!(f, "#<procedure>"),
            Value::Macro { .. } => write!(f, "#<macro>"),
            Value::BuiltinProc { .. } => write!(f, "#<procedure>"),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.fract() == 0.0 && n.is_finite() {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

fn write_quoted_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            other => write!(f, "{}", other)?,
        }
    }
    write!(f, "\"")
}

fn write_pair(f: &mut fmt::Formatter<'_>, car: &Cell, cdr: &Cell) -> fmt::Result {
    write!(f, "(")?;
    write!(f, "{}", car.borrow())?;
    let mut tail = cdr.borrow().clone();
    loop {
        match tail {
            Value::Nil => break,
            Value::Pair(next_car, next_cdr) => {
                write!(f, " {}", next_car.borrow())?;
                tail = next_cdr.borrow().clone();
            }
            other => {
                write!(f, " . {}", other)?;
                break;
            }
        }
    }
    write!(f, ")")
}

/// `display`/`displayln` print strings without surrounding quotes; everything
/// else uses the canonical printed form.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(format!("{}", Value::Number(42.0)), "42");
        assert_eq!(format!("{}", Value::Number(-2.5)), "-2.5");
        assert_eq!(format!("{}", Value::Number(0.0)), "0");
    }

    #[test]
    fn test_bool_display() {
        assert_eq!(format!("{}", Value::Bool(true)), "#t");
        assert_eq!(format!("{}", Value::Bool(false)), "#f");
    }

    #[test]
    fn test_nil_display() {
        assert_eq!(format!("{}", Value::Nil), "()");
    }

    #[test]
    fn test_symbol_and_string_display() {
        assert_eq!(format!("{}", Value::Symbol("foo".to_string())), "foo");
        assert_eq!(
            format!("{}", Value::String("hello".to_string())),
            "\"hello\""
        );
    }

    #[test]
    fn test_string_display_escapes() {
        let s = Value::String("say \"hi\"\\now".to_string());
        assert_eq!(format!("{}", s), "\"say \\\"hi\\\"\\\\now\"");
    }

    #[test]
    fn test_proper_list_display() {
        let list = Value::list(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ]);
        assert_eq!(format!("{}", list), "(1 2 3)");
    }

    #[test]
    fn test_nested_list_display() {
        let inner = Value::list(vec![Value::Number(2.0), Value::Number(3.0)]);
        let outer = Value::list(vec![Value::Number(1.0), inner, Value::Number(4.0)]);
        assert_eq!(format!("{}", outer), "(1 (2 3) 4)");
    }

    #[test]
    fn test_dotted_pair_display() {
        let pair = Value::cons(Value::Symbol("a".to_string()), Value::Symbol("b".to_string()));
        assert_eq!(format!("{}", pair), "(a . b)");
    }

    #[test]
    fn test_improper_list_display() {
        let list = Value::cons(
            Value::Number(1.0),
            Value::cons(Value::Number(2.0), Value::Number(3.0)),
        );
        assert_eq!(format!("{}", list), "(1 2 . 3)");
    }

    #[test]
    fn test_is_truthy() {
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
        assert!(Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
    }

    #[test]
    fn test_proper_vs_improper_list() {
        assert!(Value::Nil.is_proper_list());
        assert!(Value::list(vec![Value::Number(1.0)]).is_proper_list());
        let improper = Value::cons(Value::Number(1.0), Value::Number(2.0));
        assert!(!improper.is_proper_list());
    }

    #[test]
    fn test_to_vec_round_trip() {
        let values = vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)];
        let list = Value::list(values.clone());
        let back = list.to_vec().unwrap();
        assert_eq!(back.len(), 3);
    }
}
