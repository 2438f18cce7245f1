mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod parser;
mod repl_helper;
mod special_forms;
mod token;
mod tokenizer;
mod value;

use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser as ClapParser;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

use config::{CONTINUATION_PROMPT, PRIMARY_PROMPT, VERSION, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use env::Environment;
use eval::eval;
use parser::parse_all;
use repl_helper::LispHelper;
use value::Value;

/// Scheme-flavored Lisp interpreter.
#[derive(ClapParser, Debug)]
#[command(name = "mini-lisp")]
#[command(version = VERSION)]
#[command(about = "A Scheme-flavored Lisp interpreter with a REPL")]
struct CliArgs {
    /// Source file to evaluate; if omitted, starts the interactive REPL.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match args.file {
        Some(path) => run_file(&path),
        None => run_repl(),
    }
}

fn run_file(path: &PathBuf) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let env = Environment::new();
    builtins::register_builtins(&env);

    let exprs = match parse_all(&source) {
        Ok(exprs) => exprs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for expr in &exprs {
        if let Err(e) = eval(expr, &env) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn run_repl() -> ExitCode {
    let env = Environment::new();
    builtins::register_builtins(&env);

    println!("{}", WELCOME_MESSAGE);
    println!("{}", WELCOME_SUBTITLE);

    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl = match Editor::with_config(rl_config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error: failed to initialize REPL: {}", e);
            return ExitCode::FAILURE;
        }
    };
    rl.set_helper(Some(LispHelper::new()));

    let history_file = ".mini_lisp_history";
    let _ = rl.load_history(history_file);

    loop {
        match rl.readline(PRIMARY_PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                evaluate_logical_input(&line, &env);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
    ExitCode::SUCCESS
}

/// Evaluates every expression in one logical (possibly multi-line) input and
/// prints the last value, following the REPL's `primary prompt ... result`
/// protocol. `CONTINUATION_PROMPT` is what this crate's `Validator`
/// implementation corresponds to conceptually: the running paren balance
/// that keeps `rl.readline` collecting lines until it returns here.
fn evaluate_logical_input(line: &str, env: &Rc<Environment>) {
    let _ = CONTINUATION_PROMPT;
    let exprs = match parse_all(line) {
        Ok(exprs) => exprs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let mut last = Value::Nil;
    for expr in &exprs {
        match eval(expr, env) {
            Ok(value) => last = value,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        }
    }
    println!("{}", last);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_logical_input_prints_define_as_nil() {
        let env = Environment::new();
        builtins::register_builtins(&env);
        evaluate_logical_input("(define x 1)", &env);
        assert!(matches!(env.get("x"), Some(Value::Number(n)) if n == 1.0));
    }
}
