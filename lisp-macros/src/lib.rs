//! Procedural macros for mini-lisp builtin functions
//!
//! Provides the `#[builtin]` attribute macro for wiring a Rust function
//! to a Lisp-visible name without repeating `env.define(...)` at every
//! call site.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Parse `name = "..."` out of the attribute token stream.
///
/// Deliberately simple string scanning rather than a full `syn` parser for
/// the attribute grammar: the only argument this macro accepts is `name`.
fn parse_builtin_name(attr_stream: TokenStream) -> Option<String> {
    let attr_str = attr_stream.to_string();
    let start = attr_str.find("name")?;
    let rest = &attr_str[start..];
    let quote_start = rest.find('"')? + 1;
    let quote_end = rest[quote_start..].find('"')? + quote_start;
    Some(rest[quote_start..quote_end].to_string())
}

/// Attribute macro for defining a Lisp builtin procedure.
///
/// ```ignore
/// #[builtin(name = "+")]
/// pub fn builtin_add(args: &[Value], env: &Rc<Environment>) -> Result<Value, EvalError> {
///     // ...
/// }
/// ```
///
/// Expands to the function itself plus a `register_<fn_name>` function that
/// binds it into an `Environment` under its Lisp name.
#[proc_macro_attribute]
pub fn builtin(attr: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as ItemFn);

    let fn_name = func.sig.ident.clone();
    let name_to_use = parse_builtin_name(attr).unwrap_or_else(|| fn_name.to_string());
    let register_fn_name = quote::format_ident!("register_{}", fn_name);

    let expanded = quote! {
        #func

        #[allow(dead_code)]
        pub fn #register_fn_name(env: &std::rc::Rc<crate::env::Environment>) {
            env.define(
                #name_to_use.to_string(),
                crate::value::Value::BuiltinProc {
                    name: #name_to_use,
                    func: #fn_name,
                },
            );
        }
    };

    TokenStream::from(expanded)
}
