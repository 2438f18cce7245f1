// ABOUTME: Version and REPL banner text

pub const VERSION: &str = "1.0.0";
pub const WELCOME_MESSAGE: &str = "mini-lisp REPL";
pub const WELCOME_SUBTITLE: &str = "A Scheme-flavored Lisp interpreter";

pub const PRIMARY_PROMPT: &str = ">>> ";
pub const CONTINUATION_PROMPT: &str = "... ";
