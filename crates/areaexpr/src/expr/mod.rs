//! Expression front end: text → tokens → tree.
//!
//! Grammar (lowest to highest binding):
//! - `expr := term (('|' | '^') term)*`
//! - `term := primary (('&' | '-') primary)*`
//! - `primary := NAME | '(' expr ')'`

mod ast;
mod parser;
mod token;

pub use ast::{Ast, BinOp};
pub use parser::{parse, parse_tokens, parse_with_depth, validate, MAX_DEPTH};
pub use token::{tokenize, Token, TokenKind, OPERATOR_CHARS};
