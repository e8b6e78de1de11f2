//! Tokenizer: raw expression text → flat token stream.
//!
//! Names start with a letter or `_` and continue through letters, digits, `_`
//! and the prime mark `'` (point labels like `A''`). A name may carry an
//! immediately adjacent numeric suffix such as `C(25)` or `E(50, 30)`; any
//! other `(` is a grouping paren.

use std::fmt;

use crate::error::{AreaError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Name,
    Operator,
    OpenParen,
    CloseParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Name => "name",
            TokenKind::Operator => "op",
            TokenKind::OpenParen => "lparen",
            TokenKind::CloseParen => "rparen",
        };
        f.write_str(s)
    }
}

/// A token with its raw text and character position in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// First character of an operator or paren token.
    pub fn symbol(&self) -> char {
        self.text.chars().next().unwrap_or(' ')
    }
}

/// Operator characters recognized between operands.
pub const OPERATOR_CHARS: [char; 4] = ['&', '|', '-', '^'];

#[inline]
fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
fn is_name_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Length (in chars) of a numeric suffix `(…)` starting at `start`, or 0.
fn numeric_suffix_len(chars: &[char], start: usize) -> usize {
    if chars.get(start) != Some(&'(') {
        return 0;
    }
    let Some(close) = chars[start + 1..].iter().position(|&c| c == ')') else {
        return 0;
    };
    let body = &chars[start + 1..start + 1 + close];
    let numeric = !body.is_empty()
        && body
            .iter()
            .all(|&c| c.is_ascii_digit() || c == '.' || c == ',' || c == ' ');
    if numeric {
        close + 2
    } else {
        0
    }
}

/// Split `expr` into tokens. Fails on any character that cannot start a token.
pub fn tokenize(expr: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if OPERATOR_CHARS.contains(&c) {
            tokens.push(Token::new(TokenKind::Operator, c, i));
            i += 1;
            continue;
        }
        match c {
            '(' => {
                tokens.push(Token::new(TokenKind::OpenParen, "(", i));
                i += 1;
            }
            ')' => {
                tokens.push(Token::new(TokenKind::CloseParen, ")", i));
                i += 1;
            }
            c if is_name_start(c) => {
                let start = i;
                while i < chars.len() && is_name_continue(chars[i]) {
                    i += 1;
                }
                i += numeric_suffix_len(&chars, i);
                let text: String = chars[start..i].iter().collect();
                tokens.push(Token::new(TokenKind::Name, text, start));
            }
            other => return Err(AreaError::UnexpectedChar { ch: other, pos: i }),
        }
    }
    Ok(tokens)
}
