//! Precedence-climbing parser over a token slice.
//!
//! The cursor is a plain `Copy` index threaded through the recursion: every
//! step takes a cursor and returns the subtree together with the cursor after
//! it. Operators of equal precedence associate to the left.
//!
//! Paren nesting and tree height are both capped at `max_depth`, so parsing,
//! evaluating and dropping a tree never recurse past that bound.

use super::ast::{Ast, BinOp};
use super::token::{tokenize, Token, TokenKind};
use crate::error::{AreaError, Result};

/// Default cap on paren nesting and tree height.
pub const MAX_DEPTH: usize = 256;

#[derive(Clone, Copy, Debug)]
struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
    nesting: usize,
    max_depth: usize,
}

impl<'t> Cursor<'t> {
    fn peek(self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn advance(self) -> Self {
        Self {
            pos: self.pos + 1,
            ..self
        }
    }

    fn too_deep(self) -> AreaError {
        AreaError::TooDeep {
            limit: self.max_depth,
        }
    }
}

/// Reject blank input and unbalanced parentheses before tokenizing.
pub fn validate(expr: &str) -> Result<()> {
    if expr.trim().is_empty() {
        return Err(AreaError::EmptyExpression);
    }
    let mut depth: i64 = 0;
    for c in expr.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(AreaError::UnbalancedParens);
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(AreaError::UnbalancedParens);
    }
    Ok(())
}

/// Build a tree from a complete token stream, nesting at most `max_depth`.
pub fn parse_tokens(tokens: &[Token], max_depth: usize) -> Result<Ast> {
    if tokens.is_empty() {
        return Err(AreaError::EmptyExpression);
    }
    let start = Cursor {
        tokens,
        pos: 0,
        nesting: 0,
        max_depth,
    };
    let (ast, _, rest) = parse_expr(start, 1)?;
    match rest.peek() {
        None => Ok(ast),
        Some(tok) => Err(AreaError::TrailingToken {
            token: tok.text.clone(),
            pos: tok.pos,
        }),
    }
}

/// Validate, tokenize and parse `expr` with the default depth cap.
pub fn parse(expr: &str) -> Result<Ast> {
    parse_with_depth(expr, MAX_DEPTH)
}

/// Validate, tokenize and parse `expr`, nesting at most `max_depth`.
pub fn parse_with_depth(expr: &str, max_depth: usize) -> Result<Ast> {
    validate(expr)?;
    let tokens = tokenize(expr)?;
    let ast = parse_tokens(&tokens, max_depth)?;
    tracing::trace!(
        %ast,
        tokens = tokens.len(),
        ops = ast.op_count(),
        names = ?ast.names(),
        "parsed expression"
    );
    Ok(ast)
}

/// Returns the subtree, its height (0 for a leaf) and the cursor after it.
fn parse_expr(cur: Cursor<'_>, min_prec: u8) -> Result<(Ast, usize, Cursor<'_>)> {
    let (mut left, mut height, mut cur) = parse_primary(cur)?;
    while let Some(tok) = cur.peek() {
        if tok.kind != TokenKind::Operator {
            break;
        }
        let Some(op) = BinOp::from_symbol(tok.symbol()) else {
            break;
        };
        let prec = op.precedence();
        if prec < min_prec {
            break;
        }
        let (right, right_height, next) = parse_expr(cur.advance(), prec + 1)?;
        height = 1 + height.max(right_height);
        if height > cur.max_depth {
            return Err(cur.too_deep());
        }
        left = Ast::binary(left, op, right);
        cur = next;
    }
    Ok((left, height, cur))
}

fn parse_primary(cur: Cursor<'_>) -> Result<(Ast, usize, Cursor<'_>)> {
    let Some(tok) = cur.peek() else {
        return Err(AreaError::UnexpectedEnd);
    };
    match tok.kind {
        TokenKind::Name => Ok((Ast::name(tok.text.clone()), 0, cur.advance())),
        TokenKind::OpenParen => {
            if cur.nesting >= cur.max_depth {
                return Err(cur.too_deep());
            }
            let inner = Cursor {
                nesting: cur.nesting + 1,
                ..cur.advance()
            };
            let (ast, height, after) = parse_expr(inner, 1)?;
            match after.peek() {
                Some(t) if t.kind == TokenKind::CloseParen => {
                    let out = Cursor {
                        nesting: cur.nesting,
                        ..after.advance()
                    };
                    Ok((ast, height, out))
                }
                _ => Err(AreaError::MissingCloseParen { pos: tok.pos }),
            }
        }
        TokenKind::Operator => Err(AreaError::UnexpectedOperator {
            op: tok.symbol(),
            pos: tok.pos,
        }),
        TokenKind::CloseParen => Err(AreaError::UnexpectedCloseParen { pos: tok.pos }),
    }
}
