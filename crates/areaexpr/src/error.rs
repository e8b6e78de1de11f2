//! Typed failures for tokenizing, parsing, and drawable resolution.
//!
//! Every stage returns `Result<T, AreaError>` and propagates with `?`. Only
//! `eval::evaluate` turns an error into data (`EvaluationResult::error`).
//! Geometric edge cases (tangency, no intersection) are not errors.

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, AreaError>;

/// Coarse classification used by callers that only care where input went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed expression text.
    Syntax,
    /// Well-formed expression naming something that cannot become a region.
    Resolution,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AreaError {
    #[error("syntax error: expression must be a non-empty string")]
    EmptyExpression,

    #[error("syntax error: unbalanced parentheses in expression")]
    UnbalancedParens,

    #[error("syntax error: unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("syntax error: unexpected operator '{op}' at position {pos}")]
    UnexpectedOperator { op: char, pos: usize },

    #[error("syntax error: unexpected closing parenthesis at position {pos}")]
    UnexpectedCloseParen { pos: usize },

    #[error("syntax error: missing closing parenthesis for '(' at position {pos}")]
    MissingCloseParen { pos: usize },

    #[error("syntax error: unexpected end of expression")]
    UnexpectedEnd,

    #[error("syntax error: unexpected token '{token}' at position {pos}")]
    TrailingToken { token: String, pos: usize },

    #[error("syntax error: expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("resolution error: drawable '{name}' not found")]
    UnknownDrawable { name: String },

    #[error("resolution error: cannot convert drawable '{name}' of type '{class_name}' to a region")]
    Unconvertible { name: String, class_name: String },

    #[error("resolution error: drawable '{name}' is degenerate: {reason}")]
    Degenerate { name: String, reason: String },
}

impl AreaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AreaError::EmptyExpression
            | AreaError::UnbalancedParens
            | AreaError::UnexpectedChar { .. }
            | AreaError::UnexpectedOperator { .. }
            | AreaError::UnexpectedCloseParen { .. }
            | AreaError::MissingCloseParen { .. }
            | AreaError::UnexpectedEnd
            | AreaError::TrailingToken { .. }
            | AreaError::TooDeep { .. } => ErrorCategory::Syntax,
            AreaError::UnknownDrawable { .. }
            | AreaError::Unconvertible { .. }
            | AreaError::Degenerate { .. } => ErrorCategory::Resolution,
        }
    }

    pub(crate) fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownDrawable { name: name.into() }
    }

    pub(crate) fn degenerate(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Degenerate {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
