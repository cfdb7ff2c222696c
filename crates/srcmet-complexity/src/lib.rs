//! Cyclomatic complexity from decision-point tokens.
//!
//! Base complexity is 1 (one linear path) plus one per decision point.
//! Counting `if` keywords covers `else if` chains without double-counting
//! the bare `else`; counting `case` labels instead of `switch` matches one
//! added path per label; `do` is skipped because its paired `while` counts.

#![forbid(unsafe_code)]

use srcmet_lexer::{Token, TokenKind};

const DECISION_KEYWORDS: &[&str] = &["case", "catch", "for", "if", "while"];
const DECISION_OPERATORS: &[&str] = &["&&", "||", "?"];

/// Whether a single token adds an independent path.
#[must_use]
pub fn is_decision_point(token: &Token) -> bool {
    match token.kind {
        TokenKind::Keyword => DECISION_KEYWORDS.contains(&token.lexeme.as_str()),
        TokenKind::Operator => DECISION_OPERATORS.contains(&token.lexeme.as_str()),
        _ => false,
    }
}

/// Count decision-point tokens in a scanned payload.
#[must_use]
pub fn decision_points(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| is_decision_point(t)).count()
}

/// McCabe cyclomatic complexity; at least 1 for any input, including empty.
#[must_use]
pub fn cyclomatic_complexity(tokens: &[Token]) -> usize {
    1 + decision_points(tokens)
}
