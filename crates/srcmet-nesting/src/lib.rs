//! Maximum loop-nesting depth.
//!
//! One pass over the significant tokens with a clamped brace-depth counter
//! and a stack of active loop frames. A frame opened by `for`/`while`/`do`
//! closes either at the matching `}` of its braced body or, for a braceless
//! single-statement body, at the terminating `;`. Braces that belong to
//! functions or conditionals only move the depth counter; they never open a
//! frame. Unbalanced input clamps at zero and keeps scanning.

#![forbid(unsafe_code)]

use srcmet_lexer::{Token, TokenKind};

/// How an active loop frame ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameEnd {
    /// Braced body: closes when brace depth drops below the recorded level.
    Brace(usize),
    /// Braceless single-statement body: closes at the next `;` (or an
    /// enclosing `}`).
    Statement,
}

fn is_loop_keyword(token: &Token) -> bool {
    token.kind == TokenKind::Keyword && matches!(token.lexeme.as_str(), "for" | "while" | "do")
}

/// Skip a parenthesized loop condition starting at `sig[start]`.
///
/// Returns the index of the first body token. Without parentheses (or at
/// end of input) the body starts immediately.
fn skip_condition(sig: &[&Token], start: usize) -> usize {
    if !sig.get(start).is_some_and(|t| t.lexeme == "(") {
        return start;
    }
    let mut depth = 0usize;
    let mut i = start;
    while i < sig.len() {
        match sig[i].lexeme.as_str() {
            "(" => depth += 1,
            ")" => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    sig.len()
}

/// Peak number of simultaneously active loop frames.
#[must_use]
pub fn max_loop_depth(tokens: &[Token]) -> usize {
    let sig: Vec<&Token> = tokens.iter().filter(|t| !t.is_trivia()).collect();
    let mut frames: Vec<FrameEnd> = Vec::new();
    let mut max_depth = 0usize;
    let mut brace_depth = 0usize;

    let mut i = 0;
    while i < sig.len() {
        let token = sig[i];

        if is_loop_keyword(token) {
            let body = if token.lexeme == "do" {
                i + 1
            } else {
                skip_condition(&sig, i + 1)
            };
            if sig.get(body).is_some_and(|t| t.lexeme == "{") {
                brace_depth += 1;
                frames.push(FrameEnd::Brace(brace_depth));
                max_depth = max_depth.max(frames.len());
                i = body + 1;
            } else {
                frames.push(FrameEnd::Statement);
                max_depth = max_depth.max(frames.len());
                // Re-examine the body token: it may itself open a loop.
                i = body;
            }
            continue;
        }

        match token.lexeme.as_str() {
            "{" if token.kind == TokenKind::Punctuation => brace_depth += 1,
            "}" if token.kind == TokenKind::Punctuation => {
                brace_depth = brace_depth.saturating_sub(1);
                while matches!(frames.last(), Some(FrameEnd::Brace(level)) if *level > brace_depth)
                {
                    frames.pop();
                }
                // A close brace also ends any braceless body it encloses.
                while matches!(frames.last(), Some(FrameEnd::Statement)) {
                    frames.pop();
                }
            }
            ";" if token.kind == TokenKind::Punctuation => {
                while matches!(frames.last(), Some(FrameEnd::Statement)) {
                    frames.pop();
                }
            }
            _ => {}
        }
        i += 1;
    }

    max_depth
}
