//! Line classification and function counting.
//!
//! Works entirely off tokenizer output: a line is Blank when only whitespace
//! tokens touch it, CommentOnly when its only non-whitespace tokens are
//! comments, and Code otherwise. A line holding code plus a trailing comment
//! counts once, as code.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use srcmet_lexer::{Token, TokenKind};
use srcmet_types::LineCountReport;

/// Classification of one physical line. Every line gets exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    CommentOnly,
    Code,
}

/// Keywords that cannot sit in the return-type slot of a declaration.
///
/// `return foo(x)` and `new Widget(...)` would otherwise satisfy the
/// `type name (` window.
const NON_TYPE_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "continue",
    "default",
    "delete",
    "do",
    "else",
    "extends",
    "false",
    "finally",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "include",
    "instanceof",
    "namespace",
    "new",
    "package",
    "return",
    "sizeof",
    "super",
    "switch",
    "this",
    "throw",
    "throws",
    "true",
    "try",
    "typedef",
    "using",
    "while",
];

/// Tag each physical line from the tokens that touch it.
///
/// Index 0 corresponds to line 1. Multi-line tokens (block comments) mark
/// every line they span.
#[must_use]
pub fn classify_lines(tokens: &[Token], line_count: usize) -> Vec<LineClass> {
    let mut has_code = vec![false; line_count];
    let mut has_comment = vec![false; line_count];

    for token in tokens {
        if token.kind == TokenKind::Whitespace {
            continue;
        }
        let first = token.line.min(line_count.max(1));
        let last = token.end_line().min(line_count.max(1));
        for line in first..=last {
            let Some(idx) = line.checked_sub(1) else {
                continue;
            };
            if idx >= line_count {
                break;
            }
            if token.kind == TokenKind::Comment {
                has_comment[idx] = true;
            } else {
                has_code[idx] = true;
            }
        }
    }

    (0..line_count)
        .map(|idx| {
            if has_code[idx] {
                LineClass::Code
            } else if has_comment[idx] {
                LineClass::CommentOnly
            } else {
                LineClass::Blank
            }
        })
        .collect()
}

/// Count distinct function/method declarations.
///
/// A declaration is a `(type keyword | identifier) identifier '('` window
/// over the significant token stream, with `*`/`&` tolerated between type
/// and name. Best-effort by contract; deduplicated by declared name.
#[must_use]
pub fn count_functions(tokens: &[Token]) -> usize {
    let sig: Vec<&Token> = tokens.iter().filter(|t| !t.is_trivia()).collect();
    let mut names: BTreeSet<&str> = BTreeSet::new();

    for (i, token) in sig.iter().enumerate() {
        if token.kind != TokenKind::Identifier {
            continue;
        }
        if !sig.get(i + 1).is_some_and(|t| t.lexeme == "(") {
            continue;
        }
        // Walk back across pointer/reference markers to the type slot.
        let mut j = i;
        while j > 0 && matches!(sig[j - 1].lexeme.as_str(), "*" | "&") {
            j -= 1;
        }
        let Some(previous) = j.checked_sub(1).map(|p| sig[p]) else {
            continue;
        };
        let type_like = match previous.kind {
            TokenKind::Identifier => true,
            TokenKind::Keyword => !NON_TYPE_KEYWORDS.contains(&previous.lexeme.as_str()),
            _ => false,
        };
        if type_like {
            names.insert(token.lexeme.as_str());
        }
    }

    names.len()
}

/// Full per-line accounting for one payload.
#[must_use]
pub fn build_line_report(tokens: &[Token], line_count: usize) -> LineCountReport {
    let classes = classify_lines(tokens, line_count);
    let mut report = LineCountReport {
        code_lines: 0,
        comment_lines: 0,
        blank_lines: 0,
        function_count: count_functions(tokens),
    };
    for class in classes {
        match class {
            LineClass::Code => report.code_lines += 1,
            LineClass::CommentOnly => report.comment_lines += 1,
            LineClass::Blank => report.blank_lines += 1,
        }
    }
    report
}
