//! Property-based tests for the scanner using proptest.

use proptest::prelude::*;
use srcmet_lexer::{TokenKind, tokenize};

// ── strategies ───────────────────────────────────────────────────────

fn arb_snippet() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("int main() { return 0; }".to_string()),
        Just("if (a && b) { x = 1; }".to_string()),
        Just("for (i = 0; i < 10; i++) sum += i;".to_string()),
        Just("// a comment line".to_string()),
        Just("/* block */ x = \"str\";".to_string()),
        Just("char c = 'q';".to_string()),
        Just("while (n > 0) { n >>= 1; }".to_string()),
        Just("double d = 2.5e-3;".to_string()),
        "[ -~\\n\\t]{0,80}",
        ".{0,40}",
    ]
}

// ── property: totality and reconstruction ────────────────────────────

proptest! {
    #[test]
    fn prop_lexemes_reconstruct_arbitrary_input(source in arb_snippet()) {
        let scanned = tokenize(&source);
        let rebuilt: String = scanned.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        prop_assert_eq!(rebuilt, source, "every character must land in exactly one token");
    }

    #[test]
    fn prop_no_empty_lexemes(source in arb_snippet()) {
        let scanned = tokenize(&source);
        prop_assert!(scanned.tokens.iter().all(|t| !t.lexeme.is_empty()));
    }

    #[test]
    fn prop_tokenize_deterministic(source in arb_snippet()) {
        let a = tokenize(&source);
        let b = tokenize(&source);
        prop_assert_eq!(a, b);
    }
}

// ── property: line bookkeeping ───────────────────────────────────────

proptest! {
    #[test]
    fn prop_token_lines_within_line_count(source in arb_snippet()) {
        let scanned = tokenize(&source);
        for token in &scanned.tokens {
            prop_assert!(token.line >= 1);
            // A trailing newline's whitespace token starts on the last
            // physical line, so end lines may exceed line_count by at most
            // the run of terminating newlines it absorbs.
            prop_assert!(
                token.line <= scanned.line_count.max(1) + 1,
                "token on line {} but input has {} lines",
                token.line,
                scanned.line_count
            );
        }
    }

    #[test]
    fn prop_token_lines_monotonic(source in arb_snippet()) {
        let scanned = tokenize(&source);
        let mut previous = 1usize;
        for token in &scanned.tokens {
            prop_assert!(token.line >= previous);
            previous = token.line;
        }
    }
}

// ── property: classification invariants ──────────────────────────────

proptest! {
    #[test]
    fn prop_keywords_never_scan_as_identifiers(source in arb_snippet()) {
        let scanned = tokenize(&source);
        for token in &scanned.tokens {
            if token.kind == TokenKind::Identifier {
                prop_assert!(
                    !srcmet_lexer::is_keyword(&token.lexeme),
                    "{} is in the keyword table but scanned as identifier",
                    token.lexeme
                );
            }
        }
    }

    #[test]
    fn prop_whitespace_tokens_are_only_whitespace(source in arb_snippet()) {
        let scanned = tokenize(&source);
        for token in &scanned.tokens {
            if token.kind == TokenKind::Whitespace {
                prop_assert!(token.lexeme.chars().all(char::is_whitespace));
            }
        }
    }

    #[test]
    fn prop_comment_only_input_has_no_code_tokens(
        body in "[a-zA-Z0-9 ]{0,40}"
    ) {
        let source = format!("// {body}");
        let scanned = tokenize(&source);
        prop_assert!(
            scanned
                .tokens
                .iter()
                .all(|t| matches!(t.kind, TokenKind::Comment | TokenKind::Whitespace))
        );
    }
}
