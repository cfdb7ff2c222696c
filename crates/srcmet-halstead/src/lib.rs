//! Halstead operator/operand tallies and derived metrics.
//!
//! Operators are keywords plus every operator/punctuation token; operands
//! are identifiers and literals. Comments and whitespace are excluded
//! entirely, so the two tallies partition the significant token set
//! disjointly. Tallies are keyed by exact lexeme.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use srcmet_lexer::{Token, TokenKind};
use srcmet_types::HalsteadMetrics;

/// Occurrence counts for operator and operand lexemes.
///
/// Accumulated once per call and discarded after the Halstead numbers are
/// derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorOperandTally {
    pub operators: BTreeMap<String, usize>,
    pub operands: BTreeMap<String, usize>,
}

impl OperatorOperandTally {
    /// Distinct operator lexemes (n1).
    #[must_use]
    pub fn distinct_operators(&self) -> usize {
        self.operators.len()
    }

    /// Distinct operand lexemes (n2).
    #[must_use]
    pub fn distinct_operands(&self) -> usize {
        self.operands.len()
    }

    /// Total operator occurrences (N1).
    #[must_use]
    pub fn total_operators(&self) -> usize {
        self.operators.values().sum()
    }

    /// Total operand occurrences (N2).
    #[must_use]
    pub fn total_operands(&self) -> usize {
        self.operands.values().sum()
    }
}

/// Partition significant tokens into the two tallies.
#[must_use]
pub fn tally_tokens(tokens: &[Token]) -> OperatorOperandTally {
    let mut tally = OperatorOperandTally::default();
    for token in tokens {
        let bucket = match token.kind {
            TokenKind::Comment | TokenKind::Whitespace => continue,
            TokenKind::Keyword | TokenKind::Operator | TokenKind::Punctuation => {
                &mut tally.operators
            }
            TokenKind::Identifier
            | TokenKind::NumberLiteral
            | TokenKind::StringLiteral
            | TokenKind::CharLiteral => &mut tally.operands,
        };
        *bucket.entry(token.lexeme.clone()).or_insert(0) += 1;
    }
    tally
}

/// Derive the Halstead numbers from a tally.
///
/// Volume is 0 when the vocabulary is 1 or empty (keeps the logarithm
/// finite); difficulty is 0 when there are no operands. Values are raw;
/// rounding happens at presentation time, never here.
#[must_use]
pub fn halstead_metrics(tally: &OperatorOperandTally) -> HalsteadMetrics {
    let n1 = tally.distinct_operators();
    let n2 = tally.distinct_operands();
    let total_operators = tally.total_operators();
    let total_operands = tally.total_operands();

    let vocabulary = n1 + n2;
    let length = total_operators + total_operands;

    let volume = if vocabulary > 1 {
        length as f64 * (vocabulary as f64).log2()
    } else {
        0.0
    };

    let difficulty = if n2 > 0 {
        (n1 as f64 / 2.0) * (total_operands as f64 / n2 as f64)
    } else {
        0.0
    };

    let effort = volume * difficulty;
    let time_seconds = effort / 18.0;
    let estimated_bugs = volume / 3000.0;

    HalsteadMetrics {
        distinct_operators: n1,
        distinct_operands: n2,
        total_operators,
        total_operands,
        vocabulary,
        length,
        volume,
        difficulty,
        effort,
        time_seconds,
        estimated_bugs,
    }
}

/// Tally and derive in one step.
#[must_use]
pub fn analyze_tokens(tokens: &[Token]) -> HalsteadMetrics {
    halstead_metrics(&tally_tokens(tokens))
}
