//! Lexical scanning for srcmet.
//!
//! A single shared C-family tokenizer feeds every metric analyzer: a
//! table-driven finite scanner over a fixed keyword/operator set, with no
//! parser or semantic model behind it. The scanner is total; any byte
//! sequence produces a token stream:
//!
//! * unterminated block comments consume to end-of-input and are still
//!   reported as `Comment`
//! * unterminated string/char literals stop at end-of-line and are still
//!   reported as `StringLiteral`/`CharLiteral`
//! * bytes outside the grammar become one-character `Punctuation` tokens
//!
//! Every input character lands in exactly one token, so the concatenated
//! lexemes reproduce the source byte-for-byte.

#![forbid(unsafe_code)]

/// Lexical class of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    Whitespace,
    Identifier,
    Keyword,
    Operator,
    Punctuation,
    NumberLiteral,
    StringLiteral,
    CharLiteral,
}

impl TokenKind {
    /// Comments and whitespace carry no metric weight.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Whitespace)
    }
}

/// One classified lexeme with its starting source line (1-indexed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    /// Last source line this token touches. Only block comments and
    /// whitespace runs span more than one line.
    #[must_use]
    pub fn end_line(&self) -> usize {
        self.line + self.lexeme.matches('\n').count()
    }

    #[must_use]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

/// Tokenizer output: the ordered token sequence plus the physical line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedSource {
    pub tokens: Vec<Token>,
    pub line_count: usize,
}

/// Fixed C-family keyword table, sorted for binary search.
pub const KEYWORDS: &[&str] = &[
    "abstract",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "include",
    "instanceof",
    "int",
    "interface",
    "long",
    "namespace",
    "new",
    "override",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "struct",
    "super",
    "switch",
    "template",
    "this",
    "throw",
    "throws",
    "true",
    "try",
    "typedef",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "while",
];

// Multi-character operators, matched longest-first.
const OPERATORS_3: &[&str] = &["<<=", ">>=", "..."];
const OPERATORS_2: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "->", "::",
    "<<", ">>", "++", "--", "=>",
];

const PUNCTUATION: &[char] = &['(', ')', '{', '}', '[', ']', ';', ','];
const SINGLE_OPERATORS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~', '?', ':', '.',
];

/// Whether `word` is in the fixed keyword table.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}

/// Scan `source` into a classified token sequence.
#[must_use]
pub fn tokenize(source: &str) -> TokenizedSource {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.run();
    TokenizedSource {
        tokens,
        line_count: source.lines().count(),
    }
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Scanner {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self, lexeme: &mut String) {
        if let Some(c) = self.peek() {
            if c == '\n' {
                self.line += 1;
            }
            lexeme.push(c);
            self.pos += 1;
        }
    }

    fn run(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(c) = self.peek() {
            let line = self.line;
            let (kind, lexeme) = if c.is_whitespace() {
                self.scan_whitespace()
            } else if c == '/' && self.peek_at(1) == Some('/') {
                self.scan_line_comment()
            } else if c == '/' && self.peek_at(1) == Some('*') {
                self.scan_block_comment()
            } else if c == '"' {
                self.scan_quoted('"', TokenKind::StringLiteral)
            } else if c == '\'' {
                self.scan_quoted('\'', TokenKind::CharLiteral)
            } else if c.is_ascii_digit() {
                self.scan_number()
            } else if c == '_' || c.is_ascii_alphabetic() {
                self.scan_word()
            } else {
                self.scan_symbol()
            };
            tokens.push(Token { kind, lexeme, line });
        }
        tokens
    }

    fn scan_whitespace(&mut self) -> (TokenKind, String) {
        let mut lexeme = String::new();
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump(&mut lexeme);
        }
        (TokenKind::Whitespace, lexeme)
    }

    fn scan_line_comment(&mut self) -> (TokenKind, String) {
        let mut lexeme = String::new();
        while self.peek().is_some_and(|c| c != '\n') {
            self.bump(&mut lexeme);
        }
        (TokenKind::Comment, lexeme)
    }

    fn scan_block_comment(&mut self) -> (TokenKind, String) {
        let mut lexeme = String::new();
        self.bump(&mut lexeme); // '/'
        self.bump(&mut lexeme); // '*'
        while let Some(c) = self.peek() {
            if c == '*' && self.peek_at(1) == Some('/') {
                self.bump(&mut lexeme);
                self.bump(&mut lexeme);
                return (TokenKind::Comment, lexeme);
            }
            self.bump(&mut lexeme);
        }
        // Unterminated: the rest of the input is still one comment token.
        (TokenKind::Comment, lexeme)
    }

    fn scan_quoted(&mut self, quote: char, kind: TokenKind) -> (TokenKind, String) {
        let mut lexeme = String::new();
        self.bump(&mut lexeme); // opening quote
        while let Some(c) = self.peek() {
            if c == '\n' {
                // Unterminated: stop at end-of-line, newline stays unconsumed.
                break;
            }
            if c == '\\' {
                self.bump(&mut lexeme);
                if self.peek().is_some_and(|next| next != '\n') {
                    self.bump(&mut lexeme);
                }
                continue;
            }
            self.bump(&mut lexeme);
            if c == quote {
                break;
            }
        }
        (kind, lexeme)
    }

    fn scan_number(&mut self) -> (TokenKind, String) {
        let mut lexeme = String::new();
        self.bump(&mut lexeme);
        let is_radix_prefixed = lexeme == "0"
            && self
                .peek()
                .is_some_and(|c| matches!(c, 'x' | 'X' | 'b' | 'B' | 'o' | 'O'));
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                self.bump(&mut lexeme);
                // Exponent sign: 1e+5, 2.5E-3. Radix-prefixed literals have
                // no exponent, so 0x1E stays clear of a following '+'.
                if !is_radix_prefixed
                    && matches!(c, 'e' | 'E')
                    && self.peek().is_some_and(|s| s == '+' || s == '-')
                    && self.peek_at(1).is_some_and(|d| d.is_ascii_digit())
                {
                    self.bump(&mut lexeme);
                }
            } else {
                break;
            }
        }
        (TokenKind::NumberLiteral, lexeme)
    }

    fn scan_word(&mut self) -> (TokenKind, String) {
        let mut lexeme = String::new();
        while self
            .peek()
            .is_some_and(|c| c == '_' || c.is_ascii_alphanumeric())
        {
            self.bump(&mut lexeme);
        }
        let kind = if is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        (kind, lexeme)
    }

    fn scan_symbol(&mut self) -> (TokenKind, String) {
        // Longest match first: three chars, then two, then one.
        for table in [OPERATORS_3, OPERATORS_2] {
            let width = table[0].chars().count();
            let candidate: String = self.chars[self.pos..]
                .iter()
                .take(width)
                .collect();
            if candidate.chars().count() == width && table.contains(&candidate.as_str()) {
                let mut lexeme = String::new();
                for _ in 0..width {
                    self.bump(&mut lexeme);
                }
                return (TokenKind::Operator, lexeme);
            }
        }
        let c = self.peek().unwrap_or_default();
        let mut lexeme = String::new();
        self.bump(&mut lexeme);
        let kind = if PUNCTUATION.contains(&c) {
            TokenKind::Punctuation
        } else if SINGLE_OPERATORS.contains(&c) {
            TokenKind::Operator
        } else {
            // Anything outside the grammar degrades to punctuation.
            TokenKind::Punctuation
        };
        (kind, lexeme)
    }
}
