//! The lexer: turns a UTF-8 source string into the token sequence consumed
//! by `glotta-par`. One entry point, [`tokenize`].

pub mod cursor;
pub mod lexer;

use glotta_util::Span;
use thiserror::Error;

/// The closed set of token categories described by the data model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    ArithmeticOperator,
    RelationalOperator,
    Assignment,
    Separator,
    Grouping,
    Comment,
    ReferenceMarker,
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn is_keyword(&self, text: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == text
    }
}

/// The closed keyword set of §4.1.
pub const KEYWORDS: &[&str] = &[
    "πρόγραμμα",
    "δήλωση",
    "εάν",
    "τότε",
    "αλλιώς",
    "εάν_τέλος",
    "επανάλαβε",
    "μέχρι",
    "όσο",
    "όσο_τέλος",
    "για",
    "έως",
    "με_βήμα",
    "για_τέλος",
    "διάβασε",
    "γράψε",
    "συνάρτηση",
    "διαδικασία",
    "είσοδος",
    "έξοδος",
    "διαπροσωπεία",
    "αρχή_συνάρτησης",
    "τέλος_συνάρτησης",
    "αρχή_διαδικασίας",
    "τέλος_διαδικασίας",
    "αρχή_προγράμματος",
    "τέλος_προγράμματος",
    "ή",
    "και",
    "εκτέλεσε",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("lexical error at line {line}: unexpected character '{character}'")]
pub struct LexError {
    pub line: u32,
    pub character: char,
}

/// Tokenize `source`, producing a sequence ending in exactly one `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    lexer::Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_with_single_eof() {
        let tokens = tokenize("πρόγραμμα t αρχή_προγράμματος τέλος_προγράμματος").unwrap();
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
        assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    }

    #[test]
    fn lines_are_non_decreasing() {
        let tokens = tokenize("a\nb\nc").unwrap();
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted);
        assert!(lines.iter().all(|&l| l >= 1));
    }

    #[test]
    fn unknown_character_is_a_lexical_error() {
        let err = tokenize("a := 1 @ b").unwrap_err();
        assert_eq!(err.character, '@');
        assert_eq!(err.line, 1);
    }
}
