use super::core::Lexer;
use crate::{Token, TokenKind, KEYWORDS};

impl<'source> Lexer<'source> {
    /// Collects a run of letters (ASCII or Greek), digits, and `_`; the
    /// closed keyword set decides whether this is a keyword or identifier.
    pub(super) fn lex_word(&mut self) -> Token {
        let lexeme = self
            .cursor
            .eat_while(|c| c.is_alphanumeric() || c == '_')
            .to_string();
        let kind = if KEYWORDS.contains(&lexeme.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.make_token(kind, lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_set_is_recognized() {
        let tokens = Lexer::new("πρόγραμμα").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn non_keyword_word_is_an_identifier() {
        let tokens = Lexer::new("άθροισμα").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn identifiers_may_contain_underscores_and_digits() {
        let tokens = Lexer::new("a_1").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "a_1");
    }
}
