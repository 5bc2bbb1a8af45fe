use super::core::Lexer;
use crate::{Token, TokenKind};

impl<'source> Lexer<'source> {
    pub(super) fn lex_colon(&mut self) -> Token {
        self.cursor.bump(); // ':'
        if self.cursor.peek() == Some('=') {
            self.cursor.bump();
            self.make_token(TokenKind::Assignment, ":=".to_string())
        } else {
            self.make_token(TokenKind::Separator, ":".to_string())
        }
    }

    pub(super) fn lex_less_than(&mut self) -> Token {
        self.cursor.bump(); // '<'
        match self.cursor.peek() {
            Some('=') => {
                self.cursor.bump();
                self.make_token(TokenKind::RelationalOperator, "<=".to_string())
            }
            Some('>') => {
                self.cursor.bump();
                self.make_token(TokenKind::RelationalOperator, "<>".to_string())
            }
            _ => self.make_token(TokenKind::RelationalOperator, "<".to_string()),
        }
    }

    pub(super) fn lex_greater_than(&mut self) -> Token {
        self.cursor.bump(); // '>'
        if self.cursor.peek() == Some('=') {
            self.cursor.bump();
            self.make_token(TokenKind::RelationalOperator, ">=".to_string())
        } else {
            self.make_token(TokenKind::RelationalOperator, ">".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_equal_is_a_single_token() {
        let tokens = Lexer::new("<>").tokenize().unwrap();
        assert_eq!(tokens[0].lexeme, "<>");
        assert_eq!(tokens.len(), 2); // relop + eof
    }

    #[test]
    fn bare_less_than_when_no_lookahead_matches() {
        let tokens = Lexer::new("< a").tokenize().unwrap();
        assert_eq!(tokens[0].lexeme, "<");
    }
}
