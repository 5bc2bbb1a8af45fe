use super::core::Lexer;
use crate::{Token, TokenKind};

impl<'source> Lexer<'source> {
    /// Collects a run of digits, optionally including one `.`.
    pub(super) fn lex_number(&mut self) -> Token {
        let mut seen_dot = false;
        let lexeme = self
            .cursor
            .eat_while(|c| {
                if c.is_ascii_digit() {
                    true
                } else if c == '.' && !seen_dot {
                    seen_dot = true;
                    true
                } else {
                    false
                }
            })
            .to_string();
        self.make_token(TokenKind::Number, lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literal() {
        let tokens = Lexer::new("42").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "42");
    }

    #[test]
    fn decimal_literal_takes_a_single_dot() {
        let tokens = Lexer::new("3.14").tokenize().unwrap();
        assert_eq!(tokens[0].lexeme, "3.14");
    }
}
