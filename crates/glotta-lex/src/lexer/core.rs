use crate::cursor::Cursor;
use crate::{LexError, Token, TokenKind};
use glotta_util::Span;

pub struct Lexer<'source> {
    pub(super) cursor: Cursor<'source>,
    pub(super) token_start: usize,
    pub(super) token_start_line: u32,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();

            let Some(c) = self.cursor.peek() else {
                tokens.push(self.make_token(TokenKind::Eof, String::new()));
                break;
            };

            let token = self.next_token(c)?;
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| c.is_whitespace());
    }

    fn next_token(&mut self, c: char) -> Result<Token, LexError> {
        match c {
            '{' => Ok(self.lex_comment()),
            c if c.is_ascii_digit() => Ok(self.lex_number()),
            c if c.is_alphabetic() => Ok(self.lex_word()),
            ':' => Ok(self.lex_colon()),
            '<' => Ok(self.lex_less_than()),
            '>' => Ok(self.lex_greater_than()),
            '=' => {
                self.cursor.bump();
                Ok(self.make_token(TokenKind::RelationalOperator, "=".to_string()))
            }
            '+' | '-' | '*' | '/' => {
                self.cursor.bump();
                Ok(self.make_token(TokenKind::ArithmeticOperator, c.to_string()))
            }
            ';' | ',' => {
                self.cursor.bump();
                Ok(self.make_token(TokenKind::Separator, c.to_string()))
            }
            '(' | ')' | '[' | ']' | '"' => {
                self.cursor.bump();
                Ok(self.make_token(TokenKind::Grouping, c.to_string()))
            }
            '%' => {
                self.cursor.bump();
                Ok(self.make_token(TokenKind::ReferenceMarker, "%".to_string()))
            }
            other => {
                let line = self.cursor.line();
                self.cursor.bump();
                Err(LexError {
                    line,
                    character: other,
                })
            }
        }
    }

    pub(super) fn make_token(&self, kind: TokenKind, lexeme: String) -> Token {
        let span = Span::new(self.token_start, self.cursor.position(), self.token_start_line);
        Token {
            kind,
            lexeme,
            line: self.token_start_line,
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;

    #[test]
    fn two_char_operators_beat_their_prefix() {
        let tokens = Lexer::new("<=").tokenize().unwrap();
        assert_eq!(tokens[0].lexeme, "<=");
        assert_eq!(tokens[0].kind, TokenKind::RelationalOperator);
    }

    #[test]
    fn assignment_is_distinguished_from_colon() {
        let tokens = Lexer::new(":= :").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Assignment);
        assert_eq!(tokens[1].kind, TokenKind::Separator);
    }
}
