use super::core::Lexer;
use crate::{Token, TokenKind};

impl<'source> Lexer<'source> {
    /// `{` was just peeked, not yet consumed. Consumes up to and including
    /// the matching `}` and emits a comment token whose lexeme is the inner
    /// text stripped of leading/trailing whitespace.
    pub(super) fn lex_comment(&mut self) -> Token {
        self.cursor.bump(); // '{'
        let inner = self.cursor.eat_while(|c| c != '}');
        self.cursor.bump(); // '}', if present; EOF inside a comment just stops here
        self.make_token(TokenKind::Comment, inner.trim().to_string())
    }
}
