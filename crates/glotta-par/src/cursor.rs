use glotta_lex::{Token, TokenKind};

/// Walks the token stream, transparently skipping `Comment` tokens.
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        let mut cursor = Self { tokens, pos: 0 };
        cursor.skip_comments();
        cursor
    }

    fn skip_comments(&mut self) {
        while self.tokens[self.pos].kind == TokenKind::Comment {
            self.pos += 1;
        }
    }

    pub fn current(&self) -> &'t Token {
        &self.tokens[self.pos]
    }

    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        self.skip_comments();
    }
}
