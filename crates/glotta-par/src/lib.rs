//! LL(1) recursive-descent parser: token sequence → AST.

pub mod ast;
mod cursor;
mod parser;

use glotta_lex::Token;
use glotta_util::Interner;
use thiserror::Error;

pub use ast::*;
pub use parser::Parser;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("syntax error at line {line}: {message}, got '{lexeme}'")]
pub struct ParseError {
    pub line: u32,
    pub message: String,
    pub lexeme: String,
}

/// Parse a full token sequence into a [`Program`], interning identifiers
/// and keywords into `interner` as they're consumed.
pub fn parse(tokens: &[Token], interner: &mut Interner) -> Result<Program, ParseError> {
    Parser::new(tokens, interner).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_source(src: &str) -> Result<Program, ParseError> {
        let mut interner = Interner::new();
        let tokens = glotta_lex::tokenize(src).expect("lexing should succeed");
        parse(&tokens, &mut interner)
    }

    #[test]
    fn accepts_zero_declarations_and_a_single_statement() {
        let program = parse_source(
            "πρόγραμμα t αρχή_προγράμματος γράψε 1 τέλος_προγράμματος",
        )
        .unwrap();
        assert!(program.block.declarations.is_empty());
        assert_eq!(program.block.body.len(), 1);
    }

    #[test]
    fn left_associative_addition_folds_left() {
        let program = parse_source(
            "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 1 + 2 + 3 τέλος_προγράμματος",
        )
        .unwrap();
        match &program.block.body[0] {
            ast::Stmt::Assignment { value, .. } => match value {
                ast::Expr::Binary { op: ast::BinOp::Add, left, .. } => {
                    assert!(matches!(**left, ast::Expr::Binary { op: ast::BinOp::Add, .. }));
                }
                other => panic!("expected top-level addition, got {other:?}"),
            },
            other => panic!("expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn sequence_terminator_heuristic_allows_trailing_semicolon() {
        let program = parse_source(
            "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 1; a := 2; τέλος_προγράμματος",
        )
        .unwrap();
        assert_eq!(program.block.body.len(), 2);
    }

    #[test]
    fn malformed_program_reports_syntax_error() {
        let err = parse_source("πρόγραμμα").unwrap_err();
        assert_eq!(err.message.is_empty(), false);
    }
}
