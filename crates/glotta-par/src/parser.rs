use crate::ast::*;
use crate::cursor::TokenCursor;
use crate::ParseError;
use glotta_lex::{Token, TokenKind};
use glotta_util::{Interner, Symbol};

/// Keywords that legitimately end an enclosing construct; seeing one of
/// these right after a `;` inside `sequence` ends the sequence instead of
/// demanding another statement.
const SEQUENCE_TERMINATORS: &[&str] = &[
    "τέλος_προγράμματος",
    "τέλος_συνάρτησης",
    "τέλος_διαδικασίας",
    "αλλιώς",
    "εάν_τέλος",
    "όσο_τέλος",
    "για_τέλος",
    "μέχρι",
];

pub struct Parser<'t> {
    cursor: TokenCursor<'t>,
    interner: &'t mut Interner,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], interner: &'t mut Interner) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            interner,
        }
    }

    fn current(&self) -> &Token {
        self.cursor.current()
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        let token = self.current();
        ParseError {
            line: token.line,
            message: message.into(),
            lexeme: token.lexeme.clone(),
        }
    }

    fn at_keyword(&self, text: &str) -> bool {
        self.current().is_keyword(text)
    }

    fn at_kind(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn eat_keyword(&mut self, text: &str) -> Result<(), ParseError> {
        if self.at_keyword(text) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.error(format!("expected '{text}'")))
        }
    }

    fn eat_lexeme(&mut self, text: &str) -> Result<(), ParseError> {
        if self.current().lexeme == text {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.error(format!("expected '{text}'")))
        }
    }

    fn eat_identifier(&mut self) -> Result<(Symbol, u32), ParseError> {
        if self.at_kind(TokenKind::Identifier) {
            let token = self.current().clone();
            self.cursor.advance();
            Ok((self.interner.intern(&token.lexeme), token.line))
        } else {
            Err(self.error("expected identifier"))
        }
    }

    // ---- program shape ----

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.eat_keyword("πρόγραμμα")?;
        let (name, line) = self.eat_identifier()?;
        let block = self.parse_block("αρχή_προγράμματος", "τέλος_προγράμματος")?;
        Ok(Program { name, line, block })
    }

    fn parse_block(&mut self, begin_kw: &str, end_kw: &str) -> Result<Block, ParseError> {
        let declarations = self.parse_declarations()?;
        let subprograms = self.parse_subprograms()?;
        self.eat_keyword(begin_kw)?;
        let body = self.parse_sequence()?;
        self.eat_keyword(end_kw)?;
        Ok(Block {
            declarations,
            subprograms,
            body,
        })
    }

    fn parse_declarations(&mut self) -> Result<Vec<Symbol>, ParseError> {
        let mut names = Vec::new();
        while self.at_keyword("δήλωση") {
            self.cursor.advance();
            names.extend(self.parse_varlist()?);
        }
        Ok(names)
    }

    fn parse_varlist(&mut self) -> Result<Vec<Symbol>, ParseError> {
        let mut names = vec![self.eat_identifier()?.0];
        while self.current().lexeme == "," {
            self.cursor.advance();
            names.push(self.eat_identifier()?.0);
        }
        Ok(names)
    }

    fn parse_subprograms(&mut self) -> Result<Vec<Subprogram>, ParseError> {
        let mut subprograms = Vec::new();
        loop {
            if self.at_keyword("συνάρτηση") {
                subprograms.push(self.parse_func()?);
            } else if self.at_keyword("διαδικασία") {
                subprograms.push(self.parse_proc()?);
            } else {
                break;
            }
        }
        Ok(subprograms)
    }

    fn parse_func(&mut self) -> Result<Subprogram, ParseError> {
        self.eat_keyword("συνάρτηση")?;
        let (name, line) = self.eat_identifier()?;
        self.eat_lexeme("(")?;
        let params = self.parse_formalparlist()?;
        self.eat_lexeme(")")?;
        self.eat_keyword("διαπροσωπεία")?;
        let input = self.parse_funcinput()?;
        let output = self.parse_funcoutput()?;
        let block = self.parse_block("αρχή_συνάρτησης", "τέλος_συνάρτησης")?;
        Ok(Subprogram {
            kind: SubprogramKind::Function,
            name,
            line,
            params,
            input,
            output,
            block,
        })
    }

    fn parse_proc(&mut self) -> Result<Subprogram, ParseError> {
        self.eat_keyword("διαδικασία")?;
        let (name, line) = self.eat_identifier()?;
        self.eat_lexeme("(")?;
        let params = self.parse_formalparlist()?;
        self.eat_lexeme(")")?;
        self.eat_keyword("διαπροσωπεία")?;
        let input = self.parse_funcinput()?;
        let output = self.parse_funcoutput()?;
        let block = self.parse_block("αρχή_διαδικασίας", "τέλος_διαδικασίας")?;
        Ok(Subprogram {
            kind: SubprogramKind::Procedure,
            name,
            line,
            params,
            input,
            output,
            block,
        })
    }

    fn parse_formalparlist(&mut self) -> Result<Vec<Symbol>, ParseError> {
        if self.at_kind(TokenKind::Identifier) {
            self.parse_varlist()
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_funcinput(&mut self) -> Result<Vec<Symbol>, ParseError> {
        if self.at_keyword("είσοδος") {
            self.cursor.advance();
            self.parse_varlist()
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_funcoutput(&mut self) -> Result<Vec<Symbol>, ParseError> {
        if self.at_keyword("έξοδος") {
            self.cursor.advance();
            self.parse_varlist()
        } else {
            Ok(Vec::new())
        }
    }

    // ---- statements ----

    fn parse_sequence(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = vec![self.parse_statement()?];
        while self.current().lexeme == ";" {
            self.cursor.advance();
            if SEQUENCE_TERMINATORS.contains(&self.current().lexeme.as_str())
                && self.at_kind(TokenKind::Keyword)
            {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.at_kind(TokenKind::Identifier) {
            self.parse_assignment()
        } else if self.at_keyword("εάν") {
            self.parse_if()
        } else if self.at_keyword("όσο") {
            self.parse_while()
        } else if self.at_keyword("επανάλαβε") {
            self.parse_do()
        } else if self.at_keyword("για") {
            self.parse_for()
        } else if self.at_keyword("διάβασε") {
            self.parse_input()
        } else if self.at_keyword("γράψε") {
            self.parse_print()
        } else if self.at_keyword("εκτέλεσε") {
            self.parse_call()
        } else {
            Err(self.error("expected statement"))
        }
    }

    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let (target, line) = self.eat_identifier()?;
        self.eat_lexeme(":=")?;
        let value = self.parse_expression()?;
        Ok(Stmt::Assignment { target, value, line })
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current().line;
        self.eat_keyword("εάν")?;
        let condition = self.parse_condition()?;
        self.eat_keyword("τότε")?;
        let then_branch = self.parse_sequence()?;
        let else_branch = if self.at_keyword("αλλιώς") {
            self.cursor.advance();
            Some(self.parse_sequence()?)
        } else {
            None
        };
        self.eat_keyword("εάν_τέλος")?;
        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
            line,
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current().line;
        self.eat_keyword("όσο")?;
        let condition = self.parse_condition()?;
        self.eat_keyword("επανάλαβε")?;
        let body = self.parse_sequence()?;
        self.eat_keyword("όσο_τέλος")?;
        Ok(Stmt::While { condition, body, line })
    }

    fn parse_do(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current().line;
        self.eat_keyword("επανάλαβε")?;
        let body = self.parse_sequence()?;
        self.eat_keyword("μέχρι")?;
        let condition = self.parse_condition()?;
        Ok(Stmt::DoUntil { body, condition, line })
    }

    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current().line;
        self.eat_keyword("για")?;
        let (var, _) = self.eat_identifier()?;
        self.eat_lexeme(":=")?;
        let start = self.parse_expression()?;
        self.eat_keyword("έως")?;
        let end = self.parse_expression()?;
        let step = self.parse_step()?;
        self.eat_keyword("επανάλαβε")?;
        let body = self.parse_sequence()?;
        self.eat_keyword("για_τέλος")?;
        Ok(Stmt::For {
            var,
            start,
            end,
            step,
            body,
            line,
        })
    }

    fn parse_step(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.at_keyword("με_βήμα") {
            self.cursor.advance();
            Ok(Some(self.parse_expression()?))
        } else {
            Ok(None)
        }
    }

    fn parse_input(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current().line;
        self.eat_keyword("διάβασε")?;
        let (target, _) = self.eat_identifier()?;
        Ok(Stmt::Input { target, line })
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current().line;
        self.eat_keyword("γράψε")?;
        let value = self.parse_expression()?;
        Ok(Stmt::Print { value, line })
    }

    fn parse_call(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current().line;
        self.eat_keyword("εκτέλεσε")?;
        let (name, _) = self.eat_identifier()?;
        let args = self.parse_idtail()?.unwrap_or_default();
        Ok(Stmt::Call { name, args, line })
    }

    /// `idtail := '(' actualparlist ')' | ε`. Returns `None` when no
    /// parenthesized argument list was present at all (a bare identifier),
    /// distinct from `Some(vec![])` (a call with zero arguments, `f()`).
    fn parse_idtail(&mut self) -> Result<Option<Vec<Argument>>, ParseError> {
        if self.current().lexeme == "(" {
            self.cursor.advance();
            let args = self.parse_actualparlist()?;
            self.eat_lexeme(")")?;
            Ok(Some(args))
        } else {
            Ok(None)
        }
    }

    fn parse_actualparlist(&mut self) -> Result<Vec<Argument>, ParseError> {
        let mut args = Vec::new();
        if self.current().lexeme != ")" {
            args.push(self.parse_actualparitem()?);
            while self.current().lexeme == "," {
                self.cursor.advance();
                args.push(self.parse_actualparitem()?);
            }
        }
        Ok(args)
    }

    fn parse_actualparitem(&mut self) -> Result<Argument, ParseError> {
        if self.current().lexeme == "%" {
            self.cursor.advance();
            let (name, _) = self.eat_identifier()?;
            Ok(Argument::Reference(name))
        } else {
            Ok(Argument::Value(self.parse_expression()?))
        }
    }

    // ---- conditions ----

    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        let mut cond = self.parse_boolterm()?;
        while self.at_keyword("ή") {
            self.cursor.advance();
            let rhs = self.parse_boolterm()?;
            cond = Condition::Or(Box::new(cond), Box::new(rhs));
        }
        Ok(cond)
    }

    fn parse_boolterm(&mut self) -> Result<Condition, ParseError> {
        let mut cond = self.parse_boolfactor()?;
        while self.at_keyword("και") {
            self.cursor.advance();
            let rhs = self.parse_boolfactor()?;
            cond = Condition::And(Box::new(cond), Box::new(rhs));
        }
        Ok(cond)
    }

    fn parse_boolfactor(&mut self) -> Result<Condition, ParseError> {
        if self.at_keyword("όχι") {
            self.cursor.advance();
            self.eat_lexeme("[")?;
            let inner = self.parse_condition()?;
            self.eat_lexeme("]")?;
            Ok(Condition::Not(Box::new(inner)))
        } else if self.current().lexeme == "[" {
            self.cursor.advance();
            let inner = self.parse_condition()?;
            self.eat_lexeme("]")?;
            Ok(inner)
        } else {
            let left = self.parse_expression()?;
            let line = left.line();
            let op = self.parse_relational_oper()?;
            let right = self.parse_expression()?;
            Ok(Condition::Compare { op, left, right, line })
        }
    }

    fn parse_relational_oper(&mut self) -> Result<RelOp, ParseError> {
        if !self.at_kind(TokenKind::RelationalOperator) {
            return Err(self.error("expected relational operator"));
        }
        let op = match self.current().lexeme.as_str() {
            "<" => RelOp::Lt,
            "<=" => RelOp::Le,
            ">" => RelOp::Gt,
            ">=" => RelOp::Ge,
            "=" => RelOp::Eq,
            "<>" => RelOp::Ne,
            other => return Err(self.error(format!("unknown relational operator '{other}'"))),
        };
        self.cursor.advance();
        Ok(op)
    }

    // ---- expressions ----

    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let sign = self.parse_optional_sign();
        let line = self.current().line;
        let mut expr = self.parse_term()?;
        if let Some(Sign::Minus) = sign {
            expr = Expr::Negate {
                operand: Box::new(expr),
                line,
            };
        }
        while matches!(self.current().lexeme.as_str(), "+" | "-")
            && self.at_kind(TokenKind::ArithmeticOperator)
        {
            let op = if self.current().lexeme == "+" {
                BinOp::Add
            } else {
                BinOp::Sub
            };
            let op_line = self.current().line;
            self.cursor.advance();
            let rhs = self.parse_term()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(rhs),
                line: op_line,
            };
        }
        Ok(expr)
    }

    fn parse_optional_sign(&mut self) -> Option<Sign> {
        if self.at_kind(TokenKind::ArithmeticOperator) && self.current().lexeme == "+" {
            self.cursor.advance();
            Some(Sign::Plus)
        } else if self.at_kind(TokenKind::ArithmeticOperator) && self.current().lexeme == "-" {
            self.cursor.advance();
            Some(Sign::Minus)
        } else {
            None
        }
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_factor()?;
        while matches!(self.current().lexeme.as_str(), "*" | "/")
            && self.at_kind(TokenKind::ArithmeticOperator)
        {
            let op = if self.current().lexeme == "*" {
                BinOp::Mul
            } else {
                BinOp::Div
            };
            let op_line = self.current().line;
            self.cursor.advance();
            let rhs = self.parse_factor()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(rhs),
                line: op_line,
            };
        }
        Ok(expr)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        if self.at_kind(TokenKind::Number) {
            let token = self.current().clone();
            self.cursor.advance();
            Ok(Expr::Number {
                lexeme: token.lexeme,
                line: token.line,
            })
        } else if self.current().lexeme == "(" {
            self.cursor.advance();
            let expr = self.parse_expression()?;
            self.eat_lexeme(")")?;
            Ok(expr)
        } else if self.at_kind(TokenKind::Identifier) {
            let (name, line) = self.eat_identifier()?;
            match self.parse_idtail()? {
                Some(args) => Ok(Expr::Call { name, args, line }),
                None => Ok(Expr::Identifier { name, line }),
            }
        } else {
            Err(self.error("expected factor"))
        }
    }
}
