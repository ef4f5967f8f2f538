//! Statement productions: `StmtList`, `Stmt`, `IfStmt`, `WhileStmt`,
//! `ReadStmt`, `WriteStmt`, `AssignOrCall`.

use snlc_lex::Token;
use snlc_util::ParseResult;

use crate::ast::*;
use crate::parser::core::Parser;

impl Parser {
    /// `allow_empty` is true only for the outermost program body — every
    /// other `StmtList` (an `if`/`while`/procedure body) requires at least
    /// one statement.
    pub(crate) fn parse_stmt_list(&mut self, allow_empty: bool) -> ParseResult<StmtList> {
        if allow_empty && !starts_stmt(self.current()) {
            let span = self.current_span();
            return Ok(StmtList {
                stmts: Vec::new(),
                span,
            });
        }

        let mut stmts = vec![self.parse_stmt()?];
        while self.eat(&Token::Semi) {
            stmts.push(self.parse_stmt()?);
        }
        let span = stmts[0].span().merge(stmts.last().unwrap().span());
        Ok(StmtList { stmts, span })
    }

    fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        match self.current() {
            Token::If => self.parse_if_stmt(),
            Token::While => self.parse_while_stmt(),
            Token::Read => self.parse_read_stmt(),
            Token::Write => self.parse_write_stmt(),
            Token::Ident(_) => self.parse_assign_or_call(),
            _ => Err(self.error("statement")),
        }
    }

    fn parse_if_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Token::If)?;
        let cond = Box::new(self.parse_exp()?);
        self.expect(Token::Then)?;
        let then_branch = self.parse_stmt_list(false)?;
        let else_branch = if self.eat(&Token::Else) {
            self.parse_stmt_list(false)?
        } else {
            StmtList {
                stmts: Vec::new(),
                span: then_branch.span,
            }
        };
        let end = self.expect(Token::Fi)?;
        Ok(Stmt::If(IfStmt {
            cond,
            then_branch,
            else_branch,
            span: start.merge(end),
        }))
    }

    fn parse_while_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Token::While)?;
        let cond = Box::new(self.parse_exp()?);
        self.expect(Token::Do)?;
        let body = self.parse_stmt_list(false)?;
        let end = self.expect(Token::Endwh)?;
        Ok(Stmt::While(WhileStmt {
            cond,
            body,
            span: start.merge(end),
        }))
    }

    fn parse_read_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Token::Read)?;
        self.expect(Token::LParen)?;
        let (name, name_span) = self.expect_ident()?;
        let end = self.expect(Token::RParen)?;
        Ok(Stmt::Read(ReadStmt {
            target: IdRef {
                name,
                span: name_span,
            },
            span: start.merge(end),
        }))
    }

    fn parse_write_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.expect(Token::Write)?;
        self.expect(Token::LParen)?;
        let value = Box::new(self.parse_exp()?);
        let end = self.expect(Token::RParen)?;
        Ok(Stmt::Write(WriteStmt {
            value,
            span: start.merge(end),
        }))
    }

    /// `AssignOrCall := ID ( '(' [Exp {',' Exp}] ')' | VarTail ':=' Exp )`.
    /// One token of lookahead past the `ID` decides which production wins.
    fn parse_assign_or_call(&mut self) -> ParseResult<Stmt> {
        let (name, name_span) = self.expect_ident()?;
        if self.check(&Token::LParen) {
            self.advance();
            let mut args = Vec::new();
            if !self.check(&Token::RParen) {
                args.push(self.parse_exp()?);
                while self.eat(&Token::Comma) {
                    args.push(self.parse_exp()?);
                }
            }
            let end = self.expect(Token::RParen)?;
            Ok(Stmt::Call(CallStmt {
                name,
                name_span,
                args,
                span: name_span.merge(end),
            }))
        } else {
            let target = self.parse_var_tail(IdRef {
                name,
                span: name_span,
            })?;
            self.expect(Token::Assign)?;
            let value = Box::new(self.parse_exp()?);
            let span = name_span.merge(value.span());
            Ok(Stmt::Assign(AssignStmt {
                target,
                value,
                span,
            }))
        }
    }
}

fn starts_stmt(token: &Token) -> bool {
    matches!(
        token,
        Token::If | Token::While | Token::Read | Token::Write | Token::Ident(_)
    )
}
