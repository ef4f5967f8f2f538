//! Expression productions: `Exp`, `SimpleExp`, `Term`, `Factor`, `Variable`,
//! `VarTail`. SNL's precedence is flat enough that a classic
//! precedence-climbing descent (one function per level) reads more plainly
//! here than a Pratt binding-power table — there are only three levels and
//! comparison never associates, so the table would buy nothing a direct
//! `Exp -> SimpleExp -> Term -> Factor` chain doesn't already give for free.

use snlc_lex::Token;
use snlc_util::ParseResult;

use crate::ast::*;
use crate::parser::core::Parser;

impl Parser {
    /// `Exp := SimpleExp [ ('<'|'=') SimpleExp ]` — at most one comparison
    /// per expression; `<`/`=` do not chain.
    pub(crate) fn parse_exp(&mut self) -> ParseResult<Expr> {
        let lhs = self.parse_simple_exp()?;
        let op = match self.current() {
            Token::Lt => BinOpKind::Lt,
            Token::Eq => BinOpKind::Eq,
            _ => return Ok(lhs),
        };
        self.advance();
        let rhs = self.parse_simple_exp()?;
        let span = lhs.span().merge(rhs.span());
        Ok(Expr::BinOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
        })
    }

    /// `SimpleExp := Term { ('+'|'-') Term }`, left-associative.
    fn parse_simple_exp(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_term()?;
        loop {
            let op = match self.current() {
                Token::Plus => BinOpKind::Add,
                Token::Minus => BinOpKind::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_term()?;
            let span = lhs.span().merge(rhs.span());
            lhs = Expr::BinOp {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }
        Ok(lhs)
    }

    /// `Term := Factor { ('*'|'/') Factor }`, left-associative.
    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_factor()?;
        loop {
            let op = match self.current() {
                Token::Star => BinOpKind::Mul,
                Token::Slash => BinOpKind::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_factor()?;
            let span = lhs.span().merge(rhs.span());
            lhs = Expr::BinOp {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }
        Ok(lhs)
    }

    /// `Factor := INTC | '(' Exp ')' | Variable`.
    fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current().clone() {
            Token::IntConst(v) => {
                let (_, span) = self.advance();
                Ok(Expr::IntConst(v as i64, span))
            }
            Token::LParen => {
                self.advance();
                let inner = self.parse_exp()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::Ident(_) => {
                let (name, span) = self.expect_ident()?;
                self.parse_var_tail(IdRef { name, span })
            }
            _ => Err(self.error("expression")),
        }
    }

    /// `Variable := ID VarTail`, `VarTail := { '[' Exp ']' | '.' ID }`.
    /// Folds left: each index/field access wraps the expression built so
    /// far, so `a[1].b[2]` nests as `ArrayAccess(FieldAccess(ArrayAccess(a,
    /// 1), b), 2)`.
    pub(crate) fn parse_var_tail(&mut self, base: IdRef) -> ParseResult<Expr> {
        let mut expr = Expr::IdRef(base);
        loop {
            if self.eat(&Token::LBracket) {
                let index = Box::new(self.parse_exp()?);
                let end = self.expect(Token::RBracket)?;
                let span = expr.span().merge(end);
                expr = Expr::ArrayAccess {
                    base: Box::new(expr),
                    index,
                    span,
                };
            } else if self.eat(&Token::Dot) {
                let (field, field_span) = self.expect_ident()?;
                let span = expr.span().merge(field_span);
                expr = Expr::FieldAccess {
                    base: Box::new(expr),
                    field,
                    field_span,
                    span,
                };
            } else {
                break;
            }
        }
        Ok(expr)
    }
}
