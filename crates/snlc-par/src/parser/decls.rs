//! Program structure and declaration productions: `Program`, `TypeDecls`,
//! `VarDecls`, `ProcDecl`, `ParamList`, `TypeName`, `IdList`.

use snlc_lex::Token;
use snlc_util::{ParseResult, Span, Symbol};

use crate::ast::*;
use crate::parser::core::Parser;

impl Parser {
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let start = self.expect(Token::Program)?;
        let (name, name_span) = self.expect_ident()?;
        let head = ProgHead {
            name,
            span: name_span,
        };

        let type_decls = if self.check(&Token::Type) {
            Some(self.parse_type_decls()?)
        } else {
            None
        };
        let var_decls = if self.check(&Token::Var) {
            Some(self.parse_var_decls()?)
        } else {
            None
        };

        let mut proc_decls = Vec::new();
        while self.check(&Token::Procedure) {
            proc_decls.push(self.parse_proc_decl()?);
        }

        let body = self.parse_body(true)?;
        let end = self.expect(Token::Dot)?;
        self.expect(Token::Eof)?;

        Ok(Program {
            head,
            type_decls,
            var_decls,
            proc_decls,
            body,
            span: start.merge(end),
        })
    }

    pub(crate) fn expect_ident(&mut self) -> ParseResult<(Symbol, Span)> {
        match self.current().clone() {
            Token::Ident(sym) => {
                let (_, span) = self.advance();
                Ok((sym, span))
            }
            _ => Err(self.error("ID")),
        }
    }

    fn parse_id_list(&mut self) -> ParseResult<Vec<(Symbol, Span)>> {
        let mut names = vec![self.expect_ident()?];
        while self.eat(&Token::Comma) {
            names.push(self.expect_ident()?);
        }
        Ok(names)
    }

    fn parse_type_decls(&mut self) -> ParseResult<TypeDecls> {
        let start = self.expect(Token::Type)?;
        let mut decls = Vec::new();
        while matches!(self.current(), Token::Ident(_)) {
            let (name, name_span) = self.expect_ident()?;
            self.expect(Token::Eq)?;
            let ty = self.parse_type_name()?;
            let end = self.expect(Token::Semi)?;
            decls.push(Decl {
                mode: None,
                ty,
                span: name_span.merge(end),
                names: vec![(name, name_span)],
            });
        }
        let span = decls
            .last()
            .map(|d| start.merge(d.span))
            .unwrap_or(start);
        Ok(TypeDecls { decls, span })
    }

    fn parse_var_decls(&mut self) -> ParseResult<VarDecls> {
        let start = self.expect(Token::Var)?;
        let mut groups = Vec::new();
        while starts_type_name(self.current()) {
            groups.push(self.parse_decl_group(None)?);
            self.expect(Token::Semi)?;
        }
        let span = groups
            .last()
            .map(|d| start.merge(d.span))
            .unwrap_or(start);
        Ok(VarDecls { groups, span })
    }

    /// `TypeName IdList`, optionally preceded by a `var` mode keyword for
    /// parameter groups; shared by `VarDecls`, record fields, and
    /// `ParamGroup`.
    fn parse_decl_group(&mut self, mode: Option<ParamMode>) -> ParseResult<Decl> {
        let ty = self.parse_type_name()?;
        let names = self.parse_id_list()?;
        let span = names
            .last()
            .map(|(_, s)| ty.span().merge(*s))
            .unwrap_or_else(|| ty.span());
        Ok(Decl {
            mode,
            ty,
            names,
            span,
        })
    }

    pub(crate) fn parse_type_name(&mut self) -> ParseResult<TypeName> {
        match self.current().clone() {
            Token::Integer => {
                let (_, span) = self.advance();
                Ok(TypeName::Integer(span))
            }
            Token::Char => {
                let (_, span) = self.advance();
                Ok(TypeName::Char(span))
            }
            Token::Ident(sym) => {
                let (_, span) = self.advance();
                Ok(TypeName::Named(sym, span))
            }
            Token::Array => self.parse_array_type(),
            Token::Record => self.parse_record_type(),
            _ => Err(self.error("type name")),
        }
    }

    fn parse_array_type(&mut self) -> ParseResult<TypeName> {
        let start = self.expect(Token::Array)?;
        self.expect(Token::LBracket)?;
        let low = self.expect_int_const()?;
        self.expect(Token::DotDot)?;
        let high = self.expect_int_const()?;
        self.expect(Token::RBracket)?;
        self.expect(Token::Of)?;
        let elem = self.parse_type_name()?;
        let span = start.merge(elem.span());
        Ok(TypeName::Array {
            low,
            high,
            elem: Box::new(elem),
            span,
        })
    }

    fn expect_int_const(&mut self) -> ParseResult<i64> {
        match self.current().clone() {
            Token::IntConst(v) => {
                self.advance();
                Ok(v as i64)
            }
            _ => Err(self.error("INTC")),
        }
    }

    fn parse_record_type(&mut self) -> ParseResult<TypeName> {
        let start = self.expect(Token::Record)?;
        let mut fields = Vec::new();
        while starts_type_name(self.current()) {
            fields.push(self.parse_decl_group(None)?);
            self.expect(Token::Semi)?;
        }
        let end = self.expect(Token::End)?;
        Ok(TypeName::Record {
            fields,
            span: start.merge(end),
        })
    }

    fn parse_proc_decl(&mut self) -> ParseResult<ProcDecl> {
        let start = self.expect(Token::Procedure)?;
        let (name, name_span) = self.expect_ident()?;
        self.expect(Token::LParen)?;
        let params = if self.check(&Token::RParen) {
            None
        } else {
            Some(self.parse_param_list()?)
        };
        self.expect(Token::RParen)?;
        self.expect(Token::Semi)?;

        let type_decls = if self.check(&Token::Type) {
            Some(self.parse_type_decls()?)
        } else {
            None
        };
        let var_decls = if self.check(&Token::Var) {
            Some(self.parse_var_decls()?)
        } else {
            None
        };
        let body = self.parse_body(false)?;

        Ok(ProcDecl {
            name,
            name_span,
            params,
            type_decls,
            var_decls,
            span: start.merge(body.span),
            body,
        })
    }

    fn parse_param_list(&mut self) -> ParseResult<ParamList> {
        let mut groups = vec![self.parse_param_group()?];
        while self.eat(&Token::Semi) {
            groups.push(self.parse_param_group()?);
        }
        let span = groups
            .first()
            .unwrap()
            .span
            .merge(groups.last().unwrap().span);
        Ok(ParamList { groups, span })
    }

    fn parse_param_group(&mut self) -> ParseResult<Decl> {
        let mode = if self.eat(&Token::Var) {
            ParamMode::Var
        } else {
            ParamMode::Value
        };
        self.parse_decl_group(Some(mode))
    }

    /// `Body := 'begin' StmtList 'end'`. Only the outermost program body
    /// (`is_outermost`) may hold an empty `StmtList`.
    pub(crate) fn parse_body(&mut self, is_outermost: bool) -> ParseResult<StmtList> {
        let start = self.expect(Token::Begin)?;
        let stmt_list = self.parse_stmt_list(is_outermost)?;
        let end = self.expect(Token::End)?;
        Ok(StmtList {
            span: start.merge(end),
            ..stmt_list
        })
    }
}

pub(crate) fn starts_type_name(token: &Token) -> bool {
    matches!(
        token,
        Token::Integer | Token::Char | Token::Ident(_) | Token::Array | Token::Record
    )
}
