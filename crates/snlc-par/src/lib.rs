//! snlc-par - recursive-descent parser and AST for SNL source text.
//!
//! Converts a token sequence into an AST rooted at [`ast::Program`], or
//! fails with a [`ParseFailure`] at the first mismatch between expected
//! and actual token. There is no resynchronization: one syntax error
//! aborts the whole parse.

pub mod ast;
#[cfg(test)]
mod edge_cases;
mod parser;
mod render;

pub use ast::*;
pub use parser::Parser;
pub use render::render_ast;

use snlc_util::{Interner, LexError, ParseError};
use thiserror::Error;

/// Either phase can fail before a `Program` exists; `parse` folds both
/// into one error so callers match on a single type instead of nesting
/// `Result<Result<_, ParseError>, LexError>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] ParseError),
}

/// `parse(source) → ast | LexError | ParseError` — lexes `source` in full,
/// then parses the resulting tokens into a `Program`.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn parse(source: &str) -> Result<(Program, Interner), ParseFailure> {
    let lexed = snlc_lex::lex(source)?;
    let mut parser = Parser::new(lexed.tokens);
    let program = parser.parse_program()?;
    tracing::debug!(program = %program.head.name.as_str(), "parse complete");
    Ok((program, lexed.interner))
}
