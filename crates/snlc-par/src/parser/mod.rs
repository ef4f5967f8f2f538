//! Recursive-descent parser, one method per grammar production, one token
//! of lookahead. No error recovery: the first mismatch returns a
//! [`snlc_util::ParseError`] through `?` and the whole parse unwinds.

pub(crate) mod core;
mod decls;
mod expr;
mod stmt;

pub use core::Parser;
