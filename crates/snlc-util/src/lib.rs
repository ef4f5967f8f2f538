//! snlc-util - shared primitives for the SNL compiler pipeline.
//!
//! Every other crate in the workspace (`snlc-lex`, `snlc-par`, `snlc-sem`,
//! `snlc-drv`) depends on this one for source locations ([`span::Span`]),
//! identifier interning ([`symbol::Symbol`], [`symbol::Interner`]), fatal
//! phase errors ([`error::LexError`], [`error::ParseError`]), diagnostic
//! collection ([`diagnostic::Handler`]) and typed-index vectors
//! ([`index_vec::IndexVec`]).

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::{LexError, LexResult, ParseError, ParseResult};
pub use index_vec::{Idx, IndexVec};
pub use span::Span;
pub use symbol::{Interner, Symbol};

pub use rustc_hash::{FxHashMap, FxHashSet};
