//! Diagnostic collection for the fatal lex/parse phases.
//!
//! `Handler` is a plain accumulator used to surface the single fatal
//! [`LexError`](crate::error::LexError)/[`ParseError`](crate::error::ParseError)
//! that aborts its phase. The non-fatal semantic errors described in
//! SPEC_FULL §7 are deliberately *not* routed through here: the analyzer
//! keeps running after a violation, so a plain `Vec<String>` owned by the
//! analyzer is the right shape for that (see `snlc-sem`), not a `Diagnostic`
//! catalogue built for exceptional, process-aborting conditions.

use crate::span::Span;
use std::fmt;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message with severity and location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }
}

/// Collects diagnostics over the lifetime of one phase.
#[derive(Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn handler_tracks_error_count() {
        let mut handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit(Diagnostic::error("bad token", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn handler_ignores_warnings_for_has_errors() {
        let mut handler = Handler::new();
        handler.emit(Diagnostic::warning("unused", Span::DUMMY));
        assert!(!handler.has_errors());
        assert_eq!(handler.diagnostics().len(), 1);
    }
}
