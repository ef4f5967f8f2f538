//! Whitespace and comment skipping.
//!
//! SNL comments are `{ ... }`, do not nest, and an unterminated one is
//! fatal — citing the position where the `{` itself started, not where
//! end-of-source was reached.

use crate::Lexer;
use snlc_util::error::{LexError, LexResult};
use snlc_util::Span;

impl<'a> Lexer<'a> {
    pub fn skip_whitespace_and_comments(&mut self) -> LexResult<()> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }

            match self.cursor.current_char() {
                c if c.is_whitespace() => {
                    self.cursor.advance();
                }
                '{' => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> LexResult<()> {
        let start = self.cursor.position();
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();

        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnclosedComment {
                    start,
                    span: Span::new(start, self.cursor.position(), start_line, start_column),
                });
            }
            if self.cursor.current_char() == '}' {
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }
}
