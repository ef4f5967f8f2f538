//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, folding it to a keyword token if it matches one.
    ///
    /// Rule 4: a letter followed by letters/digits.
    pub fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        keyword_from_ident(text).unwrap_or_else(|| Token::Ident(self.interner.intern(text)))
    }
}
