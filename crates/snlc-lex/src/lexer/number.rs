//! Integer literal lexing.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an `INTC`.
    ///
    /// Rule 5: a lone `0`, or a non-zero digit followed by more digits —
    /// there is no multi-digit literal with a leading zero, so `007` lexes
    /// as three separate `INTC` tokens.
    pub fn lex_int_const(&mut self) -> Token {
        let start = self.cursor.position();

        if self.cursor.current_char() == '0' {
            self.cursor.advance();
        } else {
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(start);
        let value = text.parse::<u64>().unwrap_or(0);
        Token::IntConst(value)
    }
}
