//! Character literal lexing.

use crate::token::Token;
use crate::Lexer;
use snlc_util::error::LexResult;

impl<'a> Lexer<'a> {
    /// Lexes a `CHARC`: `'` any-single-char `'`.
    ///
    /// Rule 1 only matches when the full three-character pattern is present
    /// starting exactly at the cursor; anything else (unterminated, empty,
    /// or multi-char) leaves the quote unmatched by any rule, so it falls
    /// through to *unknown character* at the opening quote, without
    /// consuming what follows it.
    pub fn lex_char_const(&mut self) -> LexResult<Token> {
        let snapshot = self.cursor.snapshot();

        self.cursor.advance();
        if !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            self.cursor.advance();
            if self.cursor.current_char() == '\'' {
                self.cursor.advance();
                return Ok(Token::CharConst(c));
            }
        }

        self.cursor.restore(snapshot);
        Err(self.unknown_character('\''))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_char() {
        let mut lexer = Lexer::new("'a'");
        assert_eq!(lexer.next_token().unwrap().0, Token::CharConst('a'));
    }

    #[test]
    fn digit_char() {
        let mut lexer = Lexer::new("'9'");
        assert_eq!(lexer.next_token().unwrap().0, Token::CharConst('9'));
    }

    #[test]
    fn unterminated_is_unknown_character() {
        let mut lexer = Lexer::new("'a");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn empty_quotes_is_unknown_character() {
        let mut lexer = Lexer::new("''");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn multi_char_is_unknown_character() {
        let mut lexer = Lexer::new("'ab'");
        assert!(lexer.next_token().is_err());
    }
}
