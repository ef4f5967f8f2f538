//! Main Lexer struct and token dispatch.

use crate::cursor::Cursor;
use crate::token::Token;
use snlc_util::error::{LexError, LexResult};
use snlc_util::{Interner, Span};

/// Tokenizes one SNL source string.
///
/// Owns the [`Cursor`] and the [`Interner`] that backs every `Token::Ident`
/// it produces. A `Lexer` runs exactly once, start to `Eof` or the first
/// fatal error — there is no resumption after failure.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) interner: Interner,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            interner: Interner::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    pub fn into_interner(self) -> Interner {
        self.interner
    }

    fn start_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Produces the next token, or the fatal error that ends the run.
    pub fn next_token(&mut self) -> LexResult<(Token, Span)> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok((Token::Eof, self.start_span()));
        }

        let c = self.cursor.current_char();

        let token = match c {
            '\'' => self.lex_char_const()?,
            ':' => self.lex_colon_or_assign()?,
            '.' => self.lex_dot_or_dotdot(),
            c if c.is_ascii_digit() => self.lex_int_const(),
            c if crate::unicode::is_ident_start(c) => self.lex_identifier(),
            '+' => { self.cursor.advance(); Token::Plus }
            '-' => { self.cursor.advance(); Token::Minus }
            '*' => { self.cursor.advance(); Token::Star }
            '/' => { self.cursor.advance(); Token::Slash }
            '<' => { self.cursor.advance(); Token::Lt }
            '=' => { self.cursor.advance(); Token::Eq }
            '(' => { self.cursor.advance(); Token::LParen }
            ')' => { self.cursor.advance(); Token::RParen }
            '[' => { self.cursor.advance(); Token::LBracket }
            ']' => { self.cursor.advance(); Token::RBracket }
            ';' => { self.cursor.advance(); Token::Semi }
            ',' => { self.cursor.advance(); Token::Comma }
            other => return Err(self.unknown_character(other)),
        };

        Ok((token, self.start_span()))
    }

    pub(crate) fn unknown_character(&mut self, ch: char) -> LexError {
        let pos = self.cursor.position();
        self.cursor.advance();
        LexError::UnknownCharacter {
            ch,
            pos,
            span: self.start_span(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<(Token, Span)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok((Token::Eof, _)) => None,
            other => Some(other),
        }
    }
}
