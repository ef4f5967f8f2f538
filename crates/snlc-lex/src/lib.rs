//! snlc-lex - lexical analysis for SNL source text.
//!
//! Converts a source string into an ordered token sequence terminated by a
//! single [`Token::Eof`], folding keywords and collapsing `{...}` comments
//! along the way. The first unrecognized character or unclosed comment
//! aborts the run immediately — there is no error recovery at this phase.

mod cursor;
#[cfg(test)]
mod edge_cases;
mod lexer;
mod token;
mod unicode;

pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token};

use snlc_util::error::{LexError, LexResult};
use snlc_util::{Interner, Span};

/// The tokens-only view over one source string (§6 entry point `lex`).
pub struct LexOutput {
    pub tokens: Vec<(Token, Span)>,
    pub interner: Interner,
}

/// Tokenizes `source` in full, or stops at the first fatal lexical error.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn lex(source: &str) -> LexResult<LexOutput> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let (token, span) = lexer.next_token()?;
        let is_eof = token == Token::Eof;
        tokens.push((token, span));
        if is_eof {
            break;
        }
    }

    tracing::debug!(token_count = tokens.len(), "lex complete");
    Ok(LexOutput {
        tokens,
        interner: lexer.into_interner(),
    })
}

/// Renders a token stream in the fixed `(KIND, LEXEME)` textual form, one
/// token per line, independent of the `Interner` (lexemes are recovered
/// from `source` rather than resolved symbols, so this also covers tokens
/// emitted before a failure).
pub fn render_tokens(tokens: &[(Token, Span)], source: &str) -> String {
    let mut out = String::new();
    for (token, span) in tokens {
        let kind = token_kind_name(token);
        let lexeme = token_lexeme(token, span, source);
        out.push_str(&format!("({}, {})\n", kind, lexeme));
    }
    out
}

fn token_kind_name(token: &Token) -> &'static str {
    match token {
        Token::Program => "program",
        Token::Type => "type",
        Token::Var => "var",
        Token::Procedure => "procedure",
        Token::Begin => "begin",
        Token::End => "end",
        Token::If => "if",
        Token::Then => "then",
        Token::Else => "else",
        Token::Fi => "fi",
        Token::While => "while",
        Token::Do => "do",
        Token::Endwh => "endwh",
        Token::Read => "read",
        Token::Write => "write",
        Token::Integer => "integer",
        Token::Char => "char",
        Token::Array => "array",
        Token::Record => "record",
        Token::Of => "of",
        Token::Ident(_) => "ID",
        Token::IntConst(_) => "INTC",
        Token::CharConst(_) => "CHARC",
        Token::Plus => "+",
        Token::Minus => "-",
        Token::Star => "*",
        Token::Slash => "/",
        Token::Lt => "<",
        Token::Eq => "=",
        Token::LParen => "(",
        Token::RParen => ")",
        Token::LBracket => "[",
        Token::RBracket => "]",
        Token::Dot => ".",
        Token::Semi => ";",
        Token::Comma => ",",
        Token::Assign => ":=",
        Token::DotDot => "..",
        Token::Eof => "EOF",
    }
}

fn token_lexeme(token: &Token, span: &Span, source: &str) -> String {
    match token {
        Token::Eof => "EOF".to_string(),
        _ => source
            .get(span.start..span.end)
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_empty_source_to_eof_only() {
        let out = lex("").unwrap();
        assert_eq!(out.tokens.len(), 1);
        assert_eq!(out.tokens[0].0, Token::Eof);
    }

    #[test]
    fn lexes_a_minimal_program_header() {
        let out = lex("program main").unwrap();
        let kinds: Vec<_> = out.tokens.iter().map(|(t, _)| *t).collect();
        assert_eq!(kinds[0], Token::Program);
        assert!(matches!(kinds[1], Token::Ident(_)));
        assert_eq!(*kinds.last().unwrap(), Token::Eof);
    }

    #[test]
    fn unknown_character_aborts() {
        assert!(lex("program main $").is_err());
    }

    #[test]
    fn unclosed_comment_aborts() {
        let err = lex("{ never closed").unwrap_err();
        assert!(matches!(err, LexError::UnclosedComment { .. }));
    }

    #[test]
    fn render_tokens_round_trips_lexemes() {
        let source = "program main";
        let out = lex(source).unwrap();
        let rendered = render_tokens(&out.tokens, source);
        assert!(rendered.starts_with("(program, program)\n"));
        assert!(rendered.contains("(ID, main)\n"));
        assert!(rendered.ends_with("(EOF, EOF)\n"));
    }
}
