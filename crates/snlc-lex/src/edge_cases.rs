//! Edge case tests for the SNL lexer.

#[cfg(test)]
mod tests {
    use crate::{lex, Token};

    fn kinds(source: &str) -> Vec<Token> {
        lex(source).unwrap().tokens.into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![Token::Eof]);
    }

    #[test]
    fn whitespace_only_source_is_just_eof() {
        assert_eq!(kinds("   \n\t  "), vec![Token::Eof]);
    }

    #[test]
    fn single_char_identifier() {
        let ks = kinds("x");
        assert!(matches!(ks[0], Token::Ident(_)));
    }

    #[test]
    fn long_identifier() {
        let name = "a".repeat(500);
        let out = lex(&name).unwrap();
        match out.tokens[0].0 {
            Token::Ident(sym) => assert_eq!(sym.as_str().len(), 500),
            other => panic!("expected Ident, got {other:?}"),
        }
    }

    #[test]
    fn keywords_are_not_identifiers() {
        let ks = kinds("program type var");
        assert_eq!(ks[0], Token::Program);
        assert_eq!(ks[1], Token::Type);
        assert_eq!(ks[2], Token::Var);
    }

    #[test]
    fn case_sensitivity() {
        let ks = kinds("Program program");
        assert!(matches!(ks[0], Token::Ident(_)));
        assert_eq!(ks[1], Token::Program);
    }

    #[test]
    fn boolean_lexes_as_identifier_not_keyword() {
        let ks = kinds("boolean");
        assert!(matches!(ks[0], Token::Ident(_)));
    }

    #[test]
    fn dotdot_wins_over_dot() {
        assert_eq!(kinds("1..2"), vec![
            Token::IntConst(1),
            Token::DotDot,
            Token::IntConst(2),
            Token::Eof,
        ]);
    }

    #[test]
    fn assign_wins_over_bare_colon() {
        let ks = kinds("x := 1");
        assert!(matches!(ks[0], Token::Ident(_)));
        assert_eq!(ks[1], Token::Assign);
        assert_eq!(ks[2], Token::IntConst(1));
        assert_eq!(ks[3], Token::Eof);
    }

    #[test]
    fn all_single_char_punctuation() {
        let ks = kinds("+ - * / < = ( ) [ ] . ; ,");
        assert_eq!(
            ks,
            vec![
                Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::Lt,
                Token::Eq,
                Token::LParen,
                Token::RParen,
                Token::LBracket,
                Token::RBracket,
                Token::Dot,
                Token::Semi,
                Token::Comma,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn nested_parens() {
        let ks = kinds("((()))");
        assert_eq!(ks.iter().filter(|t| **t == Token::LParen).count(), 3);
        assert_eq!(ks.iter().filter(|t| **t == Token::RParen).count(), 3);
    }

    #[test]
    fn char_const_with_space() {
        assert_eq!(kinds("' '"), vec![Token::CharConst(' '), Token::Eof]);
    }

    #[test]
    fn unknown_character_reports_position() {
        let err = lex("  $").unwrap_err();
        match err {
            snlc_util::error::LexError::UnknownCharacter { ch, pos, .. } => {
                assert_eq!(ch, '$');
                assert_eq!(pos, 2);
            }
            other => panic!("expected UnknownCharacter, got {other:?}"),
        }
    }

    #[test]
    fn unclosed_comment_cites_start_position() {
        let err = lex("program x { never closed").unwrap_err();
        match err {
            snlc_util::error::LexError::UnclosedComment { start, .. } => assert_eq!(start, 10),
            other => panic!("expected UnclosedComment, got {other:?}"),
        }
    }

    #[test]
    fn comment_between_tokens_is_transparent() {
        let ks = kinds("program{ ignored }main");
        assert_eq!(ks[0], Token::Program);
        assert!(matches!(ks[1], Token::Ident(_)));
        assert_eq!(ks[2], Token::Eof);
    }

    #[test]
    fn leading_zero_splits_digits() {
        assert_eq!(kinds("007"), vec![
            Token::IntConst(0),
            Token::IntConst(0),
            Token::IntConst(7),
            Token::Eof,
        ]);
    }
}
