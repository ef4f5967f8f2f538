//! Character classification for SNL identifiers.
//!
//! SNL identifiers are ASCII-only: a letter, then zero or more letters or
//! digits (no leading digit, no underscore — the grammar's `ID` rule is
//! "letter then letters/digits").

/// Checks if a character can start an identifier.
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier after the first.
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_accepts_letters_only() {
        assert!(is_ident_start('a'));
        assert!(is_ident_start('Z'));
        assert!(!is_ident_start('_'));
        assert!(!is_ident_start('1'));
    }

    #[test]
    fn continue_accepts_letters_and_digits() {
        assert!(is_ident_continue('a'));
        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('_'));
        assert!(!is_ident_continue(' '));
    }
}
