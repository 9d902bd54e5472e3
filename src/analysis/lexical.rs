//! Lexical check: a character allow-list, not a tokenizer.
//!
//! The check fails on the whole word `integer` or on any character
//! outside a fixed set of letters, digits, whitespace and punctuation.
//! It cannot tell comments or string contents from code; one stray
//! character anywhere in the buffer fails the whole file.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{CheckResult, EMPTY_INPUT_MESSAGE};

static LEXICAL_ERROR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"\binteger\b|[^a-zA-Z0-9\s{}()=+\-*/.;:,_\&|!<>^%$#@'"\[\]`]"##)
        .expect("lexical pattern")
});

pub fn check(src: &str) -> CheckResult {
    if super::is_empty_source(src) {
        return CheckResult::fail(EMPTY_INPUT_MESSAGE);
    }

    if LEXICAL_ERROR.is_match(src) {
        CheckResult::fail("Lexical analysis failed! Use \"int\" instead of \"integer\".")
    } else {
        CheckResult::pass("Lexical analysis passed! No errors.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Severity;

    #[test]
    fn empty_input_is_guarded() {
        let result = check("   \n  ");
        assert!(!result.passed);
        assert_eq!(result.message, EMPTY_INPUT_MESSAGE);
        assert_eq!(result.severity, Severity::Error);
    }

    #[test]
    fn word_integer_always_fails() {
        let result = check("integer x = 5;");
        assert!(!result.passed);
        assert!(result.message.contains("Use \"int\" instead"));

        // Surrounding content makes no difference.
        assert!(!check("{ integer y = 1; }").passed);
    }

    #[test]
    fn integer_as_substring_is_allowed() {
        // \b bounds the word; identifiers merely containing it are fine.
        assert!(check("int integers = 3;").passed);
    }

    #[test]
    fn plain_declaration_passes() {
        let result = check("int x = 5;");
        assert!(result.passed);
        assert_eq!(result.message, "Lexical analysis passed! No errors.");
        assert_eq!(result.severity, Severity::Success);
    }

    #[test]
    fn character_outside_allow_list_fails() {
        // `?` and non-ASCII letters are not on the allow-list.
        assert!(!check("int x = a ? b : c;").passed);
        assert!(!check("int π = 3;").passed);
    }
}
