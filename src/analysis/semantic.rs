//! Semantic check: pattern-matched declarations, one type rule.
//!
//! Scans for `<type> <identifier> = <value>` declarations and flags
//! every `int` whose raw value text contains a decimal point. All
//! mismatches are reported together. Unlike the other two checks this
//! one runs unguarded on an empty buffer.

use once_cell::sync::Lazy;
use regex::Regex;

use super::CheckResult;

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(int|float|double|char|boolean|long|short|byte|String)\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*([^\s;]+)",
    )
    .expect("declaration pattern")
});

/// A declaration pulled out of the source text. Lives only for the
/// duration of one check.
struct DeclaredVariable<'a> {
    name: &'a str,
    declared_type: &'a str,
    raw_value: &'a str,
}

pub fn check(src: &str) -> CheckResult {
    let declared: Vec<DeclaredVariable> = DECLARATION
        .captures_iter(src)
        .map(|caps| DeclaredVariable {
            declared_type: caps.get(1).map_or("", |m| m.as_str()),
            name: caps.get(2).map_or("", |m| m.as_str()),
            raw_value: caps.get(3).map_or("", |m| m.as_str()),
        })
        .collect();

    let mismatches: Vec<String> = declared
        .iter()
        .filter(|var| var.declared_type == "int" && var.raw_value.contains('.'))
        .map(|var| {
            format!(
                "Semantic error: Cannot assign {} to {} {}.",
                var.raw_value, var.declared_type, var.name
            )
        })
        .collect();

    if mismatches.is_empty() {
        CheckResult::pass("Semantic analysis passed! No errors.")
    } else {
        CheckResult::fail(mismatches.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_with_decimal_point_is_a_mismatch() {
        let result = check("int x = 5.5");
        assert!(!result.passed);
        assert_eq!(result.message, "Semantic error: Cannot assign 5.5 to int x.");
    }

    #[test]
    fn int_without_decimal_point_passes() {
        let result = check("int x = 5");
        assert!(result.passed);
        assert_eq!(result.message, "Semantic analysis passed! No errors.");
    }

    #[test]
    fn all_mismatches_reported_together() {
        let result = check("int a = 1.0;\nint b = 2;\nint c = 3.5;");
        assert!(!result.passed);
        let lines: Vec<&str> = result.message.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Semantic error: Cannot assign 1.0 to int a.",
                "Semantic error: Cannot assign 3.5 to int c.",
            ]
        );
    }

    #[test]
    fn only_int_is_checked() {
        assert!(check("float f = 5.5").passed);
        assert!(check("double d = 0.25").passed);
    }

    #[test]
    fn empty_input_is_not_guarded() {
        // Asymmetric with the lexical and syntax checks on purpose.
        let result = check("");
        assert!(result.passed);
        assert_eq!(result.message, "Semantic analysis passed! No errors.");
    }
}
