/// Heuristic checkers approximating the three classic compiler phases.
///
/// None of these is a real analysis. Each function inspects the raw
/// source text with regular expressions or character scans and reports
/// pass/fail with a message; there is no token stream, no grammar and no
/// symbol table behind them.
pub mod lexical;
pub mod semantic;
pub mod syntax;

// ─── Shared types ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Outcome of one checker invocation. Produced fresh per call and never
/// retained across checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub passed: bool,
    pub message: String,
    pub severity: Severity,
}

impl CheckResult {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Guard message shared by the lexical and syntax checks. The semantic
/// check deliberately has no such guard; the asymmetry is part of the
/// documented behavior.
pub const EMPTY_INPUT_MESSAGE: &str = "Open file first!";

pub(crate) fn is_empty_source(src: &str) -> bool {
    src.trim().is_empty()
}
