//! Minimal diagnostic collection, for components that want to record what
//! happened beyond the fatal/non-fatal split already enforced by `Result`
//! and `tracing`. Currently used by the symbol-table builder to keep a
//! queryable record of the warnings it logged.

use crate::span::Span;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Warning,
    Note,
}

#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Option<Span>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Level::Warning => write!(f, "warning: {}", self.message),
            Level::Note => write!(f, "note: {}", self.message),
        }
    }
}

/// Accumulates non-fatal diagnostics emitted during a pass.
#[derive(Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>, span: Option<Span>) {
        let diagnostic = Diagnostic {
            level: Level::Warning,
            message: message.into(),
            span,
        };
        tracing::warn!(target: "glotta", "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_records_and_counts() {
        let mut handler = Handler::new();
        handler.warn("duplicate declaration", None);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics().len(), 1);
    }
}
