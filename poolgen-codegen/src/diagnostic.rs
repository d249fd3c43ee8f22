//! Warnings collected during a generation run.
//!
//! Non-fatal findings (a stale file that could not be deleted, an artifact
//! that overwrote another one) are collected as [`Diagnostic`] values and
//! handed back to the caller instead of being printed. Anything worse than a
//! warning aborts the run with a [`GenerateError`](crate::GenerateError).

use std::fmt;

/// A warning from one step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The step that produced it ("prepare", "pool", "component", ...).
    pub phase: String,
    pub message: String,
    /// Optional location, usually a file path.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_without_location() {
        let diag = Diagnostic::warning("prepare", "could not delete file");
        assert_eq!(diag.phase, "prepare");
        assert_eq!(diag.to_string(), "warning: could not delete file");
    }

    #[test]
    fn test_warning_with_location() {
        let diag = Diagnostic::warning("pool", "duplicate artifact").at("Pools.cs");
        assert_eq!(diag.location.as_deref(), Some("Pools.cs"));
        assert_eq!(diag.to_string(), "warning: duplicate artifact (at Pools.cs)");
    }
}
