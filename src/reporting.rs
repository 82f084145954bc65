//! Types for standardized reports to the user about track generation.
//!
//! Every skipped filename, missing list and empty category is written into the
//! trackDb output as a `#` comment. The same issues are also collected in a
//! [`Report`], so callers can count or log them without parsing the output.

use crate::error::HubError;

/// The [`CommandOutput<U>`] type output is generic over some data output
/// from a command, and a [`Report`] that reports information to the user.
pub struct CommandOutput<U> {
    pub value: U,
    pub report: Report,
}

impl<U> CommandOutput<U> {
    pub fn new(value: U, report: Report) -> Self {
        Self { value, report }
    }
}

/// A type to (semi) standardize reporting to the user.
#[derive(Debug, Default)]
pub struct Report {
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue; skipped lines are warnings, everything else an error.
    pub fn add_issue(&mut self, issue: &HubError) {
        if issue.is_skip() {
            self.warnings.push(issue.to_string())
        } else {
            self.errors.push(issue.to_string())
        }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn num_issues(&self) -> usize {
        self.warnings.len() + self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.num_issues() == 0
    }
}
