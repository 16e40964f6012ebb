//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Outcome class of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    /// The operation found nothing to act on
    NotFound,
}

/// Wrapper type for displaying operation confirmation messages.
///
/// Used for operations whose result is a plain yes/no, such as task changes
/// and deletions of unknown ids.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Success,
        }
    }

    /// Create a status for an operation whose target does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::NotFound,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == StatusLevel::Success
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            StatusLevel::Success => "Success:",
            StatusLevel::NotFound => "Not found:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}
