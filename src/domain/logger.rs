//! Logger collaborator
//!
//! The domain and application layers report events through this trait; the
//! infrastructure layer decides where they go. Logging never affects control flow.

use std::error::Error;

/// Informational and error event sink
pub trait Logger: Send + Sync {
    /// Records an informational event
    fn info(&self, message: &str);

    /// Records an error event, optionally with the failure that caused it
    fn error(&self, message: &str, cause: Option<&dyn Error>);
}
