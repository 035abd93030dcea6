//! Auth data models.

use std::fmt;

/// Sign-in form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub code: String,
}

impl Credentials {
    #[must_use]
    pub fn new(identifier: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            code: code.into(),
        }
    }

    /// Whether both fields were filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.identifier.trim().is_empty() && !self.code.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("code", &"<redacted>")
            .finish()
    }
}

/// Signed-in specialist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub identifier: String,
}
