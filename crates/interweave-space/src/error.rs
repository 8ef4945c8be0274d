use std::fmt;

/// A cross-embedding mapping was requested with no enclosing embedding.
///
/// Raised at the call site when a composed mapping (2D-local → parent
/// surface/world) is asked for outside any embedding. Absence of the parent
/// capability is a normal, checkable state; only the composed call turns it
/// into an error.
#[derive(Debug, Clone, PartialEq)]
pub struct NotInScope(pub String);

impl NotInScope {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for NotInScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mapping not in scope: {}", self.0)
    }
}

impl std::error::Error for NotInScope {}
