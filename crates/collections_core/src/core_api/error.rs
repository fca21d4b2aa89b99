use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    /// A required save-data category is absent; usually the campaign has not
    /// been started yet.
    MissingCategory,
    /// The host token cache is empty and has not rebuilt itself yet.
    CatalogUnavailable,
}

impl CoreErrorCode {
    /// Transient failures may succeed on a later reload; others need a
    /// changed save.
    pub fn is_transient(self) -> bool {
        matches!(self, Self::CatalogUnavailable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for CoreError {}
