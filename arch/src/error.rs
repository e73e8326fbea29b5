use thiserror::Error;

/// Errors returned by the strict [`crate::Arch`] lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchError {
    #[error("no arch for str {0}")]
    UnknownArch(String),

    #[error("invalid arch name: {0}")]
    UnknownName(String),
}
