use curio_store::StoreError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalogue load or save failed
    #[error("{0}")]
    Store(#[from] StoreError),

    /// A submitted field failed validation; nothing was written
    #[error("{0}")]
    Validation(String),

    /// Settings file error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
