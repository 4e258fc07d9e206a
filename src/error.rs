use thiserror::Error;

/// Failures surfaced by the conversation engine and its providers.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The dataset or lexicon cannot back a conversation. Fatal at startup.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// A recommendation query filtered the dataset down to nothing.
    #[error("no perfume candidates for category '{category}'")]
    NoCandidates { category: String },

    /// The injected sentiment scorer failed.
    #[error("sentiment scorer failed: {reason}")]
    ScorerFailure { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ChatError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub fn scorer(reason: impl Into<String>) -> Self {
        Self::ScorerFailure {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
