use std::path::PathBuf;

use thiserror::Error;

use crate::content::Category;

/// Problems with the embedded practice texts. All of these are build defects,
/// so they surface once at startup and never from `draw`.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no embedded text file for category `{0}`")]
    Missing(Category),

    #[error("text file for category `{category}` is not valid UTF-8")]
    Encoding { category: Category },

    #[error("text file for category `{category}` could not be parsed: {source}")]
    Parse {
        category: Category,
        #[source]
        source: serde_json::Error,
    },

    #[error("text collection for category `{0}` is empty")]
    Empty(Category),

    #[error("expected the `{expected}` collection, found `{found}`")]
    Mismatch { expected: Category, found: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write config to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
