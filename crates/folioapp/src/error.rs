use thiserror::Error;

/// Failure to turn the bundled content document into a [`ContentStore`].
///
/// Fatal to that data set: the caller falls back to an empty store and may
/// surface a generic error through the [`ErrorBoundary`].
///
/// [`ContentStore`]: crate::content::ContentStore
/// [`ErrorBoundary`]: crate::boundary::ErrorBoundary
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Malformed content document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Content document must be a list of records or an object with a `projects` list")]
    NotAList,

    #[error("Record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Record {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Duplicate record key: {0}")]
    DuplicateKey(String),

    #[error("Could not read content source: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Content error: {0}")]
    DataLoad(#[from] DataLoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Analytics error: {0}")]
    Analytics(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
