use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("merge error: {0}")]
    Merge(#[from] argmerge_merge::MergeError),

    #[error("value error: {0}")]
    Type(#[from] argmerge_types::TypeError),

    #[error("config file unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(String),
}

pub type SdkResult<T> = Result<T, SdkError>;
