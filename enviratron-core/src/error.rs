use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Empty path")]
    EmptyPath,

    #[error("Invalid filename pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid capture time: {0}")]
    InvalidCaptureTime(String),

    #[error("Unknown modality label: {0}")]
    UnknownModality(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
