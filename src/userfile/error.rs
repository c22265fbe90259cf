use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserFileError {
    #[error("--{0} flag has to be specified")]
    MissingParameter(&'static str),

    #[error("Operation {0} not allowed!")]
    UnknownOperation(String),

    #[error("Cannot open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error: {0}")]
    FileRead(#[source] std::io::Error),

    #[error("Write error: {0}")]
    FileWrite(#[source] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UserFileError>;
