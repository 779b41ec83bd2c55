use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error in daemon request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Daemon returned status {status} with error body {diagnostic}")]
    Status { status: u16, diagnostic: Value },

    #[error("Daemon returned status {status} with undecodable body {body:?}")]
    StatusOpaque { status: u16, body: String },

    #[error("Error decoding daemon response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error reading reply file {path}: {source}")]
    ReplyFile { path: String, source: std::io::Error },

    #[error("Daemon reply has no value for {0:?}")]
    MissingReplyKey(String),

    #[error("Daemon returned non-{expected} value {value}")]
    UnexpectedReply { expected: &'static str, value: Value },

    #[error("Daemon returned invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("Secret set of {0} failed")]
    SecretSetFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
