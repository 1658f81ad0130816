//! Error type shared by the decoder, the network client and the renderers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Connection refused, timeout, DNS failure, unreadable body.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The body was not valid JSON or not a JSON object.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A drawing backend failed while replaying a pass.
    #[error("render error: {0}")]
    Render(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if !status.is_success() => Error::Status(status.as_u16()),
            _ => Error::Transport(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
