use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SmokeError {
    /// Connection, DNS, TLS and timeout failures. Everything else means the
    /// server answered with something we did not expect.
    pub fn is_transport(&self) -> bool {
        matches!(self, SmokeError::Transport(_))
    }
}
