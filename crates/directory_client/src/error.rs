use thiserror::Error;

/// Failures surfaced by the directory client.
///
/// Two kinds only: the request never completed, or the server answered with
/// a non-success status. Callers that show these to a user collapse both
/// into a generic failure message; the full variant goes to the log.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl DirectoryError {
    pub fn is_transport(&self) -> bool {
        matches!(self, DirectoryError::Transport(_))
    }
}
