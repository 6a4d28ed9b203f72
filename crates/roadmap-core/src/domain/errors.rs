//! Errors - 読み込み失敗の分類
//!
//! 画面上は区別しない（どれも 1 つのエラー表示になる）。種類はログの `kind` にだけ出す。

use thiserror::Error;

/// Failure to load the roadmap document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Non-2xx HTTP response.
    #[error("unable to load the roadmap (HTTP {code})")]
    Status { code: u16 },

    /// Network-level failure (connect, TLS, body read).
    #[error("network error: {0}")]
    Transport(String),

    #[error("unable to read the roadmap: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid roadmap JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Status { .. } => "status",
            LoadError::Transport(_) => "transport",
            LoadError::Io(_) => "io",
            LoadError::Parse(_) => "parse",
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => LoadError::Status {
                code: status.as_u16(),
            },
            None => LoadError::Transport(e.to_string()),
        }
    }
}
