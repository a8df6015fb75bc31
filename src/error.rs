//! Error types for mergemsg operations.

use thiserror::Error;

/// Errors raised while gathering pull request details or writing the
/// merge message. Rendering text itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Pull Request number could not be determined.")]
    PrNumberNotFound,

    #[error("Pull Request title not found.")]
    TitleHeaderNotFound,

    #[error("Pull Request title not found.")]
    TitleNotFound,

    #[error("Pull Request merge message not updated because of missing PR Number.")]
    MissingPrNumber,

    #[error("Pull Request merge message not updated because of missing PR title.")]
    MissingTitle,

    #[error("Pull Request merge message field not found.")]
    TargetNotFound,

    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("invalid pull request payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable diagnostic code, e.g. `PR-MSG-01`.
    pub fn code(&self) -> &'static str {
        match self {
            Error::PrNumberNotFound => "PR-MSG-01",
            Error::TitleHeaderNotFound => "PR-MSG-02",
            Error::TitleNotFound => "PR-MSG-03",
            Error::MissingPrNumber => "PR-MSG-04",
            Error::MissingTitle => "PR-MSG-05",
            Error::TargetNotFound => "PR-MSG-06",
            Error::InvalidSelector { .. } => "PR-MSG-SEL",
            Error::Io(_) => "PR-MSG-IO",
            #[cfg(feature = "json")]
            Error::Json(_) => "PR-MSG-JSON",
        }
    }

    /// Log this error as `<code>: <message>` and hand it back.
    pub(crate) fn logged(self) -> Self {
        log::error!(target: crate::LOG_TARGET, "{}: {}", self.code(), self);
        self
    }
}

pub type Result<T> = std::result::Result<T, Error>;
