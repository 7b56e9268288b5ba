use thiserror::Error;

/// Client-side booking rule violations.
///
/// These block a submission before any network call is made; the server
/// re-checks the same rules and stays authoritative.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("booking cannot start in the past")]
    PastStart,

    #[error("booking must end after it starts")]
    EndBeforeStart,

    #[error("bookings must fall between 07:00 and 21:00")]
    OutOfHours,
}

/// Everything that can go wrong while talking to the booking backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 401/403; the caller should navigate to the login surface.
    #[error("authentication required")]
    AuthRequired,

    /// Any other non-2xx response. Transient, retried manually by the user.
    #[error("request failed with HTTP {status}")]
    Http { status: u16 },

    /// Response body was not valid JSON.
    #[error("response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A booking rule was violated; no request was sent.
    #[error("invalid booking: {0}")]
    Validation(#[from] ValidationError),

    /// Connection-level failure before any status code arrived.
    #[error("network error: {0}")]
    Transport(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Maps an HTTP status code to an error, or `None` for a 2xx.
    ///
    /// 401 and 403 are the auth branch; parse failures are not visible at
    /// this level and are surfaced by the body decoder instead.
    pub fn from_status(status: u16) -> Option<ApiError> {
        match status {
            200..=299 => None,
            401 | 403 => Some(ApiError::AuthRequired),
            other => Some(ApiError::Http { status: other }),
        }
    }

    /// Whether repeating the triggering action may succeed.
    ///
    /// Auth failures need a login first and validation failures need a
    /// different candidate, so neither counts as transient.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::Http { .. } | ApiError::Parse(_) | ApiError::Transport(_)
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
