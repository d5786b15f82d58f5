//! Error and result types shared across the crate.
//!
//! `FetchError` covers every way loading the user list can fail. The variants
//! only exist for logging: the UI collapses all of them into
//! [`FETCH_FAILED_MESSAGE`].
use std::fmt::{Display, Formatter};

pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type Result<T> = std::result::Result<T, DynError>;

/// The one message shown to the user after any failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users. Please try again later.";

pub trait Context<T> {
    fn with_ctx<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

#[derive(Debug)]
pub struct WithContextError {
    pub context: String,
    pub source: DynError,
}

impl Display for WithContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl std::error::Error for WithContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_ctx<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            Box::new(WithContextError {
                context: f(),
                source: e.into(),
            }) as DynError
        })
    }
}

/// Failure of a single `GET` against the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    Transport(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The body was not a JSON array of users.
    Decode(String),
}

impl FetchError {
    pub fn transport(err: impl Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// Text shown in the error banner. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Status(code) => write!(f, "unexpected HTTP status {code}"),
            Self::Decode(msg) => write!(f, "malformed users payload: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn every_variant_shares_the_user_message() {
        let errors = [
            FetchError::transport("connection refused"),
            FetchError::Status(503),
            FetchError::decode("expected array"),
        ];
        for err in errors {
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        }
    }

    #[test]
    fn with_ctx_prefixes_the_source() {
        let res: std::result::Result<(), FetchError> = Err(FetchError::Status(404));
        let err = res.with_ctx(|| "loading users".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "loading users: unexpected HTTP status 404");
        assert!(err.source().is_some());
    }
}
