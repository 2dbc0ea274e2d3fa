//! Error types for tempus-extra operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid locale tag: {0}")]
    InvalidLocale(#[from] icu_locale::ParseError),

    #[error("Temporal operation failed: {0}")]
    Temporal(temporal_rs::TemporalError),
}

// `TemporalError` does not implement `std::error::Error`, so it cannot be a
// `#[from]` source; it is carried for its message only.
impl From<temporal_rs::TemporalError> for Error {
    fn from(err: temporal_rs::TemporalError) -> Self {
        Self::Temporal(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
