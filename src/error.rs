use thiserror::Error;

#[derive(Debug, Error)]
pub enum FareError {
    #[error("unknown sort key '{0}' (expected price, departure or duration)")]
    UnknownSortKey(String),

    #[error("unknown fare class '{0}' (expected all, standard, comfort or first)")]
    UnknownFareClass(String),

    #[error("invalid time of day '{0}' (expected HH:MM)")]
    InvalidClockTime(String),

    #[error("invalid duration '{0}' (expected e.g. 1h 30min)")]
    InvalidDuration(String),

    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
