use crate::zodiac::{Body, Element, Sign};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure of a whole chart calculation. No partial report is produced.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

impl ChartError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ChartError::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

/// Errors raised while resolving positions from an ephemeris backend.
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at {datetime}: {message}")]
    CalculationFailed {
        body: Body,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Ephemeris returned no position for {0}")]
    MissingBody(Body),
    #[error("Ephemeris returned a non-finite longitude for {point}: {longitude}")]
    InvalidLongitude { point: String, longitude: f64 },
    #[error("Failed to read position fixture: {0}")]
    Fixture(String),
}

/// Violations of the dignity table invariants.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("sign entry {position} is {found}, expected {expected}")]
    SignOutOfOrder {
        position: usize,
        found: Sign,
        expected: Sign,
    },
    #[error("term bounds for {sign} are not strictly increasing")]
    TermBoundsNotIncreasing { sign: Sign },
    #[error("last term bound for {sign} is {found}, expected 30")]
    LastTermBound { sign: Sign, found: f64 },
    #[error("triplicity entry {position} is {found:?}, expected {expected:?}")]
    ElementOutOfOrder {
        position: usize,
        found: Element,
        expected: Element,
    },
    #[error("failed to parse dignity tables: {0}")]
    Parse(#[from] toml::de::Error),
}
