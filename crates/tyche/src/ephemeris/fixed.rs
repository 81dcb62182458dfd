//! Ephemeris backed by a precomputed set of positions.
//!
//! Used by tests and by the CLI's `--positions` mode, where positions come
//! from a JSON file produced by an external ephemeris.

use crate::ephemeris::types::{EphemerisProvider, GeoLocation, RawPositions};
use crate::error::EphemerisError;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    positions: RawPositions,
}

impl FixedEphemeris {
    pub fn new(positions: RawPositions) -> Self {
        Self { positions }
    }

    pub fn from_json_str(text: &str) -> Result<Self, EphemerisError> {
        let positions: RawPositions =
            serde_json::from_str(text).map_err(|e| EphemerisError::Fixture(e.to_string()))?;
        Ok(Self::new(positions))
    }

    pub fn from_path(path: &Path) -> Result<Self, EphemerisError> {
        let text = fs::read_to_string(path).map_err(|e| EphemerisError::FileNotFound {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn positions(
        &self,
        moment: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPositions, EphemerisError> {
        log::debug!(
            "fixed ephemeris serving {} bodies for {} at ({}, {})",
            self.positions.planets.len(),
            moment,
            location.lat,
            location.lon
        );
        Ok(self.positions.clone())
    }
}
