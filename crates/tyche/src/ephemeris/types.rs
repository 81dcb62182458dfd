use crate::error::EphemerisError;
use crate::zodiac::Body;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Planetary position data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// Longitude in degrees (0-360)
    pub lon: f64,
    /// Speed in longitude (degrees per day)
    #[serde(default)]
    pub speed_lon: f64,
    /// Whether the planet is retrograde
    #[serde(default)]
    pub retrograde: bool,
}

/// Chart angles in absolute ecliptic degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnglePositions {
    pub asc: f64,
    pub mc: f64,
}

/// Everything an ephemeris backend reports for one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPositions {
    /// Body -> position
    pub planets: HashMap<Body, PlanetPosition>,
    pub angles: AnglePositions,
}

/// Source of absolute positions for the fixed body list and the angles.
///
/// Implementations are deterministic: the same moment and location always
/// yield the same positions.
pub trait EphemerisProvider {
    fn positions(
        &self,
        moment: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPositions, EphemerisError>;
}
