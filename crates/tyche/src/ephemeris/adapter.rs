use crate::ephemeris::types::{
    AnglePositions, EphemerisProvider, GeoLocation, PlanetPosition, RawPositions,
};
use crate::error::EphemerisError;
use crate::zodiac::{normalize_degrees, Body};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex, julday, set_ephe_path};

// Swiss Ephemeris planet IDs
// SUN=0, MOON=1, MERCURY=2, VENUS=3, MARS=4, JUPITER=5,
// SATURN=6, URANUS=7, NEPTUNE=8, PLUTO=9, TRUE_NODE=11
fn planet_code(body: Body) -> i32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
        Body::Uranus => 7,
        Body::Neptune => 8,
        Body::Pluto => 9,
        Body::NorthNode => 11,
    }
}

/// Whole sign houses; only the angles are read from the house call.
const WHOLE_SIGN: u8 = b'W';

// FLG_SWIEPH | FLG_SPEED
const CALC_FLAGS: i32 = 2 | 256;

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        let path_str = path.to_str().ok_or_else(|| EphemerisError::FileNotFound {
            path: path.display().to_string(),
            message: "Ephemeris path is not valid UTF-8".to_string(),
        })?;
        set_ephe_path(path_str);
        log::debug!("swiss ephemeris data path set to {}", path_str);

        Ok(Self {
            ephemeris_path: path,
        })
    }

    /// Directory handed to Swiss Ephemeris for its data files
    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    /// Calculate position for a single body
    pub fn calc_planet_position(
        &self,
        body: Body,
        dt_utc: DateTime<Utc>,
        jd: f64,
    ) -> Result<PlanetPosition, EphemerisError> {
        let result = calc_ut(jd, planet_code(body) as u32, CALC_FLAGS as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                datetime: dt_utc,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let result_array = result.out;
        let speed_longitude = result_array[3];

        Ok(PlanetPosition {
            lon: normalize_degrees(result_array[0]),
            speed_lon: speed_longitude,
            retrograde: speed_longitude < 0.0,
        })
    }

    /// Calculate the Ascendant and Midheaven
    pub fn calc_angles(&self, jd: f64, location: &GeoLocation) -> Result<AnglePositions, EphemerisError> {
        use swisseph::AscMc;

        let (_cusps, a) = houses_ex(jd, CALC_FLAGS, location.lat, location.lon, WHOLE_SIGN as i32);
        let ascmc = AscMc::from_array(a);

        let asc = ascmc.ascendant;
        let mc = ascmc.mc;
        if !asc.is_finite() || !mc.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("angles out of range at lat {} lon {}", location.lat, location.lon),
            });
        }

        Ok(AnglePositions {
            asc: normalize_degrees(asc),
            mc: normalize_degrees(mc),
        })
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn positions(
        &self,
        moment: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPositions, EphemerisError> {
        let jd = datetime_to_julian_day(moment);
        log::debug!("swiss ephemeris: jd {:.5} for {}", jd, moment);

        let mut planets = HashMap::new();
        for body in Body::ALL {
            planets.insert(body, self.calc_planet_position(body, moment, jd)?);
        }
        let angles = self.calc_angles(jd, location)?;

        Ok(RawPositions { planets, angles })
    }
}

/// Convert UTC datetime to Julian Day
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;

    // GREG_CAL = 1
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_is_kept() {
        let dir = env::temp_dir();
        let adapter = SwissEphemerisAdapter::new(Some(dir.clone())).unwrap();
        assert_eq!(adapter.ephemeris_path(), dir.as_path());
    }

    #[test]
    fn test_missing_path_rejected() {
        let missing = env::temp_dir().join("tyche-no-such-ephemeris-dir");
        assert!(matches!(
            SwissEphemerisAdapter::new(Some(missing)),
            Err(EphemerisError::FileNotFound { .. })
        ));
    }
}
