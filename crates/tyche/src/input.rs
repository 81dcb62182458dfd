//! Birth data as entered, validated before any ephemeris call.

use crate::ephemeris::types::GeoLocation;
use crate::error::ChartError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::Serialize;

const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];
const TIME_FORMAT: &str = "%H:%M";

/// Default offset of the reference deployment (JST)
pub const DEFAULT_UTC_OFFSET: &str = "+09:00";

/// Name shown when none is entered
pub const DEFAULT_NAME: &str = "ゲスト";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthInput {
    pub name: String,
    pub date: NaiveDate,
    /// Minute resolution
    pub time: NaiveTime,
    #[serde(rename = "utcOffset", serialize_with = "serialize_offset")]
    pub utc_offset: FixedOffset,
    pub location: GeoLocation,
}

impl BirthInput {
    /// Build from already-typed values, validating the location.
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        utc_offset: FixedOffset,
        location: GeoLocation,
    ) -> Result<Self, ChartError> {
        validate_location(&location)?;
        Ok(Self {
            name: name.into(),
            date,
            time,
            utc_offset,
            location,
        })
    }

    /// Parse user-entered strings. Fails on the first malformed field. A blank
    /// name becomes [`DEFAULT_NAME`].
    pub fn parse(
        name: &str,
        date: &str,
        time: &str,
        utc_offset: &str,
        latitude: &str,
        longitude: &str,
    ) -> Result<Self, ChartError> {
        let date = parse_date(date)?;
        let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT)
            .map_err(|e| ChartError::invalid("time", format!("{:?}: {}", time, e)))?;
        let utc_offset = parse_utc_offset(utc_offset)?;
        let location = GeoLocation {
            lat: parse_coordinate("latitude", latitude)?,
            lon: parse_coordinate("longitude", longitude)?,
        };
        let name = match name.trim() {
            "" => DEFAULT_NAME,
            trimmed => trimmed,
        };
        Self::new(name, date, time, utc_offset, location)
    }

    /// Local civil time of birth.
    pub fn local(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Birth moment in the entered offset.
    pub fn moment(&self) -> Result<DateTime<FixedOffset>, ChartError> {
        self.utc_offset
            .from_local_datetime(&self.local())
            .single()
            .ok_or_else(|| ChartError::invalid("time", "local time cannot be placed in the offset"))
    }

    pub fn utc(&self) -> Result<DateTime<Utc>, ChartError> {
        Ok(self.moment()?.with_timezone(&Utc))
    }
}

fn serialize_offset<S: serde::Serializer>(offset: &FixedOffset, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(offset)
}

pub fn parse_date(text: &str) -> Result<NaiveDate, ChartError> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| ChartError::invalid("date", format!("{:?} is not YYYY/MM/DD", text)))
}

/// Parse an offset of the form `+HH:MM` or `-HH:MM`.
pub fn parse_utc_offset(text: &str) -> Result<FixedOffset, ChartError> {
    let text = text.trim();
    let err = || ChartError::invalid("utc_offset", format!("{:?} is not ±HH:MM", text));

    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+') => (1, &text[1..]),
        Some(b'-') => (-1, &text[1..]),
        _ => return Err(err()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(err)?;
    let two_digits = |field: &str| field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return Err(err());
    }
    let hours: i32 = hours.parse().map_err(|_| err())?;
    let minutes: i32 = minutes.parse().map_err(|_| err())?;
    if minutes >= 60 {
        return Err(err());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(err)
}

fn parse_coordinate(field: &'static str, text: &str) -> Result<f64, ChartError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ChartError::invalid(field, format!("{:?} is not a number", text)))
}

pub fn validate_location(location: &GeoLocation) -> Result<(), ChartError> {
    if !location.lat.is_finite() || !(-90.0..=90.0).contains(&location.lat) {
        return Err(ChartError::invalid(
            "latitude",
            format!("{} is outside -90..90", location.lat),
        ));
    }
    if !location.lon.is_finite() || !(-180.0..=180.0).contains(&location.lon) {
        return Err(ChartError::invalid(
            "longitude",
            format!("{} is outside -180..180", location.lon),
        ));
    }
    Ok(())
}
