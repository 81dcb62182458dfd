//! Closed enumerations for the bodies, signs and angles a chart is built from.
//!
//! Every lookup in the engine is keyed by these types, so a misspelled body or
//! sign is a compile error rather than a silent table miss.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of one zodiac sign in degrees.
pub const SIGN_SPAN: f64 = 30.0;

/// Normalize an ecliptic longitude into `[0, 360)`.
///
/// `rem_euclid` can round tiny negative inputs up to exactly `360.0`, which is
/// folded back to `0.0` so the result always lands inside the circle.
pub fn normalize_degrees(longitude: f64) -> f64 {
    let normalized = longitude.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
}

impl Body {
    /// Every body the ephemeris is asked for, in report order.
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::NorthNode,
    ];

    /// The seven visible bodies that carry essential dignity.
    pub const TRADITIONAL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    pub fn is_traditional(self) -> bool {
        Self::TRADITIONAL.contains(&self)
    }

    /// Stable lowercase identifier, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::NorthNode => "north_node",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// Signs in zodiacal order; a sign's position here is its index.
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Sign> {
        Self::ALL.get(index).copied()
    }

    /// Sign containing an absolute longitude (floor semantics, so 30.0 is Taurus).
    pub fn from_longitude(longitude: f64) -> Sign {
        let normalized = normalize_degrees(longitude);
        let index = (normalized / SIGN_SPAN).floor() as usize;
        Self::ALL[index.min(11)]
    }

    /// Absolute ecliptic longitude of the sign's first degree.
    pub fn offset(self) -> f64 {
        self.index() as f64 * SIGN_SPAN
    }

    /// Fire, earth, air and water repeat every four signs starting at Aries.
    pub fn element(self) -> Element {
        Element::ALL[self.index() % 4]
    }

    /// The sign `steps` places further along the zodiac.
    pub fn nth_after(self, steps: usize) -> Sign {
        Self::ALL[(self.index() + steps) % 12]
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Angle {
    Ascendant,
    Midheaven,
}

/// Day or night chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sect {
    Day,
    Night,
}

impl Sect {
    pub fn is_day(self) -> bool {
        self == Sect::Day
    }
}

/// Anything that can take part in an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "id")]
pub enum ChartPoint {
    Body(Body),
    Angle(Angle),
}

/// An absolute longitude split into sign and degree-within-sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    /// Absolute ecliptic longitude in `[0, 360)`
    pub longitude: f64,
    pub sign: Sign,
    /// Degrees past the sign's first degree, in `[0, 30)`
    pub degree_in_sign: f64,
}

impl ZodiacPosition {
    pub fn from_longitude(longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        let sign = Sign::from_longitude(longitude);
        let degree_in_sign = (longitude - sign.offset()).max(0.0);
        Self {
            longitude,
            sign,
            degree_in_sign,
        }
    }

    /// Whole degrees within the sign (truncated, never rounded up into the next sign).
    pub fn whole_degrees(&self) -> u32 {
        self.degree_in_sign.floor() as u32
    }

    /// Whole arc-minutes past `whole_degrees`.
    pub fn arc_minutes(&self) -> u32 {
        let fraction = self.degree_in_sign - self.degree_in_sign.floor();
        ((fraction * 60.0).floor() as u32).min(59)
    }

    /// Absolute whole degrees, built from the sign offset plus `whole_degrees`.
    pub fn absolute_whole_degrees(&self) -> u32 {
        self.sign.index() as u32 * 30 + self.whole_degrees()
    }
}
