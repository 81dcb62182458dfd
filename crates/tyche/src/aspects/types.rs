use crate::zodiac::ChartPoint;
use serde::{Deserialize, Serialize};

/// The five major (Ptolemaic) aspects, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }
}

/// Core aspect information
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectCore {
    #[serde(rename = "aspectType")]
    pub kind: AspectKind,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    #[serde(rename = "exactAngle")]
    pub exact_angle: f64,
    /// Orb value (deviation from exact angle)
    pub orb: f64,
    /// Whether the aspect is exact (within 0.1 degrees)
    #[serde(rename = "isExact")]
    pub is_exact: bool,
}

/// A scan participant: a body or angle at an absolute longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectPoint {
    pub point: ChartPoint,
    pub longitude: f64,
}

/// One side of an aspect, with its own whole-sign house
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectEndpoint {
    pub point: ChartPoint,
    pub house: u8,
}

/// An aspect between two chart points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub from: AspectEndpoint,
    pub to: AspectEndpoint,
    pub aspect: AspectCore,
}

/// Settings for aspect calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectSettings {
    /// Largest orb, in degrees, at which an aspect is still reported
    #[serde(rename = "orbLimit")]
    pub orb_limit: f64,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self { orb_limit: 5.0 }
    }
}
