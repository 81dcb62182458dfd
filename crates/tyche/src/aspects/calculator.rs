use crate::aspects::types::{
    Aspect, AspectCore, AspectEndpoint, AspectKind, AspectPoint, AspectSettings,
};
use crate::chart::whole_sign_house;
use crate::zodiac::{Sign, ZodiacPosition};

/// Below this orb an aspect is flagged exact
const EXACT_ORB: f64 = 0.1;

/// Aspect calculator
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Every pair `i < j` of `points` that forms an aspect within the orb limit,
    /// in enumeration order. Each endpoint carries the house of its own sign.
    pub fn scan(&self, points: &[AspectPoint], asc_sign: Sign) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let p1 = &points[i];
                let p2 = &points[j];

                if let Some(aspect) = self.calculate_aspect(p1.longitude, p2.longitude) {
                    aspects.push(Aspect {
                        from: endpoint(p1, asc_sign),
                        to: endpoint(p2, asc_sign),
                        aspect,
                    });
                }
            }
        }
        log::debug!(
            "aspect scan: {} of {} pairs within {}°",
            aspects.len(),
            points.len() * points.len().saturating_sub(1) / 2,
            self.settings.orb_limit
        );
        aspects
    }

    /// Calculate aspect between two longitudes
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<AspectCore> {
        let angle_diff = separation(lon1, lon2);

        // Nearest exact angle; strict comparison keeps the earlier kind on ties
        let mut best: Option<(AspectKind, f64)> = None;
        for kind in AspectKind::ALL {
            let orb = (angle_diff - kind.exact_angle()).abs();
            match best {
                Some((_, best_orb)) if orb >= best_orb => {}
                _ => best = Some((kind, orb)),
            }
        }

        let (kind, orb) = best?;
        if orb > self.settings.orb_limit {
            return None;
        }

        Some(AspectCore {
            kind,
            exact_angle: kind.exact_angle(),
            orb,
            is_exact: orb < EXACT_ORB,
        })
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new(AspectSettings::default())
    }
}

/// Shortest arc between two longitudes, in `[0, 180]`.
pub fn separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

fn endpoint(point: &AspectPoint, asc_sign: Sign) -> AspectEndpoint {
    let sign = ZodiacPosition::from_longitude(point.longitude).sign;
    AspectEndpoint {
        point: point.point,
        house: whole_sign_house(sign, asc_sign),
    }
}
