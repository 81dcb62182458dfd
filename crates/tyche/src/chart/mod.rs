//! Immutable natal chart snapshot resolved from raw ephemeris output.

pub mod geometry;

pub use geometry::{part_of_fortune, sect_from_sun_house, whole_sign_house};

use crate::aspects::AspectPoint;
use crate::ephemeris::types::RawPositions;
use crate::error::EphemerisError;
use crate::zodiac::{Angle, Body, ChartPoint, Sect, Sign, ZodiacPosition};
use serde::Serialize;

/// A body resolved into sign, degree and whole-sign house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPlacement {
    pub body: Body,
    pub position: ZodiacPosition,
    pub retrograde: bool,
    pub house: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnglePlacement {
    pub angle: Angle,
    pub position: ZodiacPosition,
    pub house: u8,
}

/// Derived lot placement; shares the whole-sign house rule with the bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LotPlacement {
    pub position: ZodiacPosition,
    pub house: u8,
}

/// One chart for one moment and place. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    bodies: Vec<BodyPlacement>,
    ascendant: AnglePlacement,
    midheaven: AnglePlacement,
    part_of_fortune: LotPlacement,
    sect: Sect,
}

impl Chart {
    /// Resolve every body and angle, then derive houses, sect and the Part of Fortune.
    ///
    /// Fails if any body of [`Body::ALL`] is missing or a longitude is not finite.
    pub fn resolve(raw: &RawPositions) -> Result<Self, EphemerisError> {
        let asc_lon = finite("ascendant", raw.angles.asc)?;
        let mc_lon = finite("midheaven", raw.angles.mc)?;
        let asc_position = ZodiacPosition::from_longitude(asc_lon);
        let asc_sign = asc_position.sign;

        let mut bodies = Vec::with_capacity(Body::ALL.len());
        for body in Body::ALL {
            let planet = raw
                .planets
                .get(&body)
                .ok_or(EphemerisError::MissingBody(body))?;
            let position = ZodiacPosition::from_longitude(finite(body.id(), planet.lon)?);
            bodies.push(BodyPlacement {
                body,
                position,
                retrograde: planet.retrograde,
                house: whole_sign_house(position.sign, asc_sign),
            });
        }

        // Body::ALL starts with the luminaries
        let sun = bodies[0];
        let moon = bodies[1];
        let sect = sect_from_sun_house(sun.house);

        let pof_position = ZodiacPosition::from_longitude(part_of_fortune(
            asc_lon,
            sun.position.longitude,
            moon.position.longitude,
            sect,
        ));

        let mc_position = ZodiacPosition::from_longitude(mc_lon);

        Ok(Self {
            bodies,
            ascendant: AnglePlacement {
                angle: Angle::Ascendant,
                position: asc_position,
                house: 1,
            },
            midheaven: AnglePlacement {
                angle: Angle::Midheaven,
                position: mc_position,
                house: whole_sign_house(mc_position.sign, asc_sign),
            },
            part_of_fortune: LotPlacement {
                position: pof_position,
                house: whole_sign_house(pof_position.sign, asc_sign),
            },
            sect,
        })
    }

    /// Bodies in [`Body::ALL`] order.
    pub fn bodies(&self) -> &[BodyPlacement] {
        &self.bodies
    }

    pub fn body(&self, body: Body) -> &BodyPlacement {
        // resolve() stores exactly one placement per body, in declaration order
        &self.bodies[body as usize]
    }

    pub fn ascendant(&self) -> &AnglePlacement {
        &self.ascendant
    }

    pub fn midheaven(&self) -> &AnglePlacement {
        &self.midheaven
    }

    pub fn part_of_fortune(&self) -> &LotPlacement {
        &self.part_of_fortune
    }

    pub fn sect(&self) -> Sect {
        self.sect
    }

    pub fn asc_sign(&self) -> Sign {
        self.ascendant.position.sign
    }

    /// Aspect participants: every body, then the Ascendant, then the Midheaven.
    pub fn aspect_points(&self) -> Vec<AspectPoint> {
        let mut points: Vec<AspectPoint> = self
            .bodies
            .iter()
            .map(|placement| AspectPoint {
                point: ChartPoint::Body(placement.body),
                longitude: placement.position.longitude,
            })
            .collect();
        for angle in [&self.ascendant, &self.midheaven] {
            points.push(AspectPoint {
                point: ChartPoint::Angle(angle.angle),
                longitude: angle.position.longitude,
            });
        }
        points
    }
}

fn finite(point: &str, longitude: f64) -> Result<f64, EphemerisError> {
    if longitude.is_finite() {
        Ok(longitude)
    } else {
        Err(EphemerisError::InvalidLongitude {
            point: point.to_string(),
            longitude,
        })
    }
}
