//! Planetary sect membership.
//!
//! Sun, Jupiter and Saturn belong to the diurnal team; Moon, Venus and Mars to
//! the nocturnal one. Everything else is neutral.

use crate::zodiac::{Body, Sect};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectStatus {
    InSect,
    OutOfSect,
    Neutral,
}

/// The team a body belongs to, if any.
pub fn sect_team(body: Body) -> Option<Sect> {
    match body {
        Body::Sun | Body::Jupiter | Body::Saturn => Some(Sect::Day),
        Body::Moon | Body::Venus | Body::Mars => Some(Sect::Night),
        _ => None,
    }
}

pub fn sect_status(body: Body, chart_sect: Sect) -> SectStatus {
    match sect_team(body) {
        Some(team) if team == chart_sect => SectStatus::InSect,
        Some(_) => SectStatus::OutOfSect,
        None => SectStatus::Neutral,
    }
}
