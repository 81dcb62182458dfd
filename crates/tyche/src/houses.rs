//! House strength ranking.
//!
//! Each whole-sign house is ranked by the essential dignity of the ruler of
//! the sign it occupies.

use crate::chart::whole_sign_house;
use crate::western::dignities::DignityScore;
use crate::western::tables::{house_theme, DignityTables};
use crate::zodiac::{Body, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    S,
    A,
    B,
    C,
    D,
}

impl Rank {
    /// Thresholds are inclusive lower bounds, checked from the top.
    pub fn from_score(score: i32) -> Rank {
        match score {
            s if s >= 7 => Rank::S,
            s if s >= 4 => Rank::A,
            s if s >= 0 => Rank::B,
            s if s >= -4 => Rank::C,
            _ => Rank::D,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseStrength {
    pub house: u8,
    pub sign: Sign,
    pub theme: &'static str,
    pub ruler: Body,
    /// The ruler's dignity score, or 0 when it was not scored
    #[serde(rename = "rulerScore")]
    pub ruler_score: i32,
    pub rank: Rank,
}

/// Rank houses 1 through 12 in order.
pub fn rank_houses(
    asc_sign: Sign,
    scores: &[DignityScore],
    tables: &DignityTables,
) -> Vec<HouseStrength> {
    (1..=12u8)
        .map(|house| {
            let sign = asc_sign.nth_after(usize::from(house) - 1);
            debug_assert_eq!(whole_sign_house(sign, asc_sign), house);
            let ruler = tables.ruler(sign);
            let ruler_score = scores
                .iter()
                .find(|score| score.body == ruler)
                .map(|score| score.score)
                .unwrap_or(0);
            HouseStrength {
                house,
                sign,
                theme: house_theme(house),
                ruler,
                ruler_score,
                rank: Rank::from_score(ruler_score),
            }
        })
        .collect()
}
