//! Whole-sign geometry: house numbers, sect and the Part of Fortune.

use crate::zodiac::{normalize_degrees, Sect, Sign};

/// House number in `1..=12` for a point in `sign` when the Ascendant is in
/// `asc_sign`. The Ascendant's whole sign is House 1 regardless of degree.
pub fn whole_sign_house(sign: Sign, asc_sign: Sign) -> u8 {
    let offset = (sign.index() + 12 - asc_sign.index()) % 12;
    offset as u8 + 1
}

/// Day when the Sun sits in houses 7 through 12, the half above the horizon.
pub fn sect_from_sun_house(sun_house: u8) -> Sect {
    if (7..=12).contains(&sun_house) {
        Sect::Day
    } else {
        Sect::Night
    }
}

/// Absolute longitude of the Part of Fortune, in `[0, 360)`.
///
/// Day: `asc + moon - sun`. Night: `asc + sun - moon`.
pub fn part_of_fortune(asc: f64, sun: f64, moon: f64, sect: Sect) -> f64 {
    let raw = match sect {
        Sect::Day => asc + moon - sun,
        Sect::Night => asc + sun - moon,
    };
    normalize_degrees(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascendant_sign_is_first_house() {
        for sign in Sign::ALL {
            assert_eq!(whole_sign_house(sign, sign), 1);
        }
    }

    #[test]
    fn test_house_wraps_past_pisces() {
        assert_eq!(whole_sign_house(Sign::Aries, Sign::Pisces), 2);
        assert_eq!(whole_sign_house(Sign::Aquarius, Sign::Pisces), 12);
        assert_eq!(whole_sign_house(Sign::Capricorn, Sign::Aries), 10);
    }

    #[test]
    fn test_sect_boundaries() {
        assert_eq!(sect_from_sun_house(1), Sect::Night);
        assert_eq!(sect_from_sun_house(6), Sect::Night);
        assert_eq!(sect_from_sun_house(7), Sect::Day);
        assert_eq!(sect_from_sun_house(12), Sect::Day);
    }

    #[test]
    fn test_part_of_fortune_branches() {
        assert!((part_of_fortune(10.0, 190.0, 100.0, Sect::Day) - 280.0).abs() < 1e-9);
        assert!((part_of_fortune(10.0, 190.0, 100.0, Sect::Night) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_part_of_fortune_lands_on_boundary() {
        let pof = part_of_fortune(0.0, 30.0, 30.0, Sect::Day);
        assert_eq!(pof, 0.0);
        assert_eq!(Sign::from_longitude(pof), Sign::Aries);
    }
}
