//! Essential dignity reference tables.
//!
//! Traditional rulerships, exaltations, detriments and falls, the Egyptian
//! terms, the Chaldean faces and the Dorotheus triplicity rulers. The tables
//! are a value: the scorer and house ranker borrow one instead of reaching for
//! globals, and a TOML override can replace the defaults after validation.

use crate::error::TableError;
use crate::zodiac::{Body, Element, Sect, Sign, SIGN_SPAN};
use serde::{Deserialize, Serialize};

/// Thematic labels of the twelve whole-sign houses, House 1 first.
pub const HOUSE_THEMES: [&str; 12] = [
    "本人・生命力",
    "金運・所有",
    "兄弟・通信",
    "家庭・晩年",
    "創造・恋愛・子供",
    "健康・労働",
    "結婚・対人",
    "遺産・死",
    "哲学・旅行",
    "天職・社会",
    "友人・希望",
    "秘密・障害",
];

/// Theme label for a house number in `1..=12`.
pub fn house_theme(house: u8) -> &'static str {
    HOUSE_THEMES[(usize::from(house).max(1) - 1) % 12]
}

/// One row of a sign's term table: the term runs up to (not including) `until`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermBound {
    pub until: f64,
    pub ruler: Body,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignDignities {
    pub sign: Sign,
    pub ruler: Body,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exaltation: Option<Body>,
    pub detriment: Body,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fall: Option<Body>,
    pub terms: [TermBound; 5],
    /// Decanic face rulers, one per 10° band
    pub faces: [Body; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriplicityRulers {
    pub element: Element,
    pub day: [Body; 3],
    pub night: [Body; 3],
}

/// Validated dignity tables. Entries are stored in zodiacal and elemental
/// order, so every lookup is a direct index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DignityTables {
    signs: Vec<SignDignities>,
    triplicities: Vec<TriplicityRulers>,
}

#[derive(Debug, Deserialize)]
struct TablesFile {
    signs: [SignDignities; 12],
    triplicities: [TriplicityRulers; 4],
}

impl DignityTables {
    /// Build tables from raw entries, checking the ordering and term invariants.
    pub fn new(
        signs: [SignDignities; 12],
        triplicities: [TriplicityRulers; 4],
    ) -> Result<Self, TableError> {
        let tables = Self {
            signs: signs.to_vec(),
            triplicities: triplicities.to_vec(),
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Parse and validate tables from TOML (`[[signs]]` and `[[triplicities]]` arrays).
    pub fn from_toml_str(text: &str) -> Result<Self, TableError> {
        let file: TablesFile = toml::from_str(text)?;
        Self::new(file.signs, file.triplicities)
    }

    /// Replace the entry for `entry.sign` and re-validate.
    pub fn with_sign(mut self, entry: SignDignities) -> Result<Self, TableError> {
        let index = entry.sign.index();
        self.signs[index] = entry;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        for (position, (entry, expected)) in self.signs.iter().zip(Sign::ALL).enumerate() {
            if entry.sign != expected {
                return Err(TableError::SignOutOfOrder {
                    position,
                    found: entry.sign,
                    expected,
                });
            }
            let increasing = entry
                .terms
                .windows(2)
                .all(|pair| pair[0].until < pair[1].until);
            if !increasing || entry.terms[0].until <= 0.0 {
                return Err(TableError::TermBoundsNotIncreasing { sign: entry.sign });
            }
            let last = entry.terms[entry.terms.len() - 1].until;
            if last != SIGN_SPAN {
                return Err(TableError::LastTermBound {
                    sign: entry.sign,
                    found: last,
                });
            }
        }
        for (position, (entry, expected)) in
            self.triplicities.iter().zip(Element::ALL).enumerate()
        {
            if entry.element != expected {
                return Err(TableError::ElementOutOfOrder {
                    position,
                    found: entry.element,
                    expected,
                });
            }
        }
        Ok(())
    }

    pub fn sign(&self, sign: Sign) -> &SignDignities {
        &self.signs[sign.index()]
    }

    /// Traditional domicile ruler.
    pub fn ruler(&self, sign: Sign) -> Body {
        self.sign(sign).ruler
    }

    pub fn exaltation(&self, sign: Sign) -> Option<Body> {
        self.sign(sign).exaltation
    }

    pub fn detriment(&self, sign: Sign) -> Body {
        self.sign(sign).detriment
    }

    pub fn fall(&self, sign: Sign) -> Option<Body> {
        self.sign(sign).fall
    }

    /// Ruler of the Egyptian term containing `degree_in_sign`: the first row
    /// whose upper bound exceeds the degree.
    pub fn term_ruler(&self, sign: Sign, degree_in_sign: f64) -> Body {
        let terms = &self.sign(sign).terms;
        terms
            .iter()
            .find(|term| degree_in_sign < term.until)
            .unwrap_or(&terms[terms.len() - 1])
            .ruler
    }

    /// Ruler of the decanic face containing `degree_in_sign`.
    pub fn face_ruler(&self, sign: Sign, degree_in_sign: f64) -> Body {
        let index = (degree_in_sign.max(0.0) / 10.0).floor() as usize;
        self.sign(sign).faces[index.min(2)]
    }

    /// The three triplicity rulers of the sign's element for the given sect.
    pub fn triplicity_rulers(&self, sign: Sign, sect: Sect) -> &[Body; 3] {
        let rulers = &self.triplicities[sign.element().index()];
        match sect {
            Sect::Day => &rulers.day,
            Sect::Night => &rulers.night,
        }
    }

    /// The default classical tables.
    pub fn traditional() -> Self {
        use Body::*;

        #[rustfmt::skip]
        let signs = [
            entry(Sign::Aries, Mars, Some(Sun), Venus, Some(Saturn),
                [(6.0, Jupiter), (12.0, Venus), (20.0, Mercury), (25.0, Mars), (30.0, Saturn)],
                [Mars, Sun, Venus]),
            entry(Sign::Taurus, Venus, Some(Moon), Mars, None,
                [(8.0, Venus), (14.0, Mercury), (22.0, Jupiter), (27.0, Saturn), (30.0, Mars)],
                [Mercury, Moon, Saturn]),
            entry(Sign::Gemini, Mercury, None, Jupiter, None,
                [(6.0, Mercury), (12.0, Jupiter), (17.0, Venus), (24.0, Mars), (30.0, Saturn)],
                [Jupiter, Mars, Sun]),
            entry(Sign::Cancer, Moon, Some(Jupiter), Saturn, Some(Mars),
                [(7.0, Mars), (13.0, Venus), (19.0, Mercury), (26.0, Jupiter), (30.0, Saturn)],
                [Venus, Mercury, Moon]),
            entry(Sign::Leo, Sun, None, Saturn, None,
                [(6.0, Jupiter), (11.0, Venus), (18.0, Saturn), (24.0, Mercury), (30.0, Mars)],
                [Saturn, Jupiter, Mars]),
            entry(Sign::Virgo, Mercury, Some(Mercury), Jupiter, Some(Venus),
                [(7.0, Mercury), (17.0, Venus), (21.0, Jupiter), (28.0, Mars), (30.0, Saturn)],
                [Sun, Venus, Mercury]),
            entry(Sign::Libra, Venus, Some(Saturn), Mars, Some(Sun),
                [(6.0, Saturn), (14.0, Mercury), (21.0, Jupiter), (28.0, Venus), (30.0, Mars)],
                [Moon, Saturn, Jupiter]),
            entry(Sign::Scorpio, Mars, None, Venus, Some(Moon),
                [(7.0, Mars), (11.0, Venus), (19.0, Mercury), (24.0, Jupiter), (30.0, Saturn)],
                [Mars, Sun, Venus]),
            entry(Sign::Sagittarius, Jupiter, None, Mercury, None,
                [(12.0, Jupiter), (17.0, Venus), (21.0, Mercury), (26.0, Saturn), (30.0, Mars)],
                [Mercury, Moon, Saturn]),
            entry(Sign::Capricorn, Saturn, Some(Mars), Moon, Some(Jupiter),
                [(7.0, Mercury), (14.0, Jupiter), (22.0, Venus), (26.0, Saturn), (30.0, Mars)],
                [Jupiter, Mars, Sun]),
            entry(Sign::Aquarius, Saturn, None, Sun, None,
                [(7.0, Mercury), (13.0, Venus), (20.0, Jupiter), (25.0, Mars), (30.0, Saturn)],
                [Venus, Mercury, Moon]),
            entry(Sign::Pisces, Jupiter, Some(Venus), Mercury, Some(Mercury),
                [(12.0, Venus), (16.0, Jupiter), (19.0, Mercury), (28.0, Mars), (30.0, Saturn)],
                [Saturn, Jupiter, Mars]),
        ];

        let triplicities = [
            TriplicityRulers {
                element: Element::Fire,
                day: [Sun, Jupiter, Saturn],
                night: [Jupiter, Sun, Saturn],
            },
            TriplicityRulers {
                element: Element::Earth,
                day: [Venus, Moon, Mars],
                night: [Moon, Venus, Mars],
            },
            TriplicityRulers {
                element: Element::Air,
                day: [Saturn, Mercury, Jupiter],
                night: [Mercury, Saturn, Jupiter],
            },
            TriplicityRulers {
                element: Element::Water,
                day: [Venus, Mars, Moon],
                night: [Mars, Venus, Moon],
            },
        ];

        Self {
            signs: signs.to_vec(),
            triplicities: triplicities.to_vec(),
        }
    }
}

impl Default for DignityTables {
    fn default() -> Self {
        Self::traditional()
    }
}

fn entry(
    sign: Sign,
    ruler: Body,
    exaltation: Option<Body>,
    detriment: Body,
    fall: Option<Body>,
    terms: [(f64, Body); 5],
    faces: [Body; 3],
) -> SignDignities {
    SignDignities {
        sign,
        ruler,
        exaltation,
        detriment,
        fall,
        terms: terms.map(|(until, ruler)| TermBound { until, ruler }),
        faces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traditional_tables_are_valid() {
        DignityTables::traditional().validate().unwrap();
    }

    #[test]
    fn test_traditional_rulers() {
        let tables = DignityTables::traditional();
        assert_eq!(tables.ruler(Sign::Aries), Body::Mars);
        assert_eq!(tables.ruler(Sign::Cancer), Body::Moon);
        assert_eq!(tables.ruler(Sign::Leo), Body::Sun);
        assert_eq!(tables.ruler(Sign::Scorpio), Body::Mars);
        assert_eq!(tables.ruler(Sign::Aquarius), Body::Saturn);
        assert_eq!(tables.ruler(Sign::Pisces), Body::Jupiter);
    }

    #[test]
    fn test_absent_exaltation_and_fall() {
        let tables = DignityTables::traditional();
        assert_eq!(tables.exaltation(Sign::Gemini), None);
        assert_eq!(tables.fall(Sign::Leo), None);
        assert_eq!(tables.fall(Sign::Taurus), None);
        assert_eq!(tables.fall(Sign::Libra), Some(Body::Sun));
    }

    #[test]
    fn test_term_lookup_uses_strict_upper_bound() {
        let tables = DignityTables::traditional();
        assert_eq!(tables.term_ruler(Sign::Aries, 0.0), Body::Jupiter);
        assert_eq!(tables.term_ruler(Sign::Aries, 5.99), Body::Jupiter);
        assert_eq!(tables.term_ruler(Sign::Aries, 6.0), Body::Venus);
        assert_eq!(tables.term_ruler(Sign::Aries, 29.99), Body::Saturn);
    }

    #[test]
    fn test_face_lookup_clamps_to_third_band() {
        let tables = DignityTables::traditional();
        assert_eq!(tables.face_ruler(Sign::Leo, 0.0), Body::Saturn);
        assert_eq!(tables.face_ruler(Sign::Leo, 10.0), Body::Jupiter);
        assert_eq!(tables.face_ruler(Sign::Leo, 29.99), Body::Mars);
        assert_eq!(tables.face_ruler(Sign::Leo, 30.0), Body::Mars);
    }

    #[test]
    fn test_triplicity_by_sect() {
        let tables = DignityTables::traditional();
        assert_eq!(
            tables.triplicity_rulers(Sign::Sagittarius, Sect::Day),
            &[Body::Sun, Body::Jupiter, Body::Saturn]
        );
        assert_eq!(
            tables.triplicity_rulers(Sign::Pisces, Sect::Night),
            &[Body::Mars, Body::Venus, Body::Moon]
        );
    }

    #[test]
    fn test_with_sign_rejects_bad_terms() {
        let tables = DignityTables::traditional();
        let mut aries = tables.sign(Sign::Aries).clone();
        aries.terms[4].until = 29.0;
        let err = tables.with_sign(aries).unwrap_err();
        assert!(matches!(err, TableError::LastTermBound { sign: Sign::Aries, .. }));
    }

    #[test]
    fn test_with_sign_rejects_decreasing_terms() {
        let tables = DignityTables::traditional();
        let mut leo = tables.sign(Sign::Leo).clone();
        leo.terms[1].until = 4.0;
        let err = tables.with_sign(leo).unwrap_err();
        assert!(matches!(err, TableError::TermBoundsNotIncreasing { sign: Sign::Leo }));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let tables = DignityTables::traditional();
        let text = toml::to_string(&tables).unwrap();
        let parsed = DignityTables::from_toml_str(&text).unwrap();
        assert_eq!(parsed, tables);
    }

    #[test]
    fn test_house_theme() {
        assert_eq!(house_theme(1), "本人・生命力");
        assert_eq!(house_theme(10), "天職・社会");
        assert_eq!(house_theme(12), "秘密・障害");
    }
}
