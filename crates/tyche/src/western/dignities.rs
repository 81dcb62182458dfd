//! Essential dignity scoring for Western astrology.
//!
//! Each rule is evaluated independently and every rule that applies adds its
//! delta, so a body can be ruler and in its own term at the same time. A body
//! with no positive dignity at all is peregrine and loses five more points.

use crate::western::tables::DignityTables;
use crate::zodiac::{Body, Sect, Sign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DignityRule {
    Rulership,
    Exaltation,
    Triplicity,
    Term,
    Face,
    Detriment,
    Fall,
    Peregrine,
}

impl DignityRule {
    pub fn delta(self) -> i32 {
        match self {
            DignityRule::Rulership => 5,
            DignityRule::Exaltation => 4,
            DignityRule::Triplicity => 3,
            DignityRule::Term => 2,
            DignityRule::Face => 1,
            DignityRule::Detriment => -5,
            DignityRule::Fall => -4,
            DignityRule::Peregrine => -5,
        }
    }

    /// Trace label as shown in the dignity table, e.g. `Ruler(+5)`.
    pub fn label(self) -> &'static str {
        match self {
            DignityRule::Rulership => "Ruler(+5)",
            DignityRule::Exaltation => "Exalt(+4)",
            DignityRule::Triplicity => "Trip(+3)",
            DignityRule::Term => "Term(+2)",
            DignityRule::Face => "Face(+1)",
            DignityRule::Detriment => "Detriment(-5)",
            DignityRule::Fall => "Fall(-4)",
            DignityRule::Peregrine => "Peregrine(-5)",
        }
    }

    pub fn is_positive(self) -> bool {
        self.delta() > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DignityScore {
    pub body: Body,
    pub sign: Sign,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
    pub score: i32,
    /// Rules that fired, in evaluation order
    pub rules: Vec<DignityRule>,
}

impl DignityScore {
    pub fn is_peregrine(&self) -> bool {
        self.rules.contains(&DignityRule::Peregrine)
    }

    /// Comma separated rule labels, e.g. `Ruler(+5), Term(+2)`.
    pub fn trace(&self) -> String {
        self.rules
            .iter()
            .map(|rule| rule.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub struct DignitiesService<'a> {
    tables: &'a DignityTables,
}

impl<'a> DignitiesService<'a> {
    pub fn new(tables: &'a DignityTables) -> Self {
        Self { tables }
    }

    /// Score one body at a sign and degree for a day or night chart.
    pub fn score(&self, body: Body, sign: Sign, degree_in_sign: f64, sect: Sect) -> DignityScore {
        let tables = self.tables;
        let mut rules = Vec::new();

        if tables.ruler(sign) == body {
            rules.push(DignityRule::Rulership);
        }
        if tables.exaltation(sign) == Some(body) {
            rules.push(DignityRule::Exaltation);
        }
        if tables.triplicity_rulers(sign, sect).contains(&body) {
            rules.push(DignityRule::Triplicity);
        }
        if tables.term_ruler(sign, degree_in_sign) == body {
            rules.push(DignityRule::Term);
        }
        if tables.face_ruler(sign, degree_in_sign) == body {
            rules.push(DignityRule::Face);
        }
        if tables.detriment(sign) == body {
            rules.push(DignityRule::Detriment);
        }
        if tables.fall(sign) == Some(body) {
            rules.push(DignityRule::Fall);
        }
        if !rules.iter().any(|rule| rule.is_positive()) {
            rules.push(DignityRule::Peregrine);
        }

        DignityScore {
            body,
            sign,
            degree_in_sign,
            score: rules.iter().map(|rule| rule.delta()).sum(),
            rules,
        }
    }
}
