use crate::aspects::Aspect;
use crate::chart::{AnglePlacement, BodyPlacement, LotPlacement};
use crate::houses::HouseStrength;
use crate::western::dignities::DignityScore;
use crate::western::sect::SectStatus;
use crate::zodiac::Sect;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderSection {
    pub name: String,
    /// Local civil time of birth, as entered
    pub birth: NaiveDateTime,
    pub sect: Sect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyRow {
    #[serde(flatten)]
    pub placement: BodyPlacement,
    #[serde(rename = "sectStatus")]
    pub sect_status: SectStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionsSection {
    pub bodies: Vec<BodyRow>,
    pub ascendant: AnglePlacement,
    pub midheaven: AnglePlacement,
    #[serde(rename = "partOfFortune")]
    pub part_of_fortune: LotPlacement,
}

/// One immutable block of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", content = "data", rename_all = "snake_case")]
pub enum Section {
    Header(HeaderSection),
    Positions(PositionsSection),
    /// Sorted by score, highest first
    Dignities(Vec<DignityScore>),
    /// Houses 1 through 12
    Houses(Vec<HouseStrength>),
    /// In pair enumeration order
    Aspects(Vec<Aspect>),
}

impl Section {
    /// Position of the section in the rendered report.
    pub fn order(&self) -> u8 {
        match self {
            Section::Header(_) => 0,
            Section::Positions(_) => 1,
            Section::Dignities(_) => 2,
            Section::Houses(_) => 3,
            Section::Aspects(_) => 4,
        }
    }
}

/// The assembled report. Its text form is produced by `Display`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub(crate) sections: Vec<Section>,
}

impl Report {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn header(&self) -> Option<&HeaderSection> {
        self.sections.iter().find_map(|section| match section {
            Section::Header(header) => Some(header),
            _ => None,
        })
    }

    pub fn dignities(&self) -> &[DignityScore] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Dignities(scores) => Some(scores.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn houses(&self) -> &[HouseStrength] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Houses(houses) => Some(houses.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn aspects(&self) -> &[Aspect] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Aspects(aspects) => Some(aspects.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}
