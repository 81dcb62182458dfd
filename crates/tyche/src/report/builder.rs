use crate::aspects::Aspect;
use crate::chart::Chart;
use crate::houses::HouseStrength;
use crate::report::types::{BodyRow, HeaderSection, PositionsSection, Report, Section};
use crate::western::dignities::DignityScore;
use crate::western::sect::sect_status;
use chrono::NaiveDateTime;

/// Collects section records in any order and emits them in report order.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    sections: Vec<Section>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, birth: NaiveDateTime, chart: &Chart) -> Self {
        self.sections.push(Section::Header(HeaderSection {
            name: name.into(),
            birth,
            sect: chart.sect(),
        }));
        self
    }

    pub fn positions(mut self, chart: &Chart) -> Self {
        let bodies = chart
            .bodies()
            .iter()
            .map(|placement| BodyRow {
                placement: *placement,
                sect_status: sect_status(placement.body, chart.sect()),
            })
            .collect();
        self.sections.push(Section::Positions(PositionsSection {
            bodies,
            ascendant: *chart.ascendant(),
            midheaven: *chart.midheaven(),
            part_of_fortune: *chart.part_of_fortune(),
        }));
        self
    }

    /// Sorted by score descending. The sort is stable, so ties keep the
    /// order the scores were given in.
    pub fn dignities(mut self, scores: &[DignityScore]) -> Self {
        let mut sorted = scores.to_vec();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        self.sections.push(Section::Dignities(sorted));
        self
    }

    pub fn houses(mut self, houses: &[HouseStrength]) -> Self {
        self.sections.push(Section::Houses(houses.to_vec()));
        self
    }

    pub fn aspects(mut self, aspects: &[Aspect]) -> Self {
        self.sections.push(Section::Aspects(aspects.to_vec()));
        self
    }

    pub fn build(mut self) -> Report {
        self.sections.sort_by_key(Section::order);
        Report {
            sections: self.sections,
        }
    }
}
