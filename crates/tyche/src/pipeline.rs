//! One natal calculation, from birth input to finished report.
//!
//! Each call resolves a fresh chart and derives everything from it; nothing is
//! cached between calls.

use crate::aspects::{Aspect, AspectCalculator, AspectSettings};
use crate::chart::Chart;
use crate::ephemeris::types::EphemerisProvider;
use crate::error::ChartError;
use crate::houses::{rank_houses, HouseStrength};
use crate::input::{validate_location, BirthInput};
use crate::report::{Report, ReportBuilder};
use crate::western::dignities::{DignitiesService, DignityScore};
use crate::western::tables::DignityTables;
use crate::zodiac::Body;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(flatten)]
    pub aspects: AspectSettings,
}

/// Everything derived from one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalAnalysis {
    pub chart: Chart,
    /// Traditional bodies in fixed order, unsorted
    pub dignities: Vec<DignityScore>,
    pub houses: Vec<HouseStrength>,
    pub aspects: Vec<Aspect>,
}

impl NatalAnalysis {
    pub fn compute(chart: Chart, tables: &DignityTables, settings: &AnalysisSettings) -> Self {
        let service = DignitiesService::new(tables);
        let dignities: Vec<DignityScore> = Body::TRADITIONAL
            .iter()
            .map(|&body| {
                let placement = chart.body(body);
                service.score(
                    body,
                    placement.position.sign,
                    placement.position.degree_in_sign,
                    chart.sect(),
                )
            })
            .collect();

        let houses = rank_houses(chart.asc_sign(), &dignities, tables);
        let aspects =
            AspectCalculator::new(settings.aspects).scan(&chart.aspect_points(), chart.asc_sign());

        Self {
            chart,
            dignities,
            houses,
            aspects,
        }
    }

    /// Assemble the report sections for `input`.
    pub fn report(&self, input: &BirthInput) -> Report {
        ReportBuilder::new()
            .header(input.name.clone(), input.local(), &self.chart)
            .positions(&self.chart)
            .dignities(&self.dignities)
            .houses(&self.houses)
            .aspects(&self.aspects)
            .build()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalReport {
    pub input: BirthInput,
    pub analysis: NatalAnalysis,
    pub report: Report,
}

impl NatalReport {
    /// The plain-text hand-off for the narrative generator.
    pub fn text(&self) -> String {
        self.report.to_string()
    }
}

/// Run the whole calculation. Input is validated before the ephemeris is
/// consulted, and any failure aborts without a partial report.
pub fn calculate(
    provider: &dyn EphemerisProvider,
    input: &BirthInput,
    tables: &DignityTables,
    settings: &AnalysisSettings,
) -> Result<NatalReport, ChartError> {
    validate_location(&input.location)?;
    let moment = input.utc()?;
    log::debug!(
        "calculating chart for {} at ({}, {})",
        moment,
        input.location.lat,
        input.location.lon
    );

    let raw = provider.positions(moment, &input.location)?;
    let chart = Chart::resolve(&raw)?;
    log::debug!(
        "chart resolved: asc {}, sect {:?}",
        chart.asc_sign(),
        chart.sect()
    );

    let analysis = NatalAnalysis::compute(chart, tables, settings);
    let report = analysis.report(input);

    Ok(NatalReport {
        input: input.clone(),
        analysis,
        report,
    })
}
