use chrono::{DateTime, Utc};
use tyche::ephemeris::{EphemerisProvider, FixedEphemeris, GeoLocation, RawPositions};
use tyche::error::{ChartError, EphemerisError};
use tyche::houses::Rank;
use tyche::report::Section;
use tyche::zodiac::{Body, Sect, Sign};
use tyche::{calculate, AnalysisSettings, BirthInput, DignityTables};
use std::cell::Cell;

const DAY_CHART: &str = include_str!("fixtures/day_chart.json");
const DAY_CHART_REPORT: &str = include_str!("fixtures/day_chart_report.txt");

fn input() -> BirthInput {
    BirthInput::parse("山田太郎", "1990/10/05", "06:30", "+09:00", "35.68", "139.76").unwrap()
}

fn run(provider: &dyn EphemerisProvider) -> Result<tyche::NatalReport, ChartError> {
    calculate(
        provider,
        &input(),
        &DignityTables::traditional(),
        &AnalysisSettings::default(),
    )
}

#[test]
fn test_day_chart_geometry() {
    let ephemeris = FixedEphemeris::from_json_str(DAY_CHART).unwrap();
    let natal = run(&ephemeris).unwrap();
    let chart = &natal.analysis.chart;

    assert_eq!(chart.asc_sign(), Sign::Aries);
    assert_eq!(chart.body(Body::Sun).position.sign, Sign::Libra);
    assert_eq!(chart.body(Body::Sun).house, 7);
    assert_eq!(chart.sect(), Sect::Day);
    assert_eq!(chart.body(Body::Moon).position.sign, Sign::Capricorn);
    assert_eq!(chart.body(Body::Moon).house, 10);
    // 3 + 285.5 - 190.5
    assert!((chart.part_of_fortune().position.longitude - 98.0).abs() < 1e-9);
    assert_eq!(chart.part_of_fortune().house, 4);
}

#[test]
fn test_day_chart_scores_and_ranks() {
    let ephemeris = FixedEphemeris::from_json_str(DAY_CHART).unwrap();
    let natal = run(&ephemeris).unwrap();

    let scored: Vec<Body> = natal.analysis.dignities.iter().map(|s| s.body).collect();
    assert_eq!(scored, Body::TRADITIONAL.to_vec());

    let sorted: Vec<i32> = natal.report.dignities().iter().map(|s| s.score).collect();
    assert_eq!(sorted, vec![7, 4, 3, 2, 1, -2, -9]);

    let houses = natal.report.houses();
    assert_eq!(houses[9].ruler, Body::Saturn);
    assert_eq!(houses[9].rank, Rank::S);
    assert_eq!(houses[4].ruler, Body::Sun);
    assert_eq!(houses[4].rank, Rank::D);
}

#[test]
fn test_day_chart_report_text() {
    let ephemeris = FixedEphemeris::from_json_str(DAY_CHART).unwrap();
    let natal = run(&ephemeris).unwrap();
    assert_eq!(natal.text(), DAY_CHART_REPORT.trim_end_matches('\n'));
}

#[test]
fn test_report_sections_in_fixed_order() {
    let ephemeris = FixedEphemeris::from_json_str(DAY_CHART).unwrap();
    let natal = run(&ephemeris).unwrap();
    let sections = natal.report.sections();
    assert_eq!(sections.len(), 5);
    assert!(matches!(sections[0], Section::Header(_)));
    assert!(matches!(sections[1], Section::Positions(_)));
    assert!(matches!(sections[4], Section::Aspects(_)));
    assert_eq!(natal.report.aspects().len(), 25);
}

#[test]
fn test_report_serializes_to_json() {
    let ephemeris = FixedEphemeris::from_json_str(DAY_CHART).unwrap();
    let natal = run(&ephemeris).unwrap();
    let value = serde_json::to_value(&natal.report).unwrap();
    let sections = value["sections"].as_array().unwrap();
    assert_eq!(sections[0]["section"], "header");
    assert_eq!(sections[0]["data"]["sect"], "day");
}

#[test]
fn test_same_input_same_report() {
    let ephemeris = FixedEphemeris::from_json_str(DAY_CHART).unwrap();
    assert_eq!(run(&ephemeris).unwrap().text(), run(&ephemeris).unwrap().text());
}

struct Failing;

impl EphemerisProvider for Failing {
    fn positions(
        &self,
        moment: DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<RawPositions, EphemerisError> {
        Err(EphemerisError::CalculationFailed {
            body: Body::Moon,
            datetime: moment,
            message: "date outside ephemeris range".to_string(),
        })
    }
}

#[test]
fn test_ephemeris_failure_aborts() {
    let err = run(&Failing).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Ephemeris(EphemerisError::CalculationFailed { body: Body::Moon, .. })
    ));
}

struct Counting {
    inner: FixedEphemeris,
    calls: Cell<u32>,
}

impl EphemerisProvider for Counting {
    fn positions(
        &self,
        moment: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPositions, EphemerisError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.positions(moment, location)
    }
}

#[test]
fn test_invalid_location_rejected_before_ephemeris() {
    let provider = Counting {
        inner: FixedEphemeris::from_json_str(DAY_CHART).unwrap(),
        calls: Cell::new(0),
    };
    let mut bad = input();
    bad.location.lat = 123.0;
    let err = calculate(
        &provider,
        &bad,
        &DignityTables::traditional(),
        &AnalysisSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput { field: "latitude", .. }));
    assert_eq!(provider.calls.get(), 0);
}

#[test]
fn test_missing_body_aborts() {
    let mut raw: RawPositions = serde_json::from_str(DAY_CHART).unwrap();
    raw.planets.remove(&Body::NorthNode);
    let err = run(&FixedEphemeris::new(raw)).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Ephemeris(EphemerisError::MissingBody(Body::NorthNode))
    ));
}
