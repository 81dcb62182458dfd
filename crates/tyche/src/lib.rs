pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod input;
pub mod narrative;
pub mod pipeline;
pub mod report;
pub mod western;
pub mod zodiac;

pub use aspects::{Aspect, AspectCalculator, AspectKind, AspectSettings};
pub use chart::Chart;
pub use ephemeris::{EphemerisProvider, FixedEphemeris, GeoLocation, RawPositions};
#[cfg(feature = "swiss-ephemeris")]
pub use ephemeris::SwissEphemerisAdapter;
pub use error::{ChartError, EphemerisError, TableError};
pub use houses::{HouseStrength, Rank};
pub use input::BirthInput;
pub use pipeline::{calculate, AnalysisSettings, NatalAnalysis, NatalReport};
pub use report::{Report, ReportBuilder};
pub use western::{DignitiesService, DignityScore, DignityTables};
pub use zodiac::{Body, Sect, Sign};
