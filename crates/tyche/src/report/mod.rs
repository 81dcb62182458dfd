//! Report assembly.
//!
//! Results are collected into immutable section records by [`ReportBuilder`]
//! and turned into text only when the [`Report`] is displayed.

pub mod builder;
pub mod labels;
pub mod render;
pub mod types;

pub use builder::ReportBuilder;
pub use types::{BodyRow, HeaderSection, PositionsSection, Report, Section};
