pub mod dignities;
pub mod sect;
pub mod tables;

pub use dignities::{DignitiesService, DignityRule, DignityScore};
pub use sect::{sect_status, sect_team, SectStatus};
pub use tables::{house_theme, DignityTables, SignDignities, TermBound, TriplicityRulers, HOUSE_THEMES};
