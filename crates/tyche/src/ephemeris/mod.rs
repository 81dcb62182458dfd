#[cfg(feature = "swiss-ephemeris")]
pub mod adapter;
pub mod fixed;
pub mod types;

#[cfg(feature = "swiss-ephemeris")]
pub use adapter::SwissEphemerisAdapter;
pub use fixed::FixedEphemeris;
pub use types::{AnglePositions, EphemerisProvider, GeoLocation, PlanetPosition, RawPositions};
