//! Validated domain models for a small field-station inventory.
//!
//! This crate defines three independent, immutable value objects (a
//! [`Vehicle`], a [`Plant`] and an [`OpticalInstrument`]) together with a
//! compact strongly-typed quantities layer under [`units`]. Each model
//! validates its attributes at construction, stores them unchanged for the
//! lifetime of the value, and exposes one or two pure computations.
//!
//! All validation failures surface as the single error kind
//! [`InvalidArgument`]; nothing in the crate panics on bad input.
//!
//! # Quick start
//!
//! ```rust
//! use fieldstation::units::length::{Kilometers, Millimeters};
//! use fieldstation::units::velocity::KilometersPerHour;
//! use fieldstation::{OpticalInstrument, Vehicle};
//!
//! # fn main() -> Result<(), fieldstation::InvalidArgument> {
//! let roadster = Vehicle::new(KilometersPerHour::new(120.0), 2)?;
//! assert_eq!(roadster.travel_time(Kilometers::new(240.0))?.value(), 2.0);
//!
//! let telescope = OpticalInstrument::new(Millimeters::new(120.0), Millimeters::new(600.0))?;
//! assert_eq!(telescope.magnification(Millimeters::new(20.0))?, 30.0);
//! assert_eq!(telescope.light_gathering_power(), 293.8775510204);
//! # Ok(())
//! # }
//! ```
//!
//! Invalid parameters are rejected at the boundary:
//!
//! ```rust
//! use fieldstation::units::length::Meters;
//! use fieldstation::Plant;
//!
//! assert!(Plant::new(Meters::new(-1.0), 5).is_err());
//! ```

pub mod core;
pub mod units;

pub use crate::core::error::{DomainResult, InvalidArgument};
pub use crate::core::optics::{OpticalInstrument, EYE_PUPIL_DIAMETER};
pub use crate::core::plant::{Plant, PHOTOSYNTHESIS_REPORT};
pub use crate::core::vehicle::Vehicle;
