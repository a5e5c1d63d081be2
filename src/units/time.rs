//! Time units.
//!
//! The canonical scaling unit for this dimension is [`Second`]
//! (`Second::RATIO == 1.0`). Civil units use the conventional mappings
//! `1 min = 60 s` and `1 h = 3600 s`.
//!
//! ```rust
//! use fieldstation::units::time::{Hours, Second};
//!
//! let half_hour = Hours::new(0.5);
//! assert_eq!(half_hour.to::<Second>().value(), 1800.0);
//! ```

use super::macros::define_unit;
use super::{Dimension, Unit};

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {}

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

define_unit! {
    /// Second (SI base unit).
    Second, Seconds, SEC,
    symbol = "s", dimension = Time, ratio = 1.0
}

define_unit! {
    /// Minute (`60 s`).
    Minute, Minutes, MIN,
    symbol = "min", dimension = Time, ratio = 60.0
}

define_unit! {
    /// Hour (`3600 s`).
    Hour, Hours, HOUR,
    symbol = "h", dimension = Time, ratio = 3_600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hours_to_seconds() {
        let h = Hours::new(2.0);
        assert_abs_diff_eq!(h.to::<Second>().value(), 7200.0, epsilon = 1e-9);
    }

    #[test]
    fn minutes_to_hours() {
        let m = Minutes::new(90.0);
        assert_abs_diff_eq!(m.to::<Hour>().value(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn one_unit_constants() {
        assert_eq!(SEC.value(), 1.0);
        assert_eq!(MIN.to::<Second>().value(), 60.0);
        assert_eq!(HOUR.to::<Second>().value(), 3600.0);
    }
}
