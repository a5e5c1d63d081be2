//! Length units.
//!
//! The canonical scaling unit for this dimension is [`Meter`]
//! (`Meter::RATIO == 1.0`). All other length units are expressed as exact
//! ratios to metres.
//!
//! ```rust
//! use fieldstation::units::length::{Meter, Millimeters};
//!
//! let aperture = Millimeters::new(120.0);
//! assert_eq!(aperture.to::<Meter>().value(), 0.12);
//! ```

use super::macros::define_unit;
use super::{Dimension, Unit};

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {}

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

define_unit! {
    /// Metre (SI base unit).
    Meter, Meters, M,
    symbol = "m", dimension = Length, ratio = 1.0
}

define_unit! {
    /// Kilometre (`1000 m`).
    Kilometer, Kilometers, KM,
    symbol = "km", dimension = Length, ratio = 1_000.0
}

define_unit! {
    /// Centimetre (`1e-2 m`).
    Centimeter, Centimeters, CM,
    symbol = "cm", dimension = Length, ratio = 1e-2
}

define_unit! {
    /// Millimetre (`1e-3 m`).
    Millimeter, Millimeters, MM,
    symbol = "mm", dimension = Length, ratio = 1e-3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn km_to_m() {
        let km = Kilometers::new(1.0);
        assert_abs_diff_eq!(km.to::<Meter>().value(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn mm_to_m() {
        let mm = Millimeters::new(600.0);
        assert_abs_diff_eq!(mm.to::<Meter>().value(), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn cm_to_mm() {
        let cm = Centimeters::new(2.5);
        assert_abs_diff_eq!(cm.to::<Millimeter>().value(), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn one_unit_constants() {
        assert_eq!(M.value(), 1.0);
        assert_eq!(KM.to::<Meter>().value(), 1000.0);
        assert_eq!(MM.to::<Meter>().value(), 1e-3);
    }

    #[test]
    fn symbols() {
        assert_eq!(Meter::SYMBOL, "m");
        assert_eq!(Kilometer::SYMBOL, "km");
        assert_eq!(Centimeter::SYMBOL, "cm");
        assert_eq!(Millimeter::SYMBOL, "mm");
    }

    proptest! {
        #[test]
        fn prop_mm_m_roundtrip(v in 1e-6..1e9f64) {
            let mm = Millimeters::new(v);
            let back = mm.to::<Meter>().to::<Millimeter>();
            prop_assert!((back.value() - v).abs() < 1e-9 * v.max(1.0));
        }
    }
}
