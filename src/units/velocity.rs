//! Velocity unit aliases (`Length / Time`).
//!
//! No standalone velocity units are introduced: every velocity is represented
//! as `Length / Time` at the type level, so conversions are handled by the
//! underlying length and time units.
//!
//! ```rust
//! use fieldstation::units::length::{Kilometer, Kilometers};
//! use fieldstation::units::time::{Hour, Hours};
//! use fieldstation::units::velocity::KilometersPerHour;
//!
//! let v: KilometersPerHour = Kilometers::new(120.0) / Hours::new(1.0);
//! assert_eq!(v.value(), 120.0);
//! ```

use super::length::{Kilometer, Length};
use super::time::{Hour, Time};
use super::{DivDim, Per, Quantity, Unit};

/// Dimension alias for velocities (`Length / Time`).
pub type VelocityDim = DivDim<Length, Time>;

/// Marker trait for any unit whose dimension is [`VelocityDim`].
pub trait VelocityUnit: Unit<Dim = VelocityDim> {}
impl<T: Unit<Dim = VelocityDim>> VelocityUnit for T {}

/// A velocity quantity parameterized by length and time units.
pub type Velocity<N, D> = Quantity<Per<N, D>>;

/// Road-speed alias used by the vehicle model.
pub type KilometersPerHour = Velocity<Kilometer, Hour>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometers, Meter, Meters};
    use crate::units::time::{Hours, Second, Seconds};
    use crate::units::Simplify;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions between velocity units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn km_per_h_to_m_per_s() {
        let v: KilometersPerHour = Velocity::new(3.6);
        let v_mps: Velocity<Meter, Second> = v.to();
        assert_abs_diff_eq!(v_mps.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn m_per_s_to_km_per_h() {
        let v: Velocity<Meter, Second> = Velocity::new(10.0);
        let v_kph: KilometersPerHour = v.to();
        assert_abs_diff_eq!(v_kph.value(), 36.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Velocity algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn length_div_time_is_velocity() {
        let v: KilometersPerHour = Kilometers::new(300.0) / Hours::new(2.5);
        assert_abs_diff_eq!(v.value(), 120.0, epsilon = 1e-12);
    }

    #[test]
    fn velocity_times_time_is_length() {
        let v: KilometersPerHour = Velocity::new(80.0);
        let d: Kilometers = v * Hours::new(1.5);
        assert_abs_diff_eq!(d.value(), 120.0, epsilon = 1e-12);
    }

    #[test]
    fn length_div_velocity_simplifies_to_time() {
        let v: KilometersPerHour = Velocity::new(120.0);
        let t: Hours = (Kilometers::new(240.0) / v).simplify();
        assert_abs_diff_eq!(t.value(), 2.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_kph_mps_roundtrip(v in 1e-6..1e6f64) {
            let kph: KilometersPerHour = Velocity::new(v);
            let back: KilometersPerHour = kph.to::<Per<Meter, Second>>().to();
            prop_assert!((back.value() - v).abs() < 1e-9 * v.max(1.0));
        }

        #[test]
        fn prop_travel_time_recovers_distance(
            speed in 1e-3..1e4f64,
            time in 1e-3..1e4f64
        ) {
            let v: KilometersPerHour = Velocity::new(speed);
            let d: Kilometers = v * Hours::new(time);
            let t: Hours = (d / v).simplify();
            prop_assert!((t.value() - time).abs() / time < 1e-12);
        }

        #[test]
        fn prop_velocity_never_mixes_units(v in 1e-3..1e3f64) {
            let mps: Velocity<Meter, Second> = Meters::new(v) / Seconds::new(1.0);
            let kph: KilometersPerHour = mps.to();
            // 1 m/s = 3.6 km/h
            prop_assert!((kph.value() / mps.value() - 3.6).abs() < 1e-9);
        }
    }
}
