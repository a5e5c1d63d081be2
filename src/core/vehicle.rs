//! Vehicle model: a speed-limited carrier with a fixed seating capacity.

use serde::{Deserialize, Serialize};

use crate::core::error::{DomainResult, InvalidArgument};
use crate::units::length::Kilometers;
use crate::units::time::Hours;
use crate::units::velocity::KilometersPerHour;
use crate::units::Simplify;

/// A vehicle described by its maximum speed and seating capacity.
///
/// Both attributes are validated at construction and fixed for the lifetime
/// of the value.
///
/// # Examples
///
/// ```
/// use fieldstation::units::velocity::KilometersPerHour;
/// use fieldstation::Vehicle;
///
/// let roadster = Vehicle::new(KilometersPerHour::new(120.0), 2)?;
///
/// assert_eq!(roadster.max_speed().value(), 120.0);
/// assert_eq!(roadster.capacity(), 2);
/// # Ok::<(), fieldstation::InvalidArgument>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVehicle")]
pub struct Vehicle {
    max_speed: KilometersPerHour,
    capacity: u32,
}

impl Vehicle {
    /// Creates a new vehicle.
    ///
    /// # Arguments
    ///
    /// * `max_speed` - The maximum speed the vehicle can sustain
    /// * `capacity` - The number of seats
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `max_speed` is not a finite, strictly
    /// positive number, or if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldstation::units::velocity::KilometersPerHour;
    /// use fieldstation::Vehicle;
    ///
    /// assert!(Vehicle::new(KilometersPerHour::new(120.0), 2).is_ok());
    /// assert!(Vehicle::new(KilometersPerHour::new(0.0), 2).is_err());
    /// assert!(Vehicle::new(KilometersPerHour::new(120.0), 0).is_err());
    /// ```
    pub fn new(max_speed: KilometersPerHour, capacity: u32) -> DomainResult<Self> {
        if !max_speed.value().is_finite() || max_speed.value() <= 0.0 {
            return Err(InvalidArgument::from(format!(
                "maximum speed must be a positive number, got {}",
                max_speed
            )));
        }
        if capacity == 0 {
            return Err(InvalidArgument::from(
                "capacity must be a positive integer",
            ));
        }

        Ok(Self {
            max_speed,
            capacity,
        })
    }

    /// Returns the maximum sustained speed.
    pub fn max_speed(&self) -> KilometersPerHour {
        self.max_speed
    }

    /// Returns the seating capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the time needed to cover `distance` at the maximum speed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `distance` is not a finite, strictly
    /// positive number.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldstation::units::length::Kilometers;
    /// use fieldstation::units::velocity::KilometersPerHour;
    /// use fieldstation::Vehicle;
    ///
    /// let roadster = Vehicle::new(KilometersPerHour::new(120.0), 2)?;
    /// let time = roadster.travel_time(Kilometers::new(240.0))?;
    ///
    /// assert_eq!(time.value(), 2.0);
    /// assert!(roadster.travel_time(Kilometers::new(-5.0)).is_err());
    /// # Ok::<(), fieldstation::InvalidArgument>(())
    /// ```
    pub fn travel_time(&self, distance: Kilometers) -> DomainResult<Hours> {
        if !distance.value().is_finite() || distance.value() <= 0.0 {
            return Err(InvalidArgument::from(format!(
                "distance must be a positive number, got {} km",
                distance.value()
            )));
        }

        Ok((distance / self.max_speed).simplify())
    }
}

/// Wire-format mirror of [`Vehicle`]. Deserialization funnels through
/// [`Vehicle::new`], so parsed values obey the same checks as constructed
/// ones.
#[derive(Deserialize)]
struct RawVehicle {
    max_speed: f64,
    capacity: u32,
}

impl TryFrom<RawVehicle> for Vehicle {
    type Error = InvalidArgument;

    fn try_from(raw: RawVehicle) -> Result<Self, Self::Error> {
        Vehicle::new(KilometersPerHour::new(raw.max_speed), raw.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::velocity::Velocity;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn kph(v: f64) -> KilometersPerHour {
        Velocity::new(v)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn stores_fields_unchanged() {
        let vehicle = Vehicle::new(kph(120.0), 2).unwrap();
        assert_eq!(vehicle.max_speed().value(), 120.0);
        assert_eq!(vehicle.capacity(), 2);
    }

    #[test]
    fn rejects_non_positive_speed() {
        assert!(Vehicle::new(kph(0.0), 2).is_err());
        assert!(Vehicle::new(kph(-120.0), 2).is_err());
    }

    #[test]
    fn rejects_non_finite_speed() {
        assert!(Vehicle::new(kph(f64::NAN), 2).is_err());
        assert!(Vehicle::new(kph(f64::INFINITY), 2).is_err());
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = Vehicle::new(kph(120.0), 0).unwrap_err();
        assert!(err.reason().contains("capacity"));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Travel time
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn travel_time_divides_distance_by_speed() {
        let vehicle = Vehicle::new(kph(120.0), 2).unwrap();
        let time = vehicle.travel_time(Kilometers::new(240.0)).unwrap();
        assert_eq!(time.value(), 2.0);
    }

    #[test]
    fn travel_time_handles_fractional_hours() {
        let vehicle = Vehicle::new(kph(90.0), 4).unwrap();
        let time = vehicle.travel_time(Kilometers::new(60.0)).unwrap();
        assert_abs_diff_eq!(time.value(), 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn travel_time_rejects_non_positive_distance() {
        let vehicle = Vehicle::new(kph(120.0), 2).unwrap();
        assert!(vehicle.travel_time(Kilometers::new(0.0)).is_err());
        assert!(vehicle.travel_time(Kilometers::new(-240.0)).is_err());
        assert!(vehicle.travel_time(Kilometers::new(f64::NAN)).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn json_roundtrip_preserves_fields() {
        let original = Vehicle::new(kph(120.0), 2).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: Vehicle = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn deserialization_validates_fields() {
        let err = serde_json::from_str::<Vehicle>(r#"{"max_speed":-1.0,"capacity":2}"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<Vehicle>(r#"{"max_speed":120.0,"capacity":0}"#);
        assert!(err.is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_positive_inputs_always_construct(
            speed in 1e-3..1e4f64,
            capacity in 1u32..1000
        ) {
            let vehicle = Vehicle::new(kph(speed), capacity).unwrap();
            prop_assert_eq!(vehicle.max_speed().value(), speed);
            prop_assert_eq!(vehicle.capacity(), capacity);
        }

        #[test]
        fn prop_travel_time_matches_division(
            speed in 1e-3..1e4f64,
            distance in 1e-3..1e6f64
        ) {
            let vehicle = Vehicle::new(kph(speed), 1).unwrap();
            let time = vehicle.travel_time(Kilometers::new(distance)).unwrap();
            prop_assert!((time.value() - distance / speed).abs() < 1e-9);
        }
    }
}
