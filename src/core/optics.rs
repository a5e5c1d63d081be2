//! Optical instrument model: aperture and focal length with the classic
//! magnification and light-gathering formulas.

use serde::{Deserialize, Serialize};

use crate::core::error::{DomainResult, InvalidArgument};
use crate::units::length::Millimeters;
use crate::units::Simplify;

/// Reference human pupil diameter used for light-gathering comparisons.
pub const EYE_PUPIL_DIAMETER: Millimeters = Millimeters::new(7.0);

/// Decimal places kept by [`OpticalInstrument::light_gathering_power`].
const LIGHT_GATHERING_DECIMALS: i32 = 10;

/// An optical instrument described by its aperture and focal length.
///
/// Both attributes are in millimetres, validated at construction and fixed
/// for the lifetime of the value.
///
/// # Examples
///
/// ```
/// use fieldstation::units::length::Millimeters;
/// use fieldstation::OpticalInstrument;
///
/// let telescope = OpticalInstrument::new(Millimeters::new(120.0), Millimeters::new(600.0))?;
///
/// assert_eq!(telescope.aperture().value(), 120.0);
/// assert_eq!(telescope.focal_length().value(), 600.0);
/// # Ok::<(), fieldstation::InvalidArgument>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOpticalInstrument")]
pub struct OpticalInstrument {
    aperture: Millimeters,
    focal_length: Millimeters,
}

impl OpticalInstrument {
    /// Creates a new optical instrument.
    ///
    /// # Arguments
    ///
    /// * `aperture` - The clear aperture diameter
    /// * `focal_length` - The focal length of the primary optic
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if either argument is not a finite,
    /// strictly positive number.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldstation::units::length::Millimeters;
    /// use fieldstation::OpticalInstrument;
    ///
    /// assert!(OpticalInstrument::new(Millimeters::new(120.0), Millimeters::new(600.0)).is_ok());
    /// assert!(OpticalInstrument::new(Millimeters::new(0.0), Millimeters::new(600.0)).is_err());
    /// assert!(OpticalInstrument::new(Millimeters::new(120.0), Millimeters::new(-600.0)).is_err());
    /// ```
    pub fn new(aperture: Millimeters, focal_length: Millimeters) -> DomainResult<Self> {
        if !aperture.value().is_finite() || aperture.value() <= 0.0 {
            return Err(InvalidArgument::from(format!(
                "aperture must be a positive number, got {} mm",
                aperture.value()
            )));
        }
        if !focal_length.value().is_finite() || focal_length.value() <= 0.0 {
            return Err(InvalidArgument::from(format!(
                "focal length must be a positive number, got {} mm",
                focal_length.value()
            )));
        }

        Ok(Self {
            aperture,
            focal_length,
        })
    }

    /// Returns the clear aperture diameter.
    pub fn aperture(&self) -> Millimeters {
        self.aperture
    }

    /// Returns the focal length of the primary optic.
    pub fn focal_length(&self) -> Millimeters {
        self.focal_length
    }

    /// Returns the magnification obtained with the given eyepiece.
    ///
    /// The magnification is the dimensionless ratio of the primary focal
    /// length to the eyepiece focal length.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `eyepiece_focal_length` is not a
    /// finite, strictly positive number.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldstation::units::length::Millimeters;
    /// use fieldstation::OpticalInstrument;
    ///
    /// let telescope = OpticalInstrument::new(Millimeters::new(120.0), Millimeters::new(600.0))?;
    ///
    /// assert_eq!(telescope.magnification(Millimeters::new(20.0))?, 30.0);
    /// assert!(telescope.magnification(Millimeters::new(0.0)).is_err());
    /// # Ok::<(), fieldstation::InvalidArgument>(())
    /// ```
    pub fn magnification(&self, eyepiece_focal_length: Millimeters) -> DomainResult<f64> {
        if !eyepiece_focal_length.value().is_finite() || eyepiece_focal_length.value() <= 0.0 {
            return Err(InvalidArgument::from(format!(
                "eyepiece focal length must be a positive number, got {} mm",
                eyepiece_focal_length.value()
            )));
        }

        Ok((self.focal_length / eyepiece_focal_length).simplify().value())
    }

    /// Returns the light-gathering power relative to the naked eye.
    ///
    /// Computed as the square of the aperture-to-pupil diameter ratio, with
    /// [`EYE_PUPIL_DIAMETER`] as the reference pupil, rounded to 10 decimal
    /// places.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldstation::units::length::Millimeters;
    /// use fieldstation::OpticalInstrument;
    ///
    /// let telescope = OpticalInstrument::new(Millimeters::new(120.0), Millimeters::new(600.0))?;
    /// assert_eq!(telescope.light_gathering_power(), 293.8775510204);
    /// # Ok::<(), fieldstation::InvalidArgument>(())
    /// ```
    pub fn light_gathering_power(&self) -> f64 {
        let ratio = (self.aperture / EYE_PUPIL_DIAMETER).simplify().value();
        round_to_decimals(ratio * ratio, LIGHT_GATHERING_DECIMALS)
    }
}

fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Wire-format mirror of [`OpticalInstrument`]. Deserialization funnels
/// through [`OpticalInstrument::new`], so parsed values obey the same checks
/// as constructed ones.
#[derive(Deserialize)]
struct RawOpticalInstrument {
    aperture: f64,
    focal_length: f64,
}

impl TryFrom<RawOpticalInstrument> for OpticalInstrument {
    type Error = InvalidArgument;

    fn try_from(raw: RawOpticalInstrument) -> Result<Self, Self::Error> {
        OpticalInstrument::new(
            Millimeters::new(raw.aperture),
            Millimeters::new(raw.focal_length),
        )
    }
}
