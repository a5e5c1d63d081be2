//! Plant model: a growing organism with a measured height and age.

use serde::{Deserialize, Serialize};

use crate::core::error::{DomainResult, InvalidArgument};
use crate::units::length::Meters;

/// Message returned by [`Plant::photosynthesize`].
pub const PHOTOSYNTHESIS_REPORT: &str = "The plant is performing photosynthesis.";

/// A plant described by its height and age in years.
///
/// Both attributes are validated at construction and fixed for the lifetime
/// of the value.
///
/// # Examples
///
/// ```
/// use fieldstation::units::length::Meters;
/// use fieldstation::Plant;
///
/// let oak = Plant::new(Meters::new(10.5), 5)?;
///
/// assert_eq!(oak.height().value(), 10.5);
/// assert_eq!(oak.age(), 5);
/// # Ok::<(), fieldstation::InvalidArgument>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlant")]
pub struct Plant {
    height: Meters,
    age: u32,
}

impl Plant {
    /// Creates a new plant.
    ///
    /// # Arguments
    ///
    /// * `height` - The measured height of the plant
    /// * `age` - The age of the plant in whole years
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `height` is not a finite, strictly
    /// positive number. An age of zero (a seedling) is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldstation::units::length::Meters;
    /// use fieldstation::Plant;
    ///
    /// assert!(Plant::new(Meters::new(0.4), 0).is_ok());
    /// assert!(Plant::new(Meters::new(0.0), 5).is_err());
    /// assert!(Plant::new(Meters::new(-1.0), 5).is_err());
    /// ```
    pub fn new(height: Meters, age: u32) -> DomainResult<Self> {
        if !height.value().is_finite() || height.value() <= 0.0 {
            return Err(InvalidArgument::from(format!(
                "height must be a positive number, got {} m",
                height.value()
            )));
        }

        Ok(Self { height, age })
    }

    /// Returns the measured height.
    pub fn height(&self) -> Meters {
        self.height
    }

    /// Returns the age in whole years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Reports the photosynthesis process.
    ///
    /// Always returns [`PHOTOSYNTHESIS_REPORT`], independent of the stored
    /// fields. No side effects, no failure modes.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldstation::units::length::Meters;
    /// use fieldstation::{Plant, PHOTOSYNTHESIS_REPORT};
    ///
    /// let oak = Plant::new(Meters::new(10.5), 5)?;
    /// assert_eq!(oak.photosynthesize(), PHOTOSYNTHESIS_REPORT);
    /// # Ok::<(), fieldstation::InvalidArgument>(())
    /// ```
    pub fn photosynthesize(&self) -> &'static str {
        PHOTOSYNTHESIS_REPORT
    }
}

/// Wire-format mirror of [`Plant`]. Deserialization funnels through
/// [`Plant::new`], so parsed values obey the same checks as constructed ones.
#[derive(Deserialize)]
struct RawPlant {
    height: f64,
    age: u32,
}

impl TryFrom<RawPlant> for Plant {
    type Error = InvalidArgument;

    fn try_from(raw: RawPlant) -> Result<Self, Self::Error> {
        Plant::new(Meters::new(raw.height), raw.age)
    }
}
