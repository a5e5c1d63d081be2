//! Error types for domain model operations.

/// Result type for domain model operations
pub type DomainResult<T> = Result<T, InvalidArgument>;

/// Error returned when a constructor or method receives a parameter outside
/// its required range.
///
/// This is the only error kind in the crate: every rejected speed, height,
/// aperture or distance surfaces as an `InvalidArgument` carrying a
/// human-readable reason. Errors are never recovered internally; they
/// propagate directly to the caller.
///
/// ```rust
/// use fieldstation::units::velocity::KilometersPerHour;
/// use fieldstation::Vehicle;
///
/// let err = Vehicle::new(KilometersPerHour::new(-10.0), 2).unwrap_err();
/// assert!(err.reason().contains("maximum speed"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid argument: {0}")]
pub struct InvalidArgument(String);

impl InvalidArgument {
    /// Describes why the parameter was rejected.
    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl From<String> for InvalidArgument {
    fn from(reason: String) -> Self {
        InvalidArgument(reason)
    }
}

impl From<&str> for InvalidArgument {
    fn from(reason: &str) -> Self {
        InvalidArgument(reason.to_string())
    }
}
