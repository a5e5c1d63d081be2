//! Unit types and traits.

use std::fmt::{Debug, Display, Formatter, Result};
use std::marker::PhantomData;

use super::dimension::{Dimension, Dimensionless, DivDim};
use super::quantity::Quantity;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the conversion factor from this unit to the *canonical
///   scaling unit* of the same dimension. Example: with metres canonical
///   (`Meter::RATIO == 1.0`), kilometres use `Kilometer::RATIO == 1000.0`
///   because `1 km = 1000 m`.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`).
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `RATIO` must be finite and non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-canonical conversion factor.
    const RATIO: f64;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol, shown by [`std::fmt::Display`].
    const SYMBOL: &'static str;
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D` and carries both the dimensional
/// information and the scaling ratio between the constituent units. Dividing
/// a `Quantity<N>` by a `Quantity<D>` produces a `Quantity<Per<N, D>>`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const RATIO: f64 = N::RATIO / D::RATIO;
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";
}

impl<N: Unit, D: Unit> Display for Quantity<Per<N, D>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}/{}", self.value(), N::SYMBOL, D::SYMBOL)
    }
}

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` has a conversion ratio of 1.0 and an empty symbol. It models
/// the result of simplifying a same-unit ratio (e.g. `Millimeters /
/// Millimeters`) into a plain number-like `Quantity<Unitless>`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const RATIO: f64 = 1.0;
    type Dim = Dimensionless;
    const SYMBOL: &'static str = "";
}

impl Display for Quantity<Unitless> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value())
    }
}

/// Trait for simplifying composite unit types.
///
/// Reduces unit expressions to simpler forms: `Per<U, U>` to [`Unitless`]
/// and `Per<N, Per<N, D>>` back to `D`.
pub trait Simplify {
    /// The simplified unit type.
    type Out: Unit;
    /// Convert this quantity to its simplified unit.
    fn simplify(self) -> Quantity<Self::Out>;
}

impl<U: Unit> Simplify for Quantity<Per<U, U>> {
    type Out = Unitless;
    /// ```rust
    /// use fieldstation::units::length::Millimeters;
    /// use fieldstation::units::{Quantity, Simplify, Unitless};
    ///
    /// let ratio = Millimeters::new(600.0) / Millimeters::new(20.0);
    /// let unitless: Quantity<Unitless> = ratio.simplify();
    /// assert!((unitless.value() - 30.0).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Quantity<Unitless> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit> Simplify for Quantity<Per<N, Per<N, D>>> {
    type Out = D;
    /// ```rust
    /// use fieldstation::units::length::{Kilometer, Kilometers};
    /// use fieldstation::units::time::{Hour, Hours};
    /// use fieldstation::units::velocity::Velocity;
    /// use fieldstation::units::Simplify;
    ///
    /// let speed: Velocity<Kilometer, Hour> = Velocity::new(60.0);
    /// let time: Hours = (Kilometers::new(90.0) / speed).simplify();
    /// assert!((time.value() - 1.5).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Quantity<D> {
        Quantity::new(self.value())
    }
}
