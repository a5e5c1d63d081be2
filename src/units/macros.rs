//! Macro for defining unit marker types.

/// Defines a unit marker struct together with its [`Unit`](super::Unit)
/// implementation, a plural `Quantity` alias and a one-unit constant.
macro_rules! define_unit {
    (
        $(#[$meta:meta])*
        $unit:ident, $alias:ident, $one:ident,
        symbol = $symbol:literal, dimension = $dim:ty, ratio = $ratio:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
        pub struct $unit;

        impl $crate::units::Unit for $unit {
            const RATIO: f64 = $ratio;
            type Dim = $dim;
            const SYMBOL: &'static str = $symbol;
        }

        #[doc = concat!("A quantity measured in [`", stringify!($unit), "`]s.")]
        pub type $alias = $crate::units::Quantity<$unit>;

        #[doc = concat!("One [`", stringify!($unit), "`].")]
        pub const $one: $alias = $alias::new(1.0);
    };
}

pub(crate) use define_unit;
