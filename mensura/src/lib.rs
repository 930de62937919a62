//! Mensura - Unit-Aware Quantities
//!
//! Physical units and quantities with interned identity: adding metres
//! to seconds is an error, adding metres to kilometres converts.
//!
//! ```
//! use mensura::prelude::*;
//!
//! let sys = UnitSystem::new();
//! define_units(&sys);
//!
//! let total = sys.quantity(7.0, "m").add(&sys.quantity(11.0, "m")).unwrap();
//! assert_eq!(total.to_string(), "18 m");
//!
//! // Mixed scales convert through the shared dimension.
//! assert_eq!(sys.quantity(1.0, "km"), sys.quantity(1000.0, "m"));
//!
//! // Mixed dimensions refuse.
//! assert!(sys.quantity(5.0, "m").add(&sys.quantity(5.0, "s")).is_err());
//!
//! // Multiplication and division run the unit algebra.
//! let rate = sys.quantity(100.0, "m").divide(&sys.quantity(10.0, "s"), &sys);
//! assert_eq!(rate.to_string(), "10 m / s");
//! ```
//!
//! Scopes are self-contained, so custom systems build up from their
//! own leaves:
//!
//! ```
//! use mensura::prelude::*;
//!
//! let sys = UnitSystem::new();
//! sys.leaf("knut", "", "", false);
//! sys.scaled_unit("sickle", "knut", 29.0, "", "", false);
//! sys.scaled_unit("galleon", "sickle", 17.0, "", "", false);
//!
//! let fortune = sys.quantity(2.0, "galleon");
//! let in_knuts = fortune.convert_to(&sys.unit("knut")).unwrap();
//! assert_eq!(in_knuts.magnitude(), 986.0);
//! ```

pub use mensura_catalog::{
    define_base_si_units, define_complex_si_units, define_computer_units, define_imperial_units,
    define_novelty_units, define_time_units, define_units, define_volumes,
};
pub use mensura_core::{
    compose, is_prefixed, with_default, Canonical, ComposedUnit, IncompatibleUnits, LeafUnit,
    NamedUnit, Quantity, QuantityProduct, SiPrefix, Unit, UnitProduct, UnitSystem, PREFIXES,
};
pub use mensura_text::{parse_quantity, ParseQuantityError, RawQuantity};

/// The imports unit-aware code usually wants.
pub mod prelude {
    pub use mensura_catalog::define_units;
    pub use mensura_core::{
        with_default, IncompatibleUnits, Quantity, QuantityProduct, Unit, UnitProduct, UnitSystem,
    };
    pub use mensura_text::{parse_quantity, RawQuantity};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_parse_compose_convert_end_to_end() {
        let sys = UnitSystem::new();
        define_units(&sys);

        let speed = parse_quantity("100 km", &sys)
            .unwrap()
            .divide(&parse_quantity("1 h", &sys).unwrap(), &sys)
            .into_quantity()
            .unwrap();
        let furlongs_per_fortnight = sys
            .unit("fur")
            .divide(&sys.unit("fortnight"), &sys)
            .into_unit()
            .unwrap();

        let absurd = speed.convert_to(&furlongs_per_fortnight).unwrap();
        let relative = (absurd.magnitude() - 167024.58).abs() / 167024.58;
        assert!(relative < 1e-3, "got {}", absurd);
    }

    #[test]
    fn test_default_scope_access() {
        let converted = with_default(|sys| {
            define_units(sys);
            sys.quantity(1.0, "km").convert_to(&sys.unit("m")).unwrap()
        });
        assert_eq!(converted.magnitude(), 1000.0);
    }

    #[test]
    fn test_raw_quantity_rebinds_across_scopes() {
        let first = UnitSystem::new();
        define_units(&first);
        let raw = RawQuantity::from_quantity(&first.quantity(3.0, "smoot"));

        let second = UnitSystem::new();
        define_units(&second);
        let rebound = raw.resolve(&second);
        assert!(rebound.unit().ptr_eq(&second.unit("smoot")));
        assert_eq!(rebound.magnitude(), 3.0);
    }
}
