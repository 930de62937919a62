//! Mensura Text - Quantity String Round-Trip
//!
//! Parses the two-token quantity form `"<number> <specifier>"` and
//! bridges quantities through serde via a detached raw form.
//!
//! Only the two-token form is handled; free-form unit expressions like
//! `"kg*m/s^2"` are not. The specifier may itself contain whitespace
//! (`"5 fl oz"`), which is why the split happens on the first
//! whitespace only.

use mensura_core::{Quantity, UnitSystem};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to read a quantity string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQuantityError {
    /// Nothing after the magnitude, e.g. `"18"`.
    #[error("missing unit specifier in {0:?}")]
    MissingSpecifier(String),
    /// The token before the specifier is not a number.
    #[error("invalid magnitude {0:?}")]
    InvalidMagnitude(String),
}

/// Parse `"<number> <specifier>"` into a quantity bound to `sys`.
///
/// The input is trimmed, then split at the first whitespace: the left
/// token is the magnitude, everything after it the specifier. An
/// unknown specifier is not an error; the factory mints a fresh leaf
/// for it, exactly as [`UnitSystem::unit`] does everywhere else.
pub fn parse_quantity(input: &str, sys: &UnitSystem) -> Result<Quantity, ParseQuantityError> {
    let input = input.trim();
    let (magnitude, specifier) = input
        .split_once(char::is_whitespace)
        .ok_or_else(|| ParseQuantityError::MissingSpecifier(input.to_string()))?;
    let magnitude: f64 = magnitude
        .parse()
        .map_err(|_| ParseQuantityError::InvalidMagnitude(magnitude.to_string()))?;
    Ok(sys.quantity(magnitude, specifier.trim_start()))
}

/// A quantity detached from any scope: what goes on the wire.
///
/// `Quantity` itself has no `Deserialize` because a specifier only
/// means something relative to a scope. The raw form carries plain
/// data and is rebound with [`resolve`](RawQuantity::resolve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuantity {
    pub magnitude: f64,
    pub specifier: String,
}

impl RawQuantity {
    /// Detach a quantity. Uses the unit's own specifier when it has
    /// one; an anonymous fraction is captured by its display form,
    /// which will not resolve back to the same unit.
    pub fn from_quantity(quantity: &Quantity) -> Self {
        let specifier = match quantity.unit().specifier() {
            Some(specifier) => specifier.to_string(),
            None => quantity.unit().to_string(),
        };
        RawQuantity {
            magnitude: quantity.magnitude(),
            specifier,
        }
    }

    /// Rebind to interned units in `sys`.
    pub fn resolve(&self, sys: &UnitSystem) -> Quantity {
        sys.quantity(self.magnitude, &self.specifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_catalog::define_units;

    fn scope() -> UnitSystem {
        let sys = UnitSystem::new();
        define_units(&sys);
        sys
    }

    #[test]
    fn test_parse_simple() {
        let sys = scope();
        let q = parse_quantity("18 m", &sys).unwrap();
        assert_eq!(q.magnitude(), 18.0);
        assert!(q.unit().ptr_eq(&sys.unit("m")));
        assert_eq!(q.to_string(), "18 m");
    }

    #[test]
    fn test_parse_signed_prefixed_scientific() {
        let sys = scope();
        let q = parse_quantity("-2.5 km", &sys).unwrap();
        assert_eq!(q.magnitude(), -2.5);
        assert!(q.unit().ptr_eq(&sys.unit("km")));

        let blast = parse_quantity("6.3e13 J", &sys).unwrap();
        assert_eq!(blast.magnitude(), 6.3e13);
    }

    #[test]
    fn test_parse_specifier_with_spaces() {
        let sys = scope();
        let q = parse_quantity("5 fl oz", &sys).unwrap();
        assert!(q.unit().ptr_eq(&sys.unit("fl oz")));
        assert_eq!(q.to_string(), "5 fl oz");
    }

    #[test]
    fn test_parse_trims_padding() {
        let sys = scope();
        let q = parse_quantity("  7.5   km ", &sys).unwrap();
        assert_eq!(q.magnitude(), 7.5);
        assert!(q.unit().ptr_eq(&sys.unit("km")));
    }

    #[test]
    fn test_missing_specifier() {
        let sys = scope();
        let err = parse_quantity("18", &sys).unwrap_err();
        assert_eq!(err, ParseQuantityError::MissingSpecifier("18".to_string()));
        assert_eq!(err.to_string(), "missing unit specifier in \"18\"");
        assert!(parse_quantity("   ", &sys).is_err());
    }

    #[test]
    fn test_invalid_magnitude() {
        let sys = scope();
        let err = parse_quantity("abc m", &sys).unwrap_err();
        assert_eq!(err, ParseQuantityError::InvalidMagnitude("abc".to_string()));
        assert_eq!(err.to_string(), "invalid magnitude \"abc\"");
    }

    #[test]
    fn test_unknown_specifier_mints_a_leaf() {
        let sys = scope();
        let q = parse_quantity("3 wug", &sys).unwrap();
        assert!(!q.unit().is_compatible(&sys.unit("m")));
        assert!(q.unit().ptr_eq(&sys.unit("wug")));
    }

    #[test]
    fn test_raw_quantity_round_trip() {
        let sys = scope();
        let q = sys.quantity(2.5, "km");
        let raw = RawQuantity::from_quantity(&q);
        assert_eq!(raw.specifier, "km");
        let back = raw.resolve(&sys);
        assert_eq!(back, q);
        assert!(back.unit().ptr_eq(q.unit()));
    }

    #[test]
    fn test_raw_quantity_serde() {
        let raw = RawQuantity {
            magnitude: 18.0,
            specifier: "m".to_string(),
        };
        let json = serde_json::to_string(&raw).unwrap();
        assert_eq!(json, r#"{"magnitude":18.0,"specifier":"m"}"#);

        let parsed: RawQuantity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, raw);
    }

    #[test]
    fn test_quantity_serializes_as_display_string() {
        let sys = scope();
        let json = serde_json::to_string(&sys.quantity(5.0, "fl oz")).unwrap();
        assert_eq!(json, "\"5 fl oz\"");
    }

    #[test]
    fn test_anonymous_fraction_resolves_to_a_fresh_leaf() {
        let sys = scope();
        let rate = sys
            .quantity(5.0, "m")
            .divide(&sys.quantity(1.0, "s"), &sys)
            .into_quantity()
            .unwrap();
        let raw = RawQuantity::from_quantity(&rate);
        assert_eq!(raw.specifier, "m / s");
        // The display form is not a specifier; resolving it mints an
        // unrelated leaf.
        assert!(!raw.resolve(&sys).unit().is_compatible(rate.unit()));
    }
}
