//! Named units: a specifier bound to a previously built unit value

use std::fmt;

use crate::unit::Unit;

/// A unit value with its own specifier and display name, e.g. `km`
/// wrapping the fraction 1000 × metre, or `Hz` wrapping 1 / second.
///
/// Named units are transparent to the algebra: `canonical()` and
/// `squeeze()` answer for the wrapped unit, so a named unit converts
/// and compares exactly like the fraction it names. The name does not
/// survive arithmetic: multiplying `km` by anything yields an
/// anonymous composed unit.
///
/// Registration is first-definition-wins: asking the scope for an
/// already-bound specifier returns the original binding and ignores the
/// new one (see [`UnitSystem::named`](crate::UnitSystem::named)).
#[derive(Debug)]
pub struct NamedUnit {
    specifier: String,
    symbol: String,
    name: String,
    si: bool,
    unit: Unit,
}

impl NamedUnit {
    /// Wrap `unit` under `specifier`. An empty `symbol` falls back to
    /// the specifier. Interning happens in the scope factories.
    pub(crate) fn new(specifier: &str, symbol: &str, name: &str, is_si: bool, unit: Unit) -> Self {
        let symbol = if symbol.is_empty() { specifier } else { symbol };
        NamedUnit {
            specifier: specifier.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            si: is_si,
            unit,
        }
    }

    /// The unique registry key, e.g. `"km"`.
    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    /// The display symbol (defaults to the specifier).
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The long display name, possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether SI prefixes may attach to this unit.
    pub fn is_si(&self) -> bool {
        self.si
    }

    /// The wrapped unit value the name stands for.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }
}

impl fmt::Display for NamedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use crate::compose::compose;
    use crate::registry::UnitSystem;
    use crate::unit::Unit;

    #[test]
    fn test_display_uses_symbol_not_structure() {
        let sys = UnitSystem::new();
        sys.leaf("m", "", "", true);
        let km = sys.scaled_unit("km", "m", 1000.0, "", "kilometre", false);
        assert_eq!(km.to_string(), "km");
        assert_eq!(km.name(), "kilometre");
    }

    #[test]
    fn test_transparent_for_compatibility() {
        let sys = UnitSystem::new();
        let m = sys.unit("m");
        let km = sys.scaled_unit("km", "m", 1000.0, "", "", false);
        let raw = compose(vec![m.clone()], Vec::new(), 1000.0, &sys)
            .into_unit()
            .unwrap();
        assert!(km.is_compatible(&m));
        assert_eq!(km, raw);
    }

    #[test]
    fn test_name_does_not_survive_arithmetic() {
        let sys = UnitSystem::new();
        sys.leaf("m", "", "", true);
        let km = sys.scaled_unit("km", "m", 1000.0, "", "", false);
        let s = sys.unit("s");
        let product = km.multiply(&s, &sys).into_unit().unwrap();
        assert!(matches!(product, Unit::Composed(_)));
        assert_eq!(product.to_string(), "m * s");
        assert_eq!(product.squeeze(), 1000.0);
    }

    #[test]
    fn test_first_definition_wins() {
        let sys = UnitSystem::new();
        sys.leaf("m", "", "", true);
        sys.leaf("s", "", "", true);
        let first = sys.scaled_unit("league", "m", 4828.032, "", "", false);
        let second = sys.scaled_unit("league", "s", 60.0, "", "", false);
        assert!(first.ptr_eq(&second));
        assert_eq!(second.squeeze(), 4828.032);
    }

    #[test]
    fn test_named_unit_may_wrap_a_leaf() {
        let sys = UnitSystem::new();
        let m = sys.unit("m");
        // A multiplier of exactly 1 collapses to the base leaf before naming.
        let metre_alias = sys.scaled_unit("metre", "m", 1.0, "", "", false);
        match &metre_alias {
            Unit::Named(named) => assert!(named.unit().ptr_eq(&m)),
            other => panic!("expected a named unit, got {other:?}"),
        }
        assert_eq!(metre_alias.squeeze(), 1.0);
        assert_eq!(metre_alias, m);
    }
}
