//! Leaf unit - an atomic, non-decomposable dimension

use std::fmt;

/// An atomic unit such as the metre or the second.
///
/// A leaf unit is pure identity: it has no embedded scale (its `squeeze`
/// is always 1) and it cannot be decomposed further. Two leaves with the
/// same specifier are the same unit; within one [`UnitSystem`] the
/// registry guarantees they are the same allocation.
///
/// [`UnitSystem`]: crate::UnitSystem
#[derive(Debug)]
pub struct LeafUnit {
    specifier: String,
    symbol: String,
    name: String,
    si: bool,
}

impl LeafUnit {
    /// Build a leaf. An empty `symbol` falls back to the specifier; the
    /// display name may stay empty.
    ///
    /// This does not register anything: interning happens in the
    /// [`UnitSystem`](crate::UnitSystem) factories.
    pub(crate) fn new(specifier: &str, symbol: &str, name: &str, is_si: bool) -> Self {
        let symbol = if symbol.is_empty() { specifier } else { symbol };
        LeafUnit {
            specifier: specifier.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            si: is_si,
        }
    }

    /// The unique registry key, e.g. `"m"`.
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

    /// Whether SI prefixes (`k`, `m`, `da`, ...) may attach to this unit.
    pub fn is_si(&self) -> bool {
        self.si
    }
}

/// Leaves are identified by specifier alone; symbol, name, and SI flag
/// are presentation metadata.
impl PartialEq for LeafUnit {
    fn eq(&self, other: &Self) -> bool {
        self.specifier == other.specifier
    }
}

impl Eq for LeafUnit {}

impl fmt::Display for LeafUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_defaults_to_specifier() {
        let m = LeafUnit::new("m", "", "", true);
        assert_eq!(m.specifier(), "m");
        assert_eq!(m.symbol(), "m");
        assert_eq!(m.name(), "");
        assert!(m.is_si());
    }

    #[test]
    fn test_explicit_symbol_and_name() {
        let ohm = LeafUnit::new("Ohm", "Ω", "ohm", true);
        assert_eq!(ohm.symbol(), "Ω");
        assert_eq!(ohm.name(), "ohm");
        assert_eq!(format!("{}", ohm), "Ω");
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let a = LeafUnit::new("m", "", "metre", true);
        let b = LeafUnit::new("m", "meters", "", false);
        assert_eq!(a, b);
        assert_ne!(a, LeafUnit::new("s", "", "", true));
    }
}
