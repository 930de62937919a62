//! Unit values and the operations shared by every kind of unit

use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};

use crate::compose::{compose, ComposedUnit, UnitProduct};
use crate::leaf::LeafUnit;
use crate::named::NamedUnit;
use crate::registry::UnitSystem;

/// A unit value: an atomic leaf, a normalized fraction, or a named
/// wrapper around either.
///
/// The variants are a closed set; arithmetic matches on them
/// exhaustively instead of probing for capabilities. Every variant is a
/// cheap `Rc` handle, so cloning a `Unit` never copies unit structure,
/// and two handles to the same interned unit satisfy [`Unit::ptr_eq`].
///
/// Equality is structural: units are equal when their canonical forms
/// and their scale factors both match. The named kilometre and an
/// anonymous "1000 × metre" fraction are therefore equal, while metre
/// and kilometre are merely *compatible* (see [`Unit::is_compatible`]).
#[derive(Debug, Clone)]
pub enum Unit {
    /// An atomic dimension such as `m`.
    Leaf(Rc<LeafUnit>),
    /// A normalized fraction of leaves with a scalar multiplier.
    Composed(Rc<ComposedUnit>),
    /// A specifier bound to a previously built unit value, e.g. `km`.
    Named(Rc<NamedUnit>),
}

/// The multiplier-free structural form of a unit: sorted numerator and
/// denominator leaves.
///
/// Two units may be converted or compared iff their canonical forms are
/// equal. The scale factor (`squeeze`) is deliberately excluded; that
/// is what makes conversion between differently scaled but structurally
/// identical units possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    numer: Vec<Rc<LeafUnit>>,
    denom: Vec<Rc<LeafUnit>>,
}

impl Canonical {
    pub(crate) fn new(numer: Vec<Rc<LeafUnit>>, denom: Vec<Rc<LeafUnit>>) -> Self {
        Canonical { numer, denom }
    }

    /// The sorted numerator leaves.
    pub fn numer(&self) -> &[Rc<LeafUnit>] {
        &self.numer
    }

    /// The sorted denominator leaves.
    pub fn denom(&self) -> &[Rc<LeafUnit>] {
        &self.denom
    }
}

impl Unit {
    /// The registry specifier, if this unit has one of its own.
    /// Anonymous composed units do not.
    pub fn specifier(&self) -> Option<&str> {
        match self {
            Unit::Leaf(leaf) => Some(leaf.specifier()),
            Unit::Composed(_) => None,
            Unit::Named(named) => Some(named.specifier()),
        }
    }

    /// The long display name; empty for anonymous composed units.
    pub fn name(&self) -> &str {
        match self {
            Unit::Leaf(leaf) => leaf.name(),
            Unit::Composed(_) => "",
            Unit::Named(named) => named.name(),
        }
    }

    /// Whether SI prefixes may attach to this unit. Composed units are
    /// never prefixable.
    pub fn is_si(&self) -> bool {
        match self {
            Unit::Leaf(leaf) => leaf.is_si(),
            Unit::Composed(_) => false,
            Unit::Named(named) => named.is_si(),
        }
    }

    /// The canonical, multiplier-free form used for compatibility tests.
    ///
    /// A leaf is its own sole numerator; a named unit answers for the
    /// unit it wraps.
    pub fn canonical(&self) -> Canonical {
        match self {
            Unit::Leaf(leaf) => Canonical::new(vec![Rc::clone(leaf)], Vec::new()),
            Unit::Composed(composed) => composed.canonical(),
            Unit::Named(named) => named.unit().canonical(),
        }
    }

    /// The implicit scalar multiplier relative to the canonical form.
    /// 1 for a leaf; the stored multiplier for a fraction; forwarded for
    /// a named unit (the kilometre's squeeze is 1000).
    pub fn squeeze(&self) -> f64 {
        match self {
            Unit::Leaf(_) => 1.0,
            Unit::Composed(composed) => composed.multiplier(),
            Unit::Named(named) => named.unit().squeeze(),
        }
    }

    /// True when the two units' canonical forms match, i.e. quantities
    /// in one can be converted to the other.
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.canonical() == other.canonical()
    }

    /// True when both handles point at the same interned allocation.
    /// Within one scope, equal specifiers imply `ptr_eq`.
    pub fn ptr_eq(&self, other: &Unit) -> bool {
        match (self, other) {
            (Unit::Leaf(a), Unit::Leaf(b)) => Rc::ptr_eq(a, b),
            (Unit::Composed(a), Unit::Composed(b)) => Rc::ptr_eq(a, b),
            (Unit::Named(a), Unit::Named(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Multiply by another unit. Routes both operands through the
    /// composition engine, which may collapse the result to a bare
    /// scalar (e.g. `Hz * s`).
    pub fn multiply(&self, other: &Unit, sys: &UnitSystem) -> UnitProduct {
        compose(vec![self.clone(), other.clone()], Vec::new(), 1.0, sys)
    }

    /// Divide by another unit. `m / m` collapses to the scalar 1;
    /// `km / m` collapses to the scalar 1000.
    pub fn divide(&self, other: &Unit, sys: &UnitSystem) -> UnitProduct {
        compose(vec![self.clone()], vec![other.clone()], 1.0, sys)
    }

    /// The reciprocal unit: `s` inverts to the composed `1 / s`.
    pub fn invert(&self, sys: &UnitSystem) -> UnitProduct {
        compose(Vec::new(), vec![self.clone()], 1.0, sys)
    }

    /// Raise to a non-negative integer power by repeated multiplication
    /// with multiplier 1. `pow(0)` collapses to the scalar 1.
    pub fn pow(&self, exp: u32, sys: &UnitSystem) -> UnitProduct {
        compose(vec![self.clone(); exp as usize], Vec::new(), 1.0, sys)
    }
}

/// Structural equality: canonical form and scale factor both match,
/// regardless of kind. Named units are transparent here.
impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical() && self.squeeze() == other.squeeze()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Leaf(leaf) => leaf.fmt(f),
            Unit::Composed(composed) => composed.fmt(f),
            Unit::Named(named) => named.fmt(f),
        }
    }
}

/// Serializes as the display form, e.g. `"km"` or `"m / s"`.
impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sys() -> UnitSystem {
        UnitSystem::new()
    }

    #[test]
    fn test_leaf_canonical_is_itself() {
        let sys = sys();
        let m = sys.unit("m");
        let canon = m.canonical();
        assert_eq!(canon.numer().len(), 1);
        assert!(canon.denom().is_empty());
        assert_eq!(canon.numer()[0].specifier(), "m");
    }

    #[test]
    fn test_squeeze_of_scaled_unit() {
        let sys = sys();
        sys.leaf("m", "", "", true);
        let km = sys.scaled_unit("km", "m", 1000.0, "", "", false);
        assert_eq!(km.squeeze(), 1000.0);
        assert_eq!(sys.unit("m").squeeze(), 1.0);
    }

    #[test]
    fn test_compatible_but_not_equal() {
        let sys = sys();
        let m = sys.unit("m");
        let km = sys.scaled_unit("km", "m", 1000.0, "", "", false);
        assert!(m.is_compatible(&km));
        assert!(km.is_compatible(&m));
        assert_ne!(m, km);
    }

    #[test]
    fn test_named_equals_equivalent_fraction() {
        let sys = sys();
        let m = sys.unit("m");
        let km = sys.scaled_unit("km", "m", 1000.0, "", "", false);
        let thousand_metres = compose(vec![m], Vec::new(), 1000.0, &sys);
        assert_eq!(thousand_metres, km);
    }

    #[test]
    fn test_incompatible_dimensions() {
        let sys = sys();
        let m = sys.unit("m");
        let s = sys.unit("s");
        assert!(!m.is_compatible(&s));
        assert_ne!(m, s);
    }

    #[test]
    fn test_invert_leaf() {
        let sys = sys();
        let s = sys.unit("s");
        match s.invert(&sys) {
            UnitProduct::Unit(u) => {
                let canon = u.canonical();
                assert!(canon.numer().is_empty());
                assert_eq!(canon.denom().len(), 1);
                assert_eq!(u.to_string(), "1 / s");
            }
            UnitProduct::Scalar(k) => panic!("inverted s collapsed to {k}"),
        }
    }

    #[test]
    fn test_pow_zero_collapses_to_one() {
        let sys = sys();
        let m = sys.unit("m");
        assert_eq!(m.pow(0, &sys), 1.0);
    }

    #[test]
    fn test_serialize_as_display_string() {
        let sys = sys();
        let m = sys.unit("m");
        let s = sys.unit("s");
        let speed = m.divide(&s, &sys).into_unit().unwrap();
        assert_eq!(serde_json::to_string(&speed).unwrap(), "\"m / s\"");
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"m\"");
    }
}
