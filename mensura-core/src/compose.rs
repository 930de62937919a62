//! The composition engine: normalized unit fractions

use std::fmt;
use std::rc::Rc;

use crate::leaf::LeafUnit;
use crate::registry::UnitSystem;
use crate::unit::{Canonical, Unit};

/// A normalized fraction of leaf units plus a scalar multiplier.
///
/// Instances only come out of [`compose`], which guarantees the
/// invariants: both sides hold leaves only, no leaf appears on both
/// sides, both sides are sorted by specifier, and degenerate fractions
/// have already collapsed (empty/empty becomes a bare scalar, a lone
/// numerator leaf with multiplier 1 becomes that leaf). Structurally
/// identical fractions are interned, so they share one allocation per
/// scope.
#[derive(Debug)]
pub struct ComposedUnit {
    numer: Vec<Rc<LeafUnit>>,
    denom: Vec<Rc<LeafUnit>>,
    multiplier: f64,
}

impl ComposedUnit {
    pub(crate) fn new(numer: Vec<Rc<LeafUnit>>, denom: Vec<Rc<LeafUnit>>, multiplier: f64) -> Self {
        ComposedUnit {
            numer,
            denom,
            multiplier,
        }
    }

    /// The sorted numerator leaves.
    pub fn numer(&self) -> &[Rc<LeafUnit>] {
        &self.numer
    }

    /// The sorted denominator leaves.
    pub fn denom(&self) -> &[Rc<LeafUnit>] {
        &self.denom
    }

    /// The scale factor relative to the canonical form.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// The multiplier-free form: just the two sorted leaf tuples.
    pub fn canonical(&self) -> Canonical {
        Canonical::new(self.numer.clone(), self.denom.clone())
    }
}

/// Prints the fraction without its multiplier: `m * s`, `m / s`,
/// `1 / s`, `g / m * s * s`.
impl fmt::Display for ComposedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numer.is_empty() {
            write!(f, "1")?;
        } else {
            for (i, leaf) in self.numer.iter().enumerate() {
                if i > 0 {
                    write!(f, " * ")?;
                }
                write!(f, "{leaf}")?;
            }
        }
        if !self.denom.is_empty() {
            write!(f, " / ")?;
            for (i, leaf) in self.denom.iter().enumerate() {
                if i > 0 {
                    write!(f, " * ")?;
                }
                write!(f, "{leaf}")?;
            }
        }
        Ok(())
    }
}

/// What composing units produces: either a surviving unit value, or a
/// bare number when everything cancelled.
///
/// `m / m` is the scalar 1, `km / m` is the scalar 1000, and squaring a
/// unit to the zeroth power is the scalar 1. Callers match exhaustively;
/// there is no unit value standing in for "dimensionless".
#[derive(Debug, Clone)]
pub enum UnitProduct {
    /// Everything cancelled; only a scale factor survives.
    Scalar(f64),
    /// A surviving unit value.
    Unit(Unit),
}

impl UnitProduct {
    /// The unit value, if one survived.
    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            UnitProduct::Scalar(_) => None,
            UnitProduct::Unit(unit) => Some(unit),
        }
    }

    /// Consume into the unit value, if one survived.
    pub fn into_unit(self) -> Option<Unit> {
        match self {
            UnitProduct::Scalar(_) => None,
            UnitProduct::Unit(unit) => Some(unit),
        }
    }

    /// The collapsed scalar, if everything cancelled.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            UnitProduct::Scalar(k) => Some(*k),
            UnitProduct::Unit(_) => None,
        }
    }
}

impl PartialEq for UnitProduct {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UnitProduct::Scalar(a), UnitProduct::Scalar(b)) => a == b,
            (UnitProduct::Unit(a), UnitProduct::Unit(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<f64> for UnitProduct {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, UnitProduct::Scalar(k) if k == other)
    }
}

impl PartialEq<Unit> for UnitProduct {
    fn eq(&self, other: &Unit) -> bool {
        matches!(self, UnitProduct::Unit(u) if u == other)
    }
}

impl fmt::Display for UnitProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitProduct::Scalar(k) => write!(f, "{k}"),
            UnitProduct::Unit(unit) => unit.fmt(f),
        }
    }
}

/// Compose a fraction of arbitrary unit values into its unique
/// normalized, interned representation.
///
/// The phases, in order:
///
/// 1. *Cancellation.* Scan the numerator left to right; each element
///    cancels against the first remaining denominator element with the
///    same canonical form (that pairing rule is the documented
///    tie-break). Cancelling multiplies the running scalar by the ratio
///    of the two elements' squeezes, the only point where conversion
///    ratios enter: a centimetre cancelling a metre contributes 1/100.
/// 2. *Wringing.* Surviving elements are flattened to their canonical
///    leaves, contributing their squeeze to the scalar (numerator side
///    multiplies, denominator side divides). A denominator-side
///    fraction splices in crosswise. Leaves that now appear on both
///    sides cancel pairwise at ratio 1.
/// 3. *Ordering.* Both leaf lists are sorted by specifier, so
///    algebraically identical fractions normalize identically no matter
///    how they were built.
/// 4. *Collapse.* Empty/empty yields `Scalar(multiplier)`; a single
///    numerator leaf with an empty denominator and a multiplier of
///    exactly 1 yields that leaf itself; anything else is interned as a
///    [`ComposedUnit`] keyed by (multiplier, numerator, denominator).
pub fn compose(
    mut numer: Vec<Unit>,
    mut denom: Vec<Unit>,
    mut multiplier: f64,
    sys: &UnitSystem,
) -> UnitProduct {
    cancel(&mut numer, &mut denom, &mut multiplier);

    let mut numer_leaves: Vec<Rc<LeafUnit>> = Vec::new();
    let mut denom_leaves: Vec<Rc<LeafUnit>> = Vec::new();
    for unit in &numer {
        let canon = unit.canonical();
        numer_leaves.extend(canon.numer().iter().cloned());
        denom_leaves.extend(canon.denom().iter().cloned());
        multiplier *= unit.squeeze();
    }
    for unit in &denom {
        let canon = unit.canonical();
        denom_leaves.extend(canon.numer().iter().cloned());
        numer_leaves.extend(canon.denom().iter().cloned());
        multiplier /= unit.squeeze();
    }

    cancel_leaves(&mut numer_leaves, &mut denom_leaves);

    numer_leaves.sort_by(|a, b| a.specifier().cmp(b.specifier()));
    denom_leaves.sort_by(|a, b| a.specifier().cmp(b.specifier()));

    if numer_leaves.is_empty() && denom_leaves.is_empty() {
        return UnitProduct::Scalar(multiplier);
    }
    // Collapse only on an exact multiplier of 1.
    if denom_leaves.is_empty() && multiplier == 1.0 {
        if let [leaf] = numer_leaves.as_slice() {
            return UnitProduct::Unit(Unit::Leaf(Rc::clone(leaf)));
        }
    }
    UnitProduct::Unit(sys.intern_composed(numer_leaves, denom_leaves, multiplier))
}

/// Cancel dimension-equivalent element pairs across the fraction,
/// folding each pair's squeeze ratio into the multiplier.
fn cancel(numer: &mut Vec<Unit>, denom: &mut Vec<Unit>, multiplier: &mut f64) {
    let mut i = 0;
    while i < numer.len() {
        let canon = numer[i].canonical();
        if let Some(j) = denom.iter().position(|d| d.canonical() == canon) {
            *multiplier *= numer[i].squeeze() / denom[j].squeeze();
            numer.remove(i);
            denom.remove(j);
        } else {
            i += 1;
        }
    }
}

/// Pairwise removal of leaves appearing on both sides. Leaf squeezes
/// are 1, so the multiplier is untouched.
fn cancel_leaves(numer: &mut Vec<Rc<LeafUnit>>, denom: &mut Vec<Rc<LeafUnit>>) {
    let mut i = 0;
    while i < numer.len() {
        let specifier = numer[i].specifier();
        if let Some(j) = denom.iter().position(|d| d.specifier() == specifier) {
            numer.remove(i);
            denom.remove(j);
        } else {
            i += 1;
        }
    }
}
