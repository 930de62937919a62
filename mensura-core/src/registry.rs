//! Unit scopes: the interning table and the factories bound to it

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::compose::{compose, ComposedUnit, UnitProduct};
use crate::leaf::LeafUnit;
use crate::named::NamedUnit;
use crate::quantity::Quantity;
use crate::si;
use crate::unit::Unit;

/// Interning key: the specifier for leaf and named units, the full
/// fraction signature for composed units. The multiplier is keyed by
/// its exact bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Key {
    Specifier(String),
    Fraction {
        multiplier: u64,
        numer: Vec<String>,
        denom: Vec<String>,
    },
}

/// One unit scope: an interning registry plus the factories that
/// populate it.
///
/// Every factory looks the key up first and only constructs on a miss,
/// so within one scope a specifier always resolves to the same
/// allocation. That identity is what the whole algebra rests on.
/// Independent subsystems and tests should each build their own scope;
/// [`with_default`] offers one shared per-thread scope for throwaway
/// use.
///
/// The table uses interior mutability and is intentionally not `Sync`:
/// a scope belongs to one thread, which is what keeps the
/// lookup-then-insert pair raceless without locking.
#[derive(Debug, Default)]
pub struct UnitSystem {
    table: RefCell<HashMap<Key, Unit>>,
}

impl UnitSystem {
    /// An empty scope.
    pub fn new() -> Self {
        UnitSystem {
            table: RefCell::new(HashMap::new()),
        }
    }

    /// Fetch a unit previously interned under `specifier`, of whatever
    /// kind it was registered as.
    pub fn lookup(&self, specifier: &str) -> Option<Unit> {
        self.get(&Key::Specifier(specifier.to_string()))
    }

    /// Number of interned entries (leaves, named units, and anonymous
    /// fractions alike).
    pub fn len(&self) -> usize {
        self.table.borrow().len()
    }

    /// True when nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.table.borrow().is_empty()
    }

    /// Drop every interned entry. Outstanding unit handles stay alive
    /// and keep working, but a specifier minted again afterwards is a
    /// fresh instance unrelated to the old one.
    pub fn clear(&self) {
        self.table.borrow_mut().clear();
    }

    /// Resolve a specifier to a unit. Resolution order: existing
    /// registration, then SI-prefix synthesis (`"km"` becomes 1000 ×
    /// metre when `m` is registered and SI-eligible), then a brand-new
    /// non-SI leaf.
    ///
    /// The last step means a typo never fails; it mints an unrelated
    /// dimension that will refuse to convert to anything. That is the
    /// documented cost of prefix resolution being a normal negative
    /// result rather than an error.
    pub fn unit(&self, specifier: &str) -> Unit {
        if let Some(unit) = self.lookup(specifier) {
            return unit;
        }
        if let Some(unit) = si::resolve(specifier, self) {
            return unit;
        }
        self.leaf(specifier, "", "", false)
    }

    /// Fetch or create an atomic leaf unit. A specifier that is already
    /// bound returns the existing unit unchanged; the remaining
    /// arguments are ignored. No prefix resolution happens here.
    pub fn leaf(&self, specifier: &str, symbol: &str, name: &str, is_si: bool) -> Unit {
        if let Some(existing) = self.lookup(specifier) {
            return existing;
        }
        let unit = Unit::Leaf(Rc::new(LeafUnit::new(specifier, symbol, name, is_si)));
        self.register(Key::Specifier(specifier.to_string()), unit.clone());
        unit
    }

    /// Bind `unit` to `specifier` as a named unit. First-definition-
    /// wins: if the specifier is already bound the existing unit is
    /// returned unconditionally, even when `unit` differs from what was
    /// bound before.
    pub fn named(&self, specifier: &str, unit: Unit, symbol: &str, name: &str, is_si: bool) -> Unit {
        if let Some(existing) = self.lookup(specifier) {
            return existing;
        }
        let named = Unit::Named(Rc::new(NamedUnit::new(specifier, symbol, name, is_si, unit)));
        self.register(Key::Specifier(specifier.to_string()), named.clone());
        named
    }

    /// Build a derived unit from element specifiers and bind it to
    /// `specifier`: `named_unit("N", &["m", "kg"], &["s", "s"], 1.0,
    /// ...)` is the newton. Each element resolves through [`unit`],
    /// so prefixed specifiers like `"kg"` work.
    ///
    /// # Panics
    ///
    /// Panics when the fraction cancels completely (for example
    /// numerator `["m"]` against denominator `["m"]`): a bare scalar
    /// has no unit value to bind a name to.
    ///
    /// [`unit`]: UnitSystem::unit
    pub fn named_unit(
        &self,
        specifier: &str,
        numer: &[&str],
        denom: &[&str],
        multiplier: f64,
        symbol: &str,
        name: &str,
        is_si: bool,
    ) -> Unit {
        if let Some(existing) = self.lookup(specifier) {
            return existing;
        }
        let numer_units: Vec<Unit> = numer.iter().map(|s| self.unit(s)).collect();
        let denom_units: Vec<Unit> = denom.iter().map(|s| self.unit(s)).collect();
        match compose(numer_units, denom_units, multiplier, self) {
            UnitProduct::Unit(unit) => self.named(specifier, unit, symbol, name, is_si),
            UnitProduct::Scalar(k) => panic!(
                "unit {specifier:?} would name the bare scalar {k}: its fraction cancels completely"
            ),
        }
    }

    /// Shorthand for a single-numerator derived unit:
    /// `scaled_unit("km", "m", 1000.0, ...)`.
    ///
    /// # Panics
    ///
    /// As for [`named_unit`](UnitSystem::named_unit), which cannot
    /// happen here unless `base_specifier` itself names a fraction that
    /// cancels against the multiplier; a scale of a real unit always
    /// leaves a unit value.
    pub fn scaled_unit(
        &self,
        specifier: &str,
        base_specifier: &str,
        multiplier: f64,
        symbol: &str,
        name: &str,
        is_si: bool,
    ) -> Unit {
        self.named_unit(specifier, &[base_specifier], &[], multiplier, symbol, name, is_si)
    }

    /// Convenience: resolve `specifier` and bind a magnitude to it.
    pub fn quantity(&self, magnitude: f64, specifier: &str) -> Quantity {
        Quantity::new(magnitude, self.unit(specifier))
    }

    /// Intern an already-normalized fraction. Only the composition
    /// engine calls this; the lists must be sorted leaf lists with no
    /// common element.
    pub(crate) fn intern_composed(
        &self,
        numer: Vec<Rc<LeafUnit>>,
        denom: Vec<Rc<LeafUnit>>,
        multiplier: f64,
    ) -> Unit {
        let key = Key::Fraction {
            multiplier: multiplier.to_bits(),
            numer: numer.iter().map(|l| l.specifier().to_string()).collect(),
            denom: denom.iter().map(|l| l.specifier().to_string()).collect(),
        };
        if let Some(existing) = self.get(&key) {
            return existing;
        }
        let unit = Unit::Composed(Rc::new(ComposedUnit::new(numer, denom, multiplier)));
        self.register(key, unit.clone());
        unit
    }

    fn get(&self, key: &Key) -> Option<Unit> {
        self.table.borrow().get(key).cloned()
    }

    fn register(&self, key: Key, unit: Unit) {
        self.table.borrow_mut().insert(key, unit);
    }
}

thread_local! {
    static DEFAULT: UnitSystem = UnitSystem::new();
}

/// Run `f` against this thread's shared default scope.
///
/// Handy for one-off computations; anything that cares about isolation
/// (tests above all) should build its own [`UnitSystem`] instead. The
/// units returned from the closure remain valid after it ends.
pub fn with_default<R>(f: impl FnOnce(&UnitSystem) -> R) -> R {
    DEFAULT.with(|sys| f(sys))
}
