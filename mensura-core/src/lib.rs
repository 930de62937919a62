//! Mensura Core - Unit Algebra Engine
//!
//! Models physical units and quantities so that operations between
//! incompatible dimensions (mass + time, etc.) are rejected instead of
//! silently computed.
//!
//! Pieces:
//! - Leaf units: atomic dimensions (`m`, `s`, `meatball`)
//! - Composed units: normalized fractions with a scalar multiplier
//! - Named units: a specifier bound to a composed value (`km`, `N`)
//! - SI prefix resolution (`"km"` from `k` + registered `m`)
//! - Quantities: magnitudes with compatibility-checked arithmetic
//!
//! All units are minted through a [`UnitSystem`] scope, which interns
//! them: within one scope a specifier always resolves to the same
//! instance, and structurally identical fractions share one
//! representation. Unit handles are `Rc`-backed and scopes are
//! single-threaded; use [`with_default`] for a per-thread throwaway
//! scope or build explicit ones for isolation.

mod error;
mod leaf;
mod unit;
mod compose;
mod named;
mod si;
mod registry;
mod quantity;

pub use compose::{compose, ComposedUnit, UnitProduct};
pub use error::IncompatibleUnits;
pub use leaf::LeafUnit;
pub use named::NamedUnit;
pub use quantity::{Quantity, QuantityProduct};
pub use registry::{with_default, UnitSystem};
pub use si::{is_prefixed, SiPrefix, PREFIXES};
pub use unit::{Canonical, Unit};
