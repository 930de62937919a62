//! Quantities: magnitudes bound to units, with arithmetic gated by
//! compatibility

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};

use serde::{Serialize, Serializer};

use crate::compose::UnitProduct;
use crate::error::IncompatibleUnits;
use crate::registry::UnitSystem;
use crate::unit::Unit;

/// A magnitude bound to a unit: `7 m`, `3.5 km / h`.
///
/// Addition, subtraction, ordering, and conversion demand compatible
/// units and return [`IncompatibleUnits`] otherwise. Multiplication
/// and division accept any operands, because the unit algebra absorbs
/// the mismatch into the result unit.
#[derive(Debug, Clone)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

/// Result of quantity multiplication, division, or exponentiation:
/// when the unit fraction cancels away the result is a bare number,
/// otherwise a quantity.
#[derive(Debug, Clone)]
pub enum QuantityProduct {
    Scalar(f64),
    Quantity(Quantity),
}

impl Quantity {
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Quantity { magnitude, unit }
    }

    /// The bare magnitude, without any conversion applied.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// True when both quantities measure the same dimension.
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Sum, expressed in `self`'s unit. `a.add(b)` and `b.add(a)` may
    /// display differently but compare equal.
    pub fn add(&self, other: &Quantity) -> Result<Quantity, IncompatibleUnits> {
        if !self.is_compatible(other) {
            return Err(IncompatibleUnits {
                left: self.unit.to_string(),
                right: other.unit.to_string(),
            });
        }
        let other_scaled = other.magnitude * other.unit.squeeze() / self.unit.squeeze();
        Ok(Quantity::new(self.magnitude + other_scaled, self.unit.clone()))
    }

    /// Difference, expressed in `self`'s unit.
    pub fn sub(&self, other: &Quantity) -> Result<Quantity, IncompatibleUnits> {
        if !self.is_compatible(other) {
            return Err(IncompatibleUnits {
                left: self.unit.to_string(),
                right: other.unit.to_string(),
            });
        }
        let other_scaled = other.magnitude * other.unit.squeeze() / self.unit.squeeze();
        Ok(Quantity::new(self.magnitude - other_scaled, self.unit.clone()))
    }

    /// Product of two quantities. The unit part may collapse to a
    /// number, in which case the whole result does.
    ///
    /// Named `multiply` like its [`Unit`] counterpart, and so that it
    /// never shadows the `Mul<f64>` operator when `std::ops` is in
    /// scope.
    pub fn multiply(&self, other: &Quantity, sys: &UnitSystem) -> QuantityProduct {
        let magnitude = self.magnitude * other.magnitude;
        match self.unit.multiply(&other.unit, sys) {
            UnitProduct::Unit(unit) => QuantityProduct::Quantity(Quantity::new(magnitude, unit)),
            UnitProduct::Scalar(k) => QuantityProduct::Scalar(magnitude * k),
        }
    }

    /// Quotient of two quantities, collapsing like
    /// [`multiply`](Quantity::multiply).
    pub fn divide(&self, other: &Quantity, sys: &UnitSystem) -> QuantityProduct {
        let magnitude = self.magnitude / other.magnitude;
        match self.unit.divide(&other.unit, sys) {
            UnitProduct::Unit(unit) => QuantityProduct::Quantity(Quantity::new(magnitude, unit)),
            UnitProduct::Scalar(k) => QuantityProduct::Scalar(magnitude * k),
        }
    }

    /// Re-express this quantity in `target`'s scale.
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, IncompatibleUnits> {
        if !self.unit.is_compatible(target) {
            return Err(IncompatibleUnits {
                left: self.unit.to_string(),
                right: target.to_string(),
            });
        }
        let magnitude = self.magnitude * self.unit.squeeze() / target.squeeze();
        Ok(Quantity::new(magnitude, target.clone()))
    }

    /// Ordering between compatible quantities, on their common scale.
    ///
    /// There is deliberately no `PartialOrd`: the `<`/`>` operators
    /// would answer `false` for incompatible operands, and mixing
    /// dimensions must surface as an error instead.
    pub fn try_cmp(&self, other: &Quantity) -> Result<Ordering, IncompatibleUnits> {
        if !self.is_compatible(other) {
            return Err(IncompatibleUnits {
                left: self.unit.to_string(),
                right: other.unit.to_string(),
            });
        }
        let left = self.magnitude * self.unit.squeeze();
        let right = other.magnitude * other.unit.squeeze();
        Ok(left.total_cmp(&right))
    }

    /// Raise magnitude and unit to the same power. A zero exponent
    /// collapses the unit, so the result is the bare number 1.
    pub fn pow(&self, exponent: u32, sys: &UnitSystem) -> QuantityProduct {
        let magnitude = self.magnitude.powi(exponent as i32);
        match self.unit.pow(exponent, sys) {
            UnitProduct::Unit(unit) => QuantityProduct::Quantity(Quantity::new(magnitude, unit)),
            UnitProduct::Scalar(k) => QuantityProduct::Scalar(magnitude * k),
        }
    }

    pub fn abs(&self) -> Quantity {
        Quantity::new(self.magnitude.abs(), self.unit.clone())
    }
}

/// Compatible quantities compare on their common scale; incompatible
/// ones are simply not equal.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        if !self.unit.is_compatible(&other.unit) {
            return false;
        }
        self.magnitude * self.unit.squeeze() == other.magnitude * other.unit.squeeze()
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.magnitude, self.unit)
    }
}

/// Scaling by a plain number touches only the magnitude, so no scope
/// is involved.
impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, scale: f64) -> Quantity {
        Quantity::new(self.magnitude * scale, self.unit)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, scale: f64) -> Quantity {
        Quantity::new(self.magnitude / scale, self.unit)
    }
}

/// Drops the unit without conversion.
impl From<Quantity> for f64 {
    fn from(quantity: Quantity) -> f64 {
        quantity.magnitude
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

/// Serializes as the display string, `"18 m"`.
impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl QuantityProduct {
    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            QuantityProduct::Quantity(quantity) => Some(quantity),
            QuantityProduct::Scalar(_) => None,
        }
    }

    pub fn into_quantity(self) -> Option<Quantity> {
        match self {
            QuantityProduct::Quantity(quantity) => Some(quantity),
            QuantityProduct::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            QuantityProduct::Scalar(value) => Some(*value),
            QuantityProduct::Quantity(_) => None,
        }
    }
}

impl PartialEq for QuantityProduct {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (QuantityProduct::Scalar(a), QuantityProduct::Scalar(b)) => a == b,
            (QuantityProduct::Quantity(a), QuantityProduct::Quantity(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<f64> for QuantityProduct {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, QuantityProduct::Scalar(value) if value == other)
    }
}

impl PartialEq<Quantity> for QuantityProduct {
    fn eq(&self, other: &Quantity) -> bool {
        matches!(self, QuantityProduct::Quantity(quantity) if quantity == other)
    }
}

impl fmt::Display for QuantityProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityProduct::Scalar(value) => value.fmt(f),
            QuantityProduct::Quantity(quantity) => quantity.fmt(f),
        }
    }
}
