//! Error type for unit arithmetic

use thiserror::Error;

/// The one domain error: two units whose canonical forms differ were
/// combined, compared, or converted.
///
/// Carries the display forms of both offending units. Produced by the
/// fallible `Quantity` operations (`add`, `sub`, `try_cmp`, `convert_to`);
/// nothing in the crate downgrades it to a silent default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("incompatible units: {left} and {right}")]
pub struct IncompatibleUnits {
    /// Display form of the left-hand unit.
    pub left: String,
    /// Display form of the right-hand unit.
    pub right: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_both_units() {
        let err = IncompatibleUnits {
            left: "m".to_string(),
            right: "s".to_string(),
        };
        assert_eq!(err.to_string(), "incompatible units: m and s");
    }
}
