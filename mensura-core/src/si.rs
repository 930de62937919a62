//! SI prefix table and prefixed-specifier resolution

use crate::registry::UnitSystem;
use crate::unit::Unit;

/// One SI prefix: specifier code, long name, power-of-ten multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiPrefix {
    pub code: &'static str,
    pub name: &'static str,
    pub multiplier: f64,
}

/// The twenty SI prefixes, yotta down to yocto.
pub static PREFIXES: [SiPrefix; 20] = [
    SiPrefix { code: "Y", name: "yotta", multiplier: 1e24 },
    SiPrefix { code: "Z", name: "zetta", multiplier: 1e21 },
    SiPrefix { code: "E", name: "exa", multiplier: 1e18 },
    SiPrefix { code: "P", name: "peta", multiplier: 1e15 },
    SiPrefix { code: "T", name: "tera", multiplier: 1e12 },
    SiPrefix { code: "G", name: "giga", multiplier: 1e9 },
    SiPrefix { code: "M", name: "mega", multiplier: 1e6 },
    SiPrefix { code: "k", name: "kilo", multiplier: 1e3 },
    SiPrefix { code: "h", name: "hecto", multiplier: 1e2 },
    SiPrefix { code: "da", name: "deca", multiplier: 1e1 },
    SiPrefix { code: "d", name: "deci", multiplier: 1e-1 },
    SiPrefix { code: "c", name: "centi", multiplier: 1e-2 },
    SiPrefix { code: "m", name: "milli", multiplier: 1e-3 },
    SiPrefix { code: "u", name: "micro", multiplier: 1e-6 },
    SiPrefix { code: "n", name: "nano", multiplier: 1e-9 },
    SiPrefix { code: "p", name: "pico", multiplier: 1e-12 },
    SiPrefix { code: "f", name: "femto", multiplier: 1e-15 },
    SiPrefix { code: "a", name: "atto", multiplier: 1e-18 },
    SiPrefix { code: "z", name: "zepto", multiplier: 1e-21 },
    SiPrefix { code: "y", name: "yocto", multiplier: 1e-24 },
];

/// True when `specifier` starts with a prefix code and has characters
/// left after it. Purely lexical: `"km"` is prefixed whether or not
/// `m` is registered anywhere.
pub fn is_prefixed(specifier: &str) -> bool {
    split(specifier).is_some()
}

/// Split off the leading prefix code, two-character codes first so
/// `"dam"` reads as deca-metre rather than deci-"am".
fn split(specifier: &str) -> Option<(&'static SiPrefix, &str)> {
    let two = PREFIXES.iter().filter(|p| p.code.len() == 2);
    let one = PREFIXES.iter().filter(|p| p.code.len() == 1);
    for prefix in two.chain(one) {
        if let Some(rest) = specifier.strip_prefix(prefix.code) {
            if !rest.is_empty() {
                return Some((prefix, rest));
            }
        }
    }
    None
}

/// Try to read `specifier` as prefix + registered SI-eligible base and
/// synthesize the scaled unit: `"km"` becomes a named unit wrapping
/// 1000 × metre, display name `"kilometre"`, itself not SI-eligible so
/// prefixes cannot stack.
///
/// The base is a plain registry lookup, never recursive resolution.
/// `None` when the specifier carries no prefix, the base is
/// unregistered, or the base is not SI-eligible; the caller decides
/// what a miss means.
pub(crate) fn resolve(specifier: &str, sys: &UnitSystem) -> Option<Unit> {
    let (prefix, base_specifier) = split(specifier)?;
    let base = sys.lookup(base_specifier)?;
    if !base.is_si() {
        return None;
    }
    let name = format!("{}{}", prefix.name, base.name());
    Some(sys.scaled_unit(specifier, base_specifier, prefix.multiplier, "", &name, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_table() {
        assert_eq!(PREFIXES.len(), 20);
        let kilo = PREFIXES.iter().find(|p| p.code == "k").unwrap();
        assert_eq!(kilo.multiplier, 1e3);
        let micro = PREFIXES.iter().find(|p| p.code == "u").unwrap();
        assert_eq!(micro.multiplier, 1e-6);
    }

    #[test]
    fn test_is_prefixed_is_lexical() {
        assert!(is_prefixed("km"));
        assert!(is_prefixed("dam"));
        // The deca code alone has no suffix, but it still reads as
        // deci + "a".
        assert!(is_prefixed("da"));
        assert!(!is_prefixed("m"));
        assert!(!is_prefixed("xyz"));
        assert!(!is_prefixed(""));
    }

    #[test]
    fn test_two_character_code_wins_over_one() {
        let sys = UnitSystem::new();
        sys.leaf("m", "", "metre", true);
        let dam = resolve("dam", &sys).unwrap();
        assert_eq!(dam.squeeze(), 10.0);
        assert_eq!(dam.name(), "decametre");
    }

    #[test]
    fn test_synthesized_unit_shape() {
        let sys = UnitSystem::new();
        let m = sys.leaf("m", "", "metre", true);
        let mm = resolve("mm", &sys).unwrap();
        assert_eq!(mm.squeeze(), 1e-3);
        assert_eq!(mm.name(), "millimetre");
        assert_eq!(mm.to_string(), "mm");
        assert!(!mm.is_si());
        assert!(mm.is_compatible(&m));
    }

    #[test]
    fn test_non_si_base_does_not_resolve() {
        let sys = UnitSystem::new();
        sys.leaf("ft", "", "foot", false);
        assert_eq!(resolve("kft", &sys), None);
    }

    #[test]
    fn test_unregistered_base_does_not_resolve() {
        let sys = UnitSystem::new();
        assert_eq!(resolve("kxyz", &sys), None);
    }

    #[test]
    fn test_named_si_base_takes_a_prefix() {
        let sys = UnitSystem::new();
        sys.leaf("s", "", "second", true);
        let hz = sys.named_unit("Hz", &[], &["s"], 1.0, "", "hertz", true);
        let khz = resolve("kHz", &sys).unwrap();
        assert_eq!(khz.squeeze(), 1000.0);
        assert_eq!(khz.name(), "kilohertz");
        assert!(khz.is_compatible(&hz));
    }
}
