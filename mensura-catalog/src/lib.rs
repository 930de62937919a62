//! Mensura Catalog - Predefined Real-World Units
//!
//! Each `define_*` function populates a [`UnitSystem`] through the core
//! factories. Specifiers keep their first definition, so loading a
//! group twice is a no-op; [`define_units`] loads everything in
//! dependency order.
//!
//! Groups:
//! - Base SI units (m, g, s, A, K, mol, cd)
//! - Derived SI units (Hz, N, Pa, J, W, V, Ohm, T, ...)
//! - Time (min, h, day, wk)
//! - Volumes (L and the pint family)
//! - Imperial lengths and weights (inch, ft, mi, lb, oz, ...)
//! - Novelty units (fortnight, smoot, firkin, meatball, ...)
//! - Computer storage (b, B, KiB, MiB, GiB)

use mensura_core::UnitSystem;

/// The seven SI base units, plus the tonne.
pub fn define_base_si_units(sys: &UnitSystem) {
    sys.leaf("m", "", "metre", true);
    sys.leaf("g", "", "gram", true);
    sys.leaf("s", "", "second", true);
    sys.leaf("A", "", "ampere", true);
    sys.leaf("K", "", "kelvin", true);
    sys.leaf("mol", "", "mole", true);
    sys.leaf("cd", "", "candela", true);
    sys.scaled_unit("tonne", "kg", 1000.0, "", "tonne", false); // one megagram
}

/// The named derived SI units, all of them prefixable. Assumes the
/// base group is loaded.
pub fn define_complex_si_units(sys: &UnitSystem) {
    sys.leaf("rad", "", "radian", true);
    sys.leaf("sr", "", "steradian", true);

    sys.named_unit("Hz", &[], &["s"], 1.0, "", "hertz", true);
    sys.named_unit("N", &["m", "kg"], &["s", "s"], 1.0, "", "newton", true);
    sys.named_unit("Pa", &["N"], &["m", "m"], 1.0, "", "pascal", true);
    sys.named_unit("J", &["N", "m"], &[], 1.0, "", "joule", true);
    sys.named_unit("W", &["J"], &["s"], 1.0, "", "watt", true);

    sys.named_unit("C", &["s", "A"], &[], 1.0, "", "coulomb", true);
    sys.named_unit("V", &["W"], &["A"], 1.0, "", "volt", true);
    sys.named_unit("F", &["C"], &["V"], 1.0, "", "farad", true);
    sys.named_unit("Ohm", &["V"], &["A"], 1.0, "", "ohm", true);
    sys.named_unit("S", &["A"], &["V"], 1.0, "", "siemens", true);
    sys.named_unit("Wb", &["V", "s"], &[], 1.0, "", "weber", true);
    sys.named_unit("T", &["Wb"], &["m", "m"], 1.0, "", "tesla", true);
    sys.named_unit("H", &["Wb"], &["A"], 1.0, "", "henry", true);

    sys.named_unit("lm", &["cd", "sr"], &[], 1.0, "", "lumen", true);
    sys.named_unit("lx", &["lm"], &["m", "m"], 1.0, "", "lux", true);

    sys.named_unit("Bq", &[], &["s"], 1.0, "", "becquerel", true);
    sys.named_unit("Gy", &["J"], &["kg"], 1.0, "", "gray", true);
    sys.named_unit("Sv", &["J"], &["kg"], 1.0, "", "sievert", true);
    sys.named_unit("kat", &["mol"], &["s"], 1.0, "", "katal", true);
}

/// Civil time units on top of the second.
pub fn define_time_units(sys: &UnitSystem) {
    sys.scaled_unit("min", "s", 60.0, "", "minute", false);
    sys.scaled_unit("h", "min", 60.0, "", "hour", false);
    sys.scaled_unit("day", "h", 24.0, "", "day", false);
    sys.scaled_unit("wk", "day", 7.0, "", "week", false);
}

/// The litre and the colloquial pint family. Assumes the base group is
/// loaded.
pub fn define_volumes(sys: &UnitSystem) {
    sys.named_unit("L", &["dm", "dm", "dm"], &[], 1.0, "", "litre", true);

    sys.scaled_unit("pt", "L", 0.568261, "", "pint", false);
    sys.scaled_unit("gi", "pt", 0.25, "", "gill", false);
    sys.scaled_unit("qt", "pt", 2.0, "", "quart", false);
    sys.scaled_unit("gal", "qt", 4.0, "", "gallon", false);

    // Specifiers with embedded spaces are fine; only the quantity
    // parser cares, and it splits on the first whitespace.
    sys.scaled_unit("fl oz", "pt", 0.05, "", "fluid ounce", false);
    sys.scaled_unit("fl dr", "fl oz", 0.125, "", "fluid drachm", false);
    sys.scaled_unit("minim", "fl dr", 1.0 / 60.0, "", "minim", false);
}

/// Imperial lengths, the acre, and avoirdupois plus troy weights.
/// Assumes the base group is loaded.
pub fn define_imperial_units(sys: &UnitSystem) {
    sys.scaled_unit("inch", "cm", 2.54, "", "inch", false);
    sys.scaled_unit("ft", "inch", 12.0, "", "foot", false);
    sys.scaled_unit("yd", "ft", 3.0, "", "yard", false);
    sys.scaled_unit("fathom", "ft", 6.0, "", "fathom", false);
    sys.scaled_unit("rd", "yd", 5.5, "", "rod", false);
    sys.scaled_unit("fur", "rd", 40.0, "", "furlong", false);
    sys.scaled_unit("mi", "fur", 8.0, "", "mile", false);
    sys.scaled_unit("league", "mi", 3.0, "", "league", false);
    sys.scaled_unit("NM", "m", 1852.0, "", "nautical mile", false);
    sys.scaled_unit("cable", "NM", 0.1, "", "cable", false);
    sys.scaled_unit("li", "inch", 7.92, "", "link", false);
    sys.scaled_unit("ch", "li", 100.0, "", "chain", false);

    sys.named_unit("acre", &["rd", "rd"], &[], 160.0, "", "acre", true);

    sys.scaled_unit("oz", "g", 28.375, "", "ounce", false);
    sys.scaled_unit("lb", "oz", 16.0, "", "pound", false);
    sys.scaled_unit("ton", "lb", 2000.0, "", "short ton", false);
    sys.scaled_unit("grain", "lb", 1.0 / 7000.0, "", "grain", false);
    sys.scaled_unit("dr", "lb", 1.0 / 256.0, "", "dram", false);
    sys.scaled_unit("cwt", "lb", 100.0, "", "hundredweight", false);

    sys.scaled_unit("dwt", "grain", 24.0, "", "pennyweight", false);
    sys.scaled_unit("oz t", "dwt", 20.0, "", "troy ounce", false);
    sys.scaled_unit("lb t", "oz t", 12.0, "", "troy pound", false);
}

/// Units nobody needs but everybody wants. Assumes the SI, time,
/// volume, and imperial groups are loaded.
pub fn define_novelty_units(sys: &UnitSystem) {
    sys.scaled_unit("fortnight", "day", 14.0, "", "fortnight", false);
    sys.scaled_unit("firkin", "lb", 90.0, "", "firkin", false);
    sys.scaled_unit("smoot", "cm", 170.0, "", "smoot", false);
    sys.scaled_unit("hiroshima", "J", 6.3e13, "", "hiroshima", false);
    sys.scaled_unit("cup", "L", 0.24, "", "cup", false);
    sys.scaled_unit("keg", "cup", 992.0, "", "keg", false);
    sys.leaf("meatball", "", "meatball", false);
}

/// Bits, bytes, and the binary multiples.
pub fn define_computer_units(sys: &UnitSystem) {
    sys.leaf("b", "", "bit", true);
    sys.scaled_unit("B", "b", 8.0, "", "byte", false);
    sys.scaled_unit("KiB", "B", 1024.0, "", "kibibyte", false);
    sys.scaled_unit("MiB", "KiB", 1024.0, "", "mebibyte", false);
    sys.scaled_unit("GiB", "MiB", 1024.0, "", "gibibyte", false);
}

/// Load every group, in dependency order.
pub fn define_units(sys: &UnitSystem) {
    define_base_si_units(sys);
    define_complex_si_units(sys);
    define_time_units(sys);
    define_volumes(sys);
    define_imperial_units(sys);
    define_novelty_units(sys);
    define_computer_units(sys);
}
