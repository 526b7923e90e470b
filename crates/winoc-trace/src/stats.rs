//! Statistics dump as a MATLAB-style vector literal.
//!
//! ```text
//! power = [
//! 	1.500000e+00	 % router
//! ];
//! ```
//!
//! Values use C-style scientific notation: six fraction digits and a signed
//! exponent of at least two digits.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// `f64` rendered as `1.500000e+00`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scientific(pub f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }

        let rendered = format!("{value:.6e}");
        let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        write!(f, "{mantissa}e{sign}{digits:0>2}")
    }
}

/// Write `map` under `label`, one entry per line in key order.
pub fn write_stat_map<W: Write>(
    label: &str,
    map: &BTreeMap<String, f64>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{label} = [")?;
    for (key, value) in map {
        writeln!(out, "\t{}\t % {key}", Scientific(*value))?;
    }
    writeln!(out, "];")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_key_order() {
        let mut map = BTreeMap::new();
        map.insert("router".to_string(), 1.5);
        map.insert("link".to_string(), 0.00025);

        let mut out = Vec::new();
        write_stat_map("power", &map, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "power = [\n\t2.500000e-04\t % link\n\t1.500000e+00\t % router\n];\n"
        );
    }

    #[test]
    fn empty_map() {
        let mut out = Vec::new();
        write_stat_map("none", &BTreeMap::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "none = [\n];\n");
    }

    #[test]
    fn exponent_is_signed_and_padded() {
        assert_eq!(Scientific(0.0).to_string(), "0.000000e+00");
        assert_eq!(Scientific(-42.0).to_string(), "-4.200000e+01");
        assert_eq!(Scientific(1.0e-7).to_string(), "1.000000e-07");
        assert_eq!(Scientific(6.02e23).to_string(), "6.020000e+23");
        assert_eq!(Scientific(1.0e300).to_string(), "1.000000e+300");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(Scientific(f64::NAN).to_string(), "nan");
        assert_eq!(Scientific(f64::INFINITY).to_string(), "inf");
        assert_eq!(Scientific(f64::NEG_INFINITY).to_string(), "-inf");
    }
}
