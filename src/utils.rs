/// Renders a result the way the calculator prints it: whole numbers as integer
/// literals, everything else in its shortest round-trip decimal form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::from("nan")
    } else if value.is_finite() && value.fract() == 0.0 {
        // `+ 0.0` folds negative zero into zero.
        format!("{:.0}", value + 0.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-8.0), "-8");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }

    #[test]
    fn test_format_tiny_values_stay_decimal() {
        assert_eq!(format_number(1e-7), "0.0000001");

        let tiny = format_number(1.5e-300);
        assert!(tiny.starts_with("0.000"));
        assert!(tiny.ends_with("15"));
        assert!(!tiny.contains('e'));
    }
}
