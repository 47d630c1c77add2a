use crate::re::{LEADING_NUMBER_REGEX, NON_NUMERIC_REGEX};

/// Drops everything but digits and dots: `"+12.5%"` becomes `"12.5"`.
pub fn clean_numeric(value: &str) -> String {
    NON_NUMERIC_REGEX.replace_all(value, "").into_owned()
}

/// Parses the leading number of `value`, ignoring any trailing text.
pub fn parse_leading(value: &str) -> Option<f64> {
    LEADING_NUMBER_REGEX
        .find(value)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

pub fn is_close(a: &str, b: &str, tolerance: f64) -> bool {
    match (parse_leading(a), parse_leading(b)) {
        (Some(a), Some(b)) => (a - b).abs() <= tolerance,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12%", "12")]
    #[case("+1 0%", "10")]
    #[case("x1.5 sec", "1.5")]
    #[case("none", "")]
    fn cleans_to_digits_and_dots(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_numeric(input), expected);
    }

    #[rstest]
    #[case("10", "10.09", true)]
    #[case("10", "10.2", false)]
    #[case("abc", "10", false)]
    #[case("10", "", false)]
    #[case("7.5", "7.5", true)]
    #[case("1.2.3", "1.2", true)]
    fn closeness(#[case] a: &str, #[case] b: &str, #[case] close: bool) {
        assert_eq!(is_close(a, b, 0.1), close);
    }

    #[rstest]
    fn closeness_is_symmetric() {
        assert!(is_close("10.09", "10", 0.1));
        assert!(!is_close("10.2", "10", 0.1));
    }

    #[rstest]
    fn parse_leading_rejects_words() {
        assert_eq!(parse_leading("inf"), None);
        assert_eq!(parse_leading("NaN"), None);
        assert_eq!(parse_leading("42 units"), Some(42.0));
    }
}
