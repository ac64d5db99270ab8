//! Numeric interpretation of statement figures.

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹', '₩', '₽', '₺', '₫', '₱', '¢', '₦', '₪'];
const DASHES: &[&str] = &["-", "–", "—"];

/// Parse a formatted amount such as `"15,382,249,000"`, `"(1,200)"` or
/// `"USD 3.5"`.
///
/// Thousands separators, spaces, currency symbols and a leading or
/// trailing alphabetic currency code are ignored. Parentheses or a leading
/// minus mean negative; a lone dash means zero. Anything else that is not
/// a plain decimal number yields `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let mut s = text.trim();
    if s.is_empty() {
        return None;
    }
    if DASHES.contains(&s) {
        return Some(0.0);
    }

    let mut negative = false;
    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        negative = true;
        s = inner.trim();
    }

    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    let mut digits = strip_currency_code(&cleaned);

    if let Some(rest) = digits.strip_prefix('-').or_else(|| digits.strip_prefix('−')) {
        negative = !negative;
        digits = rest;
    }
    // currency codes may also follow the sign, e.g. "-USD5"
    let digits = strip_currency_code(digits);

    if digits.is_empty()
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        || digits.matches('.').count() > 1
        || digits == "."
    {
        return None;
    }

    let value: f64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn strip_currency_code(s: &str) -> &str {
    let s = s.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    s.trim_end_matches(|c: char| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_grouped() {
        assert_eq!(parse_amount("15,382,249,000"), Some(15_382_249_000.0));
        assert_eq!(parse_amount(" 1 200 "), Some(1200.0));
        assert_eq!(parse_amount("3.25"), Some(3.25));
    }

    #[test]
    fn test_currency() {
        assert_eq!(parse_amount("$12,000"), Some(12000.0));
        assert_eq!(parse_amount("RM 5,000"), Some(5000.0));
        assert_eq!(parse_amount("1,000 USD"), Some(1000.0));
        assert_eq!(parse_amount("€ -7"), Some(-7.0));
    }

    #[test]
    fn test_negative_forms() {
        assert_eq!(parse_amount("(1,200)"), Some(-1200.0));
        assert_eq!(parse_amount("-45"), Some(-45.0));
        assert_eq!(parse_amount("−45"), Some(-45.0));
    }

    #[test]
    fn test_dash_is_zero() {
        assert_eq!(parse_amount("-"), Some(0.0));
        assert_eq!(parse_amount("—"), Some(0.0));
    }

    #[test]
    fn test_not_numbers() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("Notes"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("12a4"), None);
        assert_eq!(parse_amount("."), None);
    }
}
