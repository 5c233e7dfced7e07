/// Parses prices the way users type them.
///
/// A period decimal (`1500.50`) is always accepted. When that fails the
/// token is retried with the configured locale decimal separator, so
/// `22,4` reads as 22.4 under a comma-decimal locale. Group separators are
/// never accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceParser {
    decimal_separator: char,
}

impl Default for PriceParser {
    fn default() -> Self {
        Self::new('.')
    }
}

impl PriceParser {
    pub fn new(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    /// Only finite values are prices; `inf` and `NaN` are rejected.
    pub fn parse(&self, token: &str) -> Option<f64> {
        self.parse_any(token).filter(|price| price.is_finite())
    }

    fn parse_any(&self, token: &str) -> Option<f64> {
        if let Ok(price) = token.parse::<f64>() {
            return Some(price);
        }

        // '.' is a group separator in comma-decimal locales.
        if self.decimal_separator == '.'
            || token.contains('.')
            || token.matches(self.decimal_separator).count() != 1
        {
            return None;
        }
        token.replace(self.decimal_separator, ".").parse().ok()
    }
}
