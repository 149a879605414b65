//! Unit conversion between currencies, lengths and temperatures.
//!
//! All conversions are pure and routed through a per-category pivot unit
//! (USD, meters, Celsius). Unit selectors are parsed case-insensitively;
//! an unknown selector or a cross-category pair yields `None` rather than
//! an error, mirroring the calculator's do-nothing-on-incomplete-input
//! policy.

mod currency;
mod length;
mod temperature;

pub use currency::{Currency, unit_rate};
pub use length::LengthUnit;
pub use temperature::TemperatureUnit;

/// Convert a value between two unit selectors of the same category.
///
/// Tries each category in turn (length, currency, temperature). Returns
/// `None` when either selector is unknown or the selectors belong to
/// different categories.
pub fn convert(value: f64, from: &str, to: &str) -> Option<f64> {
    if let (Some(from), Some(to)) = (LengthUnit::from_selector(from), LengthUnit::from_selector(to))
    {
        return Some(length::convert(value, from, to));
    }

    if let (Some(from), Some(to)) = (Currency::from_selector(from), Currency::from_selector(to)) {
        return Some(currency::convert(value, from, to));
    }

    if let (Some(from), Some(to)) = (
        TemperatureUnit::from_selector(from),
        TemperatureUnit::from_selector(to),
    ) {
        return Some(temperature::convert(value, from, to));
    }

    None
}

/// Display symbol for a unit selector (`km`, `°F`, `USD`, ...).
pub fn symbol(selector: &str) -> Option<&'static str> {
    if let Some(unit) = LengthUnit::from_selector(selector) {
        return Some(unit.symbol());
    }
    if let Some(currency) = Currency::from_selector(selector) {
        return Some(currency.code());
    }
    TemperatureUnit::from_selector(selector).map(|unit| unit.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        let result = convert(100.0, "celsius", "fahrenheit").unwrap();
        assert!((result - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_kilometer_to_mile() {
        let result = convert(1.0, "kilometer", "mile").unwrap();
        assert!((result - 0.621371).abs() < 1e-9);
    }

    #[test]
    fn test_currency_through_pivot() {
        let result = convert(100.0, "USD", "EUR").unwrap();
        assert!((result - 92.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_unit_is_identity() {
        let result = convert(42.5, "meter", "meter").unwrap();
        assert!((result - 42.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_selector_is_none() {
        assert!(convert(1.0, "parsec", "meter").is_none());
        assert!(convert(1.0, "meter", "parsec").is_none());
    }

    #[test]
    fn test_cross_category_is_none() {
        assert!(convert(1.0, "meter", "celsius").is_none());
        assert!(convert(1.0, "usd", "kelvin").is_none());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(symbol("kilometer"), Some("km"));
        assert_eq!(symbol("fahrenheit"), Some("°F"));
        assert_eq!(symbol("usd"), Some("USD"));
        assert_eq!(symbol("bogus"), None);
    }
}
