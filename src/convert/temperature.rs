//! Temperature conversion through a Celsius pivot.
//!
//! Unlike length and currency these transforms are affine, so each unit
//! carries an explicit to/from-Celsius pair instead of a scale factor.

/// A supported temperature unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Parse a unit selector (full name or symbol, case-insensitive).
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim().to_lowercase().as_str() {
            "celsius" | "c" | "°c" => Some(Self::Celsius),
            "fahrenheit" | "f" | "°f" => Some(Self::Fahrenheit),
            "kelvin" | "k" => Some(Self::Kelvin),
            _ => None,
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => (celsius * 9.0 / 5.0) + 32.0,
            Self::Kelvin => celsius + 273.15,
        }
    }

    /// Display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }
}

/// Convert a temperature via the Celsius pivot.
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    to.from_celsius(from.to_celsius(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boiling_point() {
        let result = convert(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert!((result - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_freezing_point_to_kelvin() {
        let result = convert(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin);
        assert!((result - 273.15).abs() < 1e-9);
    }

    #[test]
    fn test_absolute_zero() {
        let result = convert(0.0, TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
        assert!((result + 273.15).abs() < 1e-9);
    }

    #[test]
    fn test_identity() {
        let result = convert(-40.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Fahrenheit);
        assert!((result + 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_selector_aliases() {
        assert_eq!(
            TemperatureUnit::from_selector("°C"),
            Some(TemperatureUnit::Celsius)
        );
        assert_eq!(
            TemperatureUnit::from_selector("K"),
            Some(TemperatureUnit::Kelvin)
        );
        assert_eq!(TemperatureUnit::from_selector("rankine"), None);
    }
}
