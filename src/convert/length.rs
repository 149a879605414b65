//! Length conversion through a meters pivot.

/// A supported length unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
}

impl LengthUnit {
    /// Parse a unit selector (full name or symbol, case-insensitive).
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim().to_lowercase().as_str() {
            "meter" | "m" => Some(Self::Meter),
            "kilometer" | "km" => Some(Self::Kilometer),
            "centimeter" | "cm" => Some(Self::Centimeter),
            "millimeter" | "mm" => Some(Self::Millimeter),
            "mile" | "mi" => Some(Self::Mile),
            "yard" | "yd" => Some(Self::Yard),
            "foot" | "ft" => Some(Self::Foot),
            "inch" | "in" => Some(Self::Inch),
            _ => None,
        }
    }

    /// Units per meter.
    fn factor(self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Kilometer => 0.001,
            Self::Centimeter => 100.0,
            Self::Millimeter => 1000.0,
            Self::Mile => 0.000621371,
            Self::Yard => 1.09361,
            Self::Foot => 3.28084,
            Self::Inch => 39.3701,
        }
    }

    /// Display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Mile => "mi",
            Self::Yard => "yd",
            Self::Foot => "ft",
            Self::Inch => "in",
        }
    }
}

/// Convert a length via the meters pivot.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let meters = value / from.factor();
    meters * to.factor()
}
