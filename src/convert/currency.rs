//! Currency conversion through a USD pivot.
//!
//! Rates are static configuration expressing units-per-USD; nothing is
//! fetched live.

/// A supported currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Uzs,
    Rub,
    Cny,
    Krw,
    Inr,
}

impl Currency {
    /// Parse a currency code (case-insensitive).
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim().to_lowercase().as_str() {
            "usd" => Some(Self::Usd),
            "eur" => Some(Self::Eur),
            "gbp" => Some(Self::Gbp),
            "jpy" => Some(Self::Jpy),
            "uzs" => Some(Self::Uzs),
            "rub" => Some(Self::Rub),
            "cny" => Some(Self::Cny),
            "krw" => Some(Self::Krw),
            "inr" => Some(Self::Inr),
            _ => None,
        }
    }

    /// Units of this currency per one USD.
    fn rate(self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Eur => 0.92,
            Self::Gbp => 0.79,
            Self::Jpy => 147.68,
            Self::Uzs => 12200.0,
            Self::Rub => 96.45,
            Self::Cny => 7.29,
            Self::Krw => 1315.47,
            Self::Inr => 83.12,
        }
    }

    /// ISO code used for display.
    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Uzs => "UZS",
            Self::Rub => "RUB",
            Self::Cny => "CNY",
            Self::Krw => "KRW",
            Self::Inr => "INR",
        }
    }
}

/// Convert an amount via the USD pivot.
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    (amount / from.rate()) * to.rate()
}

/// Rate of one unit of `from` expressed in `to` (the `1 X = r Y` line).
pub fn unit_rate(from: Currency, to: Currency) -> f64 {
    to.rate() / from.rate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_to_eur() {
        let result = convert(100.0, Currency::Usd, Currency::Eur);
        assert!((result - 92.0).abs() < 1e-9);
    }

    #[test]
    fn test_cross_rate_through_pivot() {
        // 92 EUR -> USD -> UZS
        let result = convert(92.0, Currency::Eur, Currency::Uzs);
        assert!((result - 1_220_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_unit_rate() {
        let rate = unit_rate(Currency::Usd, Currency::Uzs);
        assert!((rate - 12200.0).abs() < 1e-9);
    }

    #[test]
    fn test_identity() {
        let result = convert(55.5, Currency::Jpy, Currency::Jpy);
        assert!((result - 55.5).abs() < 1e-12);
    }

    #[test]
    fn test_selector_is_case_insensitive() {
        assert_eq!(Currency::from_selector("usd"), Some(Currency::Usd));
        assert_eq!(Currency::from_selector("KRW"), Some(Currency::Krw));
        assert_eq!(Currency::from_selector("BTC"), None);
    }
}
