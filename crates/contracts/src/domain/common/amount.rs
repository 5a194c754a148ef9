//! Money values as sent by the API.
//!
//! Decimal fields arrive either as JSON numbers or as strings ("1234.50"),
//! depending on the field; both decode into [`Amount`].

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Amount(pub f64);

impl Amount {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// `$ 1.234,50`
    pub fn format(&self) -> String {
        format!("$ {}", format_number_with_decimals(self.0, 2))
    }

    /// Plain `1234,50` as written into CSV cells.
    pub fn to_csv(&self) -> String {
        format!("{:.2}", self.0).replace('.', ",")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Amount(n)),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Amount)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Thousands separated by `.`, decimals by `,`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        result.insert(0, '-');
    }
    if let Some(d) = decimal_part {
        result.push(',');
        result.push_str(d);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(Amount(1234.5).format(), "$ 1.234,50");
        assert_eq!(Amount(1234567.891).format(), "$ 1.234.567,89");
        assert_eq!(Amount(0.0).format(), "$ 0,00");
        assert_eq!(Amount(-950.0).format(), "$ -950,00");
        assert_eq!(format_number_with_decimals(1000.0, 0), "1.000");
    }

    #[test]
    fn test_decode_number_or_string() {
        let a: Amount = serde_json::from_str("12.5").unwrap();
        let b: Amount = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<Amount>("\"doce\"").is_err());
    }

    #[test]
    fn test_csv() {
        assert_eq!(Amount(10.0).to_csv(), "10,00");
    }
}
