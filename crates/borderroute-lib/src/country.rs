use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized country identifier, e.g. the ISO 3166-1 alpha-3 code `CZE`.
///
/// Input is trimmed and ASCII-uppercased on construction, so `"cze"`,
/// `" CZE "` and `"Cze"` all compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Normalize raw input into a country code.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_ascii_uppercase())
    }

    /// Borrow the normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CountryCode {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for CountryCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// A country together with the codes of the countries it shares a land
/// border with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: CountryCode,
    /// Sorted, deduplicated, never contains `code` itself.
    pub borders: Vec<CountryCode>,
}

impl Country {
    /// Build a country, collapsing duplicate borders and dropping a border
    /// with itself.
    pub fn new<I, C>(code: impl Into<CountryCode>, borders: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CountryCode>,
    {
        let code = code.into();
        let mut borders: Vec<CountryCode> = borders
            .into_iter()
            .map(Into::into)
            .filter(|border| *border != code && !border.is_empty())
            .collect();
        borders.sort_unstable();
        borders.dedup();
        Self { code, borders }
    }

    /// Whether the country has no land borders at all.
    pub fn is_isolated(&self) -> bool {
        self.borders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_trimmed_and_uppercased() {
        assert_eq!(CountryCode::new(" cze ").as_str(), "CZE");
        assert_eq!(CountryCode::new("Cze"), CountryCode::new("CZE"));
    }

    #[test]
    fn code_serializes_as_plain_string() {
        let json = serde_json::to_string(&CountryCode::new("aut")).unwrap();
        assert_eq!(json, "\"AUT\"");

        let parsed: CountryCode = serde_json::from_str("\"ita\"").unwrap();
        assert_eq!(parsed.as_str(), "ITA");
    }

    #[test]
    fn country_collapses_duplicates_and_self_border() {
        let country = Country::new("AUT", ["ita", "CZE", "AUT", "ITA", ""]);
        assert_eq!(
            country.borders,
            vec![CountryCode::new("CZE"), CountryCode::new("ITA")]
        );
        assert!(!country.is_isolated());
    }

    #[test]
    fn country_without_borders_is_isolated() {
        let country = Country::new("ISL", Vec::<String>::new());
        assert!(country.is_isolated());
    }
}
