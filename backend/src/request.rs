use std::str::FromStr;
use core::fmt::Display;

use thiserror::Error;

/// A four-digit year, the only form the holiday endpoint accepts
///
/// Validated on construction so a fetch can never be built from a value
/// that would produce a malformed URL.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Year{
    value: u16,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("year must have exactly four digits")]
pub struct InvalidYear;

impl TryFrom<u16> for Year{
    type Error = InvalidYear;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if (1000..=9999).contains(&value){
            Ok(Year{value})
        }else{
            Err(InvalidYear)
        }
    }
}

impl From<Year> for u16{
    fn from(val: Year) -> Self {
        val.value
    }
}

impl Display for Year{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A two-letter uppercase ISO-3166 country code
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CountryCode{
    letters: [u8; 2],
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("country code must be two uppercase ASCII letters")]
pub struct InvalidCountryCode;

impl CountryCode{
    #[must_use] pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("Letters are validated as ASCII on construction")
    }
}

impl FromStr for CountryCode{
    type Err = InvalidCountryCode;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.as_bytes(){
            [a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => Ok(CountryCode{letters: [*a, *b]}),
            _ => Err(InvalidCountryCode),
        }
    }
}

impl TryFrom<&str> for CountryCode{
    type Error = InvalidCountryCode;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        CountryCode::from_str(code)
    }
}

impl Display for CountryCode{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
