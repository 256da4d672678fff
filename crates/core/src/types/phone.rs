//! Phone number type.
//!
//! Sellers sign in with international phone numbers. Numbers are stored in
//! E.164 form: a leading `+` followed by the country code and subscriber
//! number, no separators.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The number does not start with a country-code prefix.
    #[error("phone number must start with a country code, e.g. +91")]
    MissingPlusPrefix,
    /// The number contains a character other than digits and separators.
    #[error("phone number contains an invalid character")]
    InvalidCharacter,
    /// The number has the wrong number of digits for E.164.
    #[error("phone number must have between {min} and {max} digits")]
    BadLength {
        /// Minimum digits after the `+`.
        min: usize,
        /// Maximum digits after the `+` (E.164 limit).
        max: usize,
    },
}

/// An E.164 phone number.
///
/// Parsing accepts spaces and dashes as separators and strips them; the
/// canonical form is `+` followed by 7-15 digits. Validation happens before
/// any OTP request goes out, so a malformed number never reaches the
/// challenge table.
///
/// ## Examples
///
/// ```
/// use dukaan_core::Phone;
///
/// let phone = Phone::parse("+91 98765 43210").unwrap();
/// assert_eq!(phone.as_str(), "+919876543210");
///
/// assert!(Phone::parse("9876543210").is_err()); // no country code
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum digits after the `+`.
    pub const MIN_DIGITS: usize = 7;

    /// Maximum digits after the `+` (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, lacks the leading `+`,
    /// contains characters other than digits/spaces/dashes, or has an
    /// out-of-range digit count.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let Some(rest) = s.strip_prefix('+') else {
            return Err(PhoneError::MissingPlusPrefix);
        };

        let mut digits = String::with_capacity(rest.len());
        for c in rest.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' => {}
                _ => return Err(PhoneError::InvalidCharacter),
            }
        }

        if digits.len() < Self::MIN_DIGITS || digits.len() > Self::MAX_DIGITS {
            return Err(PhoneError::BadLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(format!("+{digits}")))
    }

    /// Returns the canonical E.164 string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Phone {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Phone {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Phone {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert!(Phone::parse("+919876543210").is_ok());
        assert!(Phone::parse("+14155550123").is_ok());
        assert!(Phone::parse("+4420 7946 0958").is_ok());
    }

    #[test]
    fn test_parse_normalizes_separators() {
        let phone = Phone::parse("+91 98765-43210").unwrap();
        assert_eq!(phone.as_str(), "+919876543210");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Phone::parse(""), Err(PhoneError::Empty)));
        assert!(matches!(Phone::parse("  "), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_missing_plus_is_rejected() {
        assert!(matches!(
            Phone::parse("919876543210"),
            Err(PhoneError::MissingPlusPrefix)
        ));
        assert!(matches!(
            Phone::parse("00919876543210"),
            Err(PhoneError::MissingPlusPrefix)
        ));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(matches!(
            Phone::parse("+91abc543210"),
            Err(PhoneError::InvalidCharacter)
        ));
        assert!(matches!(
            Phone::parse("+91(987)6543210"),
            Err(PhoneError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_bad_length() {
        assert!(matches!(
            Phone::parse("+123456"),
            Err(PhoneError::BadLength { .. })
        ));
        assert!(matches!(
            Phone::parse("+1234567890123456"),
            Err(PhoneError::BadLength { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = Phone::parse("+919876543210").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+919876543210\"");

        let parsed: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, phone);
    }
}
