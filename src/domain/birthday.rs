//! BirthdayField value object.

use super::dates::BIRTHDAY_FORMAT;
use super::errors::{ValidationError, ValidationResult};
use super::field::Field;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Two characters, two characters, four characters, separated by dots.
/// Purely positional: calendar validity is checked by [`BirthdayField::to_date`].
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^.]{2}\.[^.]{2}\.[^.]{4}$").expect("Failed to compile birthday regex")
});

/// A birthday stored as `DD.MM.YYYY` text.
///
/// Unlike [`PhoneField`](super::PhoneField), malformed input is an error:
/// the text later feeds the date parser.
///
/// # Example
///
/// ```
/// use contact_book::domain::BirthdayField;
///
/// let birthday = BirthdayField::new("01.01.1990").unwrap();
/// assert_eq!(birthday.as_str(), "01.01.1990");
/// assert!(BirthdayField::new("1.1.1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BirthdayField(String);

impl BirthdayField {
    /// Create a new BirthdayField, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not shaped
    /// `DD.MM.YYYY`.
    pub fn new(birthday: impl Into<String>) -> ValidationResult<Self> {
        let birthday = birthday.into();
        Self::validate(&birthday)?;
        Ok(Self(birthday))
    }

    fn validate(birthday: &str) -> ValidationResult<()> {
        if BIRTHDAY_SHAPE.is_match(birthday) {
            Ok(())
        } else {
            Err(ValidationError::InvalidBirthday(birthday.to_string()))
        }
    }

    /// Get the birthday text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the stored text into a calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for well-shaped text that names
    /// no real date, such as `31.02.2000` or `aa.bb.cccc`.
    pub fn to_date(&self) -> ValidationResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(self.0.clone()))
    }
}

impl Field for BirthdayField {
    fn value(&self) -> Option<&str> {
        Some(&self.0)
    }

    fn set_value(&mut self, value: String) -> ValidationResult<()> {
        Self::validate(&value)?;
        self.0 = value;
        Ok(())
    }
}

impl Serialize for BirthdayField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BirthdayField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayField::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = BirthdayField::new("25.12.1985").unwrap();
        assert_eq!(birthday.as_str(), "25.12.1985");
        assert_eq!(birthday.value(), Some("25.12.1985"));
    }

    #[test]
    fn test_birthday_validates_shape() {
        assert!(BirthdayField::new("").is_err());
        assert!(BirthdayField::new("1.01.1990").is_err());
        assert!(BirthdayField::new("01.1.1990").is_err());
        assert!(BirthdayField::new("01.01.90").is_err());
        assert!(BirthdayField::new("01/01/1990").is_err());
        assert!(BirthdayField::new("01.01.1990.").is_err());
        assert!(BirthdayField::new("01.01.19900").is_err());
        // Shape only: calendar validity is not checked here.
        assert!(BirthdayField::new("99.99.9999").is_ok());
    }

    #[test]
    fn test_birthday_rejected_mutation_keeps_prior_value() {
        let mut birthday = BirthdayField::new("01.01.1990").unwrap();
        let err = birthday.set_value("yesterday".to_string()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("yesterday".to_string()));
        assert_eq!(birthday.as_str(), "01.01.1990");
    }

    #[test]
    fn test_birthday_to_date() {
        let date = BirthdayField::new("29.02.2000").unwrap().to_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
    }

    #[test]
    fn test_birthday_to_date_rejects_impossible_dates() {
        let birthday = BirthdayField::new("31.02.2000").unwrap();
        assert!(matches!(
            birthday.to_date(),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<BirthdayField, _> = serde_json::from_str("\"1990-01-01\"");
        assert!(result.is_err());
    }
}
