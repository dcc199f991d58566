//! PhoneField value object.

use super::errors::{ValidationError, ValidationResult};
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// Minimum number of characters a phone number must have.
pub const MIN_PHONE_LEN: usize = 10;

/// Advisory shown to the user when a phone number is rejected.
pub const PHONE_ADVISORY: &str = "Enter right phone number, please!";

/// A phone number that degrades gracefully on bad input.
///
/// Rejected input never replaces an accepted value: the field keeps what it
/// had (or stays unset when freshly constructed) and remembers the rejected
/// text so the caller can surface [`PHONE_ADVISORY`]. Equality only looks at
/// the stored value.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneField;
///
/// let phone = PhoneField::new("1234567890");
/// assert_eq!(phone.as_str(), Some("1234567890"));
///
/// let short = PhoneField::new("123");
/// assert!(!short.is_set());
/// assert_eq!(short.rejected(), Some("123"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhoneField {
    value: Option<String>,
    rejected: Option<String>,
}

impl PhoneField {
    /// Create a PhoneField, leaving it unset if `phone` is rejected.
    pub fn new(phone: impl Into<String>) -> Self {
        let mut field = Self::default();
        field.assign(phone.into());
        field
    }

    /// Phone format rule.
    pub fn is_valid(phone: &str) -> bool {
        phone.chars().count() >= MIN_PHONE_LEN
    }

    fn assign(&mut self, phone: String) {
        if Self::is_valid(&phone) {
            self.value = Some(phone);
            self.rejected = None;
        } else {
            warn!("Rejected phone number {:?}", phone);
            self.rejected = Some(phone);
        }
    }

    /// Get the phone number as a string slice, if one was accepted.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the field holds an accepted number.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// The text rejected by the most recent assignment, if it was rejected.
    pub fn rejected(&self) -> Option<&str> {
        self.rejected.as_deref()
    }

    /// Advisory for the most recent assignment, if it was rejected.
    pub fn advisory(&self) -> Option<&'static str> {
        self.rejected.as_ref().map(|_| PHONE_ADVISORY)
    }
}

impl Field for PhoneField {
    fn value(&self) -> Option<&str> {
        self.as_str()
    }

    fn set_value(&mut self, value: String) -> ValidationResult<()> {
        self.assign(value);
        Ok(())
    }
}

impl PartialEq for PhoneField {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PhoneField {}

impl Serialize for PhoneField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// A persisted number that fails the rule means the file was tampered with,
// so deserialization is strict rather than advisory.
impl<'de> Deserialize<'de> for PhoneField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(phone) if Self::is_valid(&phone) => Ok(Self::new(phone)),
            Some(phone) => Err(serde::de::Error::custom(ValidationError::InvalidPhone(
                phone,
            ))),
        }
    }
}

impl fmt::Display for PhoneField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_ten_or_more_characters() {
        for phone in ["1234567890", "+380501234567", "(050) 123-45-67"] {
            let field = PhoneField::new(phone);
            assert_eq!(field.as_str(), Some(phone));
            assert!(field.advisory().is_none());
        }
    }

    #[test]
    fn test_phone_rejected_on_construction_stays_unset() {
        let field = PhoneField::new("123456789");
        assert!(!field.is_set());
        assert_eq!(field.value(), None);
        assert_eq!(field.advisory(), Some(PHONE_ADVISORY));
    }

    #[test]
    fn test_phone_rejected_on_mutation_keeps_prior_value() {
        let mut field = PhoneField::new("1234567890");
        field.set_value("42".to_string()).unwrap();
        assert_eq!(field.as_str(), Some("1234567890"));
        assert_eq!(field.rejected(), Some("42"));

        field.set_value("0987654321".to_string()).unwrap();
        assert_eq!(field.as_str(), Some("0987654321"));
        assert!(field.rejected().is_none());
    }

    #[test]
    fn test_phone_length_counts_characters_not_bytes() {
        // Ten Cyrillic letters are twenty bytes but still ten characters.
        assert!(PhoneField::is_valid("абвгдежзий"));
        assert!(!PhoneField::is_valid("абвгдежзи"));
    }

    #[test]
    fn test_phone_equality_ignores_rejections() {
        let mut a = PhoneField::new("1234567890");
        a.set_value("1".to_string()).unwrap();
        assert_eq!(a, PhoneField::new("1234567890"));
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneField::new("1234567890");
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"1234567890\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneField, _> = serde_json::from_str("\"123\"");
        assert!(result.is_err());
    }
}
