//! NameField value object.

use super::errors::ValidationResult;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name. Used as the address book key, so it is never
/// reassigned once a record is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameField(String);

impl NameField {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for NameField {
    fn value(&self) -> Option<&str> {
        Some(&self.0)
    }

    fn set_value(&mut self, value: String) -> ValidationResult<()> {
        self.0 = value;
        Ok(())
    }
}

impl Serialize for NameField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NameField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_any_text() {
        let mut name = NameField::new("Alice");
        assert_eq!(name.value(), Some("Alice"));

        name.set_value(String::new()).unwrap();
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn test_name_display_is_unchanged() {
        assert_eq!(NameField::new("Олена").to_string(), "Олена");
    }
}
