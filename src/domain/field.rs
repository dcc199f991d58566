//! The capability shared by every contact field.

use super::errors::ValidationResult;

/// A validated scalar value with one accessor/mutator pair.
///
/// Construction and mutation go through the same validation path. What a
/// failed assignment does depends on the field kind:
///
/// - [`NameField`](super::NameField) accepts anything.
/// - [`PhoneField`](super::PhoneField) keeps its prior value and records the
///   rejection, returning `Ok(())` so the enclosing command carries on.
/// - [`BirthdayField`](super::BirthdayField) returns
///   [`ValidationError::InvalidBirthday`](super::ValidationError::InvalidBirthday).
pub trait Field {
    /// Current stored value, `None` while a field has never accepted one.
    fn value(&self) -> Option<&str>;

    /// Validate `value` and store it on success.
    fn set_value(&mut self, value: String) -> ValidationResult<()>;
}
