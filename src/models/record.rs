//! Record model representing one contact in the address book.

use crate::domain::dates::{self, days_until_anniversary};
use crate::domain::{BirthdayField, NameField, PhoneField, ValidationError, ValidationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Custom deserializer that drops unset phone entries.
fn deserialize_phones<'de, D>(deserializer: D) -> Result<Vec<PhoneField>, D::Error>
where
    D: Deserializer<'de>,
{
    let phones: Vec<PhoneField> = Vec::deserialize(deserializer)?;
    Ok(phones.into_iter().filter(PhoneField::is_set).collect())
}

/// One contact: a name, an ordered list of phones, an optional birthday.
///
/// Only accepted phone numbers ever enter the phone list; an unset
/// [`PhoneField`] handed to a mutator is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: NameField,

    #[serde(default, deserialize_with = "deserialize_phones")]
    phones: Vec<PhoneField>,

    #[serde(default)]
    birthday: Option<BirthdayField>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: NameField) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Builder-style birthday setter.
    pub fn with_birthday(mut self, birthday: BirthdayField) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Builder-style phone setter.
    pub fn with_phone(mut self, phone: PhoneField) -> Self {
        self.add_phone(phone);
        self
    }

    pub fn name(&self) -> &NameField {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneField] {
        &self.phones
    }

    /// Phone numbers as plain strings, in insertion order.
    pub fn phone_numbers(&self) -> Vec<&str> {
        self.phones.iter().filter_map(PhoneField::as_str).collect()
    }

    pub fn birthday(&self) -> Option<&BirthdayField> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: BirthdayField) {
        self.birthday = Some(birthday);
    }

    /// Append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: PhoneField) -> &[PhoneField] {
        if phone.is_set() {
            self.phones.push(phone);
        }
        &self.phones
    }

    /// Remove the first phone equal to `old`, then append `new`.
    ///
    /// When `old` is absent this still appends `new`. When `new` is unset
    /// the record is left untouched.
    pub fn change_phone(&mut self, old: &PhoneField, new: PhoneField) -> &[PhoneField] {
        if !new.is_set() {
            return &self.phones;
        }
        self.remove_phone(old);
        self.add_phone(new)
    }

    /// Remove and return the first phone equal to `old`.
    pub fn remove_phone(&mut self, old: &PhoneField) -> Option<PhoneField> {
        let index = self.phones.iter().position(|phone| phone == old)?;
        Some(self.phones.remove(index))
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> ValidationResult<Option<i64>> {
        self.days_to_birthday_from(dates::today())
    }

    /// Days from `today` until the next birthday; `None` without a birthday.
    ///
    /// A birthday falling on `today` is zero days away.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the stored birthday is not a
    /// real calendar date.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> ValidationResult<Option<i64>> {
        let Some(birthday) = &self.birthday else {
            return Ok(None);
        };
        let date = birthday.to_date()?;
        days_until_anniversary(date, today)
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidDate(birthday.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phones: [{}]", self.phone_numbers().join(", "))?;
        match &self.birthday {
            Some(birthday) => write!(f, ", birthday: {}", birthday),
            None => write!(f, ", birthday: unknown"),
        }
    }
}
