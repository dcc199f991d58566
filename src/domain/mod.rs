//! Domain value objects and types.
//!
//! This module contains the validated field wrappers a contact is built
//! from. Each field kind carries its own format rule and failure policy;
//! the [`Field`] trait lets records treat them uniformly.

pub mod birthday;
pub mod dates;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::BirthdayField;
pub use errors::{ValidationError, ValidationResult};
pub use field::Field;
pub use name::NameField;
pub use phone::{PhoneField, PHONE_ADVISORY};
