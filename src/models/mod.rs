//! Data models for the address book.
//!
//! A [`Record`] is one contact built from validated fields; an
//! [`AddressBook`] owns the records and keys them by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Pages, DEFAULT_PAGE_SIZE};
pub use record::Record;
