//! Command handlers and the error-translating dispatcher.

use super::router::Command;
use crate::domain::{BirthdayField, NameField, PhoneField};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

/// Reply for every input error a handler raises.
pub const INPUT_ERROR_MESSAGE: &str = "Enter right name, phone or birthday, please!";

/// Reply for a line no alias matches.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command";

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye";
pub const NO_SUCH_CONTACT: &str = "No such contact";
pub const EMPTY_BOOK: &str = "Address book is empty";

/// What a handler hands back to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line. Empty text prints nothing.
    Reply(String),
    /// Save the book, print the text and stop.
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// Run `command` against `book`, turning input errors into
/// [`INPUT_ERROR_MESSAGE`]. Any other error is returned as is.
pub fn dispatch(
    book: &mut AddressBook,
    command: Command,
    args: &[String],
    page_size: usize,
) -> BookResult<Outcome> {
    let result = match command {
        Command::Hello => Ok(Outcome::Reply(GREETING.to_string())),
        Command::Exit => Ok(Outcome::Exit(FAREWELL.to_string())),
        Command::Add => add(book, args),
        Command::Change => change(book, args),
        Command::Phone => get_phone(book, args),
        Command::ShowAll => Ok(show_all(book, page_size)),
        Command::Birthday => birthday(book, args),
        Command::Remove => remove_phone(book, args),
    };

    match result {
        Err(e) if e.is_input_error() => {
            debug!(command = command.name(), error = %e, "Rejected input");
            Ok(Outcome::Reply(INPUT_ERROR_MESSAGE.to_string()))
        }
        other => other,
    }
}

/// Borrow the first `expected` arguments or fail with `MissingArguments`.
fn require<'a>(
    command: Command,
    args: &'a [String],
    expected: usize,
) -> BookResult<&'a [String]> {
    args.get(..expected).ok_or(BookError::MissingArguments {
        command: command.name(),
        expected,
        got: args.len(),
    })
}

/// Prefix `message` with any phone advisories.
fn with_advisories<'a>(phones: impl IntoIterator<Item = &'a PhoneField>, message: String) -> String {
    let mut lines: Vec<String> = phones
        .into_iter()
        .filter_map(PhoneField::advisory)
        .map(str::to_string)
        .collect();
    if !message.is_empty() {
        lines.push(message);
    }
    lines.join("\n")
}

fn add(book: &mut AddressBook, args: &[String]) -> BookResult<Outcome> {
    let args = require(Command::Add, args, 3)?;
    let name = NameField::new(args[0].as_str());
    let phone = PhoneField::new(args[1].as_str());
    let birthday = BirthdayField::new(args[2].as_str())?;

    let record = Record::new(name)
        .with_phone(phone.clone())
        .with_birthday(birthday);
    let message = format!(
        "Contact {} added successfully: {}",
        record.name(),
        record
    );
    book.add_record(record);

    Ok(Outcome::Reply(with_advisories([&phone], message)))
}

fn change(book: &mut AddressBook, args: &[String]) -> BookResult<Outcome> {
    let args = require(Command::Change, args, 3)?;
    let name = args[0].as_str();
    let old_phone = PhoneField::new(args[1].as_str());
    let new_phone = PhoneField::new(args[2].as_str());

    let message = match book.get_mut(name) {
        Some(record) if new_phone.is_set() => {
            record.change_phone(&old_phone, new_phone.clone());
            format!("Contact {} changed successfully", name)
        }
        Some(_) => format!("Contact {} unchanged", name),
        None => {
            debug!("change: no contact named {:?}", name);
            String::new()
        }
    };

    Ok(Outcome::Reply(with_advisories([&old_phone, &new_phone], message)))
}

fn get_phone(book: &AddressBook, args: &[String]) -> BookResult<Outcome> {
    let args = require(Command::Phone, args, 1)?;
    let reply = match book.get(&args[0]) {
        Some(record) => record.phone_numbers().join(", "),
        None => NO_SUCH_CONTACT.to_string(),
    };
    Ok(Outcome::Reply(reply))
}

fn show_all(book: &AddressBook, page_size: usize) -> Outcome {
    if book.is_empty() {
        return Outcome::Reply(EMPTY_BOOK.to_string());
    }

    let lines: Vec<String> = book
        .iterator(page_size)
        .flatten()
        .map(|record| format!("{}: {}", record.name(), record))
        .collect();
    Outcome::Reply(lines.join("\n"))
}

fn birthday(book: &AddressBook, args: &[String]) -> BookResult<Outcome> {
    let args = require(Command::Birthday, args, 1)?;
    let name = args[0].as_str();
    let record = book
        .get(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))?;

    let reply = match record.days_to_birthday()? {
        None => format!("Birthday of {} is unknown", name),
        Some(0) => format!("{}'s birthday is today", name),
        Some(days) => format!("{} day(s) until {}'s birthday", days, name),
    };
    Ok(Outcome::Reply(reply))
}

fn remove_phone(book: &mut AddressBook, args: &[String]) -> BookResult<Outcome> {
    let args = require(Command::Remove, args, 2)?;
    let name = args[0].as_str();
    let record = book
        .get_mut(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))?;

    let reply = match record.remove_phone(&PhoneField::new(args[1].as_str())) {
        Some(phone) => format!("Phone {} removed from {}", phone, name),
        None => "Phone not found".to_string(),
    };
    Ok(Outcome::Reply(reply))
}
