//! Property-style tests for fields, records and the address book.

use contact_book::domain::{BirthdayField, Field, NameField, PhoneField, ValidationError};
use contact_book::models::{AddressBook, Record, DEFAULT_PAGE_SIZE};

fn record(name: &str, phone: &str) -> Record {
    Record::new(NameField::new(name)).with_phone(PhoneField::new(phone))
}

#[test]
fn test_phone_accepts_exactly_from_ten_characters() {
    for len in 0..16 {
        let text = "7".repeat(len);
        let phone = PhoneField::new(text.as_str());
        if len >= 10 {
            assert_eq!(phone.value(), Some(text.as_str()), "length {}", len);
            assert!(phone.advisory().is_none());
        } else {
            assert_eq!(phone.value(), None, "length {}", len);
            assert!(phone.advisory().is_some());
        }
    }
}

#[test]
fn test_phone_mutation_keeps_previous_value_on_rejection() {
    let mut phone = PhoneField::new("1234567890");
    for len in 0..10 {
        phone.set_value("9".repeat(len)).unwrap();
        assert_eq!(phone.value(), Some("1234567890"));
        assert!(phone.advisory().is_some());
    }
}

#[test]
fn test_birthday_shape_rule() {
    for ok in ["01.01.1990", "31.12.2000", "ab.cd.efgh", "29.02.2024"] {
        let birthday = BirthdayField::new(ok).unwrap();
        assert_eq!(birthday.value(), Some(ok));
    }

    for bad in ["1.01.1990", "01.1.1990", "01.01.199", "01.01.19900", "01-01-1990", "", "01.01"] {
        assert_eq!(
            BirthdayField::new(bad),
            Err(ValidationError::InvalidBirthday(bad.to_string())),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_same_name_keeps_most_recent_record() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "1111111111"));
    book.add_record(
        record("Alice", "2222222222").with_birthday(BirthdayField::new("05.05.1995").unwrap()),
    );

    assert_eq!(book.len(), 1);
    let alice = book.get("Alice").unwrap();
    assert_eq!(alice.phone_numbers(), vec!["2222222222"]);
    assert_eq!(alice.birthday().unwrap().as_str(), "05.05.1995");
}

#[test]
fn test_pagination_covers_every_record_once() {
    let mut book = AddressBook::new();
    for name in ["Ann", "Ben", "Cat", "Dan", "Eve"] {
        book.add_record(record(name, "1234567890"));
    }

    let pages: Vec<Vec<&str>> = book
        .iterator(DEFAULT_PAGE_SIZE)
        .map(|page| page.iter().map(|r| r.name().as_str()).collect())
        .collect();

    assert_eq!(
        pages,
        vec![vec!["Ann", "Ben"], vec!["Cat", "Dan"], vec!["Eve"]]
    );
}

#[test]
fn test_change_phone_with_absent_old_appends_new() {
    let mut alice = record("Alice", "1111111111").with_phone(PhoneField::new("2222222222"));
    alice.change_phone(&PhoneField::new("9999999999"), PhoneField::new("3333333333"));

    assert_eq!(
        alice.phone_numbers(),
        vec!["1111111111", "2222222222", "3333333333"]
    );
}
