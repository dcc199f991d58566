//! The address book: an insertion-ordered collection of records keyed by name.

use super::record::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::slice::Chunks;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// A keyed collection of [`Record`]s.
///
/// Keys are the records' names and are unique; adding a record under an
/// existing name replaces the old one in place, keeping its position.
/// Serializes as an ordered list of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, overwriting any previous entry.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Walk the book in pages of up to `page_size` records, in insertion
    /// order. The last page may be shorter. A `page_size` of zero is
    /// treated as one.
    pub fn iterator(&self, page_size: usize) -> Pages<'_> {
        Pages {
            chunks: self.records.chunks(page_size.max(1)),
        }
    }
}

/// Lazy page traversal produced by [`AddressBook::iterator`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, Record>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.records)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records: Vec<Record> = Vec::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
