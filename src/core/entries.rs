//! Entry list model
//!
//! Every enumeration produces an [`EntryList`]: an ordered, growable
//! collection of owned entry names. The list is handed to the caller by
//! value, and the releasing consumers ([`EntryList::print_to`],
//! `into_iter`) take it by value too, so releasing twice does not
//! compile. The length travels with the value and stays available until
//! the list is consumed.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::core::error::{ListError, ListResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList {
    names: Vec<String>,
}

impl EntryList {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Create a list with room for `capacity` entries. The reservation is
    /// fallible, so memory exhaustion surfaces as [`ListError::Alloc`]
    /// instead of an abort.
    pub fn with_capacity(capacity: usize) -> ListResult<Self> {
        let mut names = Vec::new();
        names
            .try_reserve_exact(capacity)
            .map_err(|source| ListError::Alloc { capacity, source })?;
        Ok(Self { names })
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    /// Sort names ascending by byte-wise comparison for stable output.
    pub fn sort(&mut self) {
        self.names.sort_unstable();
    }

    /// Write each name followed by a newline, consuming the list.
    pub fn print_to<W: Write>(self, mut writer: W) -> io::Result<()> {
        for name in &self.names {
            writeln!(writer, "{name}")?;
        }
        Ok(())
    }
}

impl IntoIterator for EntryList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl FromIterator<String> for EntryList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
