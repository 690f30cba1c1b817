// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable, case-insensitive symbol table mapping short codes to labels.
//!
//! The table plays the role of precomputed lookup data for the search: it is
//! built once, never mutated afterwards, and can be shared by any number of
//! concurrent searches.
//!
//! Keys are stored upper-cased. Lookups upper-case the candidate first, so
//! `"ac"`, `"aC"` and `"AC"` all find the same entry.
//!
//! # Example
//!
//! ```
//! use elemental_words::SymbolTable;
//!
//! let table = SymbolTable::periodic();
//! assert!(table.is_valid_code("xe"));
//! assert_eq!(table.label_of("Xe").unwrap(), "Xenon (Xe)");
//! assert!(table.label_of("Qx").is_err());
//! ```

pub mod elements;
pub mod loader;

use crate::error::{LookupError, TableError};
use elements::{element_label, ELEMENTS};
use std::collections::HashMap;

/// The expanded, human-readable form of a code.
pub type Label = String;

/// Proof that a code is a key of a particular [`SymbolTable`].
///
/// Only the table hands these out (see [`SymbolTable::validate`]), so turning
/// one back into a label with [`SymbolTable::label`] cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidCode {
    index: usize,
}

#[derive(Debug, Clone)]
struct Entry {
    code: String,
    label: Label,
}

/// Mapping from upper-cased code to label.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    /// Entries in insertion order.
    entries: Vec<Entry>,

    /// Upper-cased code -> position in `entries`.
    index: HashMap<String, usize>,

    /// Length in chars of the longest key.
    max_code_len: usize,
}

impl SymbolTable {
    /// The 118 chemical elements, labelled `"Name (Symbol)"`.
    pub fn periodic() -> Self {
        let mut table = Self::default();
        for (symbol, name) in ELEMENTS.iter() {
            table.push_entry(symbol.to_uppercase(), element_label(symbol, name));
        }
        table
    }

    /// Build a table from `(code, label)` pairs.
    ///
    /// Fails if a code is empty, or if two codes are equal once upper-cased.
    pub fn from_entries<I, C, L>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (C, L)>,
        C: AsRef<str>,
        L: Into<Label>,
    {
        let mut table = Self::default();
        for (code, label) in entries {
            let key = code.as_ref().to_uppercase();
            if key.is_empty() {
                return Err(TableError::EmptyCode);
            }
            if table.index.contains_key(&key) {
                return Err(TableError::DuplicateCode {
                    code: code.as_ref().to_string(),
                });
            }
            table.push_entry(key, label.into());
        }
        Ok(table)
    }

    fn push_entry(&mut self, key: String, label: Label) {
        self.max_code_len = self.max_code_len.max(key.chars().count());
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Entry { code: key, label });
    }

    /// Whether `candidate` (in any case) is a key of the table.
    pub fn is_valid_code(&self, candidate: &str) -> bool {
        self.validate(candidate).is_some()
    }

    /// Validate `candidate`, returning a token for its entry.
    pub fn validate(&self, candidate: &str) -> Option<ValidCode> {
        // Anything longer than the longest key cannot match; skip the allocation.
        if candidate.is_empty() || candidate.chars().count() > self.max_code_len {
            return None;
        }
        self.index
            .get(&candidate.to_uppercase())
            .map(|&index| ValidCode { index })
    }

    /// The label of `candidate`.
    pub fn label_of(&self, candidate: &str) -> Result<&str, LookupError> {
        self.validate(candidate)
            .map(|code| self.label(code))
            .ok_or_else(|| LookupError::InvalidCode {
                code: candidate.to_string(),
            })
    }

    /// Map every candidate to its label, preserving order.
    ///
    /// Fails on the first invalid candidate; no partial result is returned.
    pub fn convert_all<I, S>(&self, candidates: I) -> Result<Vec<Label>, LookupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .map(|candidate| self.label_of(candidate.as_ref()).map(str::to_string))
            .collect()
    }

    /// The label of a code already validated against this table.
    pub fn label(&self, code: ValidCode) -> &str {
        &self.entries[code.index].label
    }

    /// The upper-cased key of a validated code.
    pub fn code(&self, code: ValidCode) -> &str {
        &self.entries[code.index].code
    }

    /// Map validated codes to labels. Cannot fail.
    pub fn labels<'a, I>(&self, codes: I) -> Vec<Label>
    where
        I: IntoIterator<Item = &'a ValidCode>,
    {
        codes
            .into_iter()
            .map(|&code| self.label(code).to_string())
            .collect()
    }

    /// Length in chars of the longest key; 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Upper-cased keys, in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }
}
