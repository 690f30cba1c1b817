// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loading custom symbol tables from JSON.
//!
//! The file format is a list of entries, kept in file order:
//!
//! ```json
//! { "entries": [ { "code": "H", "label": "Hydrogen (H)" } ] }
//! ```

use super::SymbolTable;
use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFile {
    pub entries: Vec<TableEntry>,
}

impl SymbolTable {
    /// Parse a table from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_str(json)?;
        Self::from_entries(
            file.entries
                .into_iter()
                .map(|entry| (entry.code, entry.label)),
        )
    }

    /// Read and parse a table from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            entries = table.len(),
            max_code_len = table.max_code_len(),
            "loaded symbol table"
        );
        Ok(table)
    }
}
