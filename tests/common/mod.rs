// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use elemental_words::{Segmenter, SymbolTable};
use std::collections::HashSet;

/// The small table the reference behaviour was specified against.
pub fn reference_table() -> SymbolTable {
    SymbolTable::from_entries([
        ("H", "Hydrogen (H)"),
        ("XE", "Xenon (Xe)"),
        ("AC", "Actinium (Ac)"),
        ("B", "Boron (B)"),
        ("O", "Oxygen (O)"),
        ("N", "Nitrogen (N)"),
        ("BA", "Barium (Ba)"),
        ("CO", "Cobalt (Co)"),
        ("C", "Carbon (C)"),
    ])
    .expect("reference table is well formed")
}

pub fn reference_segmenter() -> Segmenter {
    Segmenter::new(reference_table())
}

/// Results as an order-independent set.
pub fn as_set(forms: &[Vec<String>]) -> HashSet<Vec<String>> {
    forms.iter().cloned().collect()
}

pub fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Count tilings of `word` by dynamic programming over char positions,
/// independently of the search engine.
pub fn count_tilings(table: &SymbolTable, word: &str) -> u64 {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return 0;
    }
    let mut ways = vec![0u64; chars.len() + 1];
    ways[0] = 1;
    for end in 1..=chars.len() {
        for len in 1..=table.max_code_len().min(end) {
            let candidate: String = chars[end - len..end].iter().collect();
            if table.is_valid_code(&candidate) {
                ways[end] += ways[end - len];
            }
        }
    }
    ways[chars.len()]
}
