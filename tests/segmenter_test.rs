// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for word segmentation.

mod common;

use common::{as_set, labels, reference_segmenter};
use elemental_words::{SearchError, SearchLimits, Segmenter};

#[test]
fn test_empty_word_has_no_forms() {
    let segmenter = reference_segmenter();
    let results = segmenter.find_segmentations("");
    assert!(results.is_empty());
}

#[test]
fn test_words_without_forms() {
    let segmenter = reference_segmenter();
    for word in ["X", "XA", "1", "123", "?"] {
        assert!(
            segmenter.find_segmentations(word).is_empty(),
            "{} should have no forms",
            word
        );
    }
}

#[test]
fn test_single_form() {
    let segmenter = reference_segmenter();
    for (word, expected) in [
        ("H", "Hydrogen (H)"),
        ("Xe", "Xenon (Xe)"),
        ("Ac", "Actinium (Ac)"),
    ] {
        let results = segmenter.find_segmentations(word);
        assert_eq!(results, vec![vec![expected.to_string()]], "word {}", word);
    }
}

#[test]
fn test_multiple_forms() {
    let segmenter = reference_segmenter();
    let results = segmenter.find_segmentations("Bacon");

    assert_eq!(results.len(), 3);
    assert_eq!(
        as_set(&results),
        as_set(&[
            labels(&["Boron (B)", "Actinium (Ac)", "Oxygen (O)", "Nitrogen (N)"]),
            labels(&["Barium (Ba)", "Cobalt (Co)", "Nitrogen (N)"]),
            labels(&["Barium (Ba)", "Carbon (C)", "Oxygen (O)", "Nitrogen (N)"]),
        ])
    );
}

#[test]
fn test_shortest_code_first_order() {
    let segmenter = reference_segmenter();
    let results = segmenter.find_segmentations("Bacon");
    assert_eq!(
        results,
        vec![
            labels(&["Boron (B)", "Actinium (Ac)", "Oxygen (O)", "Nitrogen (N)"]),
            labels(&["Barium (Ba)", "Carbon (C)", "Oxygen (O)", "Nitrogen (N)"]),
            labels(&["Barium (Ba)", "Cobalt (Co)", "Nitrogen (N)"]),
        ]
    );
}

#[test]
fn test_case_insensitive() {
    let segmenter = reference_segmenter();
    for word in ["Ac", "AC", "ac", "aC"] {
        assert_eq!(
            segmenter.find_segmentations(word),
            vec![labels(&["Actinium (Ac)"])],
            "word {}",
            word
        );
    }
}

#[test]
fn test_repeated_calls_agree() {
    let segmenter = Segmenter::periodic();
    let first = segmenter.find_segmentations("Chocolates");
    for _ in 0..3 {
        assert_eq!(segmenter.find_segmentations("Chocolates"), first);
    }
}

#[test]
fn test_codes_reconstruct_word() {
    let segmenter = Segmenter::periodic();
    let segmentation = segmenter.segment("Inconspicuousness");
    assert!(!segmentation.is_empty());
    for partition in &segmentation.partitions {
        assert_eq!(partition.codes().concat(), "Inconspicuousness");
        assert_eq!(partition.codes().len(), partition.labels().len());
    }
}

#[test]
fn test_dead_end_late_in_word() {
    // "Bq": B is valid but "q" never is.
    let segmenter = Segmenter::periodic();
    let segmentation = segmenter.segment("Bq");
    assert!(segmentation.is_empty());
    assert_eq!(segmentation.statistics.dead_ends, 1);
}

#[test]
fn test_non_ascii_word() {
    let segmenter = Segmenter::periodic();
    assert!(segmenter.find_segmentations("Héllo").is_empty());
    assert!(segmenter.find_segmentations("日本").is_empty());
}

#[test]
fn test_long_word_does_not_overflow() {
    // Every prefix is "H", so the search is as deep as the word is long.
    let word = "h".repeat(20_000);
    let segmenter = Segmenter::periodic();
    let results = segmenter.find_segmentations(&word);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].len(), 20_000);
}

#[test]
fn test_bounded_search() {
    let segmenter = Segmenter::periodic();
    let word = "conservationalists";

    let limits = SearchLimits::unlimited().with_max_steps(10);
    assert!(matches!(
        segmenter.segment_within(word, &limits),
        Err(SearchError::StepBudgetExceeded { limit: 10 })
    ));

    let limits = SearchLimits::unlimited().with_max_depth(4);
    assert!(matches!(
        segmenter.segment_within(word, &limits),
        Err(SearchError::DepthLimitExceeded { limit: 4 })
    ));

    let unbounded = segmenter.segment(word);
    let generous = SearchLimits::unlimited()
        .with_max_steps(1_000_000)
        .with_max_depth(word.len() + 3);
    assert_eq!(segmenter.segment_within(word, &generous).unwrap(), unbounded);
}

#[test]
fn test_concurrent_searches_share_table() {
    let segmenter = Segmenter::periodic();
    let expected = segmenter.find_segmentations("Bacon");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| segmenter.find_segmentations("Bacon")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_custom_table_with_longer_codes() {
    let table = elemental_words::SymbolTable::from_entries([
        ("A", "a"),
        ("AB", "ab"),
        ("ABC", "abc"),
        ("BC", "bc"),
        ("C", "c"),
    ])
    .unwrap();
    let segmenter = Segmenter::new(table);
    let results = segmenter.find_segmentations("abc");
    assert_eq!(
        as_set(&results),
        as_set(&[
            labels(&["a", "bc"]),
            labels(&["ab", "c"]),
            labels(&["abc"]),
        ])
    );
}
