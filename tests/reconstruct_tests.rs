// Tests for time-indexed word reconstruction: spacing rules, the
// tolerance-based time-range lookup, and the range-filter fallback.

use transcribe_md::transcript::{
    find_word_at, reconstruct_full, reconstruct_with_pauses, words_in_range, WordItem,
};

fn hello_world_items() -> Vec<WordItem> {
    vec![
        WordItem::pronunciation("Hello", 0.0, 0.5),
        WordItem::pronunciation("world", 0.6, 1.1),
        WordItem::punctuation("."),
    ]
}

#[test]
fn test_word_reconstruction_spacing() {
    assert_eq!(reconstruct_full(&hello_world_items()), "Hello world.");
}

#[test]
fn test_reconstruction_of_empty_item_list() {
    assert_eq!(reconstruct_full(&[]), "");
}

#[test]
fn test_punctuation_attaches_without_space() {
    let items = vec![
        WordItem::pronunciation("Yes", 0.0, 0.3),
        WordItem::punctuation(","),
        WordItem::pronunciation("sure", 0.4, 0.8),
        WordItem::punctuation("."),
    ];

    // No space before punctuation; the word after a punctuation item
    // attaches directly (the normalizer re-inserts sentence spacing later).
    assert_eq!(reconstruct_full(&items), "Yes,sure.");
}

#[test]
fn test_pause_insertion_on_large_gap() {
    let items = vec![
        WordItem::pronunciation("Hello", 0.0, 0.5),
        WordItem::pronunciation("world", 3.0, 3.5),
    ];

    assert_eq!(
        reconstruct_with_pauses(&items, Some(2.0)),
        "Hello [pause] world"
    );
    // Below the threshold no marker appears
    assert_eq!(reconstruct_with_pauses(&items, Some(5.0)), "Hello world");
}

#[test]
fn test_time_range_lookup_within_tolerance() {
    let items = hello_world_items();

    assert_eq!(find_word_at(&items, 0.6, 1.1), Some("world"));
    // Off by less than the 0.01s tolerance still matches
    assert_eq!(find_word_at(&items, 0.605, 1.105), Some("world"));
    // Off by more does not
    assert_eq!(find_word_at(&items, 0.62, 1.1), None);
    // Punctuation items carry no times and are never matched
    assert_eq!(find_word_at(&items, 1.1, 1.1), None);
}

#[test]
fn test_range_filter_fallback() {
    let items = vec![
        WordItem::pronunciation("one", 0.0, 0.4),
        WordItem::pronunciation("three", 2.0, 2.4),
        WordItem::pronunciation("two", 1.0, 1.4),
        WordItem::pronunciation("four", 5.0, 5.4),
    ];

    // Bounds are inclusive; results are sorted by start time
    assert_eq!(words_in_range(&items, 0.0, 2.4), "one two three");
    assert_eq!(words_in_range(&items, 0.5, 3.0), "two three");
    assert_eq!(words_in_range(&items, 6.0, 7.0), "");
}
