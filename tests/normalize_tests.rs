// Tests for the text normalizer transformation chain.
//
// Normalization must be deterministic and idempotent: running it twice
// yields the same text as running it once.

use transcribe_md::normalize_text;

#[test]
fn test_whitespace_collapse() {
    assert_eq!(normalize_text("hello   \t  world"), "Hello world.");
    assert_eq!(normalize_text("  hello\nworld  "), "Hello world.");
}

#[test]
fn test_whitespace_before_punctuation_removed() {
    assert_eq!(normalize_text("hello , world ."), "Hello, world.");
    assert_eq!(normalize_text("wait ; no : yes !"), "Wait; no: yes!");
}

#[test]
fn test_space_inserted_after_sentence_terminal() {
    assert_eq!(normalize_text("first.Second"), "First. Second.");
    assert_eq!(normalize_text("really?Yes"), "Really? Yes.");
    // Lowercase after a terminal is left alone
    assert_eq!(normalize_text("e.g.this"), "E.g.this.");
}

#[test]
fn test_capitalization() {
    assert_eq!(normalize_text("hello world"), "Hello world.");
}

#[test]
fn test_terminal_punctuation_appended() {
    assert_eq!(normalize_text("hello world"), "Hello world.");
    assert_eq!(normalize_text("Already done!"), "Already done!");
    assert_eq!(normalize_text("Is it over?"), "Is it over?");
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert_eq!(normalize_text(""), "");
    assert_eq!(normalize_text("   \n\t "), "");
}

#[test]
fn test_normalization_is_idempotent() {
    let inputs = [
        "hello   world",
        "first.Second and , third ?",
        "Already done!",
        "one two three",
        "trailing spaces   ",
    ];

    for input in inputs {
        let once = normalize_text(input);
        let twice = normalize_text(&once);
        assert_eq!(once, twice, "normalization not idempotent for {:?}", input);
    }
}
