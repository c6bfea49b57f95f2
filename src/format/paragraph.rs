use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a sentence terminal: a run of `. ! ?` plus any trailing whitespace.
static SENTENCE_TERMINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+\s*").expect("sentence terminal regex"));

static EXTRA_BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank line regex"));

/// Decides whether the next sentence should open a new paragraph,
/// independently of the sentence-count target. Swappable so other locales
/// or discourse-marker sets can plug in without touching the grouping
/// algorithm.
pub trait ParagraphBreaker {
    fn is_natural_break(&self, next_sentence: &str) -> bool;
}

/// English discourse markers that typically signal a topic shift.
/// Matching is an exact case-sensitive prefix check after trimming.
pub const DISCOURSE_MARKERS: &[&str] = &[
    "However,",
    "Moreover,",
    "Furthermore,",
    "Additionally,",
    "In contrast,",
    "On the other hand,",
    "Meanwhile,",
    "Subsequently,",
    "Therefore,",
    "Consequently,",
    "As a result,",
    "In conclusion,",
];

/// The default [`ParagraphBreaker`]: a fixed English discourse-marker list.
#[derive(Debug, Default)]
pub struct DiscourseMarkers;

impl ParagraphBreaker for DiscourseMarkers {
    fn is_natural_break(&self, next_sentence: &str) -> bool {
        let trimmed = next_sentence.trim_start();
        DISCOURSE_MARKERS.iter().any(|m| trimmed.starts_with(m))
    }
}

/// Group normalized text into paragraphs using the default discourse-marker
/// break heuristic. `sentences_per_paragraph` is clamped to at least 1.
pub fn format_paragraphs(text: &str, sentences_per_paragraph: usize) -> String {
    format_paragraphs_with(text, sentences_per_paragraph, &DiscourseMarkers)
}

/// Group text into paragraphs with an explicit break predicate.
///
/// Sentences accumulate into the current paragraph; the paragraph flushes
/// when the sentence count reaches the target, when the next sentence
/// triggers the break predicate, or at end of input. Paragraphs are
/// separated by one blank line and the output ends with exactly one blank
/// line.
pub fn format_paragraphs_with(
    text: &str,
    sentences_per_paragraph: usize,
    breaker: &dyn ParagraphBreaker,
) -> String {
    let target = sentences_per_paragraph.max(1);
    let sentences = split_sentences(text);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for (i, sentence) in sentences.iter().enumerate() {
        current.push_str(sentence);
        count += 1;

        let next_breaks = sentences
            .get(i + 1)
            .map(|next| breaker.is_natural_break(next))
            .unwrap_or(false);

        if count >= target || next_breaks {
            let paragraph = current.trim();
            if !paragraph.is_empty() {
                paragraphs.push(paragraph.to_string());
            }
            current.clear();
            count = 0;
        }
    }

    let remainder = current.trim();
    if !remainder.is_empty() {
        paragraphs.push(remainder.to_string());
    }

    let joined = paragraphs.join("\n\n");
    let collapsed = EXTRA_BLANK_LINES.replace_all(&joined, "\n\n");

    let mut out = collapsed.trim_end().to_string();
    out.push_str("\n\n");
    out
}

/// Split text into sentences, each carrying its terminal punctuation and
/// trailing whitespace. A trailing fragment without a terminal becomes the
/// final entry.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last_end = 0;

    for m in SENTENCE_TERMINAL.find_iter(text) {
        sentences.push(text[last_end..m.end()].to_string());
        last_end = m.end();
    }

    if last_end < text.len() {
        sentences.push(text[last_end..].to_string());
    }

    sentences
}
