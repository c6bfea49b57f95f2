use super::record::{ItemKind, SegmentItem, WordItem};

/// Absolute tolerance in seconds when matching time ranges. Services
/// occasionally round start/end times differently between the word list
/// and the diarization output.
pub const TIME_TOLERANCE: f64 = 0.01;

/// Rebuild contiguous text from the full word-item list.
///
/// Punctuation items attach to the preceding word without a space;
/// pronunciation items get a leading space unless first or preceded by
/// punctuation.
pub fn reconstruct_full(items: &[WordItem]) -> String {
    reconstruct_with_pauses(items, None)
}

/// Like [`reconstruct_full`], but inserts a `[pause]` marker whenever the
/// gap between consecutive timed items exceeds `gap_threshold_secs`.
pub fn reconstruct_with_pauses(items: &[WordItem], gap_threshold_secs: Option<f64>) -> String {
    let mut out = String::new();
    let mut prev_punct = false;
    let mut prev_end: Option<f64> = None;

    for item in items {
        let content = item.content();
        if content.is_empty() {
            continue;
        }

        match item.kind {
            ItemKind::Punctuation => out.push_str(content),
            ItemKind::Pronunciation => {
                if let (Some(threshold), Some(prev), Some(start)) =
                    (gap_threshold_secs, prev_end, item.start_time)
                {
                    if start - prev > threshold && !out.is_empty() {
                        out.push_str(" [pause]");
                    }
                }

                if !out.is_empty() && !prev_punct {
                    out.push(' ');
                }
                out.push_str(content);
            }
        }

        prev_punct = matches!(item.kind, ItemKind::Punctuation);
        if let Some(end) = item.end_time {
            prev_end = Some(end);
        }
    }

    out
}

/// Find the word item whose time range matches `(start, end)` within
/// [`TIME_TOLERANCE`] on each bound.
pub fn find_item_at(items: &[WordItem], start: f64, end: f64) -> Option<&WordItem> {
    items.iter().find(|item| match (item.start_time, item.end_time) {
        (Some(s), Some(e)) => (s - start).abs() <= TIME_TOLERANCE && (e - end).abs() <= TIME_TOLERANCE,
        _ => false,
    })
}

/// Time-range lookup: the text of the item matching `(start, end)`, if any.
pub fn find_word_at(items: &[WordItem], start: f64, end: f64) -> Option<&str> {
    find_item_at(items, start, end).map(|item| item.content())
}

/// Rebuild segment text from diarization sub-item time ranges.
///
/// Each sub-range is resolved against the word list; unresolvable ranges
/// are skipped. Spacing follows the same rule as [`reconstruct_full`].
pub fn reconstruct_from_ranges(sub_items: &[SegmentItem], items: &[WordItem]) -> String {
    let mut out = String::new();
    let mut prev_punct = false;

    for sub in sub_items {
        let (Some(start), Some(end)) = (sub.start_time, sub.end_time) else {
            continue;
        };
        let Some(item) = find_item_at(items, start, end) else {
            continue;
        };

        let content = item.content();
        if content.is_empty() {
            continue;
        }

        match item.kind {
            ItemKind::Punctuation => out.push_str(content),
            ItemKind::Pronunciation => {
                if !out.is_empty() && !prev_punct {
                    out.push(' ');
                }
                out.push_str(content);
            }
        }
        prev_punct = matches!(item.kind, ItemKind::Punctuation);
    }

    out
}

/// Fallback when a segment provides no sub-item list: every word item whose
/// `[start, end]` lies inside the segment's range (bounds inclusive),
/// sorted by start time and joined with single spaces.
pub fn words_in_range(items: &[WordItem], start: f64, end: f64) -> String {
    let mut matched: Vec<&WordItem> = items
        .iter()
        .filter(|item| {
            matches!(
                (item.start_time, item.end_time),
                (Some(s), Some(e)) if s >= start && e <= end
            )
        })
        .collect();

    matched.sort_by(|a, b| {
        a.start_time
            .unwrap_or(0.0)
            .total_cmp(&b.start_time.unwrap_or(0.0))
    });

    matched
        .iter()
        .map(|item| item.content())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
