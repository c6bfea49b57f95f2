use super::parsed::{speaker_display_name, TranscriptSegment};
use super::reconstruct::{reconstruct_from_ranges, reconstruct_full, words_in_range};
use super::record::{DiarizationSegment, Results, WordItem};
use crate::error::{SegmentError, TranscriptError};
use crate::format::normalize_text;
use tracing::warn;

/// Result of segment processing: the merged segments plus per-segment
/// failures that were recovered from along the way.
#[derive(Debug)]
pub struct SegmentOutcome {
    pub segments: Vec<TranscriptSegment>,
    pub warnings: Vec<SegmentError>,
}

/// Partition the word items into per-speaker segments.
///
/// Each diarization segment is reconstructed (sub-item resolution when the
/// segment carries time ranges, overall-range filtering otherwise),
/// normalized, and dropped if empty. A malformed segment is logged and
/// skipped; it never aborts the transcript. Consecutive same-speaker
/// segments are merged afterwards.
///
/// Without any diarization, a single segment spanning the whole transcript
/// is synthesized, using `full_transcript` when there are no word items.
pub fn build_segments(
    results: &Results,
    full_transcript: &str,
) -> Result<SegmentOutcome, TranscriptError> {
    let items = results.items.as_deref().unwrap_or(&[]);

    let Some(labels) = &results.speaker_labels else {
        return Ok(SegmentOutcome {
            segments: vec![whole_transcript_segment(items, full_transcript)],
            warnings: Vec::new(),
        });
    };

    let mut built = Vec::with_capacity(labels.segments.len());
    let mut warnings = Vec::new();

    for (index, segment) in labels.segments.iter().enumerate() {
        match build_one(segment, items, index) {
            Ok(Some(seg)) => built.push(seg),
            Ok(None) => {} // empty after normalization, dropped
            Err(e) => {
                warn!("skipping malformed segment: {}", e);
                warnings.push(e);
            }
        }
    }

    if built.is_empty() && !labels.segments.is_empty() {
        return Err(TranscriptError::NoValidSegments);
    }

    Ok(SegmentOutcome {
        segments: merge_consecutive(built),
        warnings,
    })
}

fn build_one(
    segment: &DiarizationSegment,
    items: &[WordItem],
    index: usize,
) -> Result<Option<TranscriptSegment>, SegmentError> {
    let start = segment.start_time.ok_or_else(|| SegmentError {
        index,
        label: segment.speaker_label.clone(),
        reason: "missing start_time".to_string(),
    })?;
    let end = segment.end_time.ok_or_else(|| SegmentError {
        index,
        label: segment.speaker_label.clone(),
        reason: "missing end_time".to_string(),
    })?;
    if end < start {
        return Err(SegmentError {
            index,
            label: segment.speaker_label.clone(),
            reason: format!("end_time {} precedes start_time {}", end, start),
        });
    }

    let raw = match &segment.items {
        Some(subs) if !subs.is_empty() => reconstruct_from_ranges(subs, items),
        _ => words_in_range(items, start, end),
    };

    let text = normalize_text(&raw);
    if text.is_empty() {
        return Ok(None);
    }

    Ok(Some(TranscriptSegment {
        speaker: speaker_display_name(&segment.speaker_label),
        text,
        start_time: start,
        end_time: end,
        original_label: segment.speaker_label.clone(),
    }))
}

/// Merge runs of consecutive segments attributed to the same speaker into
/// one speaker turn. Text is joined with a single space and the end time
/// extended; ordering is preserved and nothing is re-sorted.
fn merge_consecutive(segments: Vec<TranscriptSegment>) -> Vec<TranscriptSegment> {
    let mut merged: Vec<TranscriptSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.speaker == segment.speaker => {
                last.text.push(' ');
                last.text.push_str(&segment.text);
                last.end_time = segment.end_time;
            }
            _ => merged.push(segment),
        }
    }

    merged
}

/// Single-speaker fallback covering the whole transcript.
fn whole_transcript_segment(items: &[WordItem], full_transcript: &str) -> TranscriptSegment {
    let text = if items.is_empty() {
        full_transcript.to_string()
    } else {
        normalize_text(&reconstruct_full(items))
    };

    let end_time = items
        .iter()
        .filter_map(|item| item.end_time)
        .fold(0.0, f64::max);

    TranscriptSegment {
        speaker: speaker_display_name("spk_0"),
        text,
        start_time: 0.0,
        end_time,
        original_label: "spk_0".to_string(),
    }
}
