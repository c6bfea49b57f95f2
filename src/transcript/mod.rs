//! Transcript reconstruction: from a raw diarized transcription record to
//! ordered, speaker-attributed, normalized segments.
//!
//! This module provides:
//! - Structural validation of the raw record before typed parsing
//! - The typed schema of the transcription record
//! - Time-indexed word reconstruction (sub-item resolution plus
//!   range-filter fallback)
//! - Segment processing with speaker mapping and same-speaker merging

pub mod parsed;
pub mod reconstruct;
pub mod record;
pub mod segments;
pub mod validate;

pub use parsed::{speaker_display_name, ParseMetadata, ParsedTranscript, Speaker, TranscriptSegment};
pub use record::{
    Alternative, DiarizationSegment, ItemKind, JobStatus, Results, SegmentItem, SpeakerLabels,
    Transcript, TranscriptionRecord, WordItem,
};
pub use reconstruct::{
    find_word_at, reconstruct_full, reconstruct_with_pauses, words_in_range, TIME_TOLERANCE,
};
pub use segments::{build_segments, SegmentOutcome};
pub use validate::validate_record;
