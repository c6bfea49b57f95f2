use thiserror::Error;

/// Fatal errors surfaced to callers of the conversion pipeline.
///
/// Every variant carries a human-readable message suitable for direct
/// display; nothing fatal is swallowed below this level.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// The record failed structural validation before typed parsing.
    #[error("{0}")]
    Validation(String),

    /// The input could not be parsed as a transcription record.
    #[error("Failed to parse transcription data: {0}")]
    Parse(String),

    /// Diarization was present but every segment produced empty text.
    #[error("no valid segments found")]
    NoValidSegments,

    /// A named format preset does not exist. Callers treat this as a
    /// no-op and keep the current options.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// A recoverable failure while reconstructing a single diarization segment.
///
/// These are collected as warnings so one malformed segment never aborts
/// the rest of the transcript.
#[derive(Debug, Clone, Error)]
#[error("segment {index} ({label}): {reason}")]
pub struct SegmentError {
    /// Index of the segment in the diarization input
    pub index: usize,

    /// Raw speaker label of the failing segment
    pub label: String,

    /// What went wrong
    pub reason: String,
}
