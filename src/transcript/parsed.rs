use super::record::JobStatus;
use serde::Serialize;

/// A reconstructed per-speaker segment, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptSegment {
    /// Display name, e.g. "Speaker 1"
    pub speaker: String,

    /// Normalized segment text
    pub text: String,

    /// Start time in seconds
    pub start_time: f64,

    /// End time in seconds (extended when same-speaker segments merge)
    pub end_time: f64,

    /// Raw label from the diarization output, e.g. "spk_0"
    pub original_label: String,
}

/// A speaker appearing in the transcript, in order of first appearance
#[derive(Debug, Clone, Serialize)]
pub struct Speaker {
    pub name: String,

    /// Number of merged segments attributed to this speaker
    pub segment_count: usize,
}

/// Diagnostic metadata collected while parsing a record
#[derive(Debug, Clone, Serialize)]
pub struct ParseMetadata {
    pub status: JobStatus,
    pub has_items: bool,
    pub has_speaker_labels: bool,
    pub total_segments: usize,
    pub processing_time_ms: u64,
}

/// The fully parsed and reconstructed transcript.
///
/// Created once per upload, held by the session, and re-rendered whenever
/// format options change.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedTranscript {
    /// Job name, defaulted to "Transcription" when the record has none
    pub job_name: String,

    /// Speakers in order of first appearance
    pub speakers: Vec<Speaker>,

    /// Merged per-speaker segments in chronological order
    pub segments: Vec<TranscriptSegment>,

    /// Verbatim first transcript string, the fallback body when no
    /// segments exist
    pub full_transcript: String,

    pub metadata: ParseMetadata,
}

/// Map a raw diarization label to a display name.
///
/// "spk_0" becomes "Speaker 1", "spk_11" becomes "Speaker 12". Labels that
/// do not match the `spk_<digits>` pattern pass through verbatim.
pub fn speaker_display_name(raw: &str) -> String {
    raw.strip_prefix("spk_")
        .and_then(|digits| digits.parse::<u32>().ok())
        .map(|n| format!("Speaker {}", n + 1))
        .unwrap_or_else(|| raw.to_string())
}
