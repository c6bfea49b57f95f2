use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A diarized transcription job record (Amazon-Transcribe-style schema).
///
/// This is the typed form of the JSON uploaded by the user. Optional fields
/// are explicit; the record is validated structurally before this type is
/// ever constructed, and never re-checked downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionRecord {
    /// Transcription job name (used for the document title and filename)
    #[serde(rename = "jobName")]
    pub job_name: Option<String>,

    /// Account that ran the job
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,

    /// Job status as reported by the transcription service
    #[serde(default)]
    pub status: JobStatus,

    /// Transcription results
    pub results: Results,
}

/// Status of the transcription job. Unrecognized values map to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(other)]
    Unknown,
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Unknown
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Completed => "COMPLETED",
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Failed => "FAILED",
            JobStatus::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// The `results` body of a transcription record
#[derive(Debug, Clone, Deserialize)]
pub struct Results {
    /// Full-text transcripts; the first entry is the fallback text when no
    /// usable diarization exists
    pub transcripts: Vec<Transcript>,

    /// Word-level timed items, when the service produced them
    #[serde(default)]
    pub items: Option<Vec<WordItem>>,

    /// Speaker diarization output, when the job ran with it enabled
    #[serde(default)]
    pub speaker_labels: Option<SpeakerLabels>,
}

/// One full-text transcript string
#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    pub transcript: String,
}

/// Whether a word item is a spoken word or an attached punctuation mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Pronunciation,
    Punctuation,
}

/// The smallest timed unit in the source transcript: a word or a
/// punctuation mark. Punctuation items usually carry no time bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct WordItem {
    /// Start time in seconds (the service emits these as strings)
    #[serde(default, deserialize_with = "de_opt_time")]
    pub start_time: Option<f64>,

    /// End time in seconds
    #[serde(default, deserialize_with = "de_opt_time")]
    pub end_time: Option<f64>,

    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Recognition alternatives, best first
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

impl WordItem {
    /// Text content of the best (first) alternative, or "" if none exist.
    pub fn content(&self) -> &str {
        self.alternatives
            .first()
            .map(|a| a.content.as_str())
            .unwrap_or("")
    }

    /// Convenience constructor for a timed spoken word.
    pub fn pronunciation(content: &str, start: f64, end: f64) -> Self {
        Self {
            start_time: Some(start),
            end_time: Some(end),
            kind: ItemKind::Pronunciation,
            alternatives: vec![Alternative {
                content: content.to_string(),
                confidence: None,
            }],
        }
    }

    /// Convenience constructor for an untimed punctuation mark.
    pub fn punctuation(content: &str) -> Self {
        Self {
            start_time: None,
            end_time: None,
            kind: ItemKind::Punctuation,
            alternatives: vec![Alternative {
                content: content.to_string(),
                confidence: None,
            }],
        }
    }
}

/// One recognition alternative for a word item
#[derive(Debug, Clone, Deserialize)]
pub struct Alternative {
    pub content: String,

    #[serde(default, deserialize_with = "de_opt_time")]
    pub confidence: Option<f64>,
}

/// Speaker diarization output: which speaker talked when
#[derive(Debug, Clone, Deserialize)]
pub struct SpeakerLabels {
    /// Number of distinct speakers the service detected
    #[serde(default)]
    pub speakers: Option<u32>,

    /// Time-bounded per-speaker segments, in chronological order
    pub segments: Vec<DiarizationSegment>,
}

/// A time-bounded span of audio attributed to one speaker
#[derive(Debug, Clone, Deserialize)]
pub struct DiarizationSegment {
    /// Raw speaker label, e.g. "spk_0"
    pub speaker_label: String,

    #[serde(default, deserialize_with = "de_opt_time")]
    pub start_time: Option<f64>,

    #[serde(default, deserialize_with = "de_opt_time")]
    pub end_time: Option<f64>,

    /// Sub-word time ranges belonging to this segment. Some services omit
    /// these entirely; reconstruction then falls back to the segment's
    /// overall time range.
    #[serde(default)]
    pub items: Option<Vec<SegmentItem>>,
}

/// A sub-item time range inside a diarization segment, matched against
/// word items by time-range equality within tolerance.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentItem {
    #[serde(default, deserialize_with = "de_opt_time")]
    pub start_time: Option<f64>,

    #[serde(default, deserialize_with = "de_opt_time")]
    pub end_time: Option<f64>,

    #[serde(default)]
    pub speaker_label: Option<String>,
}

/// Transcription services are inconsistent about numeric fields: times and
/// confidences arrive as JSON strings ("12.34") or plain numbers. Accept both.
fn de_opt_time<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Num(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
