use crate::error::TranscriptError;
use serde_json::Value;
use tracing::warn;

/// Structurally validate a raw transcription record before typed parsing.
///
/// Checks run in order and fail fast with a specific message on the first
/// failure. Non-fatal oddities (unrecognized status, non-string job name,
/// diarization with zero segments) are logged as warnings instead. The
/// input is never mutated.
pub fn validate_record(data: &Value) -> Result<(), TranscriptError> {
    let results = data
        .get("results")
        .ok_or_else(|| invalid("missing \"results\" field"))?;

    let transcripts = results
        .get("transcripts")
        .and_then(|t| t.as_array())
        .ok_or_else(|| invalid("missing or invalid \"transcripts\" field"))?;

    if transcripts.is_empty() {
        return Err(invalid("\"transcripts\" must not be empty"));
    }

    let first_has_text = transcripts[0]
        .get("transcript")
        .and_then(|t| t.as_str())
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    if !first_has_text {
        return Err(invalid("first transcript has no text"));
    }

    if let Some(items) = results.get("items") {
        if !items.is_array() {
            return Err(invalid("\"items\" must be an array"));
        }
    }

    if let Some(labels) = results.get("speaker_labels") {
        let segments = labels
            .get("segments")
            .and_then(|s| s.as_array())
            .ok_or_else(|| invalid("\"speaker_labels\" missing \"segments\" array"))?;

        if segments.is_empty() {
            warn!("speaker_labels present but contains no segments");
        }
    }

    if let Some(status) = data.get("status").and_then(|s| s.as_str()) {
        if !matches!(status, "COMPLETED" | "IN_PROGRESS" | "FAILED") {
            warn!("unrecognized job status: {}", status);
        }
    }

    if let Some(name) = data.get("jobName") {
        if !name.is_string() {
            warn!("jobName is not a string; using default");
        }
    }

    Ok(())
}

fn invalid(detail: &str) -> TranscriptError {
    TranscriptError::Validation(format!("Invalid transcription format: {}", detail))
}
