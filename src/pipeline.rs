use crate::error::TranscriptError;
use crate::format::{render_markdown, FormatOptions};
use crate::transcript::{
    build_segments, validate_record, ParseMetadata, ParsedTranscript, Speaker, TranscriptSegment,
    TranscriptionRecord,
};
use std::time::Instant;
use tracing::info;

/// Parse and reconstruct a transcription record from its JSON text.
///
/// JSON parse errors and schema mismatches are wrapped with context before
/// surfacing; structural validation runs on the raw tree first so messages
/// stay specific.
pub fn parse_transcription(json: &str) -> Result<ParsedTranscript, TranscriptError> {
    let started = Instant::now();

    let raw: serde_json::Value =
        serde_json::from_str(json).map_err(|e| TranscriptError::Parse(e.to_string()))?;

    validate_record(&raw)?;

    let record: TranscriptionRecord =
        serde_json::from_value(raw).map_err(|e| TranscriptError::Parse(e.to_string()))?;

    let full_transcript = record
        .results
        .transcripts
        .first()
        .map(|t| t.transcript.clone())
        .unwrap_or_default();

    let outcome = build_segments(&record.results, &full_transcript)?;

    let speakers = collect_speakers(&outcome.segments);
    let metadata = ParseMetadata {
        status: record.status,
        has_items: record.results.items.is_some(),
        has_speaker_labels: record.results.speaker_labels.is_some(),
        total_segments: outcome.segments.len(),
        processing_time_ms: started.elapsed().as_millis() as u64,
    };

    info!(
        "parsed transcript: {} segments, {} speakers, {} recovered warnings",
        outcome.segments.len(),
        speakers.len(),
        outcome.warnings.len()
    );

    Ok(ParsedTranscript {
        job_name: record
            .job_name
            .unwrap_or_else(|| "Transcription".to_string()),
        speakers,
        segments: outcome.segments,
        full_transcript,
        metadata,
    })
}

/// One-shot conversion: JSON text in, markdown document out.
pub fn convert(json: &str, options: &FormatOptions) -> Result<String, TranscriptError> {
    let parsed = parse_transcription(json)?;
    Ok(render_markdown(&parsed, options))
}

/// Speakers in order of first appearance, with merged-segment counts.
fn collect_speakers(segments: &[TranscriptSegment]) -> Vec<Speaker> {
    let mut speakers: Vec<Speaker> = Vec::new();

    for segment in segments {
        match speakers.iter_mut().find(|s| s.name == segment.speaker) {
            Some(speaker) => speaker.segment_count += 1,
            None => speakers.push(Speaker {
                name: segment.speaker.clone(),
                segment_count: 1,
            }),
        }
    }

    speakers
}
