use super::options::{FormatOptions, SpeakerStyle};
use super::paragraph::format_paragraphs;
use crate::transcript::ParsedTranscript;
use chrono::{SecondsFormat, Utc};

/// Markdown-significant characters hardened by [`escape_markdown`]
pub const ESCAPE_CHARS: &[char] = &[
    '\\', '*', '_', '`', '~', '[', ']', '(', ')', '#', '+', '-', '.', '!', '|',
];

/// Render a parsed transcript into a markdown document.
///
/// Pure in everything but the generation timestamp: the same transcript and
/// options always produce the same structure, so re-rendering on option
/// changes is safe to repeat.
pub fn render_markdown(transcript: &ParsedTranscript, options: &FormatOptions) -> String {
    let mut doc = String::new();

    let title_name = humanize_job_name(&transcript.job_name);
    doc.push_str(&format!("# {}\n\n", options.title_style.render(&title_name)));

    if options.include_metadata {
        doc.push_str(&format!(
            "<!-- Generated: {} -->\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        doc.push_str(&format!("<!-- Status: {} -->\n", transcript.metadata.status));
        doc.push_str(&format!("<!-- Speakers: {} -->\n", transcript.speakers.len()));
        doc.push_str(&format!(
            "<!-- Word timing: {} -->\n\n",
            if transcript.metadata.has_items {
                "available"
            } else {
                "unavailable"
            }
        ));
    }

    // Without segments the verbatim transcript is the whole body; summary
    // and footer are skipped.
    if transcript.segments.is_empty() {
        let body = if options.escape_markup {
            escape_markdown(&transcript.full_transcript)
        } else {
            transcript.full_transcript.clone()
        };
        doc.push_str(&body);
        doc.push('\n');
        return doc;
    }

    if options.include_word_count || options.include_duration {
        if options.include_word_count {
            doc.push_str(&format!("**Word count:** {}\n", word_count(transcript)));
        }
        if options.include_duration {
            let duration = transcript
                .segments
                .iter()
                .map(|s| s.end_time)
                .fold(0.0, f64::max);
            doc.push_str(&format!("**Duration:** {}\n", format_timestamp(duration)));
        }
        doc.push_str(&format!("**Speakers:** {}\n", transcript.speakers.len()));
        doc.push_str("\n---\n\n");
    }

    for segment in &transcript.segments {
        let mut header = match options.speaker_style {
            SpeakerStyle::H2 => format!("## {}", segment.speaker),
            SpeakerStyle::H3 => format!("### {}", segment.speaker),
            SpeakerStyle::Bold => format!("**{}:**", segment.speaker),
        };
        if options.include_timestamps {
            header.push_str(&format!(
                " ({} - {})",
                format_timestamp(segment.start_time),
                format_timestamp(segment.end_time)
            ));
        }
        doc.push_str(&header);
        doc.push_str("\n\n");

        // Paragraph segmentation runs on unescaped text; escaping happens
        // afterwards so hardened punctuation cannot shift sentence
        // boundaries.
        let mut body = format_paragraphs(&segment.text, options.paragraph_length);
        if options.escape_markup {
            body = escape_markdown(&body);
        }
        doc.push_str(&body);
    }

    if options.include_metadata {
        doc.push_str("---\n\n");
        doc.push_str("*Transcribed document generated by transcribe-md.*\n");
        doc.push_str(&format!(
            "<!-- Processing time: {} ms -->\n",
            transcript.metadata.processing_time_ms
        ));
    }

    doc
}

/// Backslash-prefix every markdown-significant character.
///
/// One-directional hardening, not a codec. The single pass means inserted
/// backslashes are never re-escaped.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        if ESCAPE_CHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Format seconds as `M:SS`, or `H:MM:SS` from one hour up.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Turn a job name like "test-transcription" into "Test Transcription".
pub fn humanize_job_name(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn word_count(transcript: &ParsedTranscript) -> usize {
    if transcript.segments.is_empty() {
        transcript.full_transcript.split_whitespace().count()
    } else {
        transcript
            .segments
            .iter()
            .map(|s| s.text.split_whitespace().count())
            .sum()
    }
}
