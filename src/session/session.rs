use crate::error::TranscriptError;
use crate::format::{render_markdown, FormatOptions, OptionsPatch};
use crate::pipeline::parse_transcription;
use crate::transcript::ParsedTranscript;
use chrono::Local;
use tracing::{info, warn};

/// A single-document conversion session.
///
/// Holds the parsed transcript and the active format options; the core
/// rendering stays a pure function of the two. Option changes re-render
/// the held transcript, which is idempotent and safe to repeat.
#[derive(Debug, Default)]
pub struct ConversionSession {
    transcript: Option<ParsedTranscript>,
    options: FormatOptions,
    document: String,
}

impl ConversionSession {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            transcript: None,
            options,
            document: String::new(),
        }
    }

    /// Parse a transcription record and render it under the current
    /// options. Replaces any previously held transcript.
    pub fn load(&mut self, json: &str) -> Result<&str, TranscriptError> {
        let parsed = parse_transcription(json)?;

        info!(
            "loaded transcript \"{}\" ({} segments)",
            parsed.job_name,
            parsed.segments.len()
        );

        self.document = render_markdown(&parsed, &self.options);
        self.transcript = Some(parsed);
        Ok(&self.document)
    }

    /// Replace the options wholesale with a named preset and re-render.
    /// An unknown preset name is logged and leaves everything unchanged.
    pub fn apply_preset(&mut self, name: &str) {
        match FormatOptions::preset(name) {
            Ok(preset) => {
                self.options = preset;
                self.rerender();
            }
            Err(e) => warn!("{}; keeping current options", e),
        }
    }

    /// Merge individual option updates and re-render.
    pub fn update_options(&mut self, patch: &OptionsPatch) {
        self.options.merge(patch);
        self.rerender();
    }

    /// Discard the held transcript and document and restore default options.
    pub fn reset(&mut self) {
        self.transcript = None;
        self.document.clear();
        self.options = FormatOptions::default();
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn transcript(&self) -> Option<&ParsedTranscript> {
        self.transcript.as_ref()
    }

    /// Default download filename: `{job-name}-{YYYY-MM-DD}.md`.
    pub fn suggested_filename(&self) -> String {
        let job_name = self
            .transcript
            .as_ref()
            .map(|t| t.job_name.as_str())
            .unwrap_or("transcript");

        format!("{}-{}.md", job_name, Local::now().format("%Y-%m-%d"))
    }

    fn rerender(&mut self) {
        if let Some(transcript) = &self.transcript {
            self.document = render_markdown(transcript, &self.options);
        }
    }
}
