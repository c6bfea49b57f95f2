use crate::error::TranscriptError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Title template applied to the humanized job name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TitleStyle {
    Interview,
    Transcript,
    Conversation,
    Meeting,
}

impl TitleStyle {
    pub fn render(&self, name: &str) -> String {
        match self {
            TitleStyle::Interview => format!("Interview Transcript: {}", name),
            TitleStyle::Transcript => format!("Transcript: {}", name),
            TitleStyle::Conversation => format!("Conversation: {}", name),
            TitleStyle::Meeting => format!("Meeting Notes: {}", name),
        }
    }
}

/// How per-speaker section headers are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerStyle {
    H2,
    H3,
    Bold,
}

/// Rendering configuration. Every field toggles independently; the
/// renderer is a pure function of the transcript and one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Suffix speaker headers with `(start - end)` timestamps
    pub include_timestamps: bool,

    /// Emit the metadata comment block and the footer
    pub include_metadata: bool,

    /// Target sentences per paragraph (clamped to at least 1)
    pub paragraph_length: usize,

    pub title_style: TitleStyle,

    pub speaker_style: SpeakerStyle,

    /// Emit the word-count line in the summary block
    pub include_word_count: bool,

    /// Emit the duration line in the summary block
    pub include_duration: bool,

    /// Backslash-escape markdown-significant characters in transcript text
    pub escape_markup: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_timestamps: false,
            include_metadata: true,
            paragraph_length: 3,
            title_style: TitleStyle::Interview,
            speaker_style: SpeakerStyle::H2,
            include_word_count: false,
            include_duration: false,
            escape_markup: false,
        }
    }
}

impl FormatOptions {
    /// Look up a named preset. Each preset is a complete options value that
    /// replaces all fields; unknown names are an error the caller logs and
    /// ignores.
    pub fn preset(name: &str) -> Result<Self, TranscriptError> {
        match name {
            "minimal" => Ok(Self {
                include_timestamps: false,
                include_metadata: false,
                paragraph_length: 4,
                title_style: TitleStyle::Transcript,
                speaker_style: SpeakerStyle::Bold,
                include_word_count: false,
                include_duration: false,
                escape_markup: false,
            }),
            "detailed" => Ok(Self {
                include_timestamps: true,
                include_metadata: true,
                paragraph_length: 2,
                title_style: TitleStyle::Interview,
                speaker_style: SpeakerStyle::H2,
                include_word_count: true,
                include_duration: true,
                escape_markup: true,
            }),
            "meeting" => Ok(Self {
                include_timestamps: true,
                include_metadata: true,
                paragraph_length: 3,
                title_style: TitleStyle::Meeting,
                speaker_style: SpeakerStyle::H3,
                include_word_count: false,
                include_duration: true,
                escape_markup: false,
            }),
            "conversation" => Ok(Self {
                include_timestamps: false,
                include_metadata: false,
                paragraph_length: 3,
                title_style: TitleStyle::Conversation,
                speaker_style: SpeakerStyle::Bold,
                include_word_count: false,
                include_duration: false,
                escape_markup: false,
            }),
            other => Err(TranscriptError::UnknownPreset(other.to_string())),
        }
    }

    /// Merge an individual-option update into this value, field by field.
    pub fn merge(&mut self, patch: &OptionsPatch) {
        if let Some(v) = patch.include_timestamps {
            self.include_timestamps = v;
        }
        if let Some(v) = patch.include_metadata {
            self.include_metadata = v;
        }
        if let Some(v) = patch.paragraph_length {
            self.paragraph_length = v.max(1);
        }
        if let Some(v) = patch.title_style {
            self.title_style = v;
        }
        if let Some(v) = patch.speaker_style {
            self.speaker_style = v;
        }
        if let Some(v) = patch.include_word_count {
            self.include_word_count = v;
        }
        if let Some(v) = patch.include_duration {
            self.include_duration = v;
        }
        if let Some(v) = patch.escape_markup {
            self.escape_markup = v;
        }
    }
}

/// A partial update to [`FormatOptions`]; unset fields leave the current
/// value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionsPatch {
    pub include_timestamps: Option<bool>,
    pub include_metadata: Option<bool>,
    pub paragraph_length: Option<usize>,
    pub title_style: Option<TitleStyle>,
    pub speaker_style: Option<SpeakerStyle>,
    pub include_word_count: Option<bool>,
    pub include_duration: Option<bool>,
    pub escape_markup: Option<bool>,
}
