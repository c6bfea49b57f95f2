pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod session;
pub mod transcript;

pub use config::Config;
pub use error::{SegmentError, TranscriptError};
pub use format::{
    escape_markdown, format_paragraphs, format_timestamp, normalize_text, render_markdown,
    FormatOptions, OptionsPatch, SpeakerStyle, TitleStyle,
};
pub use pipeline::{convert, parse_transcription};
pub use session::ConversionSession;
pub use transcript::{
    speaker_display_name, DiarizationSegment, ItemKind, JobStatus, ParsedTranscript, Speaker,
    TranscriptSegment, TranscriptionRecord, WordItem,
};
