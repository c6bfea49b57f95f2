//! Formatting: text normalization, paragraph grouping, and markdown
//! rendering under configurable options.

pub mod markdown;
pub mod normalize;
pub mod options;
pub mod paragraph;

pub use markdown::{escape_markdown, format_timestamp, humanize_job_name, render_markdown, ESCAPE_CHARS};
pub use normalize::normalize_text;
pub use options::{FormatOptions, OptionsPatch, SpeakerStyle, TitleStyle};
pub use paragraph::{
    format_paragraphs, format_paragraphs_with, DiscourseMarkers, ParagraphBreaker,
    DISCOURSE_MARKERS,
};
