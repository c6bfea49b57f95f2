use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use transcribe_md::{Config, ConversionSession, OptionsPatch, SpeakerStyle, TitleStyle};

/// Upload-size limit carried over from the original file-validation rules
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Parser)]
#[command(
    name = "transcribe-md",
    version,
    about = "Convert diarized transcription JSON into a formatted markdown document"
)]
struct Cli {
    /// Path to the transcription JSON file
    input: PathBuf,

    /// Output path (defaults to "<job-name>-<YYYY-MM-DD>.md")
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Apply a named options preset (minimal, detailed, meeting, conversation)
    #[arg(short, long)]
    preset: Option<String>,

    /// Config file with default format options
    #[arg(short, long)]
    config: Option<String>,

    /// Suffix speaker headers with segment timestamps
    #[arg(long)]
    timestamps: Option<bool>,

    /// Emit the metadata comment block and footer
    #[arg(long)]
    metadata: Option<bool>,

    /// Target sentences per paragraph
    #[arg(long)]
    paragraph_length: Option<usize>,

    /// Title template
    #[arg(long, value_enum)]
    title_style: Option<TitleStyle>,

    /// Speaker header style
    #[arg(long, value_enum)]
    speaker_style: Option<SpeakerStyle>,

    /// Emit the word-count summary line
    #[arg(long)]
    word_count: Option<bool>,

    /// Emit the duration summary line
    #[arg(long)]
    duration: Option<bool>,

    /// Backslash-escape markdown-significant characters in transcript text
    #[arg(long)]
    escape: Option<bool>,
}

impl Cli {
    fn options_patch(&self) -> OptionsPatch {
        OptionsPatch {
            include_timestamps: self.timestamps,
            include_metadata: self.metadata,
            paragraph_length: self.paragraph_length,
            title_style: self.title_style,
            speaker_style: self.speaker_style,
            include_word_count: self.word_count,
            include_duration: self.duration,
            escape_markup: self.escape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    validate_input_file(&cli.input)?;

    let contents = tokio::fs::read_to_string(&cli.input)
        .await
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut session = ConversionSession::new(cfg.format);
    if let Some(preset) = &cli.preset {
        session.apply_preset(preset);
    }
    session.update_options(&cli.options_patch());

    session.load(&contents)?;

    if cli.stdout {
        println!("{}", session.document());
        return Ok(());
    }

    let output = match cli.output {
        Some(path) => path,
        None => {
            let filename = session.suggested_filename();
            match &cfg.output.dir {
                Some(dir) => PathBuf::from(dir).join(filename),
                None => PathBuf::from(filename),
            }
        }
    };

    std::fs::write(&output, session.document())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote {}", output.display());
    Ok(())
}

/// File-level checks before the record itself is validated: extension
/// marker, emptiness, and the size limit.
fn validate_input_file(path: &Path) -> Result<()> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !is_json {
        bail!("Please provide a JSON file (.json extension required)");
    }

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    if metadata.len() == 0 {
        bail!("The selected file is empty");
    }
    if metadata.len() > MAX_FILE_SIZE {
        bail!("File size exceeds 10MB limit");
    }

    Ok(())
}
