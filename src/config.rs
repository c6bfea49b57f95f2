use crate::format::FormatOptions;
use anyhow::Result;
use serde::Deserialize;

/// Tool configuration: default format options plus output settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub format: FormatOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated documents when no explicit output path is
    /// given; defaults to the working directory.
    pub dir: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
