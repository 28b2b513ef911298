//! Run configuration for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use qforms_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "qforms.toml";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output locations
    pub paths: Paths,

    /// Matcher and transcript settings
    pub extractor: ExtractorConfig,

    /// Global settings
    pub settings: Settings,
}

/// Input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Vocabulary YAML file
    pub vocabulary: PathBuf,

    /// Directory holding the transcript folders
    pub data_dir: PathBuf,

    /// Directory the CSV file is written to
    pub output_dir: PathBuf,

    /// Transcript glob, relative to `data_dir`
    pub glob: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `qforms.toml` in the working
    /// directory is used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read config {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    ///
    /// A preset replaces the file's extractor settings; the individual flags
    /// then apply on top of it.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(preset) = cli.preset {
            debug!("Using {:?} extractor preset", preset);
            self.extractor = preset.into();
        }

        let patterns = &mut self.extractor.patterns;
        patterns.any_subject |= cli.any_subject;
        patterns.copula_only |= cli.copula_only;
        if let Some(mode) = cli.mode {
            patterns.mode = mode.into();
        }
        if let Some(coda) = cli.coda {
            patterns.coda = coda.into();
        }
        if let Some(exclude) = cli.exclude_connectives {
            patterns.exclude_connectives = exclude;
        }

        let transcript = &mut self.extractor.transcript;
        if let Some(overlap) = cli.overlap {
            transcript.overlap = overlap.into();
        }
        if let Some(interviewer) = cli.interviewer {
            transcript.interviewer = interviewer.into();
        }

        if let Some(vocabulary) = &cli.vocabulary {
            self.paths.vocabulary = vocabulary.clone();
        }
        if let Some(data_dir) = &cli.data_dir {
            self.paths.data_dir = data_dir.clone();
        }
        if let Some(output_dir) = &cli.output_dir {
            self.paths.output_dir = output_dir.clone();
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.paths.glob.trim().is_empty() {
            return Err(CliError::Config("paths.glob must not be empty".into()));
        }
        self.extractor.validate().map_err(CliError::Config)
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            vocabulary: PathBuf::from("config/patterns.yaml"),
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            glob: "*_textfiles_*/*.txt".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
