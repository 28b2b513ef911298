//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qforms_extractor::{
    CodaGrammar, ExtractionMode, ExtractorConfig, InterviewerPattern, OverlapPolicy,
};

/// qforms - Extract quotative and copula forms from speech transcripts.
#[derive(Debug, Parser)]
#[command(name = "qforms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Allow any subject before the quotative form, not only pronouns
    #[arg(long = "any_subject", global = true)]
    pub any_subject: bool,

    /// Only overt copulas; skip zero-copula forms
    #[arg(long = "copula_only", global = true)]
    pub copula_only: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "QFORMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Vocabulary YAML file
    #[arg(long, global = true)]
    pub vocabulary: Option<PathBuf>,

    /// Directory holding the transcript folders
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory the CSV file is written to
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Start from a built-in preset instead of the configured extractor settings
    #[arg(long, value_enum, global = true)]
    pub preset: Option<PresetArg>,

    /// Matcher family
    #[arg(long, value_enum, global = true)]
    pub mode: Option<ModeArg>,

    /// Coda grammar; "he all pissed off," needs clause-final
    #[arg(long, value_enum, global = true)]
    pub coda: Option<CodaArg>,

    /// What interviewer lines contribute
    #[arg(long, value_enum, global = true)]
    pub overlap: Option<OverlapArg>,

    /// Which speaker codes mark interviewer lines
    #[arg(long, value_enum, global = true)]
    pub interviewer: Option<InterviewerArg>,

    /// Reject forms directly after a connective (with --any_subject)
    #[arg(long, global = true, value_name = "BOOL")]
    pub exclude_connectives: Option<bool>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (output path or names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract forms from the corpus and write the CSV file (default)
    Extract,

    /// Print every compiled subtype with its pattern
    Patterns,

    /// Run the matchers over a single utterance
    Scan(ScanArgs),
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Utterance text
    pub text: String,
}

/// Extractor preset argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Pronoun subjects, overt copula only, immediate coda
    Conservative,
    /// Any subject, clause-final coda, all interviewer content
    Permissive,
}

/// Matcher family argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// Quotative constructions
    Quotative,
    /// Bare copula forms
    Copula,
}

/// Coda grammar argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CodaArg {
    /// Punctuation or interjection right after the form
    Immediate,
    /// Optional "like" before the comma
    LikeComma,
    /// Clause-internal span allowed before punctuation (zero-copula predicates)
    ClauseFinal,
}

/// Overlap policy argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OverlapArg {
    /// Use unbracketed interviewer content as is
    KeepContent,
    /// Skip interviewer lines without brackets
    SkipUnbracketed,
    /// Skip every interviewer line
    IgnoreInterviewer,
}

/// Interviewer pattern argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum InterviewerArg {
    /// Interviewer codes and "Misc"
    WithMisc,
    /// Interviewer codes only
    InterviewerOnly,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<PresetArg> for ExtractorConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Conservative => ExtractorConfig::conservative(),
            PresetArg::Permissive => ExtractorConfig::permissive(),
        }
    }
}

impl From<ModeArg> for ExtractionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Quotative => ExtractionMode::Quotative,
            ModeArg::Copula => ExtractionMode::Copula,
        }
    }
}

impl From<CodaArg> for CodaGrammar {
    fn from(coda: CodaArg) -> Self {
        match coda {
            CodaArg::Immediate => CodaGrammar::Immediate,
            CodaArg::LikeComma => CodaGrammar::LikeComma,
            CodaArg::ClauseFinal => CodaGrammar::ClauseFinal,
        }
    }
}

impl From<OverlapArg> for OverlapPolicy {
    fn from(overlap: OverlapArg) -> Self {
        match overlap {
            OverlapArg::KeepContent => OverlapPolicy::KeepContent,
            OverlapArg::SkipUnbracketed => OverlapPolicy::SkipUnbracketed,
            OverlapArg::IgnoreInterviewer => OverlapPolicy::IgnoreInterviewer,
        }
    }
}

impl From<InterviewerArg> for InterviewerPattern {
    fn from(interviewer: InterviewerArg) -> Self {
        match interviewer {
            InterviewerArg::WithMisc => InterviewerPattern::WithMisc,
            InterviewerArg::InterviewerOnly => InterviewerPattern::InterviewerOnly,
        }
    }
}
