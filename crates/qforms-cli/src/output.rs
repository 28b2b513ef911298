//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::corpus::CorpusRun;
use crate::error::Result;
use colored::*;
use qforms_extractor::{ContentMatch, LineStats, MatcherRegistry};
use std::collections::BTreeMap;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the summary of a corpus run.
    pub fn format_run(&self, run: &CorpusRun, output_path: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_run_json(run, output_path),
            OutputFormat::Table => Ok(self.format_run_table(run, output_path)),
            OutputFormat::Quiet => Ok(output_path.display().to_string()),
        }
    }

    fn format_run_json(&self, run: &CorpusRun, output_path: &Path) -> Result<String> {
        let failures: Vec<serde_json::Value> = run
            .failures
            .iter()
            .map(|f| {
                serde_json::json!({
                    "path": f.path.display().to_string(),
                    "error": f.message,
                })
            })
            .collect();
        let stats = &run.stats;

        let summary = serde_json::json!({
            "output": output_path.display().to_string(),
            "files": {
                "processed": run.processed,
                "failed": failures,
            },
            "results": run.results.len(),
            "by_region": count_by(run.results.iter().map(|r| r.region_id.clone())),
            "by_subtype": count_by(run.results.iter().map(|r| r.subtype.name())),
            "lines": {
                "total": stats.total_lines,
                "speaker": stats.speaker_lines,
                "interviewer": stats.interviewer_lines,
                "overlap": stats.overlap_lines,
                "skipped": stats.skipped_lines,
                "malformed": stats.malformed_lines,
                "matched": stats.matched_lines,
                "examined": stats.examined_lines(),
            },
        });

        Ok(serde_json::to_string_pretty(&summary)?)
    }

    fn format_run_table(&self, run: &CorpusRun, output_path: &Path) -> String {
        let mut sections = vec![
            self.success(&format!(
                "Extracted {} data points from {} file(s)",
                run.results.len(),
                run.processed
            )),
            self.info(&format!(
                "Examined {}/{} lines",
                run.stats.examined_lines(),
                run.stats.total_lines
            )),
        ];
        if !run.failures.is_empty() {
            sections.push(self.error(&format!("{} file(s) failed", run.failures.len())));
        }

        if !run.results.is_empty() {
            let by_region = count_by(run.results.iter().map(|r| r.region_id.clone()));
            sections.push(count_table("Region", &by_region));
            let by_subtype = count_by(run.results.iter().map(|r| r.subtype.name()));
            sections.push(count_table("Subtype", &by_subtype));
        }
        sections.push(stats_table(&run.stats));
        sections.push(self.info(&format!("Output written to {}", output_path.display())));

        sections.join("\n")
    }

    /// Format the compiled registry.
    pub fn format_patterns(&self, registry: &MatcherRegistry) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let patterns: BTreeMap<&str, &str> = registry
                    .subtypes()
                    .zip(registry.iter().map(|m| m.pattern()))
                    .collect();
                Ok(serde_json::to_string_pretty(&patterns)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Subtype", "Pattern"]);
                for (subtype, matcher) in registry.subtypes().zip(registry.iter()) {
                    builder.push_record([subtype, matcher.pattern()]);
                }
                Ok(styled(builder))
            }
            OutputFormat::Quiet => Ok(registry.subtypes().collect::<Vec<_>>().join("\n")),
        }
    }

    /// Format matches found in one utterance.
    pub fn format_matches(&self, matches: &[ContentMatch]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_matches: Vec<serde_json::Value> = matches
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "subtype": m.subtype.name(),
                            "target": m.form,
                            "object": m.object,
                            "offset": m.start,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_matches)?)
            }
            OutputFormat::Table => {
                if matches.is_empty() {
                    return Ok(self.colorize("No matches found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Subtype", "Target", "Object", "Offset"]);
                for m in matches {
                    builder.push_record([
                        m.subtype.name(),
                        m.form.clone(),
                        m.object.clone().unwrap_or_default(),
                        m.start.to_string(),
                    ]);
                }
                Ok(styled(builder))
            }
            OutputFormat::Quiet => Ok(matches
                .iter()
                .map(|m| format!("{}\t{}", m.subtype.name(), m.form))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn count_by(keys: impl Iterator<Item = String>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

fn count_table(label: &str, counts: &BTreeMap<String, usize>) -> String {
    let mut builder = Builder::default();
    builder.push_record([label, "Count"]);
    for (key, count) in counts {
        builder.push_record([key.clone(), count.to_string()]);
    }
    styled(builder)
}

fn stats_table(stats: &LineStats) -> String {
    let rows = [
        ("Lines", stats.total_lines),
        ("Speaker", stats.speaker_lines),
        ("Interviewer", stats.interviewer_lines),
        ("Overlap", stats.overlap_lines),
        ("Skipped", stats.skipped_lines),
        ("Malformed", stats.malformed_lines),
        ("Matched", stats.matched_lines),
    ];
    let mut builder = Builder::default();
    builder.push_record(["Line stat", "Count"]);
    for (label, count) in rows {
        builder.push_record([label.to_string(), count.to_string()]);
    }
    styled(builder)
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
