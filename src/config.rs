// src/config.rs
use crate::models::{CommentStyle, DirectoryAggregation};
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Traversal and aggregation switches shared by every job in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub aggregation: DirectoryAggregation,
    pub skip_hidden: bool,
    pub show_tree: bool,
}

/// One labelled scan: which files to pick and how to find their comments.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScanJob {
    #[serde(default)]
    pub label: Option<String>,
    pub extension: String,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub style: CommentStyle,
}

impl ScanJob {
    #[must_use]
    pub fn new(label: &str, extension: &str, exclude: &[&str], style: CommentStyle) -> Self {
        Self {
            label: Some(label.to_owned()),
            extension: extension.to_owned(),
            exclude: exclude.iter().map(|&name| name.to_owned()).collect(),
            style,
        }
    }

    /// The summary label, falling back to the extension.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.extension)
    }

    /// The F# and C# jobs run when nothing else is configured.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("FSharp", ".fs", &["AssemblyInfo.fs"], CommentStyle::FSharp),
            Self::new("CSharp", ".cs", &["AssemblyInfo.cs"], CommentStyle::CSharp),
        ]
    }
}

/// Contents of a TOML job file.
#[derive(Deserialize, Debug, Default)]
pub struct ScanConfig {
    #[serde(default)]
    pub sum_dirs: bool,
    #[serde(default)]
    pub skip_hidden: bool,
    #[serde(default)]
    pub jobs: Vec<ScanJob>,
}

impl ScanConfig {
    /// Parses a job file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a job is missing its
    /// `extension`.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse job file")
    }

    /// The configured jobs, or the built-in ones when the file lists none.
    #[must_use]
    pub fn into_jobs(self) -> Vec<ScanJob> {
        if self.jobs.is_empty() {
            ScanJob::defaults()
        } else {
            self.jobs
        }
    }
}

/// Loads a TOML job file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not a valid job file
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file: {}", path.display()))?;
    ScanConfig::parse(&content)
        .with_context(|| format!("Invalid job file: {}", path.display()))
}
