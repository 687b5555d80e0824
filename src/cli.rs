// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{ScanJob, ScanOptions, load_config};
use crate::core::scanner::comment_ratio;
use crate::models::{CommentStyle, DirectoryAggregation};
use crate::utils::print_summary;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Scan a single extension (e.g. ".fs") instead of the F# and C# defaults
    #[arg(short, long)]
    pub extension: Option<String>,

    /// File names to skip with --extension (comma-separated)
    #[arg(short = 'x', long, default_value = "")]
    pub exclude: String,

    /// Comment style for --extension: "fsharp", anything else is C#.
    ///
    /// The built-in C# job uses the C# style. To match C# files against the
    /// F# pattern instead, run `-e .cs -s fsharp -x AssemblyInfo.cs -l CSharp`.
    #[arg(short, long, default_value = "fsharp")]
    pub style: CommentStyle,

    /// Summary label for --extension (defaults to the extension)
    #[arg(short, long)]
    pub label: Option<String>,

    /// TOML file listing the scan jobs to run
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sum every file in a directory instead of reporting the last one
    #[arg(long)]
    pub sum_dirs: bool,

    /// Skip files and directories starting with a dot
    #[arg(long)]
    pub skip_hidden: bool,

    /// Print the matched files as a tree
    #[arg(long)]
    pub tree: bool,
}

impl Args {
    fn jobs_and_options(&self) -> Result<(Vec<ScanJob>, ScanOptions)> {
        let mut options = ScanOptions {
            aggregation: DirectoryAggregation::from_sum_flag(self.sum_dirs),
            skip_hidden: self.skip_hidden,
            show_tree: self.tree,
        };

        if let Some(extension) = &self.extension {
            let job = ScanJob {
                label: self.label.clone(),
                extension: extension.clone(),
                exclude: self
                    .exclude
                    .split(',')
                    .filter(|name| !name.is_empty())
                    .map(str::to_owned)
                    .collect(),
                style: self.style,
            };
            return Ok((vec![job], options));
        }

        if let Some(path) = &self.config {
            let config = load_config(path)?;
            if config.sum_dirs {
                options.aggregation = DirectoryAggregation::Sum;
            }
            options.skip_hidden |= config.skip_hidden;
            return Ok((config.into_jobs(), options));
        }

        Ok((ScanJob::defaults(), options))
    }
}

/// Runs every configured job against `args.directory`, writing the report to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * The job file cannot be loaded
/// * The directory cannot be traversed
/// * Writing the report fails
pub fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}

/// Same as [`run`] but writes the report to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let (jobs, options) = args.jobs_and_options()?;

    for job in &jobs {
        let exclude: Vec<&str> = job.exclude.iter().map(String::as_str).collect();
        let result = comment_ratio(
            out,
            &args.directory,
            &job.extension,
            &exclude,
            job.style,
            options,
        )
        .with_context(|| format!("Failed to scan directory: {}", args.directory.display()))?;
        print_summary(out, job.label(), &result)?;
    }

    Ok(())
}
