// src/core/scanner.rs
pub mod utils;

#[cfg(test)]
pub mod test_utils;

use crate::config::ScanOptions;
use crate::core::counter::{count_comments, count_lines};
use crate::models::{CommentStyle, DirectoryAggregation, ProcessResult};
use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;
use utils::{is_hidden, is_hidden_name, is_matching_file};
use walkdir::WalkDir;

/// Counts the candidate files of one directory and reports the result.
///
/// Under [`DirectoryAggregation::LastFile`] the directory reports the counts
/// of the last file in `files` only. Under [`DirectoryAggregation::Sum`] the
/// counts of all files are added up. A line
/// `<dir> comments:<n> lines:<n> ratio:<x.xx>` is written to `out` unless
/// `files` is empty.
///
/// # Errors
///
/// Unreadable files count as zero and never fail; only writing to `out` can.
pub fn process_directory<W: Write>(
    out: &mut W,
    dir: &Path,
    files: &[OsString],
    style: CommentStyle,
    aggregation: DirectoryAggregation,
) -> Result<ProcessResult> {
    let mut lines: u64 = 0;
    let mut comments: u64 = 0;

    for name in files {
        let path = dir.join(name);
        let file_lines = count_lines(&path);
        let file_comments = count_comments(&path, style);

        match aggregation {
            DirectoryAggregation::LastFile => {
                lines = file_lines;
                comments = file_comments;
            }
            DirectoryAggregation::Sum => {
                lines = lines.saturating_add(file_lines);
                comments = comments.saturating_add(file_comments);
            }
        }
    }

    let result = ProcessResult::new(lines, comments, dir);
    if !files.is_empty() {
        writeln!(
            out,
            "{} comments:{} lines:{} ratio:{:.2}",
            dir.display(),
            result.comments(),
            result.lines(),
            result.ratio()
        )?;
    }

    Ok(result)
}

/// Walks `start` depth-first and processes every directory it reaches.
///
/// Each directory's immediate files are filtered with
/// [`is_matching_file`] and handed to [`process_directory`]. Directories
/// without matches still yield an empty result. Symlinked directories are
/// not followed.
///
/// # Arguments
///
/// * `out` - Where directory lines (and the optional tree) are written
/// * `start` - The directory to walk
/// * `extension` - Required file name suffix, e.g. `.fs`
/// * `exclude` - Exact file names to skip
/// * `style` - Comment grammar used for every file
/// * `options` - Aggregation policy and traversal switches
///
/// # Returns
///
/// * `Ok(Vec<ProcessResult>)` - One result per visited directory, in visit order
///
/// # Errors
///
/// This function may return an error if:
/// * `start` does not exist or cannot be read
/// * A directory listing fails during traversal
/// * Writing to `out` fails
pub fn traverse<W: Write>(
    out: &mut W,
    start: &Path,
    extension: &str,
    exclude: &[&str],
    style: CommentStyle,
    options: ScanOptions,
) -> Result<Vec<ProcessResult>> {
    let mut results = Vec::new();

    for entry in WalkDir::new(start)
        .into_iter()
        .filter_entry(|e| !(options.skip_hidden && e.depth() > 0 && is_hidden(e)))
    {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", start.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        let files = matching_files(dir, extension, exclude, options.skip_hidden)?;

        if options.show_tree && !files.is_empty() {
            print_tree(out, &entry, &files)?;
        }

        results.push(process_directory(out, dir, &files, style, options.aggregation)?);
    }

    Ok(results)
}

/// Scans the tree under `start` and folds every directory into one total.
///
/// The aggregate's ratio is recomputed from the summed lines and comments and
/// is zero when no lines were counted.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be accessed or read
/// * File system operations fail during traversal
/// * Writing to `out` fails
pub fn comment_ratio<W: Write>(
    out: &mut W,
    start: &Path,
    extension: &str,
    exclude: &[&str],
    style: CommentStyle,
    options: ScanOptions,
) -> Result<ProcessResult> {
    let results = traverse(out, start, extension, exclude, style, options)?;
    Ok(ProcessResult::total(start, &results))
}

fn matching_files(
    dir: &Path,
    extension: &str,
    exclude: &[&str],
    skip_hidden: bool,
) -> Result<Vec<OsString>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        if entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name();
        if skip_hidden && is_hidden_name(&name) {
            continue;
        }
        if is_matching_file(&name, extension, exclude) {
            files.push(name);
        }
    }

    Ok(files)
}

fn print_tree<W: Write>(out: &mut W, entry: &walkdir::DirEntry, files: &[OsString]) -> Result<()> {
    let depth = entry.depth();
    writeln!(
        out,
        "{} {}",
        "---".repeat(depth),
        entry.file_name().to_string_lossy()
    )?;
    for name in files {
        writeln!(
            out,
            "{} {}",
            "---".repeat(depth.saturating_add(1)),
            name.to_string_lossy()
        )?;
    }
    Ok(())
}
