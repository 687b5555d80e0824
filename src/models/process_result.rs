// src/models/process_result.rs
use std::path::{Path, PathBuf};

/// Line and comment totals for a file, a directory or a whole tree.
///
/// The ratio is derived on construction and is `0.0` whenever `lines` is
/// zero, even if comments were found.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult {
    lines: u64,
    comments: u64,
    ratio: f64,
    root: PathBuf,
}

impl ProcessResult {
    #[inline]
    #[must_use]
    pub fn new(lines: u64, comments: u64, root: impl Into<PathBuf>) -> Self {
        Self {
            lines,
            comments,
            ratio: calculate_ratio(lines, comments),
            root: root.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self::new(0, 0, root)
    }

    /// Sums lines and comments over `results` and recomputes the ratio.
    #[must_use]
    pub fn total<'a, I>(root: impl Into<PathBuf>, results: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let (lines, comments) = results.into_iter().fold((0_u64, 0_u64), |(l, c), r| {
            (l.saturating_add(r.lines), c.saturating_add(r.comments))
        });
        Self::new(lines, comments, root)
    }

    #[inline]
    #[must_use]
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    #[inline]
    #[must_use]
    pub const fn comments(&self) -> u64 {
        self.comments
    }

    #[inline]
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[allow(clippy::cast_precision_loss)]
fn calculate_ratio(lines: u64, comments: u64) -> f64 {
    if lines == 0 {
        return 0.0;
    }
    comments as f64 / lines as f64
}
