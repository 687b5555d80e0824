// src/models/directory_aggregation.rs

/// How the files of a single directory are folded into its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectoryAggregation {
    /// Only the last file processed in the directory is reported.
    #[default]
    LastFile,
    /// Lines and comments are summed over every matching file.
    Sum,
}

impl DirectoryAggregation {
    #[inline]
    #[must_use]
    pub const fn from_sum_flag(sum: bool) -> Self {
        if sum { Self::Sum } else { Self::LastFile }
    }
}
