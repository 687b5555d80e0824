// src/core/counter.rs
use crate::models::CommentStyle;
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

static FSHARP_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(//[^\n]*\n)|(\(\*+[^*]*\*+(?:[^/*][^*]*\*+)*\))").expect("Invalid regex")
});

static CSHARP_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(//[^\n]*\n)|(/\*+[^*]*\*+(?:[^/*][^*]*\*+)*/)").expect("Invalid regex")
});

impl CommentStyle {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::FSharp => &FSHARP_COMMENT,
            Self::CSharp => &CSHARP_COMMENT,
        }
    }
}

/// Counts the lines in a file.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and a final segment without
/// a terminator still counts. A file that cannot be opened or is not valid
/// UTF-8 counts as zero lines.
#[must_use]
pub fn count_lines(path: &Path) -> u64 {
    read_text(path).map_or(0, |content| {
        u64::try_from(content.lines().count()).unwrap_or(u64::MAX)
    })
}

/// Counts comment matches in a file for the given style.
///
/// Line comments only match when followed by a newline and block comments do
/// not nest. Comment markers inside string literals are counted too. Returns
/// zero when the file cannot be read.
#[must_use]
pub fn count_comments(path: &Path, style: CommentStyle) -> u64 {
    read_text(path).map_or(0, |content| count_comments_in(&content, style))
}

/// Counts comment matches in already-normalized text.
#[must_use]
pub fn count_comments_in(content: &str, style: CommentStyle) -> u64 {
    u64::try_from(style.pattern().find_iter(content).count()).unwrap_or(u64::MAX)
}

fn read_text(path: &Path) -> io::Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(normalize_newlines(content))
}

fn normalize_newlines(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}
