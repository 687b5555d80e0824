// src/core/scanner/utils.rs
use std::ffi::OsStr;

/// Whether a file name is picked up by a scan: it must end with `extension`
/// (a literal suffix, so `.fs` does not match `.fsx`) and must not appear in
/// `exclude`.
///
/// Names are compared as raw bytes, so a name that is not valid UTF-8 still
/// matches on its suffix.
#[must_use]
pub fn is_matching_file(name: &OsStr, extension: &str, exclude: &[&str]) -> bool {
    name.as_encoded_bytes().ends_with(extension.as_bytes())
        && !exclude.iter().any(|&excluded| name == excluded)
}

pub fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    is_hidden_name(entry.file_name())
}
