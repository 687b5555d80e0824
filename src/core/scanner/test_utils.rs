use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// Builds a file with `lines` lines, the first `comments` of which are `//`
/// comments.
pub fn source_with(lines: usize, comments: usize) -> String {
    (0..lines)
        .map(|i| {
            if i < comments {
                format!("// comment {i}\n")
            } else {
                format!("let x{i} = {i}\n")
            }
        })
        .collect()
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "x.fs", &source_with(5, 1))?;
    create_test_file(&dir, "sub/y.fs", &source_with(10, 4))?;
    create_test_file(&dir, "AssemblyInfo.fs", &source_with(8, 8))?;
    create_test_file(&dir, "script.fsx", &source_with(4, 4))?;
    create_test_file(&dir, "Program.cs", "// entry\n/* block */\nclass P {}\n")?;
    create_test_file(&dir, "empty/readme.txt", "nothing to see\n")?;
    create_test_file(&dir, ".hidden/z.fs", &source_with(6, 6))?;

    Ok(dir)
}
