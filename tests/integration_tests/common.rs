// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// `lines` lines of which the first `comments` are `//` comments.
pub fn source_with(lines: usize, comments: usize) -> String {
    (0..lines)
        .map(|i| {
            if i < comments {
                format!("// note {i}\n")
            } else {
                format!("member x.P{i} = {i}\n")
            }
        })
        .collect()
}

pub fn output_lines(out: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(out).lines().map(str::to_owned).collect()
}

/// A small mixed F#/C# solution:
///
/// ```text
/// App/Program.fs          5 lines, 1 comment
/// App/AssemblyInfo.fs     excluded
/// App/build.fsx           wrong suffix
/// App/Core/Model.fs       10 lines, 4 comments
/// Lib/Service.cs          4 lines, 2 comments (one line, one block)
/// Lib/AssemblyInfo.cs     excluded
/// docs/readme.md          never matched
/// ```
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_file(root, "App/Program.fs", &source_with(5, 1))?;
    create_test_file(root, "App/AssemblyInfo.fs", &source_with(20, 20))?;
    create_test_file(root, "App/build.fsx", &source_with(3, 3))?;
    create_test_file(root, "App/Core/Model.fs", &source_with(10, 4))?;
    create_test_file(
        root,
        "Lib/Service.cs",
        "// service\n/* block */\nclass Service {}\nclass Other {}\n",
    )?;
    create_test_file(root, "Lib/AssemblyInfo.cs", &source_with(7, 7))?;
    create_test_file(root, "docs/readme.md", "# Docs\n")?;

    Ok(temp_dir)
}
