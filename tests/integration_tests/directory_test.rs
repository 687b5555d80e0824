// tests/integration_tests/directory_test.rs
use super::common::{create_test_file, output_lines, source_with};
use anyhow::Result;
use comment_ratio::{CommentStyle, DirectoryAggregation, ProcessResult, process_directory};
use std::ffi::OsString;
use tempfile::TempDir;

fn setup_three_files() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "a.fs", &source_with(10, 1))?;
    create_test_file(temp_dir.path(), "b.fs", &source_with(20, 2))?;
    create_test_file(temp_dir.path(), "c.fs", &source_with(30, 3))?;
    Ok(temp_dir)
}

fn files() -> Vec<OsString> {
    ["a.fs", "b.fs", "c.fs"].into_iter().map(OsString::from).collect()
}

#[test]
fn test_last_file_wins() -> Result<()> {
    let temp_dir = setup_three_files()?;

    let mut out = Vec::new();
    let result = process_directory(
        &mut out,
        temp_dir.path(),
        &files(),
        CommentStyle::FSharp,
        DirectoryAggregation::LastFile,
    )?;

    assert_eq!(result, ProcessResult::new(30, 3, temp_dir.path()));
    assert_eq!(
        output_lines(&out),
        vec![format!("{} comments:3 lines:30 ratio:0.10", temp_dir.path().display())]
    );

    Ok(())
}

#[test]
fn test_order_decides_last_file() -> Result<()> {
    let temp_dir = setup_three_files()?;

    let mut out = Vec::new();
    let reversed: Vec<OsString> = files().into_iter().rev().collect();
    let result = process_directory(
        &mut out,
        temp_dir.path(),
        &reversed,
        CommentStyle::FSharp,
        DirectoryAggregation::LastFile,
    )?;

    assert_eq!((result.lines(), result.comments()), (10, 1));

    Ok(())
}

#[test]
fn test_sum_policy() -> Result<()> {
    let temp_dir = setup_three_files()?;

    let mut out = Vec::new();
    let result = process_directory(
        &mut out,
        temp_dir.path(),
        &files(),
        CommentStyle::FSharp,
        DirectoryAggregation::Sum,
    )?;

    assert_eq!(result, ProcessResult::new(60, 6, temp_dir.path()));
    assert_eq!(
        output_lines(&out),
        vec![format!("{} comments:6 lines:60 ratio:0.10", temp_dir.path().display())]
    );

    Ok(())
}

#[test]
fn test_empty_directory_prints_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let mut out = Vec::new();
    let result = process_directory(
        &mut out,
        temp_dir.path(),
        &[],
        CommentStyle::CSharp,
        DirectoryAggregation::Sum,
    )?;

    assert_eq!(result, ProcessResult::empty(temp_dir.path()));
    assert!(out.is_empty());

    Ok(())
}
