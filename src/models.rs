// src/models.rs
mod comment_style;
mod directory_aggregation;
mod process_result;

pub use comment_style::CommentStyle;
pub use directory_aggregation::DirectoryAggregation;
pub use process_result::ProcessResult;
