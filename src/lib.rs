pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run, run_with_output};
pub use config::{ScanConfig, ScanJob, ScanOptions, load_config};
pub use crate::core::counter::{count_comments, count_comments_in, count_lines};
pub use crate::core::scanner::{comment_ratio, process_directory, traverse};
pub use crate::core::scanner::utils::is_matching_file;
pub use models::{CommentStyle, DirectoryAggregation, ProcessResult};
pub use utils::{format_ratio, print_summary};
