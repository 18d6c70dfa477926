//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, InputArgs};
pub use output::format_tag_list;
