//! Infrastructure layer - File input

pub mod files;

pub use files::{load_config, load_data, load_template};
