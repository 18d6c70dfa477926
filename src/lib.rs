//! simpletags - Lightweight tag extraction and substitution
//!
//! Finds `{tag:name:sub attr="value"}...{/tag:name:sub}` style tags in free
//! text and resolves them from nested data, through a caller-supplied
//! resolver, or hands them back raw for the caller to process.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{ParseSession, Parsed, ParserConfig, Tag, TagParser, Value};
pub use error::SimpletagsError;
