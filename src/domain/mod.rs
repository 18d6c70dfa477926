//! Domain layer - Tag model, scanning and resolution

pub mod config;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod tag;
pub mod value;

pub use config::ParserConfig;
pub use parser::{ParseSession, Parsed, TagParser};
pub use tag::{Attributes, Tag};
pub use value::Value;
