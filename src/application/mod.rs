//! Application layer - Use cases and orchestration

pub mod list_tags;
pub mod render;

pub use list_tags::ListTagsService;
pub use render::{RenderService, TemplateOptions, UnresolvedPolicy};
