//! Output formatting utilities

use crate::domain::Tag;

/// Format one tag as `name:path attr="value" [inner]`
fn format_tag(tag: &Tag) -> String {
    let mut line = tag.path();
    for (key, value) in tag.attributes.iter() {
        line.push_str(&format!(" {}=\"{}\"", key, value));
    }
    if tag.closed {
        line.push_str(&format!(" ({} bytes inner)", tag.inner_content.len()));
    }
    line
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format_tag(tag));
        output.push('\n');
    }

    output
}
