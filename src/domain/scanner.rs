//! Tag discovery: finds tags in content and swaps each one for a marker
//!
//! Every pass looks for the first opening tag in the whole buffer, works out
//! its attributes, name path and (optional) closing tag, then replaces every
//! copy of the tag text with a unique marker before scanning again from the
//! start.

use crate::domain::config::ParserConfig;
use crate::domain::tag::{Attributes, Tag};
use crate::error::{Result, SimpletagsError};
use regex::Regex;
use std::sync::OnceLock;

pub const MARKER_PREFIX: &str = "marker_";
pub const MARKER_SUFFIX: &str = "k0dj3j4nJHDj22j";

/// Regex for `key="value"` / `key='value'` pairs; the key is everything up to `=`
fn attribute_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"(.*?)=(?:"(.*?)"|'(.*?)')"#).unwrap())
}

/// Build the opening tag matcher for a config
///
/// Case-insensitive and non-greedy: the shortest run after the trigger that
/// reaches the right delimiter. `.` does not cross newlines, so an opening
/// tag never spans lines. Group 1 is the trigger as written, group 2 the rest
/// of the tag body.
pub fn opening_tag_regex(config: &ParserConfig) -> Result<Regex> {
    let pattern = format!(
        "(?i){}({})(.*?){}",
        regex::escape(&config.left_delimiter),
        regex::escape(&config.trigger),
        regex::escape(&config.right_delimiter)
    );
    Regex::new(&pattern)
        .map_err(|e| SimpletagsError::Config(format!("Invalid tag syntax: {}", e)))
}

/// Marker text for the given counter value
pub fn marker_for(count: usize) -> String {
    format!("{}{}{}", MARKER_PREFIX, count, MARKER_SUFFIX)
}

/// Split a tag body at its first whitespace run into (segments, attributes)
fn split_body(body: &str) -> (&str, &str) {
    match body.find(char::is_whitespace) {
        Some(idx) => (&body[..idx], body[idx..].trim()),
        None => (body, ""),
    }
}

/// Parse `key="value"` pairs in order of appearance
///
/// Anything that does not fit the pattern is skipped.
pub fn parse_attributes(text: &str) -> Attributes {
    attribute_regex()
        .captures_iter(text)
        .map(|cap| {
            let value = cap.get(2).or_else(|| cap.get(3)).map_or("", |m| m.as_str());
            (cap[1].trim().to_string(), value.to_string())
        })
        .collect()
}

/// Split a colon-separated name into its path, dropping the trigger prefix
pub fn parse_segments(segments: &str, trigger: &str) -> Vec<String> {
    segments
        .strip_prefix(trigger)
        .unwrap_or(segments)
        .split(':')
        .map(str::to_string)
        .collect()
}

/// Output of the scan phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    /// Content with every discovered tag replaced by its marker
    pub content: String,
    /// Discovered tags, in discovery order
    pub tags: Vec<Tag>,
}

/// Discover tags in `content`, numbering markers from `marker_count`
///
/// Stops as soon as the buffer still holds the opening sequence but no
/// complete opening tag matches; whatever remains is left untouched.
pub fn scan(
    config: &ParserConfig,
    opening_tag: &Regex,
    content: &str,
    marker_count: &mut usize,
) -> ScanOutput {
    let opening_sequence = config.opening_sequence();
    let mut buffer = content.to_string();
    let mut tags = Vec::new();

    while buffer.contains(&opening_sequence) {
        let Some(caps) = opening_tag.captures(&buffer) else {
            tracing::debug!(
                discovered = tags.len(),
                "unterminated opening tag, stopping scan"
            );
            break;
        };

        // Group 0 always participates in a match
        let Some(open) = caps.get(0) else { break };
        let written_trigger = caps.get(1).map_or("", |m| m.as_str());
        let rest = caps.get(2).map_or("", |m| m.as_str());

        let body = format!("{}{}", written_trigger, rest);
        let (segments, attribute_text) = split_body(&body);

        let closing_tag = format!(
            "{}/{}{}",
            config.left_delimiter, segments, config.right_delimiter
        );
        let after_open = &buffer[open.end()..];
        let (inner_content, full_text, closed) = match after_open.find(&closing_tag) {
            Some(end) => {
                let inner = &after_open[..end];
                (
                    inner.to_string(),
                    format!("{}{}{}", open.as_str(), inner, closing_tag),
                    true,
                )
            }
            None => (String::new(), open.as_str().to_string(), false),
        };

        let tag = Tag {
            full_text,
            name_path: parse_segments(segments, written_trigger),
            attributes: parse_attributes(attribute_text),
            inner_content,
            marker: marker_for(*marker_count),
            closed,
        };
        tracing::debug!(
            marker = %tag.marker,
            path = %tag.path(),
            attributes = tag.attributes.len(),
            closed = tag.closed,
            "discovered tag"
        );

        buffer = buffer.replace(&tag.full_text, &tag.marker);
        tags.push(tag);
        *marker_count += 1;
    }

    ScanOutput {
        content: buffer,
        tags,
    }
}
