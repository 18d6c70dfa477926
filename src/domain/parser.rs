//! Tag parser entry points
//!
//! [`TagParser`] holds the tag syntax and never changes while parsing. Marker
//! numbering lives in a [`ParseSession`], so each session (and each thread)
//! gets its own counter.
//!
//! ```
//! use simpletags::domain::{TagParser, Value};
//!
//! let parser = TagParser::new();
//! let data = Value::map().with("user", Value::map().with("name", "Ada"));
//!
//! let parsed = parser.parse("Hello {tag:user:name}!", Some(&data));
//! assert_eq!(parsed.content, "Hello Ada!");
//! assert!(parsed.tags.is_empty());
//!
//! let output = parser.parse_with("[{tag:x}]", None, |tag| tag.path().to_uppercase());
//! assert_eq!(output, "[X]");
//! ```

use crate::domain::config::ParserConfig;
use crate::domain::resolver;
use crate::domain::scanner;
use crate::domain::tag::Tag;
use crate::domain::value::Value;
use crate::error::Result;
use regex::Regex;

/// Raw-mode result: content with markers left for unresolved tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub content: String,
    /// Tags not resolved from data, in discovery order
    pub tags: Vec<Tag>,
    /// `(marker, value)` pairs already resolved from data; their markers can
    /// still sit inside the text of unresolved tags
    resolved: Vec<(String, String)>,
}

impl Parsed {
    /// Content with each remaining marker swapped back for its tag text
    pub fn restore(&self) -> String {
        let mut content = self.content.clone();
        resolver::restore(&mut content, &self.tags, &self.resolved);
        content
    }

    /// Finish resolution with a callback, consuming the result
    pub fn resolve_with<F>(self, callback: F) -> String
    where
        F: FnMut(&Tag) -> String,
    {
        let mut content = self.content;
        resolver::resolve_with(&mut content, &self.tags, &self.resolved, callback);
        content
    }

    pub fn is_resolved(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Tag syntax plus its compiled opening-tag matcher
#[derive(Debug, Clone)]
pub struct TagParser {
    config: ParserConfig,
    opening_tag: Regex,
}

impl Default for TagParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TagParser {
    /// Parser for `{tag:...}` syntax
    pub fn new() -> Self {
        let config = ParserConfig::default();
        let opening_tag = scanner::opening_tag_regex(&config)
            .expect("default tag syntax is a valid pattern");
        TagParser {
            config,
            opening_tag,
        }
    }

    /// Parser for a custom syntax; fails on empty delimiters
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        let opening_tag = scanner::opening_tag_regex(&config)?;
        Ok(TagParser {
            config,
            opening_tag,
        })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Change both delimiters; the parser is left unchanged on error
    pub fn set_delimiters(
        &mut self,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Result<&mut Self> {
        let config = ParserConfig {
            left_delimiter: left.into(),
            right_delimiter: right.into(),
            ..self.config.clone()
        };
        *self = Self::with_config(config)?;
        Ok(self)
    }

    /// Change the trigger that must follow the left delimiter
    pub fn set_trigger(&mut self, trigger: impl Into<String>) -> Result<&mut Self> {
        let config = ParserConfig {
            trigger: trigger.into(),
            ..self.config.clone()
        };
        *self = Self::with_config(config)?;
        Ok(self)
    }

    /// Start a session with markers numbered from zero
    pub fn session(&self) -> ParseSession<'_> {
        tracing::trace!(trigger = %self.config.trigger, "new parse session");
        ParseSession {
            parser: self,
            marker_count: 0,
        }
    }

    /// Raw mode in a fresh session
    pub fn parse(&self, content: &str, data: Option<&Value>) -> Parsed {
        self.session().parse(content, data)
    }

    /// Callback mode in a fresh session
    pub fn parse_with<F>(&self, content: &str, data: Option<&Value>, callback: F) -> String
    where
        F: FnMut(&Tag) -> String,
    {
        self.session().parse_with(content, data, callback)
    }
}

/// Marker counter shared by consecutive parses
///
/// Reuse one session when re-parsing inner content of tags from an earlier
/// pass, so markers never collide with ones still in the outer content.
#[derive(Debug)]
pub struct ParseSession<'p> {
    parser: &'p TagParser,
    marker_count: usize,
}

impl<'p> ParseSession<'p> {
    /// Number of markers handed out so far
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// Scan `content` and resolve what `data` can
    ///
    /// Unresolved tags stay as markers in the returned content and are
    /// listed in [`Parsed::tags`].
    pub fn parse(&mut self, content: &str, data: Option<&Value>) -> Parsed {
        let scanned = scanner::scan(
            &self.parser.config,
            &self.parser.opening_tag,
            content,
            &mut self.marker_count,
        );

        let mut content = scanned.content;
        let (tags, resolved) = match data {
            Some(data) => {
                let resolution = resolver::resolve_from_data(&mut content, scanned.tags, data);
                (resolution.unresolved, resolution.resolved)
            }
            None => (scanned.tags, Vec::new()),
        };

        Parsed {
            content,
            tags,
            resolved,
        }
    }

    /// Scan `content`, resolve from `data`, then hand every remaining tag to
    /// `callback`
    pub fn parse_with<F>(&mut self, content: &str, data: Option<&Value>, callback: F) -> String
    where
        F: FnMut(&Tag) -> String,
    {
        self.parse(content, data).resolve_with(callback)
    }
}
