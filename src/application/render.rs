//! Render use case: resolve every tag in a template file

use crate::domain::{ParserConfig, Tag, TagParser, Value};
use crate::error::Result;
use crate::infrastructure::{load_config, load_data, load_template};
use std::path::PathBuf;
use std::str::FromStr;

/// Inputs shared by the render and tags use cases
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub template: PathBuf,
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Overrides the trigger from the config file
    pub trigger: Option<String>,
    /// Overrides both delimiters from the config file
    pub delimiters: Option<(String, String)>,
}

impl TemplateOptions {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        TemplateOptions {
            template: template.into(),
            ..Default::default()
        }
    }

    /// Config file (if any) with command-line overrides applied
    pub fn parser(&self) -> Result<TagParser> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ParserConfig::default(),
        };
        if let Some(trigger) = &self.trigger {
            config.trigger = trigger.clone();
        }
        if let Some((left, right)) = &self.delimiters {
            config.left_delimiter = left.clone();
            config.right_delimiter = right.clone();
        }
        TagParser::with_config(config)
    }

    pub fn data(&self) -> Result<Option<Value>> {
        self.data.as_deref().map(load_data).transpose()
    }

    pub fn template(&self) -> Result<String> {
        load_template(&self.template)
    }
}

/// What to substitute for tags the data does not cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Put the original tag text back
    #[default]
    Keep,
    /// Replace the tag with nothing
    Remove,
    /// Replace the tag with its inner content
    Inner,
}

impl UnresolvedPolicy {
    pub fn apply(&self, tag: &Tag) -> String {
        match self {
            UnresolvedPolicy::Keep => tag.full_text.clone(),
            UnresolvedPolicy::Remove => String::new(),
            UnresolvedPolicy::Inner => tag.inner_content.clone(),
        }
    }
}

impl FromStr for UnresolvedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(UnresolvedPolicy::Keep),
            "remove" => Ok(UnresolvedPolicy::Remove),
            "inner" => Ok(UnresolvedPolicy::Inner),
            _ => Err(format!(
                "Invalid unresolved policy: '{}'. Valid values are: keep, remove, inner",
                s
            )),
        }
    }
}

/// Service for rendering a template file
pub struct RenderService {
    options: TemplateOptions,
    policy: UnresolvedPolicy,
}

impl RenderService {
    pub fn new(options: TemplateOptions, policy: UnresolvedPolicy) -> Self {
        RenderService { options, policy }
    }

    /// Resolve tags from data, then apply the unresolved policy to the rest
    pub fn execute(&self) -> Result<String> {
        let parser = self.options.parser()?;
        let data = self.options.data()?;
        let content = self.options.template()?;

        let policy = self.policy;
        Ok(parser.parse_with(&content, data.as_ref(), |tag| policy.apply(tag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimpletagsError;
    use std::fs;
    use tempfile::TempDir;

    fn write(temp: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = temp.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(UnresolvedPolicy::from_str("keep"), Ok(UnresolvedPolicy::Keep));
        assert_eq!(UnresolvedPolicy::from_str("REMOVE"), Ok(UnresolvedPolicy::Remove));
        assert_eq!(UnresolvedPolicy::from_str("inner"), Ok(UnresolvedPolicy::Inner));
        assert!(UnresolvedPolicy::from_str("drop").is_err());
    }

    #[test]
    fn test_render_with_data_and_keep() {
        let temp = TempDir::new().unwrap();
        let template = write(&temp, "page.txt", "Hi {tag:user:name} {tag:user:email}");
        let data = write(&temp, "data.toml", "[user]\nname = \"Ada\"\n");

        let options = TemplateOptions {
            data: Some(data),
            ..TemplateOptions::new(template)
        };
        let output = RenderService::new(options, UnresolvedPolicy::Keep)
            .execute()
            .unwrap();

        assert_eq!(output, "Hi Ada {tag:user:email}");
    }

    #[test]
    fn test_render_inner_policy() {
        let temp = TempDir::new().unwrap();
        let template = write(&temp, "page.txt", "[{tag:b}bold{/tag:b}] [{tag:x}]");

        let output = RenderService::new(TemplateOptions::new(template), UnresolvedPolicy::Inner)
            .execute()
            .unwrap();

        assert_eq!(output, "[bold] []");
    }

    #[test]
    fn test_render_keep_restores_tag_nested_in_later_tag() {
        let temp = TempDir::new().unwrap();
        let input = "{tag:a} {tag:b}{tag:a}{/tag:b}";
        let template = write(&temp, "page.txt", input);

        let output = RenderService::new(TemplateOptions::new(template), UnresolvedPolicy::Keep)
            .execute()
            .unwrap();

        assert_eq!(output, input);
    }

    #[test]
    fn test_render_policies_fill_data_inside_unresolved_tag() {
        let temp = TempDir::new().unwrap();
        let template = write(&temp, "page.txt", "{tag:a} {tag:b}{tag:a}{/tag:b}");
        let data = write(&temp, "data.toml", "a = \"A\"\n");
        let options = TemplateOptions {
            data: Some(data),
            ..TemplateOptions::new(template)
        };

        let kept = RenderService::new(options.clone(), UnresolvedPolicy::Keep)
            .execute()
            .unwrap();
        let inner = RenderService::new(options, UnresolvedPolicy::Inner)
            .execute()
            .unwrap();

        assert_eq!(kept, "A {tag:b}A{/tag:b}");
        assert_eq!(inner, "A A");
    }

    #[test]
    fn test_render_inner_policy_without_data_leaves_no_markers() {
        let temp = TempDir::new().unwrap();
        let template = write(&temp, "page.txt", "{tag:a} {tag:b}{tag:a}{/tag:b}");

        let output = RenderService::new(TemplateOptions::new(template), UnresolvedPolicy::Inner)
            .execute()
            .unwrap();

        assert_eq!(output, " ");
    }

    #[test]
    fn test_render_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        let template = write(&temp, "page.txt", "<<t:a>> {tag:a}");
        let config = write(&temp, "simpletags.toml", "trigger = \"x:\"\n");

        let options = TemplateOptions {
            config: Some(config),
            trigger: Some("t:".to_string()),
            delimiters: Some(("<<".to_string(), ">>".to_string())),
            ..TemplateOptions::new(template)
        };
        let output = RenderService::new(options, UnresolvedPolicy::Remove)
            .execute()
            .unwrap();

        assert_eq!(output, " {tag:a}");
    }

    #[test]
    fn test_render_missing_template() {
        let options = TemplateOptions::new("/nonexistent/page.txt");
        let result = RenderService::new(options, UnresolvedPolicy::Keep).execute();
        assert!(matches!(result, Err(SimpletagsError::FileNotFound(_))));
    }
}
