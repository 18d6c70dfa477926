//! List tags use case: raw-mode parse of a template file

use crate::application::render::TemplateOptions;
use crate::domain::Parsed;
use crate::error::Result;

/// Service for listing the tags a template leaves unresolved.
pub struct ListTagsService {
    options: TemplateOptions,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(options: TemplateOptions) -> Self {
        Self { options }
    }

    /// Parse the template in raw mode; tags resolved from data are not listed.
    pub fn execute(&self) -> Result<Parsed> {
        let parser = self.options.parser()?;
        let data = self.options.data()?;
        let content = self.options.template()?;

        Ok(parser.parse(&content, data.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_only_unresolved_tags() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("page.txt");
        let data = temp.path().join("data.toml");
        fs::write(&template, "{tag:title} {tag:items:list type=\"ul\"}x{/tag:items:list}").unwrap();
        fs::write(&data, "title = \"Home\"\n").unwrap();

        let options = TemplateOptions {
            data: Some(data),
            ..TemplateOptions::new(&template)
        };
        let parsed = ListTagsService::new(options).execute().unwrap();

        assert_eq!(parsed.tags.len(), 1);
        assert_eq!(parsed.tags[0].name_path, vec!["items", "list"]);
        assert_eq!(parsed.tags[0].attributes.get("type"), Some("ul"));
        assert!(parsed.content.starts_with("Home "));
    }

    #[test]
    fn template_without_tags() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("page.txt");
        fs::write(&template, "nothing {here}").unwrap();

        let parsed = ListTagsService::new(TemplateOptions::new(&template))
            .execute()
            .unwrap();

        assert!(parsed.tags.is_empty());
        assert_eq!(parsed.content, "nothing {here}");
    }
}
