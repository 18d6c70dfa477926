//! Tag descriptors produced by the scanner

/// Attributes of a tag, in order of appearance
///
/// Inserting a key that already exists replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// One tag occurrence discovered in the content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Exact source text: the opening tag, plus inner content and closing
    /// tag when a closing tag was found
    pub full_text: String,

    /// Colon-separated name segments with the trigger removed (never empty)
    pub name_path: Vec<String>,

    pub attributes: Attributes,

    /// Text between the opening and closing tag, empty for self-closing tags
    pub inner_content: String,

    /// Placeholder standing in for `full_text` in the working buffer
    pub marker: String,

    /// Whether a matching closing tag was found (inner content may be empty)
    pub closed: bool,
}

impl Tag {
    /// Primary name of the tag (first path segment)
    pub fn name(&self) -> &str {
        self.name_path.first().map(String::as_str).unwrap_or_default()
    }

    /// Name path joined back with colons (e.g. "user:name")
    pub fn path(&self) -> String {
        self.name_path.join(":")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tag() -> Tag {
        Tag {
            full_text: "{tag:items:list type=\"numbered\"}x{/tag:items:list}".to_string(),
            name_path: vec!["items".to_string(), "list".to_string()],
            attributes: [("type", "numbered")].into_iter().collect(),
            inner_content: "x".to_string(),
            marker: "marker_0k0dj3j4nJHDj22j".to_string(),
            closed: true,
        }
    }

    #[test]
    fn test_attributes_preserve_insertion_order() {
        let mut attrs = Attributes::new();
        attrs.insert("type", "numbered");
        attrs.insert("start", "1");

        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["type", "start"]);
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_attributes_duplicate_key_replaces_in_place() {
        let attrs: Attributes = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("a"), Some("3"));
        let pairs: Vec<(&str, &str)> = attrs.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_attributes_missing_key() {
        let attrs = Attributes::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.get("nope"), None);
    }

    #[test]
    fn test_tag_name_and_path() {
        let tag = sample_tag();
        assert_eq!(tag.name(), "items");
        assert_eq!(tag.path(), "items:list");
        assert!(tag.closed);
    }
}
