//! Loading templates, parser config and data from disk

use crate::domain::{ParserConfig, Value};
use crate::error::{Result, SimpletagsError};
use std::fs;
use std::path::Path;

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SimpletagsError::FileNotFound(path.to_path_buf())
        } else {
            SimpletagsError::Io(e)
        }
    })
}

/// Read a template (any text file)
pub fn load_template(path: &Path) -> Result<String> {
    read_file(path)
}

/// Load a parser config from a TOML file
pub fn load_config(path: &Path) -> Result<ParserConfig> {
    let contents = read_file(path)?;
    ParserConfig::from_toml_str(&contents)
}

/// Load a TOML document as nested data
pub fn load_data(path: &Path) -> Result<Value> {
    let contents = read_file(path)?;
    let table: toml::Table = toml::from_str(&contents).map_err(|e| {
        SimpletagsError::Data(format!("Failed to parse {}: {}", path.display(), e))
    })?;
    Ok(Value::from(toml::Value::Table(table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("simpletags.toml");
        fs::write(&path, "trigger = \"ee:\"\nleft_delimiter = \"<\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.trigger, "ee:");
        assert_eq!(config.left_delimiter, "<");
        assert_eq!(config.right_delimiter, "}");
    }

    #[test]
    fn test_load_config_invalid_delimiter() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("simpletags.toml");
        fs::write(&path, "right_delimiter = \"\"\n").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(SimpletagsError::Config(_))));
    }

    #[test]
    fn test_load_data() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.toml");
        fs::write(&path, "[user]\nname = \"Ada\"\n").unwrap();

        let data = load_data(&path).unwrap();
        assert_eq!(
            data.lookup(&["user", "name"]).and_then(Value::as_text),
            Some("Ada")
        );
    }

    #[test]
    fn test_load_data_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.toml");
        fs::write(&path, "[user\nname = ").unwrap();

        match load_data(&path) {
            Err(SimpletagsError::Data(msg)) => assert!(msg.contains("data.toml")),
            other => panic!("Expected Data error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = load_template(Path::new("/nonexistent/template.txt"));
        match result {
            Err(SimpletagsError::FileNotFound(path)) => {
                assert_eq!(path, Path::new("/nonexistent/template.txt"))
            }
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }
}
