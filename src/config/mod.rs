#[macro_use]
mod macros;
mod error;

pub use error::ConfigError;

use crate::options::CleanOptionsOverride;
use crate::util::Util;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Reads cleaning options from `key: value` text files:
///
/// ```text
/// # keep comments, exempt anchors and abbreviations
/// remove_comments: no
/// allowed_attribute_tags: a | abbr
/// ```
pub struct CleanConfig;

impl CleanConfig {
    pub fn parse_path(config_path: &Path) -> Result<CleanOptionsOverride, ConfigError> {
        log::debug!("Reading clean config from {:?}", config_path);
        let data = fs::read_to_string(config_path)?;
        Self::parse_str(&data)
    }

    pub fn parse_str(data: &str) -> Result<CleanOptionsOverride, ConfigError> {
        let mut collapse_whitespace: Option<bool> = None;
        let mut remove_empty_elements: Option<bool> = None;
        let mut remove_comments: Option<bool> = None;
        let mut allowed_attribute_tags: Option<HashSet<String>> = None;

        let collapse = "collapse_whitespace:";
        let empty = "remove_empty_elements:";
        let comments = "remove_comments:";
        let allowed = "allowed_attribute_tags:";

        for line in data.lines() {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }

            extract_bool!(line, collapse, collapse_whitespace);
            extract_bool!(line, empty, remove_empty_elements);
            extract_bool!(line, comments, remove_comments);
            extract_tag_set!(line, allowed, allowed_attribute_tags);

            log::debug!("Ignoring unknown config line '{line}'");
        }

        Ok(CleanOptionsOverride {
            collapse_whitespace,
            remove_empty_elements,
            remove_comments,
            allowed_attribute_tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CleanConfig, ConfigError};
    use std::collections::HashSet;

    #[test]
    fn parse_all_keys() {
        let data = r#"
# settings for the docs import
collapse_whitespace: no
remove_empty_elements: yes
remove_comments: false   # conditional comments carry content here
allowed_attribute_tags: A | abbr
"#;
        let overrides = CleanConfig::parse_str(data).unwrap();

        assert_eq!(overrides.collapse_whitespace, Some(false));
        assert_eq!(overrides.remove_empty_elements, Some(true));
        assert_eq!(overrides.remove_comments, Some(false));
        assert_eq!(
            overrides.allowed_attribute_tags,
            Some(HashSet::from(["a".to_owned(), "abbr".to_owned()]))
        );
    }

    #[test]
    fn empty_tag_list_strips_everything() {
        let overrides = CleanConfig::parse_str("allowed_attribute_tags:").unwrap();
        assert_eq!(overrides.allowed_attribute_tags, Some(HashSet::new()));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let overrides = CleanConfig::parse_str("tidy: yes\nprune: no").unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn invalid_bool() {
        let err = CleanConfig::parse_str("remove_comments: sometimes").unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, "remove_comments");
                assert_eq!(value, "sometimes");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn missing_file() {
        let res = CleanConfig::parse_path(std::path::Path::new("./resources/does-not-exist.txt"));
        assert!(matches!(res, Err(ConfigError::IO(_))));
    }
}
