use std::borrow::Cow;
use std::collections::HashSet;

use regex::Regex;

use crate::config::ConfigError;

pub struct Util;

impl Util {
    pub fn str_extract_value<'a>(identifier: &str, line: &'a str) -> &'a str {
        let value = &line[identifier.len()..];
        let value = value.trim();
        match value.find('#') {
            Some(pos) => value[..pos].trim_end(),
            None => value,
        }
    }

    pub fn split_values(values: &str) -> Vec<&str> {
        values
            .split('|')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn parse_bool(identifier: &str, value: &str) -> Result<bool, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "yes" | "true" | "on" | "1" => Ok(true),
            "no" | "false" | "off" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key: identifier.trim_end_matches(':').to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    pub fn normalize_tags<I, S>(tags: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .map(|tag| tag.as_ref().trim().to_ascii_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Removes every match of `regex`, handing back the input untouched when nothing matched.
    pub fn remove_all(html: String, regex: &Regex) -> String {
        let replaced = match regex.replace_all(&html, "") {
            Cow::Borrowed(_) => None,
            Cow::Owned(replaced) => Some(replaced),
        };
        replaced.unwrap_or(html)
    }
}
