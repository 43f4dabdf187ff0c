use std::collections::HashSet;

use crate::util::Util;

/// Fully resolved settings for one cleaning run.
///
/// The defaults give the most aggressive clean: whitespace collapsed, empty
/// elements and comments removed, attributes kept on `<a>` only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanOptions {
    pub collapse_whitespace: bool,
    pub remove_empty_elements: bool,
    pub remove_comments: bool,
    /// Lower-case tag names exempt from attribute pruning. `style`, `class`
    /// and event handler attributes are stripped from these as well.
    pub allowed_attribute_tags: HashSet<String>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            remove_empty_elements: true,
            remove_comments: true,
            allowed_attribute_tags: Util::normalize_tags(["a"]),
        }
    }
}

impl CleanOptions {
    pub fn with_collapse_whitespace(mut self, collapse_whitespace: bool) -> Self {
        self.collapse_whitespace = collapse_whitespace;
        self
    }

    pub fn with_remove_empty_elements(mut self, remove_empty_elements: bool) -> Self {
        self.remove_empty_elements = remove_empty_elements;
        self
    }

    pub fn with_remove_comments(mut self, remove_comments: bool) -> Self {
        self.remove_comments = remove_comments;
        self
    }

    /// Replaces the exemption list. An empty iterator strips attributes from every tag.
    pub fn with_allowed_attribute_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_attribute_tags = Util::normalize_tags(tags);
        self
    }

    pub fn is_attribute_tag_allowed(&self, tag: &str) -> bool {
        self.allowed_attribute_tags
            .contains(&tag.to_ascii_lowercase())
    }

    /// Resolve `overrides` on top of `self`. Every field set in `overrides` wins.
    pub fn merge(&self, overrides: &CleanOptionsOverride) -> CleanOptions {
        CleanOptions {
            collapse_whitespace: overrides
                .collapse_whitespace
                .unwrap_or(self.collapse_whitespace),
            remove_empty_elements: overrides
                .remove_empty_elements
                .unwrap_or(self.remove_empty_elements),
            remove_comments: overrides.remove_comments.unwrap_or(self.remove_comments),
            allowed_attribute_tags: overrides
                .allowed_attribute_tags
                .clone()
                .unwrap_or_else(|| self.allowed_attribute_tags.clone()),
        }
    }
}

/// Partial settings, e.g. from a config file or command line flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanOptionsOverride {
    pub collapse_whitespace: Option<bool>,
    pub remove_empty_elements: Option<bool>,
    pub remove_comments: Option<bool>,
    pub allowed_attribute_tags: Option<HashSet<String>>,
}

impl CleanOptionsOverride {
    pub fn collapse_whitespace(mut self, collapse_whitespace: bool) -> Self {
        self.collapse_whitespace = Some(collapse_whitespace);
        self
    }

    pub fn remove_empty_elements(mut self, remove_empty_elements: bool) -> Self {
        self.remove_empty_elements = Some(remove_empty_elements);
        self
    }

    pub fn remove_comments(mut self, remove_comments: bool) -> Self {
        self.remove_comments = Some(remove_comments);
        self
    }

    pub fn allowed_attribute_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_attribute_tags = Some(Util::normalize_tags(tags));
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` take precedence.
    pub fn and(self, other: CleanOptionsOverride) -> CleanOptionsOverride {
        CleanOptionsOverride {
            collapse_whitespace: other.collapse_whitespace.or(self.collapse_whitespace),
            remove_empty_elements: other.remove_empty_elements.or(self.remove_empty_elements),
            remove_comments: other.remove_comments.or(self.remove_comments),
            allowed_attribute_tags: other.allowed_attribute_tags.or(self.allowed_attribute_tags),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &CleanOptionsOverride::default()
    }
}
