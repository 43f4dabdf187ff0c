use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Elements removed together with everything between their open and close tag.
pub const BLOCK_TAGS: &[&str] = &[
    "script", "style", "picture", "svg", "iframe", "noscript", "form", "canvas", "video", "audio",
    "button", "select", "textarea",
];

/// Void elements removed as a single open tag.
pub const SELF_CLOSING_TAGS: &[&str] = &["img", "source", "track", "input", "meta", "base"];

/// `rel` values of `<link>` elements that never point at readable content.
pub const LINK_RELATION_BLOCKLIST: &[&str] = &[
    "stylesheet",
    "preload",
    "prefetch",
    "modulepreload",
    "icon",
    "shortcut icon",
    "apple-touch-icon",
    "manifest",
    "dns-prefetch",
    "preconnect",
];

/// Length of the shortest removable empty element, `<a></a>`.
pub const MIN_EMPTY_ELEMENT_LEN: usize = 7;

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("static rule table pattern")
}

/// `<tag ...>` through the first `</tag>`, including everything in between.
pub(crate) fn block_pattern(tag: &str) -> Regex {
    let tag = regex::escape(&tag.to_lowercase());
    case_insensitive(&format!(r"(?s)<{tag}\b[^>]*>.*?</{tag}\s*>"))
}

/// A single `<tag ...>` or `<tag ... />`.
pub(crate) fn self_closing_pattern(tag: &str) -> Regex {
    let tag = regex::escape(&tag.to_lowercase());
    case_insensitive(&format!(r"<{tag}\b[^>]*>"))
}

pub static BLOCK_REMOVERS: Lazy<Vec<Regex>> =
    Lazy::new(|| BLOCK_TAGS.iter().map(|tag| block_pattern(tag)).collect());

pub static SELF_CLOSING_REMOVERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    SELF_CLOSING_TAGS
        .iter()
        .map(|tag| self_closing_pattern(tag))
        .collect()
});

pub static BLOCKED_LINK_RELATION: Lazy<Regex> = Lazy::new(|| {
    let relations = LINK_RELATION_BLOCKLIST
        .iter()
        .map(|rel| regex::escape(rel))
        .collect::<Vec<_>>()
        .join("|");
    case_insensitive(&format!(
        r#"<link\b[^>]*\brel\s*=\s*["'](?:{relations})(?:\s*;[^"']*)?["'][^>]*>"#
    ))
});
pub static ANY_LINK: Lazy<Regex> = Lazy::new(|| case_insensitive(r"<link\b[^>]*>"));

pub static INLINE_STYLE: Lazy<Regex> =
    Lazy::new(|| case_insensitive(r#"\sstyle\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+)"#));
pub static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| case_insensitive(r#"\son[a-z]+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+)"#));
pub static CLASS_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| case_insensitive(r#"\sclass\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+)"#));

/// Open tag with attribute text. Groups: tag name, attributes, self-closing slash.
pub static ATTRIBUTE_PRUNING: Lazy<Regex> =
    Lazy::new(|| case_insensitive(r"<([a-z][a-z0-9-]*)(\s+[^>]*?)(/)?>"));

pub static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT regex"));

/// Open tag directly followed by a close tag. The names are compared by the caller.
pub static EMPTY_ELEMENT: Lazy<Regex> =
    Lazy::new(|| case_insensitive(r"<([a-z][a-z0-9-]*)(?:\s[^>]*)?>\s*</([a-z][a-z0-9-]*)\s*>"));

pub static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));
