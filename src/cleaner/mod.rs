
use crate::constants::{
    ANY_LINK, ATTRIBUTE_PRUNING, BLOCKED_LINK_RELATION, BLOCK_REMOVERS, CLASS_ATTRIBUTE, COMMENT,
    EMPTY_ELEMENT, EVENT_HANDLER, INLINE_STYLE, MIN_EMPTY_ELEMENT_LEN, SELF_CLOSING_REMOVERS,
    WHITESPACE,
};
use crate::config::CleanConfig;
use crate::error::CleanError;
use crate::options::{CleanOptions, CleanOptionsOverride};
use crate::stats::{CleanReport, RemovalStats};
use crate::util::Util;
use regex::Captures;
use std::path::Path;
use std::time::Instant;

/// Reusable cleaner bound to a set of default options.
///
/// Holds no state besides its defaults, so one instance can be shared
/// between threads.
#[derive(Clone, Debug, Default)]
pub struct HtmlCleaner {
    defaults: CleanOptions,
}

impl HtmlCleaner {
    pub fn new(defaults: CleanOptions) -> Self {
        Self { defaults }
    }

    pub fn options(&self) -> &CleanOptions {
        &self.defaults
    }

    pub fn clean(&self, html: &str) -> String {
        Self::run(html, &self.defaults)
    }

    /// Clean with `overrides` merged on top of this cleaner's defaults.
    pub fn clean_with(&self, html: &str, overrides: &CleanOptionsOverride) -> String {
        Self::run(html, &self.defaults.merge(overrides))
    }

    /// Defaults, then the options file at `config_path`, then `overrides`.
    pub fn from_config(
        config_path: Option<&Path>,
        overrides: CleanOptionsOverride,
    ) -> Result<Self, CleanError> {
        let file = match config_path {
            Some(path) => CleanConfig::parse_path(path)?,
            None => CleanOptionsOverride::default(),
        };
        Ok(Self::new(CleanOptions::default().merge(&file.and(overrides))))
    }

    pub fn clean_bytes(&self, html: &[u8]) -> Result<String, CleanError> {
        Ok(self.clean(Self::decode(html)?))
    }

    pub fn clean_bytes_with_report(&self, html: &[u8]) -> Result<CleanReport, CleanError> {
        Ok(self.clean_with_report(Self::decode(html)?))
    }

    /// The only gate for raw input: anything but UTF-8 text is refused.
    pub(crate) fn decode(html: &[u8]) -> Result<&str, CleanError> {
        std::str::from_utf8(html).map_err(|err| {
            log::error!("Refusing to clean input that is not UTF-8 text: {err}");
            CleanError::InvalidInput(err)
        })
    }

    /// Clean and measure: sizes, removal counts on the input and elapsed time.
    pub fn clean_with_report(&self, html: &str) -> CleanReport {
        let start = Instant::now();
        let cleaned = self.clean(html);
        let elapsed = start.elapsed();

        CleanReport {
            original_len: html.chars().count(),
            cleaned_len: cleaned.chars().count(),
            stats: RemovalStats::analyze(html),
            elapsed,
            html: cleaned,
        }
    }

    /// The whole pipeline: blocks, attributes, comments, empty elements, whitespace.
    pub fn run(html: &str, options: &CleanOptions) -> String {
        let html = html.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
        if html.is_empty() {
            return String::new();
        }

        let input_len = html.len();
        let mut out = Self::remove_blocks(html);
        log::debug!("block removal: {} -> {} bytes", input_len, out.len());

        out = Self::strip_attributes(&out, options);
        log::debug!("attribute stripping: {} bytes left", out.len());

        if options.remove_comments {
            out = Self::remove_comments(&out);
            log::debug!("comment removal: {} bytes left", out.len());
        }

        if options.remove_empty_elements {
            out = Self::remove_empty_elements(&out);
            log::debug!("empty element removal: {} bytes left", out.len());
        }

        if options.collapse_whitespace {
            out = Self::collapse_whitespace(&out);
        }

        log::debug!("cleaned {} bytes down to {}", input_len, out.len());
        out
    }

    /// Drop block elements with their content, void elements and `<link>` tags.
    pub fn remove_blocks(html: &str) -> String {
        let mut out = html.to_owned();

        for regex in BLOCK_REMOVERS.iter() {
            out = Util::remove_all(out, regex);
        }

        for regex in SELF_CLOSING_REMOVERS.iter() {
            out = Util::remove_all(out, regex);
        }

        out = Util::remove_all(out, &BLOCKED_LINK_RELATION);
        Util::remove_all(out, &ANY_LINK)
    }

    /// Remove `style`, `class` and `on*` attributes everywhere, then every
    /// remaining attribute on tags not exempt in `options`.
    pub fn strip_attributes(html: &str, options: &CleanOptions) -> String {
        let mut out = Util::remove_all(html.to_owned(), &INLINE_STYLE);
        out = Util::remove_all(out, &EVENT_HANDLER);
        out = Util::remove_all(out, &CLASS_ATTRIBUTE);

        ATTRIBUTE_PRUNING
            .replace_all(&out, |caps: &Captures| {
                let tag = &caps[1];
                if options.is_attribute_tag_allowed(tag) {
                    caps[0].to_owned()
                } else if caps.get(3).is_some() {
                    format!("<{tag} />")
                } else {
                    format!("<{tag}>")
                }
            })
            .into_owned()
    }

    pub fn remove_comments(html: &str) -> String {
        COMMENT.replace_all(html, "").into_owned()
    }

    /// Repeatedly drop elements holding nothing but whitespace until a pass
    /// changes nothing. `<div><span></span></div>` needs two passes.
    pub fn remove_empty_elements(html: &str) -> String {
        // every productive pass removes at least one `<x></x>`
        let max_passes = html.len() / MIN_EMPTY_ELEMENT_LEN + 1;
        Self::remove_empty_elements_within(html, max_passes)
    }

    pub(crate) fn remove_empty_elements_within(html: &str, max_passes: usize) -> String {
        let mut current = html.to_owned();

        for pass in 1..=max_passes {
            let next = EMPTY_ELEMENT
                .replace_all(&current, |caps: &Captures| {
                    if caps[1].eq_ignore_ascii_case(&caps[2]) {
                        String::new()
                    } else {
                        caps[0].to_owned()
                    }
                })
                .into_owned();

            if next == current {
                log::trace!("empty elements settled after {pass} passes");
                return current;
            }
            current = next;
        }

        log::warn!("empty element removal did not settle within {max_passes} passes");
        current
    }

    pub fn collapse_whitespace(html: &str) -> String {
        WHITESPACE.replace_all(html, " ").trim().to_owned()
    }
}
