//! Reduce HTML to compact, mostly-text markup for RAG and LLM ingestion.
//!
//! This is a regex driven rewrite, not an HTML parser: it removes scripts,
//! styles, media, form widgets, comments and attribute noise, then collapses
//! elements left empty and squeezes whitespace.
//!
//! ```
//! use pure_html::{clean_html, CleanOptions};
//!
//! let html = r#"<p style="color:blue;" class="x" onclick="f()">Hello</p><script>evil()</script>"#;
//! assert_eq!(clean_html(html, &CleanOptions::default()), "<p>Hello</p>");
//! ```

mod cleaner;
pub mod config;
mod constants;
mod error;
mod options;
mod stats;
mod util;

#[cfg(test)]
mod tests;

pub use cleaner::HtmlCleaner;
pub use config::{CleanConfig, ConfigError};
pub use constants::{BLOCK_TAGS, LINK_RELATION_BLOCKLIST, SELF_CLOSING_TAGS};
pub use error::CleanError;
pub use options::{CleanOptions, CleanOptionsOverride};
pub use stats::{CleanReport, RemovalStats};

/// Clean `html` with the given options. Whitespace-only input yields an empty string.
pub fn clean_html(html: &str, options: &CleanOptions) -> String {
    HtmlCleaner::run(html, options)
}

/// Like [`clean_html`] for raw input; anything that is not UTF-8 text is
/// rejected before any cleaning happens.
pub fn clean_html_bytes(html: &[u8], options: &CleanOptions) -> Result<String, CleanError> {
    Ok(HtmlCleaner::run(HtmlCleaner::decode(html)?, options))
}
