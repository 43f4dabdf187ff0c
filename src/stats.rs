use crate::constants::{block_pattern, self_closing_pattern};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::time::Duration;

struct StatPatterns {
    scripts: Vec<Regex>,
    styles: Vec<Regex>,
    images: Vec<Regex>,
    forms: Vec<Regex>,
    attributes: Vec<Regex>,
}

fn attribute_pattern(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("attribute stat regex")
}

static PATTERNS: Lazy<StatPatterns> = Lazy::new(|| StatPatterns {
    scripts: vec![block_pattern("script")],
    styles: vec![
        block_pattern("style"),
        attribute_pattern(r#"<link\b[^>]*\brel\s*=\s*["']stylesheet["'][^>]*>"#),
    ],
    images: vec![
        self_closing_pattern("img"),
        block_pattern("picture"),
        block_pattern("svg"),
    ],
    forms: vec![
        block_pattern("form"),
        self_closing_pattern("input"),
        block_pattern("button"),
        self_closing_pattern("select"),
        block_pattern("textarea"),
    ],
    attributes: vec![
        attribute_pattern(r"\sstyle\s*="),
        attribute_pattern(r"\sclass\s*="),
        attribute_pattern(r"\son[a-z]+\s*="),
    ],
});

fn count(patterns: &[Regex], html: &str) -> usize {
    patterns
        .iter()
        .map(|regex| regex.find_iter(html).count())
        .sum()
}

/// Noise found in a document, grouped the way a before/after summary shows it.
///
/// Each category is counted independently on the raw input, so an `<input>`
/// inside a `<form>` counts twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemovalStats {
    pub scripts: usize,
    pub styles: usize,
    pub images: usize,
    pub forms: usize,
    pub attributes: usize,
}

impl RemovalStats {
    pub fn analyze(html: &str) -> Self {
        let patterns = &*PATTERNS;
        Self {
            scripts: count(&patterns.scripts, html),
            styles: count(&patterns.styles, html),
            images: count(&patterns.images, html),
            forms: count(&patterns.forms, html),
            attributes: count(&patterns.attributes, html),
        }
    }

    pub fn total(&self) -> usize {
        self.scripts + self.styles + self.images + self.forms + self.attributes
    }
}

pub struct CleanReport {
    pub html: String,
    /// Length of the input in characters.
    pub original_len: usize,
    /// Length of the output in characters.
    pub cleaned_len: usize,
    pub stats: RemovalStats,
    pub elapsed: Duration,
}

impl CleanReport {
    /// Characters removed.
    pub fn saved(&self) -> usize {
        self.original_len.saturating_sub(self.cleaned_len)
    }

    /// `original / cleaned`, shown as `N:1`. `None` when nothing is left.
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.cleaned_len == 0 {
            return None;
        }
        Some(self.original_len as f64 / self.cleaned_len as f64)
    }

    /// Share of characters removed, in percent.
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        self.saved() as f64 / self.original_len as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::{CleanReport, RemovalStats};
    use std::time::Duration;

    #[test]
    fn count_categories() {
        let html = r#"<head><script src="a.js"></script><style>p{}</style>
<link rel="stylesheet" href="a.css"></head>
<body class="x"><img src="a.png"><svg><path/></svg>
<form><input type="text"><select><option>1</option></select><button onclick="go()">Go</button></form>
<p style="color:red">text</p></body>"#;
        let stats = RemovalStats::analyze(html);

        assert_eq!(stats.scripts, 1);
        assert_eq!(stats.styles, 2);
        assert_eq!(stats.images, 2);
        assert_eq!(stats.forms, 4);
        assert_eq!(stats.attributes, 3);
        assert_eq!(stats.total(), 12);
    }

    #[test]
    fn nothing_to_count() {
        assert_eq!(RemovalStats::analyze("<p>plain</p>"), RemovalStats::default());
    }

    #[test]
    fn reduction_ratio() {
        let report = CleanReport {
            html: String::new(),
            original_len: 200,
            cleaned_len: 50,
            stats: RemovalStats::default(),
            elapsed: Duration::ZERO,
        };
        assert!((report.reduction_ratio() - 75.0).abs() < f64::EPSILON);
        assert_eq!(report.saved(), 150);
        assert_eq!(report.compression_ratio(), Some(4.0));

        let empty = CleanReport {
            original_len: 0,
            cleaned_len: 0,
            ..report
        };
        assert_eq!(empty.reduction_ratio(), 0.0);
        assert_eq!(empty.saved(), 0);
        assert_eq!(empty.compression_ratio(), None);
    }
}
