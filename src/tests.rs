use crate::*;
use std::sync::Arc;

const ARTICLE: &str = include_str!("../resources/tests/article.html");
const LANDING: &str = include_str!("../resources/tests/landing.html");

#[test]
fn article() {
    let _ = env_logger::builder().is_test(true).try_init();
    let cleaned = clean_html(ARTICLE, &CleanOptions::default());

    assert_eq!(
        cleaned,
        "<!DOCTYPE html> <html> <head> <title>Ten Notes on Sourdough</title> </head> <body> \
<article> <h1>Ten Notes on Sourdough</h1> <div> <span>By Jo Baker</span> <span>March 2, 2026</span> </div> \
<p>A starter is only <em>flour</em> and water left to ferment.</p> <h2>Note 1: Feed it daily</h2> \
<p>Discard half and feed the rest <a href=\"/feeding\">on a schedule</a>.</p> </article> \
<footer> <p>&copy; 2026 The Bakery.</p> </footer> </body> </html>"
    );
}

#[test]
fn landing_page() {
    let _ = env_logger::builder().is_test(true).try_init();
    let cleaned = clean_html(LANDING, &CleanOptions::default());
    let lower = cleaned.to_lowercase();

    for tag in BLOCK_TAGS.iter().chain(SELF_CLOSING_TAGS).chain(&["link"]) {
        assert!(!lower.contains(&format!("<{tag}")), "<{tag}> survived");
    }
    for attribute in [" style", " class", " onclick", " width"] {
        assert!(!lower.contains(attribute), "{attribute} survived");
    }
    assert!(cleaned.contains("<a href=\"/\"> BrandName </a>"));
    assert!(cleaned.contains("<h1>Welcome to Our Platform</h1>"));
    assert!(!cleaned.contains("Sign Up"));
}

#[test]
fn idempotent() {
    let options = CleanOptions::default();
    for html in [
        ARTICLE,
        LANDING,
        "<div class=\"a\"> <p>x</p> <!-- c --> <span> </span></div>",
        "<ul><li><a href=\"#top\" onclick=\"go()\"></a></li></ul><p>tail</p>",
    ] {
        let once = clean_html(html, &options);
        assert_eq!(clean_html(&once, &options), once);
    }
}

#[test]
fn invalid_utf8() {
    let res = clean_html_bytes(b"<p>caf\xe9</p>", &CleanOptions::default());
    assert!(matches!(res, Err(CleanError::InvalidInput(_))));

    let res = clean_html_bytes("<p>café</p>".as_bytes(), &CleanOptions::default()).unwrap();
    assert_eq!(res, "<p>café</p>");
}

#[test]
fn shared_between_threads() {
    let cleaner = Arc::new(HtmlCleaner::default());
    let expected = cleaner.clean(ARTICLE);

    let handles = (0..4)
        .map(|_| {
            let cleaner = Arc::clone(&cleaner);
            std::thread::spawn(move || cleaner.clean(ARTICLE))
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn config_layers_onto_defaults() {
    let overrides = CleanConfig::parse_str("remove_comments: no\nallowed_attribute_tags: a | p").unwrap();
    let cleaner = HtmlCleaner::default();
    let html = r#"<!-- intro --><p id="lead" class="x">Hi</p>"#;

    assert_eq!(cleaner.clean_with(html, &overrides), r#"<!-- intro --><p id="lead">Hi</p>"#);
}
