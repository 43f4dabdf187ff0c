use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use crate::args::Args;
use clap::Parser;
use pure_html::{CleanOptionsOverride, HtmlCleaner};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

mod args;

pub fn main() {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to set up logging: {error}");
    }

    let cleaner = match HtmlCleaner::from_config(args.config.as_deref(), flag_overrides(&args)) {
        Ok(cleaner) => cleaner,
        Err(error) => {
            log::error!("Failed to read config: {error}");
            exit(1);
        }
    };

    let html = match read_input(args.input.as_deref()) {
        Ok(html) => html,
        Err(error) => {
            log::error!("Failed to read input: {error}");
            exit(1);
        }
    };

    let report = match cleaner.clean_bytes_with_report(&html) {
        Ok(report) => report,
        Err(error) => {
            log::error!("{error}");
            exit(1);
        }
    };
    if args.stats {
        log::info!(
            "{} -> {} chars, {} saved ({:.1}% smaller) in {:?}",
            report.original_len,
            report.cleaned_len,
            report.saved(),
            report.reduction_ratio(),
            report.elapsed
        );
        if let Some(ratio) = report.compression_ratio() {
            log::info!("compression {ratio:.1}:1");
        }
        log::info!(
            "removed: {} scripts, {} styles, {} images, {} form elements, {} attributes",
            report.stats.scripts,
            report.stats.styles,
            report.stats.images,
            report.stats.forms,
            report.stats.attributes
        );
    }

    if let Err(error) = write_output(args.output, &report.html) {
        log::error!("Failed to write output: {error}");
        exit(1);
    }
}

fn flag_overrides(args: &Args) -> CleanOptionsOverride {
    let mut flags = CleanOptionsOverride::default();
    if args.keep_whitespace {
        flags = flags.collapse_whitespace(false);
    }
    if args.keep_empty {
        flags = flags.remove_empty_elements(false);
    }
    if args.keep_comments {
        flags = flags.remove_comments(false);
    }
    if args.strip_all_attributes {
        flags = flags.allowed_attribute_tags(Vec::<String>::new());
    } else if !args.allow.is_empty() {
        flags = flags.allowed_attribute_tags(&args.allow);
    }

    flags
}

fn read_input(path: Option<&Path>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<PathBuf>, html: &str) -> std::io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, html),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")
        }
    }
}
