use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Turn debug logging on
    #[arg(short, long)]
    pub debug: bool,

    /// Source HTML file, stdin if omitted
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Destination of resulting HTML file, stdout if omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Clean options file (`key: value` per line)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log sizes, removal counts and reduction ratio
    #[arg(short, long)]
    pub stats: bool,

    /// Leave whitespace runs as they are
    #[arg(long)]
    pub keep_whitespace: bool,

    /// Leave elements that end up empty
    #[arg(long)]
    pub keep_empty: bool,

    /// Leave HTML comments
    #[arg(long)]
    pub keep_comments: bool,

    /// Tag keeping its attributes (repeatable, replaces the default `a`)
    #[arg(long = "allow", value_name = "TAG")]
    pub allow: Vec<String>,

    /// Strip attributes from every tag, anchors included
    #[arg(long, conflicts_with = "allow")]
    pub strip_all_attributes: bool,
}
