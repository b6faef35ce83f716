//! Brochure Paging CLI (for checking page lists outside the designer)
//! The main interface is through WASM bindings.

use std::io::Read;
use std::path::PathBuf;

use brochure_paging::{page_numbers, NumberingRules, PageList};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "brochure-paging")]
#[command(about = "Print the page numbers of a designed brochure")]
struct Cli {
    /// JSON array of pages exported by the designer (stdin when omitted)
    pages_json: Option<PathBuf>,
}

/// Filter from `RUST_LOG`-style directives, warnings when unset or invalid
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let json = match cli.pages_json {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let pages = PageList::from_json(&json)?;
    let rules = NumberingRules::default();

    for ((index, page), number) in pages.iter().enumerate().zip(page_numbers(&pages)) {
        let label = number.map(|n| rules.format(n)).unwrap_or_else(|| "-".to_string());
        println!("{index:>3}  {:<24} {:<10} {label}", page.id, page.template_key);
    }

    Ok(())
}
