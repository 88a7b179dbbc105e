use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use page_snapshot::{
    analyze_page, display_path, CompletedTest, FetchDriver, Outcome, PageAnalysis, PageSnapshot,
};

/// Fetch a page and save its HTML the way a failing end-to-end test would
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL of the page to capture
    url: String,

    /// Test case name the snapshot is filed under
    test_name: String,

    /// File the snapshot as a failure (adds the failures_ prefix)
    #[arg(long)]
    failed: bool,

    /// Project root the tmp/html directory lives under
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Write a JSON record of the capture next to the snapshot
    #[arg(long)]
    meta: bool,
}

#[derive(Serialize, Debug)]
struct CaptureRecord {
    test_name: String,
    url: String,
    outcome: Outcome,
    saved_to: String,
    fetched_at: String,
    #[serde(flatten)]
    analysis: PageAnalysis,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = if cli.failed {
        Outcome::Failed
    } else {
        Outcome::Passed
    };
    let report = CompletedTest::new(cli.test_name.clone(), outcome);

    println!("Fetching HTML from {}...", cli.url);

    let driver = FetchDriver::new();
    driver.visit(&cli.url)?;

    let url = driver.current_url().unwrap_or_else(|| cli.url.clone());
    let html = driver.page_source().context("No page after fetch")?;
    info!("captured {} bytes from {}", html.len(), url);

    let snapshot = PageSnapshot::new(&driver, &report, &cli.root);
    let path = snapshot.save_page()?;

    // Quick structural checks so an empty or error page stands out right away
    let analysis = analyze_page(&html);
    println!("Page analysis:");
    println!(
        "  - Title: {}",
        analysis.title.as_deref().unwrap_or("(none)")
    );
    println!("  - Visible text: {} characters", analysis.body_text_len);
    if analysis.looks_blank() {
        println!("⚠️ Capture looks blank, the page may not have loaded");
    }

    if cli.meta {
        let record = CaptureRecord {
            test_name: cli.test_name.clone(),
            url,
            outcome,
            saved_to: display_path(&path),
            fetched_at: Utc::now().to_rfc3339(),
            analysis,
        };

        let json = serde_json::to_string_pretty(&record)
            .context("Failed to serialize capture record")?;

        let meta_path = path.with_extension("json");
        fs::write(&meta_path, json).context("Failed to write capture record")?;

        println!("Capture record saved to {}", meta_path.display());
    }

    Ok(())
}
