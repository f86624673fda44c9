use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

mod lighthouse;
mod models;
mod services;
mod utils;

use models::{Mode, ModeScores};
use services::{print_results, render_markdown};
use utils::{audit_log, write_report};

#[derive(Debug, Parser)]
#[command(
    name = "lightmark",
    about = "Audit site modes with Lighthouse and write a markdown score report"
)]
struct Cli {
    /// Base URL of the site under audit
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    /// Where the markdown report is written
    #[arg(long, default_value = "../docs/LIGHTHOUSE_AUDIT_REPORT.md")]
    out: PathBuf,

    /// Minimum passing score for a category
    #[arg(long, default_value_t = 90)]
    threshold: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    println!("Extracting Lighthouse scores...\n");

    // The landing report is expected on disk from an earlier audit.
    let landing = extract_run(Mode::Landing).await?;
    println!("✓ {} scores extracted", Mode::Landing.label());

    for mode in [Mode::Professional, Mode::Retro] {
        println!("\nRunning {} audit...", mode.label());
        let _ = audit_log(&format!("running {} audit", mode.label()));
        lighthouse::run_lighthouse(mode, &cli.base_url);
    }

    let professional = extract_run(Mode::Professional).await?;
    println!("✓ {} scores extracted", Mode::Professional.label());

    let retro = extract_run(Mode::Retro).await?;
    println!("✓ {} scores extracted", Mode::Retro.label());

    let runs = [landing, professional, retro];
    print_results(&runs, cli.threshold);

    let report = render_markdown(&runs, cli.threshold);
    write_report(&cli.out, &report).await?;
    let _ = audit_log(&format!("report written to {}", cli.out.display()));

    println!("\n✓ Detailed report saved to: {}", cli.out.display());
    println!("\nHTML reports can be viewed in browser:");
    for mode in Mode::ALL {
        println!("  - {}", mode.html_report());
    }

    Ok(())
}

async fn extract_run(mode: Mode) -> Result<ModeScores> {
    let scores = lighthouse::extract_scores(mode.json_path())
        .await
        .with_context(|| format!("no usable report for {}", mode.label()))?;
    Ok(ModeScores { mode, scores })
}
