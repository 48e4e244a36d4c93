//! Lifeboat CLI Module
//!
//! Command-line interface for running the survival pipeline and
//! inspecting passenger datasets.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

use crate::dataset::reader::{read_csv, DatasetSummary};
use crate::dataset::schema::{AgeGroup, Gender, TicketClass};
use crate::dataset::split::SplitConfig;
use crate::pipeline::{self, PipelineConfig};

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn dim(s: &str) -> ColoredString {
    s.truecolor(100, 100, 100)
}
fn muted(s: &str) -> ColoredString {
    s.truecolor(140, 140, 140)
}
fn ok(s: &str) -> ColoredString {
    s.truecolor(100, 210, 120)
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "lifeboat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Titanic survival classification pipeline")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline: parse, split, train, evaluate
    Run {
        /// Input passenger CSV file
        #[arg(short, long)]
        data: PathBuf,

        /// Fraction of records assigned to training
        #[arg(long, default_value = "0.7")]
        train_fraction: f64,

        /// Seed for the probabilistic split
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Maximum decision tree depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Write the run report to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse and validate a dataset, print its distribution
    Inspect {
        /// Input passenger CSV file
        #[arg(short, long)]
        data: PathBuf,
    },
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_run(
    data: &PathBuf,
    train_fraction: f64,
    seed: u64,
    max_depth: Option<usize>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    section("Run");

    let config = PipelineConfig {
        split: SplitConfig::new(train_fraction, seed),
        max_depth,
        ..Default::default()
    };
    let report = pipeline::run(data, &config)?;

    println!("  {:<12} {}", muted("File"), data.display());
    println!("  {:<12} {}", muted("Records"), report.n_records);
    println!(
        "  {:<12} {} train / {} test {}",
        muted("Split"),
        report.n_train,
        report.n_test,
        dim(&format!("(seed {})", seed))
    );

    println!();
    println!(
        "  {:<24} {:>10} {:>10}",
        muted("Model"),
        muted("Accuracy"),
        muted("Time")
    );
    println!("  {}", dim(&"─".repeat(46)));

    for model in &report.models {
        println!(
            "  {:<24} {:>10.4} {:>9.3}s",
            model.evaluation.model, model.evaluation.accuracy, model.fit_time_secs
        );
    }

    println!("  {}", dim(&"─".repeat(46)));

    if let Some(best) = report.best_model() {
        println!();
        println!(
            "  {} {} {} {:.4}",
            ok("best"),
            best.evaluation.model.white().bold(),
            muted("accuracy:"),
            best.evaluation.accuracy
        );
    }

    if let Some(path) = output {
        std::fs::write(path, report.to_json()?)?;
        println!();
        println!("  {} report written to {}", ok("✓"), path.display());
    }

    println!();
    Ok(())
}

pub fn cmd_inspect(data: &PathBuf) -> anyhow::Result<()> {
    section("Inspect");

    let records = read_csv(data)?;
    let summary = DatasetSummary::from_records(&records);

    println!("  {:<12} {}", muted("File"), data.display());
    println!("  {:<12} {}", muted("Records"), summary.n_records);
    println!(
        "  {:<12} {} survived / {} perished {}",
        muted("Outcome"),
        summary.survived,
        summary.perished,
        dim(&format!("({:.1}% survival)", summary.survival_rate() * 100.0))
    );

    println!();
    println!("  {:<16} {:>8}", muted("Category"), muted("Count"));
    println!("  {}", dim(&"─".repeat(26)));

    let rows: [(&str, usize); 7] = [
        (TicketClass::First.as_str(), summary.class_counts[0]),
        (TicketClass::Second.as_str(), summary.class_counts[1]),
        (TicketClass::Third.as_str(), summary.class_counts[2]),
        (AgeGroup::Child.as_str(), summary.age_counts[0]),
        (AgeGroup::Adult.as_str(), summary.age_counts[1]),
        (Gender::Man.as_str(), summary.sex_counts[0]),
        (Gender::Woman.as_str(), summary.sex_counts[1]),
    ];
    for (label, count) in rows {
        println!("  {:<16} {:>8}", label, count);
    }

    println!();
    println!("  {} dataset is valid", ok("✓"));
    println!();
    Ok(())
}
