mod policy;
mod reports;
mod simulation;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use nightshift_game::Difficulty;
use policy::PlayerPolicy;
use reports::{json_report, print_console_report, summarize};
use simulation::{ShiftConfig, ShiftRecord, run_shift};

#[derive(Debug, Parser)]
#[command(name = "nightshift-tester", version = "0.1.0")]
#[command(about = "Automated QA batch runner for the Nightshift simulation core")]
struct Args {
    /// Difficulties to run (comma-separated)
    #[arg(long, default_value = "easy,medium,hard,nightmare")]
    difficulties: String,

    /// Scripted player policies to run
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = vec![PlayerPolicy::Idle, PlayerPolicy::Reactive])]
    policies: Vec<PlayerPolicy>,

    /// First seed of the sweep
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Shifts per (difficulty, policy) batch
    #[arg(long, default_value_t = 25)]
    iterations: u64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_difficulties(spec: &str) -> Result<Vec<Difficulty>> {
    spec.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            Difficulty::from_str(part)
                .map_err(|()| anyhow::anyhow!("unknown difficulty '{part}'"))
        })
        .collect()
}

async fn run_batches(args: &Args, difficulties: &[Difficulty]) -> Result<Vec<ShiftRecord>> {
    let mut handles = Vec::new();
    for &difficulty in difficulties {
        for &policy in &args.policies {
            for offset in 0..args.iterations {
                let config = ShiftConfig {
                    difficulty,
                    policy,
                    seed: args.seed.wrapping_add(offset),
                };
                handles.push(tokio::task::spawn_blocking(move || run_shift(config)));
            }
        }
    }

    let mut records = Vec::with_capacity(handles.len());
    for handle in handles {
        records.push(handle.await.context("simulation task panicked")??);
    }
    Ok(records)
}

fn write_output(args: &Args, body: &str) -> Result<()> {
    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("creating report file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(body.as_bytes())?;
        writer.flush()?;
        println!("Report written to {}", path.display().to_string().green());
    } else {
        println!("{body}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let difficulties = parse_difficulties(&args.difficulties)?;

    println!(
        "{} {} difficulties x {} policies x {} seeds",
        "Running".bright_cyan().bold(),
        difficulties.len(),
        args.policies.len(),
        args.iterations
    );

    let started = Instant::now();
    let records = run_batches(&args, &difficulties).await?;
    let summaries = summarize(&records);

    match args.report.as_str() {
        "json" => write_output(&args, &json_report(&summaries, &records)?)?,
        _ => print_console_report(&summaries, started.elapsed()),
    }

    Ok(())
}
