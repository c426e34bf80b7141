use std::io::{self, Read};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use two_part_sum::{parse_numbers, Strategy, SumReport};

/// Sum integers by splitting them into two halves summed concurrently.
#[derive(Parser, Debug)]
#[command(name = "two-part-sum", version)]
struct Args {
    /// Worker flavour: threads, channels or tasks.
    #[arg(long, short, env = "TWO_PART_SUM_STRATEGY", default_value = "threads")]
    strategy: Strategy,

    /// Print a JSON report instead of the bare total.
    #[arg(long)]
    json: bool,

    /// Integers to sum. Read from stdin when none are given.
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<i64>,
}

fn read_stdin() -> anyhow::Result<Vec<i64>> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    parse_numbers(&text).context("Malformed input")
}

fn render(json: bool, strategy: Strategy, input: &[i64], total: i64) -> anyhow::Result<String> {
    if json {
        let report = SumReport::new(strategy, input, total);
        Ok(serde_json::to_string(&report)?)
    } else {
        Ok(total.to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let numbers = if args.numbers.is_empty() {
        read_stdin()?
    } else {
        args.numbers
    };
    info!(strategy = %args.strategy, count = numbers.len(), "summing");

    let input: Arc<[i64]> = Arc::from(numbers);
    let total = args
        .strategy
        .run(Arc::clone(&input))
        .await
        .with_context(|| format!("Sum with {} failed", args.strategy))?;

    println!("{}", render(args.json, args.strategy, &input, total)?);
    Ok(())
}
