use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use bench::MonotonicClock;
use clap::{Parser, Subcommand};
use engines::SortRequest;
use sequence_source::{parse_numbers, random_below, random_sequence, rng_from_seed};
use shared::domain::{Direction, EngineKind};
use tracing_subscriber::EnvFilter;

mod actions;
mod config;
mod menu;
mod render;

use config::{load_settings, Settings, DEFAULT_CONFIG_PATH};
use menu::Session;
use render::LEARN_TEXT;

#[derive(Parser, Debug)]
#[command(name = "sorter", about = "Number sorter and sorting algorithm visualizer")]
struct Cli {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_filter: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (the default).
    Menu,
    Sort {
        /// bubble, selection, insertion or 1-3. Anything else uses bubble sort.
        #[arg(long, default_value = "bubble")]
        engine: String,
        #[arg(long)]
        descending: bool,
        #[arg(long, conflicts_with = "no_trace")]
        trace: bool,
        #[arg(long)]
        no_trace: bool,
        #[arg(long)]
        json: bool,
        /// Generate this many random numbers instead of reading them.
        #[arg(long, conflicts_with = "numbers")]
        random: Option<usize>,
        #[arg(long, requires = "random")]
        max: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
    /// Sort the odd numbers below ten in descending order, step by step.
    Demo,
    Compare {
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        bound: Option<i32>,
        #[arg(long)]
        descending: bool,
        #[arg(long)]
        json: bool,
    },
    Learn,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter);

    let settings = load_settings(&cli.config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            Session::new(stdin.lock(), &mut out, settings).run()?;
        }
        Command::Sort {
            engine,
            descending,
            trace,
            no_trace,
            json,
            random,
            max,
            numbers,
        } => {
            let values = match random {
                Some(count) => {
                    let mut rng = rng_from_seed(settings.seed);
                    random_sequence(&mut rng, count, max.unwrap_or(settings.random_max))
                        .context("could not generate numbers")?
                }
                None => parse_numbers(&numbers.join(" ")).context("could not read numbers")?,
            };

            let (engine, fell_back) = EngineKind::from_selector_or_default(&engine);
            if fell_back {
                writeln!(out, "Invalid choice. Using bubble sort.")?;
            }
            let request = SortRequest {
                engine,
                direction: direction(descending),
                trace: trace || (settings.trace_default && !no_trace),
            };

            if json {
                let report = actions::sort_report(request, values);
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                writeln!(out, "Your numbers: {}\n", render::format_sequence(&values))?;
                actions::sort_and_print(&mut out, request, values)?;
            }
        }
        Command::Demo => {
            actions::run_demo(&mut out)?;
        }
        Command::Compare {
            count,
            bound,
            descending,
            json,
        } => {
            let input = comparison_input(&settings, count, bound)?;
            let clock = MonotonicClock::new();
            if json {
                let report = actions::compare_report(&clock, &input, direction(descending));
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                actions::compare_and_print(&mut out, &clock, &input, direction(descending))?;
            }
        }
        Command::Learn => {
            writeln!(out, "{LEARN_TEXT}")?;
        }
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn direction(descending: bool) -> Direction {
    if descending {
        Direction::Descending
    } else {
        Direction::Ascending
    }
}

fn comparison_input(
    settings: &Settings,
    count: Option<usize>,
    bound: Option<i32>,
) -> Result<Vec<i32>> {
    let mut rng = rng_from_seed(settings.seed);
    random_below(
        &mut rng,
        count.unwrap_or(settings.compare_count),
        bound.unwrap_or(settings.compare_bound),
    )
    .context("could not generate comparison input")
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
