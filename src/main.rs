use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::prelude::*;

use intbst::{BuildResult, Key, Tree};

/// Builds a balanced tree from sorted keys, adds a few more, then shows lookups and a range
/// query.
#[derive(Parser, Debug)]
#[command(name = "bst-demo", version)]
struct Cli {
    /// Sorted, distinct keys to build the initial tree from
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [1, 4, 5, 10, 12, 17, 19, 21, 29, 33, 37]
    )]
    keys: Vec<Key>,

    /// Keys to add after construction
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [3, 18, 31]
    )]
    add: Vec<Key>,

    /// Look up every key in 0..PROBE
    #[arg(long, default_value_t = 50)]
    probe: Key,

    /// Lower bound of the range query
    #[arg(long, default_value_t = 11, allow_negative_numbers = true)]
    min: Key,

    /// Upper bound of the range query
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    max: Key,

    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    debug: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.debug);
    debug!(?cli, "parsed arguments");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> BuildResult<()> {
    let mut tree = Tree::try_from_sorted(&cli.keys)?;
    info!(len = tree.len(), height = tree.height(), "built tree");
    println!("The tree constructed from array:");
    println!("{}", tree);

    for &key in &cli.add {
        if tree.add(key).is_none() {
            info!(key, "key already present, tree unchanged");
        }
    }
    info!(len = tree.len(), height = tree.height(), "added keys");
    println!("The same tree after adding some elements:");
    println!("{}", tree);

    let found: Vec<String> = (0..cli.probe)
        .filter(|&key| tree.contains(key).is_some())
        .map(|key| key.to_string())
        .collect();
    println!("Keys found among 0..{}:", cli.probe);
    println!("{}", found.join(" "));

    let mut in_range = Vec::new();
    tree.range_search(cli.min, cli.max, &mut in_range);
    println!("Keys in [{}, {}]:", cli.min, cli.max);
    println!("{:?}", in_range);

    Ok(())
}

/// Logs to stderr. `RUST_LOG` wins over the `-d` count when it is set.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();

    debug!(%level, "logging initialized");
}
