//! Chainkit interactive driver

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use chainkit::config::Config;
use chainkit::infrastructure::hash::HashAlgorithm;
use chainkit::shell::{self, Structure};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chainkit")]
#[command(about = "Drive a hash table, list, stack, queue or trie from standard input")]
struct Args {
    /// Structure to drive
    #[arg(value_enum, default_value = "table")]
    structure: Structure,

    /// JSON configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of hash table buckets
    #[arg(short = 's', long)]
    table_size: Option<usize>,

    /// Bucket hash algorithm (djb2, fnv1a, xxh64, crc32)
    #[arg(long)]
    hash: Option<HashAlgorithm>,

    /// Longest accepted key or word
    #[arg(long)]
    max_key_len: Option<usize>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let base = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Ok(base.with_overrides(args.table_size, args.hash, args.max_key_len)?)
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("chainkit: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut driver = match args.structure.driver(&config) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("chainkit: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    match shell::run(driver.as_mut(), stdin.lock(), &mut stdout, interactive) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("chainkit: {}", err);
            ExitCode::FAILURE
        }
    }
}
