//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(about = "In-memory student-records manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with seed records (default: built-in demo data)
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,
}
