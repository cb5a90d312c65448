use campus::application::build_registry;
use campus::cli::{shell, write_overview, Cli};
use campus::error::CampusError;
use clap::Parser;
use std::io;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), CampusError> {
    let mut registry = build_registry(cli.seed.as_deref())?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    write_overview(&registry, &mut output)?;

    let stdin = io::stdin();
    shell::run(&mut registry, stdin.lock(), &mut output)?;

    Ok(())
}
