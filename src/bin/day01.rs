use std::path::PathBuf;

use calories::inventory::Inventory;
use calories::Error;
use calories::parser::{read_lines_from_path, read_lines_from_stdin};
use clap::Parser;
use env_logger::Env;
use log::info;

/// Adds up the calories carried by the best-stocked elves.
#[derive(Parser, Debug)]
#[command(name = "day01")]
struct Args {
    /// How many elves to add up
    #[arg(short = 'n', long, default_value_t = 3)]
    top: usize,

    /// Read the inventory from this file instead of stdin
    input: Option<PathBuf>,
}

fn report(n: usize, total: f64) -> String {
    format!("Total Calories in top {} elves : {:?}", n, total)
}

fn run(top: usize, lines: &[String]) -> Result<String, Error> {
    let inventory = Inventory::from_lines(lines)?;

    let (elf, most) = inventory.richest_elf()?;
    info!(
        "{} elves, elf {} carries the most: {:?}",
        inventory.len(),
        elf,
        most
    );

    let total = inventory.top_n_total(top)?;
    Ok(report(top, total))
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let lines = match &args.input {
        Some(path) => read_lines_from_path(path),
        None => read_lines_from_stdin(),
    }
    .map_err(Error::Io)?;

    println!("{}", run(args.top, &lines)?);

    Ok(())
}
