//! CLI for ent-core: pseudorandom sequence test program.

mod input;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ent_core::{AnalysisOptions, FrequencyTable, analyze_with_table};

use input::Input;

#[derive(Parser, Debug)]
#[command(name = "ent")]
#[command(about = "Entropy, chi-square, mean, Monte Carlo π and serial correlation of byte streams")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Files to analyze; standard input when omitted or "-"
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Terse output in CSV format
    #[arg(short, long)]
    terse: bool,

    /// Print occurrence counts of each byte value
    #[arg(short, long)]
    counts: bool,

    /// Write the report as JSON
    #[arg(short, long, conflicts_with = "terse")]
    json: bool,

    /// Compute the independent statistics concurrently
    #[arg(short, long)]
    parallel: bool,

    /// Verbose logging (overrides RUST_LOG)
    #[arg(short, long)]
    debug: bool,

    /// Print version and exit
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if cli.version {
        println!("ent {}", ent_core::VERSION);
        return;
    }

    let options = AnalysisOptions {
        parallel: cli.parallel,
    };
    let inputs = Input::from_args(&cli.files);
    let many = inputs.len() > 1;
    let mut failed = false;

    for (i, input) in inputs.iter().enumerate() {
        let heading = many.then_some(Heading { first: i == 0 });
        if let Err(e) = run(&cli, input, options, heading) {
            eprintln!("ent: {e:#}");
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Per-input heading, printed when several inputs are analyzed.
#[derive(Debug, Clone, Copy)]
struct Heading {
    first: bool,
}

/// Analyze one input and print it in the selected format.
fn run(cli: &Cli, input: &Input, options: AnalysisOptions, heading: Option<Heading>) -> Result<()> {
    let name = input.name();
    let data = input.read()?;
    log::debug!("read {} bytes from {name}", data.len());

    let table = FrequencyTable::from_bytes(&data);
    let report = analyze_with_table(&data, &table, options)
        .with_context(|| format!("cannot analyze '{name}'"))?;

    if cli.json {
        let counts = cli.counts.then_some(&table);
        println!("{}", output::report_json(&name, &report, counts)?);
    } else if cli.terse {
        if cli.counts {
            print!("{}", output::counts_terse(&table));
        }
        print!("{}", output::report_terse(&report));
    } else {
        if let Some(heading) = heading {
            if !heading.first {
                println!();
            }
            println!("File \"{name}\"");
        }
        if cli.counts {
            println!("{}", output::counts_text(&table));
        }
        print!("{}", output::report_text(&report));
    }
    Ok(())
}
