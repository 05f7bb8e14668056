//! Command-line BLIF minimizer.

use clap::Parser;
use sop_minimizer::{blif, Error};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "sop-minimizer")]
#[command(about = "Two-level BLIF .names gate minimizer", long_about = None)]
struct Args {
    /// Input BLIF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print per-gate cube counts before and after minimization to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Print gate statistics only; do not write the minimized BLIF
    #[arg(long = "stats")]
    stats_only: bool,
}

fn run(args: Args) -> Result<(), Error> {
    let model = blif::parse_blif_file(&args.input)?;

    if args.summary || args.stats_only {
        for gate in model.gates() {
            eprintln!(
                "{}: {} cubes (input)",
                gate.output(),
                gate.cover().len()
            );
        }
    }

    let minimized = model.optimize_all();

    if args.summary || args.stats_only {
        for gate in minimized.gates() {
            eprintln!(
                "{}: {} cubes (output)",
                gate.output(),
                gate.cover().len()
            );
        }
    }

    if args.stats_only {
        return Ok(());
    }

    if let Some(path) = &args.output {
        blif::to_blif_file(&minimized, path)?;
    } else {
        let text = blif::to_blif_string(&minimized)?;
        print!("{text}");
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
