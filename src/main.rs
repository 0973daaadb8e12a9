use anyhow::{Context, Result};
use clap::Parser;
use labeled_fasta::input::{collect_inputs, Overrides};
use labeled_fasta::logger;
use labeled_fasta::report;
use labeled_fasta::run::{run, RunConfig};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "labeled-fasta")]
#[command(about = "Generate a random DNA sequence with an embedded label and save it as FASTA")]
struct Args {
    #[arg(short = 'l', long, allow_hyphen_values = true, help = "Sequence length (prompted if omitted)")]
    length: Option<String>,

    #[arg(short = 'i', long, help = "Sequence identifier, also the output file stem (prompted if omitted)")]
    id: Option<String>,

    #[arg(short = 'd', long, help = "Sequence description (prompted if omitted)")]
    description: Option<String>,

    #[arg(short = 'n', long, help = "Label to embed in the sequence (prompted if omitted)")]
    label: Option<String>,

    #[arg(short = 'o', long, default_value = ".", help = "Output directory")]
    out_dir: PathBuf,

    #[arg(short = 'w', long, default_value = "60", help = "FASTA line width")]
    line_width: usize,

    #[arg(short = 's', long, help = "Random seed for reproducible output")]
    seed: Option<u64>,

    #[arg(short = 'c', long, default_value = "false", help = "Compress output file with gzip")]
    compress: bool,

    #[arg(long, default_value = "false", help = "Compute statistics on a separately labelled copy of the sequence")]
    independent_stats_insertion: bool,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose output on stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(logger::level_for(args.verbose)).context("failed to install logger")?;

    let overrides = Overrides {
        length: args.length,
        id: args.id,
        description: args.description,
        label: args.label,
    };
    let stdin = io::stdin();
    let inputs = collect_inputs(overrides, &mut stdin.lock(), &mut io::stdout())?;

    let mut rng = match args.seed {
        Some(seed) => {
            debug!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let config = RunConfig {
        out_dir: args.out_dir,
        line_width: args.line_width,
        compress: args.compress,
        independent_stats_insertion: args.independent_stats_insertion,
    };
    let output = run(&inputs, &config, &mut rng)?;

    print!("{}", report::render(&output.path, &output.stats));
    Ok(())
}
