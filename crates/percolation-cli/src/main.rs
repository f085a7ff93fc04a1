mod stats;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stats::PercolationStats;

/// Estimate the percolation threshold of an n-by-n grid by Monte Carlo
/// simulation.
#[derive(Debug, Parser)]
#[command(name = "percolation", version)]
struct Args {
    /// Side length of the grid
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    n: u64,

    /// Number of independent trials
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// Seed for the random number generator (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let n = usize::try_from(args.n)?;
    let trials = usize::try_from(args.trials)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stats = PercolationStats::run(n, trials, &mut rng)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats.report(args.seed))?);
    } else {
        println!("mean\t= {}", stats.mean());
        println!("stddev\t= {}", stats.stddev());
        println!(
            "95% confidence interval\t= [{}, {}]",
            stats.confidence_lo(),
            stats.confidence_hi()
        );
    }
    Ok(())
}
