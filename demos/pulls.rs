use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::info;
use tripled::{Dist, DistConfig, render};

/// Pull the weighted machine a number of times and summarize the payouts.
#[derive(Parser, Debug)]
struct Args {
    /// Generator seed; 0 picks one from the clock.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 9)]
    lines: usize,
    #[arg(long, default_value_t = 1)]
    pulls: usize,
    #[arg(long, default_value_t = tripled::DEFAULT_RTP)]
    target_rtp: f64,
    /// Print every result, not just the summary.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    let args = Args::parse();

    let seed = if args.seed == 0 {
        SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64
    } else {
        args.seed
    };
    info!(seed, "seeding");

    let dist = Dist::build(&DistConfig {
        target_rtp: args.target_rtp,
        ..DistConfig::default()
    })?;
    let mut rng = Pcg64::seed_from_u64(seed);

    let (mut wins, mut won, mut bet) = (0usize, 0u64, 0u64);
    let mut hist: BTreeMap<u32, usize> = BTreeMap::new();
    for _ in 0..args.pulls {
        let res = dist.spin(&mut rng, args.lines)?;
        if args.verbose || args.pulls == 1 {
            println!("{}", render(&res));
        }
        won += u64::from(res.payout());
        bet += args.lines as u64;
        *hist.entry(res.payout()).or_default() += 1;
        if res.is_win() {
            wins += 1;
        }
    }

    for (payout, count) in hist.iter().rev() {
        println!("{payout:>4}: {count}");
    }
    println!(
        "win: {}/{} ({:0.2}%) won: {}/{} ({:0.2}%)",
        wins,
        args.pulls,
        100.0 * wins as f64 / args.pulls as f64,
        won,
        bet,
        100.0 * won as f64 / bet as f64,
    );
    Ok(())
}
