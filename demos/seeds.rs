use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tripled::{Dist, DistConfig, REEL_LEN, Stops, Window};

/// Find generator seeds whose first weighted nine-line spin lands on the
/// given stops.
#[derive(Parser, Debug)]
struct Args {
    /// Stops as `a,b,c`.
    #[arg(long, default_value = "21,21,21", value_parser = parse_stops)]
    pos: Stops,
    /// Seeds to try.
    #[arg(short, default_value_t = 2_000_000)]
    n: u64,
    /// Stop after this many matches.
    #[arg(long, default_value_t = 1)]
    count: usize,
}

fn parse_stops(s: &str) -> Result<Stops, String> {
    let parts: Vec<&str> = s.splitn(3, ',').collect();
    let [a, b, c] = parts.as_slice() else {
        return Err(format!("invalid positions {s:?}"));
    };
    let mut stops = [0; 3];
    for (stop, v) in stops.iter_mut().zip([a, b, c]) {
        let j: usize = v
            .trim()
            .parse()
            .map_err(|e| format!("invalid position {v:?}: {e}"))?;
        if j >= REEL_LEN {
            return Err(format!("invalid position {v:?}"));
        }
        *stop = j;
    }
    Ok(stops)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    let args = Args::parse();
    let dist = Dist::build(&DistConfig::default())?;

    let grid = Window::new(&args.pos)
        .to_string()
        .lines()
        .map(|l| format!("{:13}{l}", ""))
        .collect::<Vec<_>>()
        .join("\n");

    let mut found = 0;
    for seed in 0..args.n {
        if found == args.count {
            break;
        }
        let mut rng = Pcg64::seed_from_u64(seed);
        let res = dist.spin(&mut rng, 9)?;
        if res.stops() == args.pos {
            found += 1;
            println!("{found:2}: {:?}: {seed:10}", res.stops());
            println!("{grid}");
        }
    }
    Ok(())
}
