//! Command-line driver: generate a day's orders, optimize and export them.
#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_dispatch::dispatch::Dispatcher;
use u_dispatch::evaluation::RouteSummary;
use u_dispatch::export::export_csv;
use u_dispatch::orders::GeneratorConfig;

/// Delivery route generator and optimizer.
#[derive(Debug, Parser)]
#[command(name = "u-dispatch", version, about)]
struct Cli {
    /// Seed for reproducible orders.
    #[arg(long)]
    seed: Option<u64>,
    /// Exact number of stops to generate (default: random 70 to 250).
    #[arg(long)]
    stops: Option<usize>,
    /// Coordinate grid size.
    #[arg(long, default_value_t = 1000)]
    grid_size: i32,
    /// Tracking numbers to add after generation.
    #[arg(long = "add", value_name = "TRACKING")]
    add: Vec<String>,
    /// Tracking numbers to delete after generation.
    #[arg(long = "delete", value_name = "TRACKING")]
    delete: Vec<String>,
    /// Run nearest-neighbor optimization and print the saving.
    #[arg(long)]
    optimize: bool,
    /// Print every stop in visiting order.
    #[arg(long)]
    list: bool,
    /// Write the final route as CSV.
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default().with_grid_size(self.grid_size);
        match self.stops {
            Some(n) => config.with_stops(n),
            None => config,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("u-dispatch: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> u_dispatch::Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut dispatcher = Dispatcher::new(cli.config())?;

    let route = dispatcher.generate(&mut rng);
    println!("Generated {} delivery orders.", route.len());

    if cli.optimize {
        let report = dispatcher.optimize()?;
        println!("{report}");
    }

    for tracking in &cli.add {
        let stop = dispatcher.add_stop(tracking, &mut rng)?;
        println!("Added {stop}; route re-optimized.");
    }

    for tracking in &cli.delete {
        match dispatcher.find(tracking)? {
            Some(stop) => println!("Found {stop}"),
            None => {
                println!("Package {} was not found.", tracking.trim());
                continue;
            }
        }
        if dispatcher.delete(tracking)? {
            println!("Deleted {}; route re-optimized.", tracking.trim());
        }
    }

    if cli.list {
        for stop in dispatcher.require_route()? {
            println!("{stop}");
        }
    }
    println!("{}", RouteSummary::of(dispatcher.route()));

    if let Some(path) = &cli.csv {
        export_csv(dispatcher.route(), path)?;
        println!("Exported to {}", path.display());
    }
    Ok(())
}
