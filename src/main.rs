use block_spans::{generate_random_heights, SolverKind};
use clap::Parser;
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

#[derive(Clone, Copy, Debug, Serialize)]
struct Record {
    solver: SolverKind,
    n: usize,
    sigma: u32,
    span: usize,
    seconds: f64,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run one solver on a single random array.
    Run {
        #[clap(value_enum)]
        solver: SolverKind,
        /// Length of the generated array.
        #[clap(short, default_value_t = 100000)]
        n: usize,
        /// Heights are drawn from 0..sigma.
        #[clap(short, long, default_value_t = 4)]
        sigma: u32,
    },
    /// Sweep a grid of (n, sigma), cross-checking all solvers.
    Eval,
}

/// Evaluate span solvers on random block arrays.
#[derive(clap::Parser)]
struct Args {
    /// Seed for input generation.
    #[clap(long, default_value_t = 213456)]
    seed: u64,
    #[clap(subcommand)]
    command: Command,
}

fn run_solver(solver: SolverKind, blocks: &[u32], sigma: u32) -> Record {
    let start = Instant::now();
    let span = solver.build().max_span(blocks);
    Record {
        solver,
        n: blocks.len(),
        sigma,
        span,
        seconds: start.elapsed().as_secs_f64(),
    }
}

fn main() {
    let args = Args::parse();

    match args.command {
        Command::Run { solver, n, sigma } => {
            let blocks = generate_random_heights(n, sigma, args.seed);
            let record = run_solver(solver, &blocks, sigma);
            eprintln!(
                "{solver:?}: span {} in {:.3}s",
                record.span, record.seconds
            );
            println!("{}", serde_json::to_string(&record).unwrap());
        }
        Command::Eval => {
            // The per-start scan is quadratic on near-flat arrays, so the
            // grid stops at n=10000.
            let ns = [10usize, 100, 1000, 10000];
            let sigmas = [1u32, 2, 4, 16, 256];
            let configs = ns.iter().cartesian_product(sigmas).collect_vec();

            let results: Vec<Record> = configs
                .par_iter()
                .flat_map(|&(&n, sigma)| {
                    let blocks = generate_random_heights(n, sigma, args.seed);
                    let records =
                        SolverKind::all().map(|solver| run_solver(solver, &blocks, sigma));
                    assert!(
                        records.iter().map(|r| r.span).all_equal(),
                        "solvers disagree for n={n} sigma={sigma}"
                    );
                    for r in &records {
                        eprintln!(
                            "n={n} sigma={sigma} solver={:?} span={} t={:.3}",
                            r.solver, r.span, r.seconds
                        );
                    }
                    records.to_vec()
                })
                .collect();

            println!("{}", serde_json::to_string(&results).unwrap());
        }
    }
}
