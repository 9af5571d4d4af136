pub mod monotone_stack;
pub mod solvers;

use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaChaRng,
};
use serde::{Deserialize, Serialize};

pub use solvers::{MonotoneStackScan, PerStartScan};

/// Computes the widest contiguous span of block indices reachable from a
/// single start index. From a start one may repeatedly step onto an adjacent
/// block whose height is at least the height at the start.
pub trait SpanSolver {
    /// The maximum of `rightmost(start) - leftmost(start)` over all starts.
    /// Returns 0 when `blocks` has fewer than two elements.
    fn max_span(&self, blocks: &[u32]) -> usize;
}

/// The widest reachable span for `blocks`.
///
/// Uses the linear-time solver; equivalent to scanning outward from every
/// start (see `PerStartScan`), which the tests check exhaustively.
pub fn solution(blocks: &[u32]) -> usize {
    MonotoneStackScan.max_span(blocks)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
pub enum SolverKind {
    PerStart,
    MonotoneStack,
}

impl SolverKind {
    pub fn build(&self) -> Box<dyn SpanSolver> {
        match self {
            SolverKind::PerStart => Box::new(PerStartScan),
            SolverKind::MonotoneStack => Box::new(MonotoneStackScan),
        }
    }

    pub fn all() -> [SolverKind; 2] {
        [SolverKind::PerStart, SolverKind::MonotoneStack]
    }
}

/// Generate a random array of block heights, each below `sigma`.
pub fn generate_random_heights(n: usize, sigma: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u32() % sigma).collect()
}
