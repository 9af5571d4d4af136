use std::iter::zip;

use crate::monotone_stack::MonotoneStack;
use crate::SpanSolver;

/// Linear-time equivalent of `PerStartScan`.
///
/// The span reachable from a start is exactly the maximal contiguous run of
/// positions at least as high as the start, so it is bounded on each side by
/// the nearest strictly smaller height. Both boundary arrays are computed
/// with a monotone stack in a single pass each.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotoneStackScan;

/// Leftmost reachable position for every start.
pub fn left_boundaries(blocks: &[u32]) -> Vec<usize> {
    let mut stack = MonotoneStack::new();
    blocks
        .iter()
        .enumerate()
        .map(|(i, &h)| stack.push(i, h).map_or(0, |j| j + 1))
        .collect()
}

/// Rightmost reachable position for every start.
pub fn right_boundaries(blocks: &[u32]) -> Vec<usize> {
    let n = blocks.len();
    let mut right = vec![0; n];
    let mut stack = MonotoneStack::new();
    for (i, &h) in blocks.iter().enumerate().rev() {
        right[i] = stack.push(i, h).map_or(n - 1, |j| j - 1);
    }
    right
}

impl SpanSolver for MonotoneStackScan {
    fn max_span(&self, blocks: &[u32]) -> usize {
        if blocks.len() <= 1 {
            return 0;
        }
        zip(left_boundaries(blocks), right_boundaries(blocks))
            .map(|(leftmost, rightmost)| rightmost - leftmost)
            .max()
            .unwrap()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{generate_random_heights, solvers::reach, PerStartScan};
    use itertools::Itertools;
    use std::iter::once;

    #[test]
    fn matches_per_start() {
        for sigma in [1, 2, 4, 16, 256] {
            for n in (0..100).chain(once(10000)) {
                let blocks = generate_random_heights(n, sigma, 213456 + n as u64);
                assert_eq!(
                    MonotoneStackScan.max_span(&blocks),
                    PerStartScan.max_span(&blocks),
                    "sigma={sigma}, n={n}"
                );
            }
        }
    }

    #[test]
    fn boundaries_match_reach() {
        for sigma in [2, 4, 16] {
            for n in 0..60 {
                let blocks = generate_random_heights(n, sigma, n as u64);
                let left = left_boundaries(&blocks);
                let right = right_boundaries(&blocks);
                for start in 0..n {
                    assert_eq!(
                        (left[start], right[start]),
                        reach(&blocks, start),
                        "sigma={sigma}, n={n}, start={start}"
                    );
                }
            }
        }
    }

    #[test]
    fn reversal_symmetry() {
        for n in 0..100 {
            let blocks = generate_random_heights(n, 8, n as u64);
            let rev = blocks.iter().rev().copied().collect_vec();
            assert_eq!(
                MonotoneStackScan.max_span(&blocks),
                MonotoneStackScan.max_span(&rev),
                "n={n}"
            );
        }
    }
}
