use crate::SpanSolver;

/// Walk direction from a start index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The per-start double scan: for every start, walk outward in both
/// directions while the adjacent block is at least as high as the start.
/// O(n) per start, O(n^2) total.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerStartScan;

/// Furthest position reachable from `start` walking in direction `dir`.
/// The walk is local: each step only inspects the immediately adjacent block
/// and compares it against the height at `start`.
pub fn furthest(blocks: &[u32], start: usize, dir: Direction) -> usize {
    let mut pos = start;
    loop {
        let next = match dir {
            Direction::Left if pos > 0 => pos - 1,
            Direction::Right if pos + 1 < blocks.len() => pos + 1,
            _ => break,
        };
        if blocks[next] < blocks[start] {
            break;
        }
        pos = next;
    }
    pos
}

/// The `(leftmost, rightmost)` pair reachable from `start`.
pub fn reach(blocks: &[u32], start: usize) -> (usize, usize) {
    (
        furthest(blocks, start, Direction::Left),
        furthest(blocks, start, Direction::Right),
    )
}

impl SpanSolver for PerStartScan {
    fn max_span(&self, blocks: &[u32]) -> usize {
        if blocks.len() <= 1 {
            return 0;
        }
        (0..blocks.len())
            .map(|start| {
                let (leftmost, rightmost) = reach(blocks, start);
                rightmost - leftmost
            })
            .max()
            .unwrap()
    }
}
