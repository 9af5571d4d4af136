/// A stack of (position, H) pairs with strictly increasing H from bottom to top.
/// Positions are pushed in scan order, so after a push the entry below the top
/// is the nearest earlier position with a strictly smaller value.
pub struct MonotoneStack<H: Ord> {
    s: Vec<(usize, H)>,
}

impl<H: Ord> MonotoneStack<H>
where
    H: Copy,
{
    /// Initialize a new stack.
    pub fn new() -> Self {
        Self { s: Vec::new() }
    }

    /// Push value `h` at position `i`.
    /// Entries with value `>= h` are removed first, so that the stack stays
    /// strictly increasing. Returns the position of the surviving top, i.e.
    /// the nearest previously pushed position with value `< h`.
    pub fn push(&mut self, i: usize, h: H) -> Option<usize> {
        while let Some(&top) = self.s.last() {
            if top.1 >= h {
                self.s.pop();
            } else {
                break;
            }
        }
        let nearest = self.s.last().map(|&(j, _)| j);
        self.s.push((i, h));
        nearest
    }
}
