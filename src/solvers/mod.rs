mod per_start;
mod stack;

pub use per_start::*;
pub use stack::*;
