//! Fixed four-slot occupancy and admission classes.

mod allocator;
mod types;


pub use allocator::SlotAllocator;
pub use types::*;
