//! Domain types for the Metrolink departure boards.
//!
//! Everything here is plain data plus the ordering primitives the board
//! builders rely on; none of it performs I/O.

mod overwrite;
mod slug;
mod stop;

pub use overwrite::OverwriteMap;
pub use slug::{InvalidSlug, Slug};
pub use stop::{Departure, StopBoard, StopIndexEntry};
