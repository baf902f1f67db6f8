//! Stop index and stop board builders.
//!
//! Each builder issues exactly one gateway query and then transforms the
//! rows in memory. Nothing is cached between calls, so concurrent calls
//! share no state.

mod error;
mod index;
mod listing;
mod stop;

pub use error::BoardError;
pub use index::{build_stop_index, stop_index_from_rows};
pub use listing::{resolve_slug, sorted_alphabetically};
pub use stop::{build_stop_board, stop_board_from_rows};
