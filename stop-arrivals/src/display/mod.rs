//! Console output.
//!
//! Turns selected arrivals into an aligned text table with display-only
//! normalisation (title-cased directions, wrapped clock times).

mod board;
mod table;
mod text;

pub use board::{BOARD_HEADERS, NO_ARRIVALS_NOTICE, arrivals_table};
pub use table::Table;
pub use text::title_case;
