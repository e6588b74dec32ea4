//! Game rules for a single round.
//!
//! Pure functions over a [`Board`](crate::Board). The round controller
//! decides the order they run in: win first, draw only when nobody won,
//! finalization only after a win.

pub mod draw;
pub mod finalize;
pub mod win;

pub use draw::is_draw;
pub use finalize::finalize;
pub use win::{LINES, has_won, winning_lines};
