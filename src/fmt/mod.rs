//! Line rendering: the timestamp/source header and the println-style joining of
//! unformatted arguments.

mod header;
mod joined;

pub use header::Header;
pub use joined::Joined;

use crate::level::Level;

/// `[LEVEL] ` including the trailing space.
#[must_use]
pub fn tag(level: Level) -> String {
    format!("[{}] ", level.label())
}
