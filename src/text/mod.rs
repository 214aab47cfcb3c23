//! Text module: ANSI-aware measurement and padding.
//!
//! Everything that aligns text against what the terminal actually shows goes
//! through here rather than `str::len`.

mod metrics;

pub use metrics::{pad_end, rows_for, strip, visible_width};
