//! Terminal geometry, read live on every layout computation.

use std::sync::atomic::{AtomicU16, Ordering};

/// Size of the output device in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    /// Column count.
    pub columns: u16,
    /// Row count.
    pub rows: u16,
}

impl TerminalSize {
    /// Size assumed when the output is not a terminal.
    pub const FALLBACK: Self = Self::new(80, 24);

    /// Create a new size.
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

/// Source of the current terminal size.
///
/// Implementations must not cache: a resize between two renders has to be
/// visible to the second one.
pub trait Geometry: Send + Sync {
    /// Current size of the output device.
    fn size(&self) -> TerminalSize;
}

/// Geometry of the process's controlling terminal, via crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveGeometry;

impl Geometry for LiveGeometry {
    fn size(&self) -> TerminalSize {
        crossterm::terminal::size()
            .map_or(TerminalSize::FALLBACK, |(columns, rows)| {
                TerminalSize::new(columns, rows)
            })
    }
}

/// Geometry with an explicitly set size.
///
/// The size can be changed through a shared reference to simulate a resize
/// while a live region is running.
#[derive(Debug)]
pub struct FixedGeometry {
    columns: AtomicU16,
    rows: AtomicU16,
}

impl FixedGeometry {
    /// Create a geometry reporting `columns` x `rows`.
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns: AtomicU16::new(columns),
            rows: AtomicU16::new(rows),
        }
    }

    /// Change the reported size.
    pub fn resize(&self, columns: u16, rows: u16) {
        self.columns.store(columns, Ordering::Relaxed);
        self.rows.store(rows, Ordering::Relaxed);
    }
}

impl Default for FixedGeometry {
    fn default() -> Self {
        Self::new(TerminalSize::FALLBACK.columns, TerminalSize::FALLBACK.rows)
    }
}

impl Geometry for FixedGeometry {
    fn size(&self) -> TerminalSize {
        TerminalSize::new(
            self.columns.load(Ordering::Relaxed),
            self.rows.load(Ordering::Relaxed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_geometry_resize() {
        let geometry = FixedGeometry::new(80, 24);
        assert_eq!(geometry.size(), TerminalSize::new(80, 24));

        geometry.resize(40, 10);
        assert_eq!(geometry.size(), TerminalSize::new(40, 10));
    }
}
