//! Surface: everything a live region needs besides the writer.

use super::lifecycle::Lifecycle;
use crate::terminal::{Geometry, LiveGeometry, TerminalSize};
use crate::theme::Theme;
use std::sync::Arc;

/// Theme, geometry source and lifecycle shared by live regions.
#[derive(Clone)]
pub struct Surface {
    /// Glyphs and painter.
    pub theme: Theme,
    /// Live terminal size.
    pub geometry: Arc<dyn Geometry>,
    /// Exit hooks and the live-region slot.
    pub lifecycle: Arc<Lifecycle>,
}

impl Surface {
    /// Create a surface from explicit parts.
    pub fn new(theme: Theme, geometry: Arc<dyn Geometry>, lifecycle: Arc<Lifecycle>) -> Self {
        Self {
            theme,
            geometry,
            lifecycle,
        }
    }

    /// Surface for the current process: detected theme, the controlling
    /// terminal's size and the global lifecycle.
    pub fn detect() -> Self {
        Self::new(Theme::detect(), Arc::new(LiveGeometry), Lifecycle::global())
    }

    /// Current terminal size.
    #[inline]
    pub fn size(&self) -> TerminalSize {
        self.geometry.size()
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("theme", &self.theme)
            .field("size", &self.size())
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}
