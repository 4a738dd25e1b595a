//! Rendering targets for the recipe panel.
//!
//! The panel never looks its target up by itself; the host hands it a
//! [`ViewerSurface`] and keeps ownership of whatever sits behind it.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Element id of the viewer region in the recipe pages.
pub const VIEWER_ID: &str = "recipe-viewer";

/// A single region whose content is replaced wholesale on every render.
pub trait ViewerSurface: Send + Sync + 'static {
    /// Identifier of the region, used in log output.
    fn id(&self) -> &str;

    /// Overwrite the region with `content`. Nothing of the previous content
    /// survives.
    fn replace_content(&self, content: &str);
}

/// In-memory surface. Clones share the same content.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    id: String,
    content: Arc<Mutex<String>>,
    writes: Arc<Mutex<usize>>,
}

impl MemorySurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Arc::new(Mutex::new(String::new())),
            writes: Arc::new(Mutex::new(0)),
        }
    }

    /// Current content of the region.
    pub fn content(&self) -> String {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times the region has been overwritten.
    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new(VIEWER_ID)
    }
}

impl ViewerSurface for MemorySurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&self, content: &str) {
        let mut current = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        current.clear();
        current.push_str(content);
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }
}

/// Writes each render to stdout, framed by the region id.
#[derive(Debug)]
pub struct TerminalSurface {
    id: String,
}

impl TerminalSurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl ViewerSurface for TerminalSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&self, content: &str) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        // Broken pipes are not the panel's concern.
        let _ = writeln!(out, "--- #{} ---\n{}", self.id, content);
        let _ = out.flush();
    }
}
