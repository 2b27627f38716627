// Chunk: docs/chunks/buffer_options - Serializable buffer options

use serde::{Deserialize, Serialize};

/// Per-buffer editing options.
///
/// Options are passed in explicitly when a buffer or session is built;
/// nothing here is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferOptions {
    /// Distance between tab stops in cells. Zero behaves like 1.
    pub tab_width: usize,
    /// When true the Tab command inserts spaces up to the next tab stop.
    pub expand_tabs: bool,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            expand_tabs: false,
        }
    }
}
