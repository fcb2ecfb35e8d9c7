//! Configuration types for rendering and cursor reads

use serde::{Deserialize, Serialize};

/// How a stream prefix is rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Number of elements shown
    pub preview_len: usize,
    /// Append `...` when the stream was not shown to its end
    pub mark_continuation: bool,
    /// Append `!` when the preview reached the end of the stream
    pub mark_empty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preview_len: 10,
            mark_continuation: false,
            mark_empty: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of elements shown
    pub fn preview_len(mut self, n: usize) -> Self {
        self.preview_len = n;
        self
    }

    pub fn mark_continuation(mut self, enabled: bool) -> Self {
        self.mark_continuation = enabled;
        self
    }

    pub fn mark_empty(mut self, enabled: bool) -> Self {
        self.mark_empty = enabled;
        self
    }
}

/// Cursor read configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Elements returned by each batch read
    pub batch_size: usize,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self { batch_size: 1 }
    }
}

impl CursorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }
}
