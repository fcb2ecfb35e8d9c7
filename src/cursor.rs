//! Stateful batch reader over a stream

use crate::stream::{self, Stream};
use crate::stream_configuration::CursorConfig;

/// Reads a stream in fixed-size batches, remembering its position.
///
/// Already-read elements stay memoized in the underlying stream; the cursor
/// only moves its own handle forward.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    stream: Stream<T>,
    config: CursorConfig,
}

impl<T: Clone> Cursor<T> {
    pub fn new(stream: Stream<T>) -> Self {
        Self::with_config(stream, CursorConfig::default())
    }

    pub fn with_config(stream: Stream<T>, config: CursorConfig) -> Self {
        Self { stream, config }
    }

    /// Set the batch size used by [`next_batch`](Self::next_batch).
    pub fn take(&mut self, n: usize) -> &mut Self {
        self.config.batch_size = n;
        self
    }

    /// Move past the next `n` elements without returning them.
    pub fn skip(&mut self, n: usize) -> &mut Self {
        self.stream = stream::slice(&self.stream, n);
        self
    }

    /// The next `batch_size` elements; fewer once the stream runs out.
    pub fn next_batch(&mut self) -> Vec<T> {
        let n = self.config.batch_size;
        let batch = stream::take(&self.stream, n);
        self.stream = stream::slice(&self.stream, batch.len());
        log::debug!("cursor read batch of {} (requested {})", batch.len(), n);
        batch
    }

    pub fn batch_size(&self) -> usize {
        self.config.batch_size
    }

    pub fn is_exhausted(&self) -> bool {
        self.stream.is_empty()
    }

    /// The stream from the current position on.
    pub fn stream(&self) -> &Stream<T> {
        &self.stream
    }
}
