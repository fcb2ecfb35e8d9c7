//! Bounded textual previews: `< e1 e2 ... en >`
use std::fmt;

use super::core::Stream;
use crate::stream_configuration::RenderConfig;

/// Render the first `n` elements as `< e1 e2 ... en >`.
///
/// Forces exactly the tails needed to reach the `n`th element.
pub fn preview<T: Clone + fmt::Display>(s: &Stream<T>, n: usize) -> String {
    render(s, &RenderConfig::default().preview_len(n))
}

/// Render a prefix according to `config`.
///
/// The end markers never force anything: after the last shown element the
/// stream counts as ended only if its tail is already known to be empty.
pub fn render<T: Clone + fmt::Display>(s: &Stream<T>, config: &RenderConfig) -> String {
    let mut out = String::from("< ");
    let mut cursor = s.clone();
    let mut shown = 0;
    let ended = loop {
        let node = match &cursor {
            Stream::Empty => break true,
            Stream::Cons(node) => node.clone(),
        };
        if shown == config.preview_len {
            break false;
        }
        out.push_str(&format!("{} ", node.head()));
        shown += 1;
        if shown == config.preview_len {
            break matches!(node.tail().peek(), Some(Stream::Empty));
        }
        cursor = node.tail().force();
    };

    if ended && config.mark_empty {
        out.push_str("! ");
    }
    if !ended && config.mark_continuation {
        out.push_str("... ");
    }
    out.push('>');
    out
}

impl<T: Clone + fmt::Display> Stream<T> {
    /// See [`preview`].
    pub fn preview(&self, n: usize) -> String {
        preview(self, n)
    }
}

/// Renders a preview with the default [`RenderConfig`].
impl<T: Clone + fmt::Display> fmt::Display for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderConfig::default()))
    }
}
