use memo_stream::sequences::{integers, primes};
use memo_stream::stream::{iterate, preview, render, Stream};
use memo_stream::{CursorConfig, RenderConfig};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_preview_format() {
    assert_eq!(preview(&integers::<u64>(), 5), "< 0 1 2 3 4 >");
    assert_eq!(primes::<u64>().preview(3), "< 2 3 5 >");
}

#[test]
fn test_preview_of_short_and_empty_streams() {
    assert_eq!(Stream::from(vec![1, 2]).preview(5), "< 1 2 >");
    assert_eq!(Stream::<i32>::Empty.preview(3), "< >");
    assert_eq!(integers::<u64>().preview(0), "< >");
}

#[test]
fn test_preview_forces_only_shown_elements() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let s = iterate(0u64, move |x| {
        counter.set(counter.get() + 1);
        x + 1
    });
    assert_eq!(s.preview(3), "< 0 1 2 >");
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_display_uses_default_preview_len() {
    assert_eq!(
        format!("{}", integers::<u64>()),
        "< 0 1 2 3 4 5 6 7 8 9 >"
    );
}

#[test]
fn test_render_markers() {
    let config = RenderConfig::new()
        .preview_len(3)
        .mark_continuation(true)
        .mark_empty(true);
    assert_eq!(render(&integers::<u64>(), &config), "< 0 1 2 ... >");
    assert_eq!(render(&Stream::from(vec![1, 2]), &config), "< 1 2 ! >");
    assert_eq!(render(&Stream::from(vec![1, 2, 3]), &config), "< 1 2 3 ! >");
    assert_eq!(render(&Stream::<i32>::Empty, &config), "< ! >");
}

#[test]
fn test_render_config_from_json() {
    let config: RenderConfig = serde_json::from_str(r#"{"preview_len": 4}"#).unwrap();
    assert_eq!(config, RenderConfig::new().preview_len(4));

    let json = serde_json::to_string(&RenderConfig::default().mark_empty(true)).unwrap();
    let back: RenderConfig = serde_json::from_str(&json).unwrap();
    assert!(back.mark_empty);
    assert_eq!(back.preview_len, 10);
}

#[test]
fn test_cursor_config_defaults() {
    let config: CursorConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.batch_size, 1);
}
