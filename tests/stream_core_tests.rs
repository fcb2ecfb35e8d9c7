use memo_stream::error::StreamError;
use memo_stream::sequences::ones;
use memo_stream::stream::{empty, head, is_empty, iterate, repeat, stream, tail, Stream};
use memo_stream::Cursor;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_empty_stream() {
    let s: Stream<i32> = empty();
    assert!(is_empty(&s));
    assert!(s.is_tail_evaluated());
    assert_eq!(s.to_vec(), Vec::<i32>::new());
}

#[test]
fn test_tail_of_last_node_is_empty() {
    let s = stream(1, || Stream::Empty);
    assert!(!is_empty(&s));
    assert_eq!(head(&s), 1);
    assert!(is_empty(&tail(&s)));
}

#[test]
fn test_selectors_on_empty_report_errors() {
    let s: Stream<i32> = Stream::empty();
    assert_eq!(s.try_head(), Err(StreamError::EmptyHead));
    assert_eq!(s.try_tail().err(), Some(StreamError::EmptyTail));
}

#[test]
#[should_panic(expected = "head of the empty stream")]
fn test_head_of_empty_panics() {
    let s: Stream<i32> = Stream::empty();
    s.head();
}

#[test]
#[should_panic(expected = "tail of the empty stream")]
fn test_tail_of_empty_panics() {
    let s: Stream<i32> = Stream::empty();
    s.tail();
}

#[test]
fn test_tail_is_memoized() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let s = Stream::cons(1, move || {
        counter.set(counter.get() + 1);
        Stream::cons(2, || Stream::Empty)
    });
    assert_eq!(calls.get(), 0);
    assert!(!s.is_tail_evaluated());

    let first = s.tail();
    let second = s.tail();
    assert_eq!(calls.get(), 1);
    assert!(first.ptr_eq(&second));
    assert!(s.is_tail_evaluated());
}

#[test]
fn test_clones_share_memoized_tails() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let s = Stream::cons(1, move || {
        counter.set(counter.get() + 1);
        Stream::Empty
    });
    let copy = s.clone();
    s.tail();
    copy.tail();
    assert_eq!(calls.get(), 1);
    assert!(s.ptr_eq(&copy));
}

#[test]
fn test_knot_ties_a_cycle() {
    let ones = Stream::knot(|this| Stream::cons(1, move || this.get()));
    assert!(ones.tail().ptr_eq(&ones));
    assert_eq!(ones.take(4), vec![1, 1, 1, 1]);
}

#[test]
fn test_knot_is_unresolved_while_building() {
    let mut seen = None;
    let s: Stream<i32> = Stream::knot(|this| {
        seen = Some((this.is_resolved(), this.try_get().err()));
        Stream::cons(0, || Stream::Empty)
    });
    assert_eq!(seen, Some((false, Some(StreamError::UnresolvedKnot))));
    assert_eq!(s.to_vec(), vec![0]);
}

#[test]
fn test_iterator_forces_tails_on_demand() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let s = iterate(0u32, move |x| {
        counter.set(counter.get() + 1);
        x + 1
    });

    let mut it = s.iter();
    assert_eq!(it.next(), Some(0));
    assert_eq!(calls.get(), 0);
    assert_eq!(it.next(), Some(1));
    assert_eq!(calls.get(), 1);

    let rest = it.into_stream();
    assert_eq!(*rest.head(), 2);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_into_iterator_and_from_iterator() {
    let s: Stream<i32> = vec![3, 1, 2].into_iter().collect();
    let mut seen = Vec::new();
    for x in &s {
        seen.push(x);
    }
    assert_eq!(seen, vec![3, 1, 2]);
    assert_eq!(s.into_iter().map(|x| x * 10).collect::<Vec<_>>(), vec![30, 10, 20]);
}

#[test]
fn test_from_vec_is_fully_realized() {
    let s = Stream::from(vec![1, 2, 3]);
    assert!(s.is_tail_evaluated());
    assert_eq!(format!("{:?}", s), "Stream[1, 2, 3]");
}

#[test]
fn test_debug_shows_realized_prefix_only() {
    let s = Stream::cons(1, || Stream::cons(2, || Stream::cons(3, || Stream::Empty)));
    assert_eq!(format!("{:?}", s), "Stream[1, ..]");
    s.tail();
    assert_eq!(format!("{:?}", s), "Stream[1, 2, ..]");
    assert_eq!(format!("{:?}", Stream::<i32>::Empty), "Stream[]");
}

#[test]
fn test_debug_of_forced_cyclic_stream_terminates() {
    let ones = ones::<u64>();
    ones.tail();
    assert_eq!(
        format!("{:?}", ones),
        "Stream[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, ..]"
    );

    let sevens = repeat(7u8);
    sevens.nth(3);
    let mut cursor = Cursor::new(sevens);
    cursor.take(2).next_batch();
    assert!(format!("{:?}", cursor).contains("Stream[7, 7, 7, 7, 7, 7, 7, 7, 7, 7, ..]"));
}

#[test]
fn test_debug_bounds_long_realized_prefix() {
    let s: Stream<u32> = (0..12).collect();
    assert_eq!(
        format!("{:?}", s),
        "Stream[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, ..]"
    );
}

#[test]
fn test_dropping_long_realized_stream() {
    let s = iterate(0u64, |x| x + 1);
    assert_eq!(s.nth(200_000), Some(200_000));
    drop(s);
}

#[test]
fn test_cons_evaluated_does_not_defer() {
    let s = Stream::cons_evaluated(1, Stream::cons_evaluated(2, Stream::Empty));
    assert!(s.is_tail_evaluated());
    assert_eq!(s.to_vec(), vec![1, 2]);
}
