//! Merging queues into a new queue.
//!
//! [`concat`] consumes its inputs. Every other merge reads its inputs
//! through [`Queue::iter`] or through working copies built from it, so the
//! originals are left exactly as they were.

use crate::{
    algo::take_front,
    queue::{LinkedQueue, Queue},
};

/// Drains `first` and then `second` into a new queue. Both inputs end up
/// empty.
pub fn concat<T, A, B>(first: &mut A, second: &mut B) -> LinkedQueue<T>
where
    A: Queue<T>,
    B: Queue<T>,
{
    log::debug!("merging {} and {} values", first.len(), second.len());
    let mut merged = LinkedQueue::new();
    while let Some(val) = take_front(first) {
        merged.push(val);
    }
    while let Some(val) = take_front(second) {
        merged.push(val);
    }
    merged
}

/// Same sequence as [`concat`], but the inputs are only traversed.
pub fn concat_preserving<T, A, B>(first: &A, second: &B) -> LinkedQueue<T>
where
    T: Clone,
    A: Queue<T>,
    B: Queue<T>,
{
    log::debug!(
        "merging {} and {} values (non-destructive)",
        first.len(),
        second.len()
    );
    first.iter().chain(second.iter()).cloned().collect()
}

/// Merges two queues that are each non-decreasing from front to rear into
/// one non-decreasing queue. On ties the value from `first` goes first.
///
/// The inputs are not checked; unsorted inputs give an unspecified order
/// that still holds every value exactly once.
pub fn sorted<T, A, B>(first: &A, second: &B) -> LinkedQueue<T>
where
    T: Clone + PartialOrd,
    A: Queue<T>,
    B: Queue<T>,
{
    log::debug!(
        "merging sorted queues of {} and {} values",
        first.len(),
        second.len()
    );
    let mut left: LinkedQueue<T> = first.iter().cloned().collect();
    let mut right: LinkedQueue<T> = second.iter().cloned().collect();
    let mut merged = LinkedQueue::new();
    loop {
        let take_left = match (left.peek().ok(), right.peek().ok()) {
            (None, None) => break,
            (Some(a), Some(b)) => a <= b,
            (Some(_), None) => true,
            (None, Some(_)) => false,
        };
        let source = if take_left { &mut left } else { &mut right };
        if let Some(val) = take_front(source) {
            merged.push(val);
        }
    }
    merged
}

/// Concatenates any number of queues in iteration order without touching
/// them.
pub fn all<'a, T, Q, I>(queues: I) -> LinkedQueue<T>
where
    T: Clone + 'a,
    Q: Queue<T> + 'a,
    I: IntoIterator<Item = &'a Q>,
{
    let mut merged = LinkedQueue::new();
    let mut count = 0usize;
    for queue in queues {
        merged.extend(queue.iter().cloned());
        count += 1;
    }
    log::debug!("merged {} queues into {} values", count, merged.len());
    merged
}

/// Alternates between `first` and `second`, one value at a time, starting
/// with `first`. Once one side runs out the rest of the other follows in
/// order.
pub fn interleaved<T, A, B>(first: &A, second: &B) -> LinkedQueue<T>
where
    T: Clone,
    A: Queue<T>,
    B: Queue<T>,
{
    log::debug!(
        "interleaving {} and {} values",
        first.len(),
        second.len()
    );
    let mut left: LinkedQueue<T> = first.iter().cloned().collect();
    let mut right: LinkedQueue<T> = second.iter().cloned().collect();
    let mut merged = LinkedQueue::new();
    while !left.is_empty() || !right.is_empty() {
        if let Some(val) = take_front(&mut left) {
            merged.push(val);
        }
        if let Some(val) = take_front(&mut right) {
            merged.push(val);
        }
    }
    merged
}
