//! Algorithms that work on any [`Queue`](crate::queue::Queue) through its
//! public contract only.
//!
//! Merges always build a fresh [`LinkedQueue`](crate::queue::LinkedQueue).
//! Inspections that have to drain a queue put every value back in its
//! original position before returning.

use crate::queue::{Queue, QueueError};

pub mod merge;
pub mod recursive;
pub mod search;

/// Removes the front value if there is one. An empty queue is the normal
/// end of a drain here, so it isn't reported as a failure.
pub(crate) fn take_front<T, Q: Queue<T>>(queue: &mut Q) -> Option<T> {
    if queue.is_empty() {
        None
    } else {
        queue.dequeue().ok()
    }
}

/// Moves the front value to the rear and returns what `f` computed from it
/// while it was in hand.
pub(crate) fn rotate_with<T, Q, R>(queue: &mut Q, f: impl FnOnce(&T) -> R) -> Result<R, QueueError>
where
    Q: Queue<T>,
{
    let val = queue.dequeue()?;
    let out = f(&val);
    queue.enqueue(val)?;
    Ok(out)
}

/// Moves `n` values from the front to the rear.
pub(crate) fn rotate<T, Q: Queue<T>>(queue: &mut Q, n: usize) -> Result<(), QueueError> {
    for _ in 0..n {
        rotate_with(queue, |_: &T| ())?;
    }
    Ok(())
}
