//! Linear searches over a queue.
//!
//! Apart from [`contains_destructive`], every search drains the queue into a
//! temporary queue while scanning and then refills it, so callers observe no
//! change.

use crate::{
    algo::take_front,
    queue::{LinkedQueue, Queue, QueueError},
};

/// Dequeues until `target` shows up. On a hit the queue is left holding only
/// the values behind the match; otherwise it ends up empty.
pub fn contains_destructive<T: PartialEq, Q: Queue<T>>(queue: &mut Q, target: &T) -> bool {
    while let Some(val) = take_front(queue) {
        if val == *target {
            log::debug!("match found, {} value(s) left behind it", queue.len());
            return true;
        }
    }
    log::debug!("no match, queue drained");
    false
}

/// Drains the queue into a temporary one, calling `inspect` with each
/// value's distance from the front, then puts everything back in order.
fn scan<T, Q, F>(queue: &mut Q, mut inspect: F) -> Result<(), QueueError>
where
    Q: Queue<T>,
    F: FnMut(usize, &T),
{
    let mut temp = LinkedQueue::new();
    let mut position = 0;
    while let Some(val) = take_front(queue) {
        inspect(position, &val);
        temp.push(val);
        position += 1;
    }
    while let Some(val) = take_front(&mut temp) {
        queue.enqueue(val)?;
    }
    Ok(())
}

/// Returns true if `target` is in the queue. The queue is unchanged.
pub fn contains<T: PartialEq, Q: Queue<T>>(queue: &mut Q, target: &T) -> Result<bool, QueueError> {
    let mut found = false;
    scan(queue, |_, val: &T| found |= val == target)?;
    log::debug!("match {}", if found { "found" } else { "not found" });
    Ok(found)
}

/// Returns the distance from the front of the last occurrence of `target`
/// seen in a single front-to-rear pass, or `None`. The queue is unchanged.
///
/// Every further match overwrites the recorded position, so with repeated
/// values this is the position of the last one, not the first.
pub fn position<T, Q>(queue: &mut Q, target: &T) -> Result<Option<usize>, QueueError>
where
    T: PartialEq,
    Q: Queue<T>,
{
    let mut found = None;
    scan(queue, |pos, val: &T| {
        if val == target {
            found = Some(pos);
        }
    })?;
    match found {
        Some(pos) => log::debug!("element found at position {}", pos),
        None => log::debug!("element not found"),
    }
    Ok(found)
}

/// Counts the occurrences of `target`. The queue is unchanged.
pub fn count<T: PartialEq, Q: Queue<T>>(queue: &mut Q, target: &T) -> Result<usize, QueueError> {
    let mut count = 0;
    scan(queue, |_, val: &T| {
        if val == target {
            count += 1;
        }
    })?;
    log::debug!("found {} occurrence(s)", count);
    Ok(count)
}

/// Runs [`position`] once per target, in order. Each lookup drains and
/// restores the queue on its own.
pub fn positions<T, Q>(queue: &mut Q, targets: &[T]) -> Result<Vec<Option<usize>>, QueueError>
where
    T: PartialEq,
    Q: Queue<T>,
{
    log::debug!("searching for {} element(s)", targets.len());
    targets.iter().map(|target| position(queue, target)).collect()
}
