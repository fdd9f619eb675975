//! Recursive operations over a queue.
//!
//! Each operation recurses once per value. Apart from [`reverse`], they all
//! drain and restore: a frame takes the front value, moves it to the rear,
//! and recurses on the values it hasn't rotated yet. After exactly `len()`
//! rotations the queue is back in its original order. Recursion depth is
//! linear in the queue length and capped by [`depth_limit`]; longer queues
//! are refused with [`QueueError::TooDeep`] before anything is touched.

use std::mem;

use num_traits::{CheckedAdd, Zero};

use crate::{
    algo::{rotate, rotate_with, take_front},
    queue::{Queue, QueueError},
};

/// The longest queue a recursive operation will accept.
pub const MAX_DEPTH: usize = 4_096;

/// Elements up to this size get the full [`MAX_DEPTH`]. Every frame keeps a
/// few copies of its element on the stack, so larger elements share a fixed
/// budget of `MAX_DEPTH * SMALL_ELEMENT` bytes instead.
const SMALL_ELEMENT: usize = 32;

/// Returns the longest queue of `T` a recursive operation will accept.
///
/// This is [`MAX_DEPTH`] for elements of at most 32 bytes and shrinks in
/// proportion to the element size beyond that, down to a single element.
pub fn depth_limit<T>() -> usize {
    let size = mem::size_of::<T>();
    if size <= SMALL_ELEMENT {
        MAX_DEPTH
    } else {
        (MAX_DEPTH * SMALL_ELEMENT / size).max(1)
    }
}

fn check_depth<T, Q: Queue<T>>(queue: &Q) -> Result<(), QueueError> {
    let len = queue.len();
    let limit = depth_limit::<T>();
    if len > limit {
        return Err(QueueError::TooDeep { len, limit });
    }
    Ok(())
}

/// Reverses the queue in place. This is the one recursive operation that
/// mutates its input.
pub fn reverse<T, Q: Queue<T>>(queue: &mut Q) -> Result<(), QueueError> {
    check_depth(queue)?;
    reverse_rec(queue)
}

fn reverse_rec<T, Q: Queue<T>>(queue: &mut Q) -> Result<(), QueueError> {
    let Some(front) = take_front(queue) else {
        return Ok(());
    };
    reverse_rec(queue)?;
    queue.enqueue(front)?;
    Ok(())
}

/// Returns true if `target` is in the queue. The queue is unchanged.
pub fn contains<T: PartialEq, Q: Queue<T>>(queue: &mut Q, target: &T) -> Result<bool, QueueError> {
    check_depth(queue)?;
    let len = queue.len();
    contains_rec(queue, target, len)
}

fn contains_rec<T: PartialEq, Q: Queue<T>>(
    queue: &mut Q,
    target: &T,
    remaining: usize,
) -> Result<bool, QueueError> {
    if remaining == 0 {
        return Ok(false);
    }
    if rotate_with(queue, |front: &T| front == target)? {
        // Put the unvisited tail back behind the values already rotated.
        rotate(queue, remaining - 1)?;
        return Ok(true);
    }
    contains_rec(queue, target, remaining - 1)
}

/// Calls `visit` on every value from front to rear. The queue is unchanged.
pub fn visit_in_order<T, Q, F>(queue: &mut Q, mut visit: F) -> Result<(), QueueError>
where
    Q: Queue<T>,
    F: FnMut(&T),
{
    check_depth(queue)?;
    let len = queue.len();
    visit_in_order_rec(queue, &mut visit, len)
}

fn visit_in_order_rec<T, Q, F>(
    queue: &mut Q,
    visit: &mut F,
    remaining: usize,
) -> Result<(), QueueError>
where
    Q: Queue<T>,
    F: FnMut(&T),
{
    if remaining == 0 {
        return Ok(());
    }
    rotate_with(queue, |front: &T| visit(front))?;
    visit_in_order_rec(queue, visit, remaining - 1)
}

/// Calls `visit` on every value from rear to front. The queue is unchanged.
pub fn visit_reversed<T, Q, F>(queue: &mut Q, mut visit: F) -> Result<(), QueueError>
where
    T: Clone,
    Q: Queue<T>,
    F: FnMut(&T),
{
    check_depth(queue)?;
    let len = queue.len();
    visit_reversed_rec(queue, &mut visit, len)
}

fn visit_reversed_rec<T, Q, F>(
    queue: &mut Q,
    visit: &mut F,
    remaining: usize,
) -> Result<(), QueueError>
where
    T: Clone,
    Q: Queue<T>,
    F: FnMut(&T),
{
    if remaining == 0 {
        return Ok(());
    }
    let front = rotate_with(queue, T::clone)?;
    visit_reversed_rec(queue, visit, remaining - 1)?;
    visit(&front);
    Ok(())
}

/// Returns the largest value. Fails with [`QueueError::InvalidArgument`] on
/// an empty queue. The queue is unchanged.
pub fn max<T, Q>(queue: &mut Q) -> Result<T, QueueError>
where
    T: Clone + PartialOrd,
    Q: Queue<T>,
{
    extremum(queue, |a, b| if b > a { b } else { a })
}

/// Returns the smallest value. Fails with [`QueueError::InvalidArgument`] on
/// an empty queue. The queue is unchanged.
pub fn min<T, Q>(queue: &mut Q) -> Result<T, QueueError>
where
    T: Clone + PartialOrd,
    Q: Queue<T>,
{
    extremum(queue, |a, b| if b < a { b } else { a })
}

fn extremum<T, Q, F>(queue: &mut Q, pick: F) -> Result<T, QueueError>
where
    T: Clone,
    Q: Queue<T>,
    F: Fn(T, T) -> T + Copy,
{
    if queue.is_empty() {
        return Err(QueueError::InvalidArgument("extremum of an empty queue"));
    }
    check_depth(queue)?;
    let len = queue.len();
    extremum_rec(queue, pick, len)
}

fn extremum_rec<T, Q, F>(queue: &mut Q, pick: F, remaining: usize) -> Result<T, QueueError>
where
    T: Clone,
    Q: Queue<T>,
    F: Fn(T, T) -> T + Copy,
{
    let front = rotate_with(queue, T::clone)?;
    if remaining == 1 {
        return Ok(front);
    }
    let rest = extremum_rec(queue, pick, remaining - 1)?;
    Ok(pick(front, rest))
}

/// Adds up every value, starting from zero. Fails with
/// [`QueueError::Overflow`] when the total doesn't fit in `T`. The queue is
/// unchanged either way.
pub fn sum<T, Q>(queue: &mut Q) -> Result<T, QueueError>
where
    T: Clone + Zero + CheckedAdd,
    Q: Queue<T>,
{
    check_depth(queue)?;
    let len = queue.len();
    sum_rec(queue, len)?.ok_or(QueueError::Overflow)
}

/// Returns `None` once a partial total overflows. Every frame rotates its
/// value before the additions start, so an overflow never cuts the restore
/// short.
fn sum_rec<T, Q>(queue: &mut Q, remaining: usize) -> Result<Option<T>, QueueError>
where
    T: Clone + Zero + CheckedAdd,
    Q: Queue<T>,
{
    if remaining == 0 {
        return Ok(Some(T::zero()));
    }
    let front = rotate_with(queue, T::clone)?;
    let rest = sum_rec(queue, remaining - 1)?;
    Ok(rest.and_then(|rest| front.checked_add(&rest)))
}
