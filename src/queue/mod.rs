//! The queue contract and its two implementations.

use std::fmt;

pub mod bounded;
pub mod linked;

pub use self::bounded::BoundedQueue;
pub use self::linked::LinkedQueue;

/// A first-in, first-out queue.
///
/// The sequence observed by repeatedly calling [`Queue::dequeue`] is exactly
/// the sequence of successfully enqueued values, in arrival order, minus the
/// values already dequeued.
pub trait Queue<T> {
    /// Front-to-rear iterator over the queued values.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Appends a value at the rear. On failure the value is handed back
    /// inside the error and the queue is left untouched.
    fn enqueue(&mut self, val: T) -> Result<(), CapacityExceeded<T>>;

    /// Removes the value at the front.
    fn dequeue(&mut self) -> Result<T, QueueError>;

    /// Returns the value at the front without removing it.
    fn peek(&self) -> Result<&T, QueueError>;

    /// Returns the number of values in the queue.
    fn len(&self) -> usize;

    /// Returns true if the queue holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the queue from front to rear without mutating it.
    fn iter(&self) -> Self::Iter<'_>;
}

/// Errors raised by queue operations and the algorithms built on them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// Dequeue or peek on an empty queue.
    #[error("queue is empty")]
    Empty,

    /// Enqueue on a full bounded queue.
    #[error("queue is full (capacity {capacity})")]
    CapacityExceeded {
        /// Capacity of the queue that rejected the value.
        capacity: usize,
    },

    /// An argument outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The queue is longer than a recursive operation is allowed to descend.
    #[error("queue of length {len} exceeds the recursion limit of {limit}")]
    TooDeep {
        /// Length of the queue.
        len: usize,
        /// Maximum supported length.
        limit: usize,
    },

    /// An arithmetic result does not fit the element type.
    #[error("arithmetic overflow")]
    Overflow,
}

/// The error returned when enqueueing on a full queue. It owns the value
/// that could not be enqueued.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct CapacityExceeded<T> {
    value: T,
    capacity: usize,
}

impl<T> CapacityExceeded<T> {
    pub(crate) fn new(value: T, capacity: usize) -> Self {
        Self { value, capacity }
    }

    /// Consume the error and return the value that wasn't enqueued.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the capacity of the queue that rejected the value.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> fmt::Debug for CapacityExceeded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapacityExceeded({}, ..)", self.capacity)
    }
}

impl<T> fmt::Display for CapacityExceeded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enqueueing on a full queue (capacity {})", self.capacity)
    }
}

impl<T> std::error::Error for CapacityExceeded<T> {}

impl<T> From<CapacityExceeded<T>> for QueueError {
    fn from(err: CapacityExceeded<T>) -> Self {
        QueueError::CapacityExceeded {
            capacity: err.capacity,
        }
    }
}

/// Writes `[a, b, c]` from front to rear.
pub(crate) fn fmt_listing<'a, T: fmt::Display + 'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a T>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_error_returns_the_value() {
        let err = CapacityExceeded::new(String::from("job"), 3);
        assert_eq!(3, err.capacity());
        assert_eq!("job", err.into_inner());
    }

    #[test]
    fn capacity_error_converts_into_queue_error() {
        let err: QueueError = CapacityExceeded::new(7, 5).into();
        assert_eq!(QueueError::CapacityExceeded { capacity: 5 }, err);
        assert_eq!("queue is full (capacity 5)", err.to_string());
    }
}
