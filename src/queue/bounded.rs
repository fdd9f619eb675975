//! A fixed-capacity queue over a ring of pre-allocated slots.

use std::fmt;

use crate::{
    observe::{Event, Observer, Operation},
    queue::{fmt_listing, CapacityExceeded, Queue, QueueError},
};

/// A bounded FIFO queue.
///
/// The storage is allocated once, at construction, and reused circularly.
/// Valid values occupy `len` consecutive logical slots starting at `front`,
/// wrapping around the end of the storage. The capacity never changes.
pub struct BoundedQueue<T, O = ()> {
    storage: Box<[Option<T>]>,
    front: usize,
    len: usize,
    observer: O,
}

impl<T> BoundedQueue<T> {
    /// Creates a queue holding at most `capacity` values.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        Self::with_observer(capacity, ())
    }
}

impl<T, O: Observer<T>> BoundedQueue<T, O> {
    /// Creates a queue holding at most `capacity` values that reports its
    /// status to `observer`.
    pub fn with_observer(capacity: usize, observer: O) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidArgument("capacity must be positive"));
        }
        let storage: Box<[Option<T>]> = (0..capacity).map(|_| None).collect();
        Ok(Self {
            storage,
            front: 0,
            len: 0,
            observer,
        })
    }

    /// Returns the capacity of the queue.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the queue is full.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Drops every queued value. The capacity is kept.
    pub fn clear(&mut self) {
        for slot in self.storage.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.len = 0;
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.front + offset) % self.capacity()
    }
}

impl<T, O: Observer<T>> Queue<T> for BoundedQueue<T, O> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn enqueue(&mut self, val: T) -> Result<(), CapacityExceeded<T>> {
        if self.is_full() {
            self.observer.notify(Event::Rejected(&val));
            return Err(CapacityExceeded::new(val, self.capacity()));
        }
        let rear = self.slot(self.len);
        let stored = self.storage[rear].insert(val);
        self.len += 1;
        self.observer.notify(Event::Enqueued(stored));
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T, QueueError> {
        // Slots outside the valid range are always vacant.
        let Some(val) = self.storage[self.front].take() else {
            self.observer.notify(Event::Empty(Operation::Dequeue));
            return Err(QueueError::Empty);
        };
        self.front = self.slot(1);
        self.len -= 1;
        self.observer.notify(Event::Dequeued(&val));
        Ok(val)
    }

    fn peek(&self) -> Result<&T, QueueError> {
        match self.storage[self.front].as_ref() {
            Some(val) => Ok(val),
            None => {
                self.observer.notify(Event::Empty(Operation::Peek));
                Err(QueueError::Empty)
            }
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            storage: &self.storage,
            front: self.front,
            offset: 0,
            len: self.len,
        }
    }
}

/// Front-to-rear iterator over a [`BoundedQueue`].
pub struct Iter<'a, T> {
    storage: &'a [Option<T>],
    front: usize,
    offset: usize,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.offset == self.len {
            return None;
        }
        let index = (self.front + self.offset) % self.storage.len();
        self.offset += 1;
        self.storage[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T: fmt::Display, O: Observer<T>> fmt::Display for BoundedQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_listing(f, self.iter())
    }
}

impl<T: fmt::Debug, O: Observer<T>> fmt::Debug for BoundedQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity())
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
