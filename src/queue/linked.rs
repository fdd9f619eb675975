//! An unbounded queue over a chain of individually allocated links.

use std::{fmt, marker::PhantomData, ptr::NonNull};

use crate::{
    observe::{Event, Observer, Operation},
    queue::{fmt_listing, CapacityExceeded, Queue, QueueError},
};

type LinkPtr<T> = NonNull<Link<T>>;

struct Link<T> {
    value: T,
    next: Option<LinkPtr<T>>,
}

/// An unbounded FIFO queue.
///
/// Links are allocated with `Box::into_raw` and released with
/// `Box::from_raw` when they are popped or when the queue is dropped, so no
/// `Box` ever owns a link while `rear` aliases it. `rear` is `None` exactly
/// when `front` is.
pub struct LinkedQueue<T, O = ()> {
    front: Option<LinkPtr<T>>,
    rear: Option<LinkPtr<T>>,
    len: usize,
    observer: O,
    _links: PhantomData<Box<Link<T>>>,
}

// SAFETY: the queue owns every link exclusively, the way a `Vec<T>` owns
// its elements.
unsafe impl<T: Send, O: Send> Send for LinkedQueue<T, O> {}
// SAFETY: shared access only hands out `&T`, see above.
unsafe impl<T: Sync, O: Sync> Sync for LinkedQueue<T, O> {}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::with_observer(())
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> LinkedQueue<T, O> {
    /// Removes the front value, or returns `None` without reporting anything
    /// when the queue is empty.
    fn pop(&mut self) -> Option<T> {
        let front = self.front?;
        // SAFETY: `front` came from `Box::leak` in `push` and is unlinked
        // here before anything else can reach it, so it is freed exactly once.
        let link = unsafe { Box::from_raw(front.as_ptr()) };
        self.front = link.next;
        if self.front.is_none() {
            self.rear = None;
        }
        self.len -= 1;
        Some(link.value)
    }
}

impl<T, O: Observer<T>> LinkedQueue<T, O> {
    /// Creates an empty queue that reports its status to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            front: None,
            rear: None,
            len: 0,
            observer,
            _links: PhantomData,
        }
    }

    /// Appends a value at the rear. Never fails.
    pub fn push(&mut self, value: T) {
        let link = NonNull::from(Box::leak(Box::new(Link { value, next: None })));
        match self.rear {
            // SAFETY: `rear` points to the last live link, which was leaked
            // from a `Box` and is only freed by `pop` or `drop`. `&mut self`
            // guarantees no other reference to it exists.
            Some(rear) => unsafe { (*rear.as_ptr()).next = Some(link) },
            None => self.front = Some(link),
        }
        self.rear = Some(link);
        self.len += 1;
        // SAFETY: `link` was just allocated and is owned by the chain.
        let value = unsafe { &(*link.as_ptr()).value };
        self.observer.notify(Event::Enqueued(value));
    }

    /// Scans the queue for `value` without mutating it.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let found = self.iter().any(|v| v == value);
        self.observer.notify(Event::Searched { value, found });
        found
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

impl<T, O: Observer<T>> Queue<T> for LinkedQueue<T, O> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn enqueue(&mut self, val: T) -> Result<(), CapacityExceeded<T>> {
        self.push(val);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T, QueueError> {
        match self.pop() {
            Some(val) => {
                self.observer.notify(Event::Dequeued(&val));
                Ok(val)
            }
            None => {
                self.observer.notify(Event::Empty(Operation::Dequeue));
                Err(QueueError::Empty)
            }
        }
    }

    fn peek(&self) -> Result<&T, QueueError> {
        match self.front {
            // SAFETY: the front link stays alive while `self` is borrowed.
            Some(link) => Ok(unsafe { &(*link.as_ptr()).value }),
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
            next: self.front,
            remaining: self.len,
            _queue: PhantomData,
        }
    }
}

impl<T, O> Drop for LinkedQueue<T, O> {
    fn drop(&mut self) {
        // Free iteratively so long chains don't recurse once per link.
        while self.pop().is_some() {}
    }
}

/// Front-to-rear iterator over a [`LinkedQueue`].
pub struct Iter<'a, T> {
    next: Option<LinkPtr<T>>,
    remaining: usize,
    _queue: PhantomData<&'a Link<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let link = self.next?;
        // SAFETY: the iterator borrows the queue for `'a`, so every link it
        // can reach stays alive and unmodified for that long.
        let link = unsafe { &*link.as_ptr() };
        self.next = link.next;
        self.remaining -= 1;
        Some(&link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Consuming iterator that dequeues from the front.
pub struct IntoIter<T, O>(LinkedQueue<T, O>);

impl<T, O: Observer<T>> Iterator for IntoIter<T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T, O: Observer<T>> IntoIterator for LinkedQueue<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T, O>;

    fn into_iter(self) -> IntoIter<T, O> {
        IntoIter(self)
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = LinkedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T, O: Observer<T>> Extend<T> for LinkedQueue<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: fmt::Display, O: Observer<T>> fmt::Display for LinkedQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_listing(f, self.iter())
    }
}

impl<T: fmt::Debug, O: Observer<T>> fmt::Debug for LinkedQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
