//! Status reporting for queue operations.
//!
//! Every queue carries an [`Observer`] that is told about successful and
//! rejected operations. The default observer, `()`, discards everything;
//! [`LogObserver`] forwards the events to the `log` facade.

use std::fmt;

/// The operation that found the queue empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `dequeue` on an empty queue.
    Dequeue,
    /// `peek` on an empty queue.
    Peek,
}

/// Something that happened to a queue.
#[derive(Debug, PartialEq, Eq)]
pub enum Event<'a, T> {
    /// A value was appended at the rear.
    Enqueued(&'a T),
    /// A value was removed from the front.
    Dequeued(&'a T),
    /// A value was turned away because the queue is full.
    Rejected(&'a T),
    /// An operation found the queue empty.
    Empty(Operation),
    /// The result of a membership scan.
    Searched {
        /// The value looked for.
        value: &'a T,
        /// Whether it was present.
        found: bool,
    },
}

impl<T> Event<'_, T> {
    /// Returns true for events that report a failed operation.
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::Rejected(_) | Event::Empty(_))
    }
}

impl<T: fmt::Display> fmt::Display for Event<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Enqueued(v) => write!(f, "Enqueued: {}", v),
            Event::Dequeued(v) => write!(f, "Dequeued: {}", v),
            Event::Rejected(v) => write!(f, "Queue is full! Cannot enqueue {}", v),
            Event::Empty(Operation::Dequeue) => f.write_str("Queue is empty! Cannot dequeue."),
            Event::Empty(Operation::Peek) => f.write_str("Queue is empty!"),
            Event::Searched { value, found: true } => {
                write!(f, "Element {} found in queue", value)
            }
            Event::Searched { value, found: false } => {
                write!(f, "Element {} not found in queue", value)
            }
        }
    }
}

/// Receives the events of a queue.
pub trait Observer<T> {
    /// Called once per event, after the queue state has been updated.
    fn notify(&self, event: Event<'_, T>);
}

impl<T> Observer<T> for () {
    #[inline]
    fn notify(&self, _event: Event<'_, T>) {}
}

impl<T, O: Observer<T>> Observer<T> for &O {
    fn notify(&self, event: Event<'_, T>) {
        (**self).notify(event)
    }
}

/// Writes every event as a status line through the `log` crate.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogObserver;

impl<T: fmt::Display> Observer<T> for LogObserver {
    fn notify(&self, event: Event<'_, T>) {
        if event.is_failure() {
            log::warn!("{}", event);
        } else {
            log::info!("{}", event);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_status_lines() {
        assert_eq!("Enqueued: 10", Event::Enqueued(&10).to_string());
        assert_eq!("Dequeued: 10", Event::Dequeued(&10).to_string());
        assert_eq!(
            "Queue is full! Cannot enqueue 80",
            Event::Rejected(&80).to_string()
        );
        assert_eq!(
            "Queue is empty! Cannot dequeue.",
            Event::<i32>::Empty(Operation::Dequeue).to_string()
        );
        assert_eq!(
            "Element 999 not found in queue",
            Event::Searched {
                value: &999,
                found: false
            }
            .to_string()
        );
    }

    #[test]
    fn failures_are_flagged() {
        assert!(Event::Rejected(&1).is_failure());
        assert!(Event::<i32>::Empty(Operation::Peek).is_failure());
        assert!(!Event::Enqueued(&1).is_failure());
    }

    #[test]
    fn log_observer_drives_a_queue() {
        use crate::queue::{BoundedQueue, Queue};

        let mut queue = BoundedQueue::with_observer(1, LogObserver).unwrap();
        assert!(queue.enqueue("a").is_ok());
        assert!(queue.enqueue("b").is_err());
        assert_eq!(Ok("a"), queue.dequeue());
        assert!(queue.peek().is_err());
    }
}
