//! A printer spooler built on [`LinkedQueue`].

use std::fmt;

use strum::{Display, EnumString};

use crate::{
    observe::{LogObserver, Observer},
    queue::{LinkedQueue, Queue},
};

/// How urgently a job should be printed. Jobs are still served strictly in
/// arrival order; the priority is informational.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
pub enum Priority {
    /// The default.
    Normal,
    /// Above normal.
    High,
    /// Print as soon as possible.
    Urgent,
}

/// A document waiting to be printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintJob {
    /// Identifier assigned by the submitter.
    pub job_id: u32,
    /// Name of the document.
    pub file_name: String,
    /// Number of pages.
    pub pages: u32,
    /// Requested priority.
    pub priority: Priority,
}

impl PrintJob {
    /// Creates a job.
    pub fn new(job_id: u32, file_name: impl Into<String>, pages: u32, priority: Priority) -> Self {
        Self {
            job_id,
            file_name: file_name.into(),
            pages,
            priority,
        }
    }
}

impl fmt::Display for PrintJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JobID: {} | File: {} | Pages: {} | Priority: {}",
            self.job_id, self.file_name, self.pages, self.priority
        )
    }
}

/// Print jobs waiting for the printer, served first come, first served.
///
/// Status goes through the observer of the underlying queue, so a spooler
/// reports the same events as any other [`LinkedQueue`]. The default
/// observer writes them to the `log` facade.
pub struct PrintQueue<O = LogObserver> {
    jobs: LinkedQueue<PrintJob, O>,
}

impl PrintQueue {
    /// Creates an empty spooler that logs its status.
    pub fn new() -> Self {
        Self::with_observer(LogObserver)
    }
}

impl Default for PrintQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Observer<PrintJob>> PrintQueue<O> {
    /// Creates an empty spooler that reports its status to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            jobs: LinkedQueue::with_observer(observer),
        }
    }

    /// Adds a job at the back of the line.
    pub fn add_job(&mut self, job: PrintJob) {
        self.jobs.push(job);
    }

    /// Removes and returns the next job, or `None` when there is nothing to
    /// print.
    pub fn process_job(&mut self) -> Option<PrintJob> {
        self.jobs.dequeue().ok()
    }

    /// Returns the next job without removing it.
    pub fn peek_next_job(&self) -> Option<&PrintJob> {
        self.jobs.peek().ok()
    }

    /// Returns the number of jobs waiting.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if no job is waiting.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        self.jobs.observer()
    }
}

impl<O: Observer<PrintJob>> fmt::Display for PrintQueue<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.jobs.is_empty() {
            return f.write_str("Queue is empty!");
        }
        for (i, job) in self.jobs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, job)?;
        }
        Ok(())
    }
}
