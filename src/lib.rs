//! FIFO queues and the algorithms built on top of them.
//!
//! Two interchangeable implementations of the [`queue::Queue`] contract are
//! provided: a fixed-capacity ring buffer ([`queue::BoundedQueue`]) and an
//! unbounded singly-linked list ([`queue::LinkedQueue`]). The [`algo`] module
//! merges, searches and recursively transforms queues using only that
//! contract.
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod algo;
pub mod observe;
pub mod print_job;
pub mod queue;
