//! `courier-scheduler` — in-memory polling job scheduler.
//!
//! # Overview
//!
//! Jobs live in an in-process table for the lifetime of the process. The
//! [`poller::Poller`] wakes on a fixed short poll interval and fires every
//! job whose due time has arrived, in registration order, advancing each
//! fired job's due time by exactly one interval.
//!
//! Schedule state is not persisted: every process start registers its jobs
//! afresh, each first due one interval after registration.

pub mod error;
pub mod poller;
pub mod types;

pub use error::{PollerError, Result};
pub use poller::Poller;
pub use types::{Action, ActionFuture, JobId, JobInfo};
