use std::future::Future;
use std::pin::Pin;

use tokio::time::{Duration, Instant};

/// Future returned by one invocation of a job action.
pub type ActionFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// A zero-argument job body. Awaited to completion before the next due job
/// in the same tick is considered; invocations of the same job never
/// overlap.
pub type Action = Box<dyn FnMut() -> ActionFuture + Send>;

/// Handle returned by [`crate::Poller::register`].
///
/// Wraps the registration index; lower ids fire first when several jobs are
/// due in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(pub(crate) usize);

/// One recurring unit of work tracked by its next due time.
pub(crate) struct Job {
    pub(crate) name: String,
    pub(crate) interval: Duration,
    pub(crate) next_due_at: Instant,
    pub(crate) action: Action,
    pub(crate) runs: u64,
}

/// Read-only snapshot of a registered job.
#[derive(Debug, Clone)]
pub struct JobInfo {
    pub id: JobId,
    pub name: String,
    pub interval: Duration,
    pub next_due_at: Instant,
    pub runs: u64,
}
