//! The polling loop: fires due jobs and resleeps.

use courier_core::ErrorPolicy;
use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::{PollerError, Result};
use crate::types::{Action, Job, JobId, JobInfo};

/// Runs registered jobs at their cadence using coarse fixed-step polling.
///
/// A job can fire up to one poll interval late: the due check happens on the
/// first tick at or after the due time, never before.
pub struct Poller {
    jobs: Vec<Job>,
    on_error: ErrorPolicy,
}

impl Poller {
    pub fn new(on_error: ErrorPolicy) -> Self {
        Self {
            jobs: Vec::new(),
            on_error,
        }
    }

    /// Add a recurring job, first due one full `interval` from now.
    ///
    /// Jobs registered earlier fire earlier when several are due in the same
    /// tick. Rejects a zero interval.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        interval: Duration,
        action: Action,
    ) -> Result<JobId> {
        let name = name.into();
        if interval.is_zero() {
            return Err(PollerError::InvalidInterval { name });
        }
        let id = JobId(self.jobs.len());
        info!(job = %name, interval = ?interval, "job registered");
        self.jobs.push(Job {
            name,
            interval,
            next_due_at: Instant::now() + interval,
            action,
            runs: 0,
        });
        Ok(id)
    }

    /// Snapshot of all registered jobs, in registration order.
    pub fn list_jobs(&self) -> Vec<JobInfo> {
        self.jobs
            .iter()
            .enumerate()
            .map(|(i, job)| JobInfo {
                id: JobId(i),
                name: job.name.clone(),
                interval: job.interval,
                next_due_at: job.next_due_at,
                runs: job.runs,
            })
            .collect()
    }

    /// Next due time for `id`, if it is a known handle.
    pub fn next_due_at(&self, id: JobId) -> Option<Instant> {
        self.jobs.get(id.0).map(|job| job.next_due_at)
    }

    /// Fire every job due at `now`, in registration order. Returns how many
    /// were invoked.
    ///
    /// Each fired job's due time advances by exactly one interval from its
    /// pre-firing due time, keeping the schedule fixed even when an action
    /// outlives its own interval. The advanced time may then already be in
    /// the past, in which case the next tick re-fires the job once; there
    /// is no multi-increment catch-up.
    pub async fn tick(&mut self, now: Instant) -> Result<usize> {
        let on_error = self.on_error;
        let mut fired = 0;

        for job in self.jobs.iter_mut() {
            if job.next_due_at > now {
                continue;
            }

            job.runs += 1;
            fired += 1;
            debug!(job = %job.name, run = job.runs, "firing job");

            let result = (job.action)().await;
            job.next_due_at += job.interval;

            if let Err(e) = result {
                match on_error {
                    ErrorPolicy::Propagate => {
                        return Err(PollerError::JobFailed {
                            name: job.name.clone(),
                            source: e,
                        });
                    }
                    ErrorPolicy::LogAndContinue => {
                        warn!(job = %job.name, error = %e, "job failed; schedule continues");
                    }
                }
            }
        }

        Ok(fired)
    }

    /// Poll-and-sleep loop: fire everything due, then sleep `poll_interval`.
    ///
    /// Under the default `Propagate` policy the first action failure is
    /// returned; under `LogAndContinue` this never returns.
    pub async fn run_forever(mut self, poll_interval: Duration) -> Result<()> {
        if poll_interval.is_zero() {
            return Err(PollerError::InvalidPollInterval);
        }
        info!(jobs = self.jobs.len(), poll = ?poll_interval, "poller started");
        loop {
            self.tick(Instant::now()).await?;
            sleep(poll_interval).await;
        }
    }
}
