//! End-to-end timing scenarios, driven at one-second poll granularity.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use courier_core::ErrorPolicy;
use courier_scheduler::{Action, Poller};
use tokio::time::{Duration, Instant};

fn counting(counter: Arc<AtomicUsize>) -> Action {
    Box::new(move || {
        let counter = Arc::clone(&counter);
        Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    })
}

fn recording(log: Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> Action {
    Box::new(move || {
        let log = Arc::clone(&log);
        Box::pin(async move {
            log.lock().unwrap().push(tag);
            Ok(())
        })
    })
}

#[tokio::test(start_paused = true)]
async fn one_minute_job_fires_exactly_once_in_its_window() {
    let mut poller = Poller::new(ErrorPolicy::Propagate);
    let t0 = Instant::now();
    let count = Arc::new(AtomicUsize::new(0));
    poller
        .register("minutely", Duration::from_secs(60), counting(Arc::clone(&count)))
        .unwrap();

    for s in 0..60 {
        poller.tick(t0 + Duration::from_secs(s)).await.unwrap();
        assert_eq!(
            count.load(Ordering::SeqCst),
            0,
            "fired before its due time, at t0+{s}s"
        );
    }

    // First invocation lands in [t0+60s, t0+61s).
    poller.tick(t0 + Duration::from_secs(60)).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // And only once: the next poll second fires nothing.
    poller.tick(t0 + Duration::from_secs(61)).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn staggered_intervals_meet_at_two_minutes() {
    let mut poller = Poller::new(ErrorPolicy::Propagate);
    let t0 = Instant::now();
    let log = Arc::new(Mutex::new(Vec::new()));
    poller
        .register("minutely", Duration::from_secs(60), recording(Arc::clone(&log), "minutely"))
        .unwrap();
    poller
        .register(
            "two-minutely",
            Duration::from_secs(120),
            recording(Arc::clone(&log), "two-minutely"),
        )
        .unwrap();

    for s in 1..=120 {
        let fired = poller.tick(t0 + Duration::from_secs(s)).await.unwrap();
        if s == 120 {
            // Both jobs are due in the same tick.
            assert_eq!(fired, 2);
        }
    }

    // Totals at t0+120s: {minutely: 2, two-minutely: 1}, and within the
    // shared tick the earlier-registered job fired first.
    assert_eq!(
        *log.lock().unwrap(),
        vec!["minutely", "minutely", "two-minutely"]
    );
}
