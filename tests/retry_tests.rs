#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

use tokio_test::{assert_err, assert_ok};

use propunter_bot::utils::retry::retry_with_backoff;

#[tokio::test(start_paused = true)]
async fn test_retry_succeeds_after_transient_failures() {
    let attempts = Arc::new(Mutex::new(Vec::new()));
    let counter = Arc::new(AtomicU32::new(0));

    let attempts_ref = attempts.clone();
    let counter_ref = counter.clone();
    let result = retry_with_backoff(5, Duration::from_millis(1000), move || {
        let n = counter_ref.fetch_add(1, Ordering::SeqCst);
        attempts_ref.lock().unwrap().push(Instant::now());
        async move {
            if n < 2 {
                Err("transient failure")
            } else {
                Ok("done")
            }
        }
    })
    .await;

    assert_eq!(tokio_test::assert_ok!(result), "done");
    assert_eq!(counter.load(Ordering::SeqCst), 3);

    // Delays double: 1000ms after the first failure, 2000ms after the second
    let attempts = attempts.lock().unwrap();
    assert_eq!(attempts.len(), 3);
    assert_eq!(attempts[1] - attempts[0], Duration::from_millis(1000));
    assert_eq!(attempts[2] - attempts[1], Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn test_retry_gives_up_after_max_attempts() {
    let counter = Arc::new(AtomicU32::new(0));
    let start = Instant::now();

    let counter_ref = counter.clone();
    let result: Result<(), &str> = retry_with_backoff(5, Duration::from_millis(1000), move || {
        counter_ref.fetch_add(1, Ordering::SeqCst);
        async { Err("permanent failure") }
    })
    .await;

    assert_eq!(tokio_test::assert_err!(result), "permanent failure");
    assert_eq!(counter.load(Ordering::SeqCst), 5);

    // 1000 + 2000 + 4000 + 8000ms of backoff, and no sleep after the final attempt
    assert_eq!(Instant::now() - start, Duration::from_millis(15000));
}

#[tokio::test(start_paused = true)]
async fn test_retry_returns_immediately_on_first_success() {
    let counter = Arc::new(AtomicU32::new(0));
    let start = Instant::now();

    let counter_ref = counter.clone();
    let result: Result<u32, &str> = retry_with_backoff(5, Duration::from_millis(1000), move || {
        counter_ref.fetch_add(1, Ordering::SeqCst);
        async { Ok(42) }
    })
    .await;

    assert_eq!(tokio_test::assert_ok!(result), 42);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(Instant::now() - start, Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_retry_with_single_attempt_never_sleeps() {
    let counter = Arc::new(AtomicU32::new(0));
    let start = Instant::now();

    let counter_ref = counter.clone();
    let result: Result<(), &str> = retry_with_backoff(1, Duration::from_millis(1000), move || {
        counter_ref.fetch_add(1, Ordering::SeqCst);
        async { Err("failure") }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(Instant::now() - start, Duration::ZERO);
}
