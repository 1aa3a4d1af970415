//! Tests for FutureOutcomeExt trait.

use error_trail::prelude_async::*;
use std::io;
use std::sync::atomic::{AtomicU32, Ordering};

#[tokio::test]
async fn into_outcome_converts_ok() {
    let outcome = async { Ok::<_, io::Error>("done") }.into_outcome().await;

    assert_eq!(outcome, ok("done"));
}

#[tokio::test]
async fn into_outcome_converts_err() {
    let outcome = async { Err::<(), _>(io::Error::other("timed out")) }.into_outcome().await;

    let chain = outcome.error().unwrap();
    assert_eq!(chain.cause_count(), 1);
    assert_eq!(chain.message(), "timed out");
}

#[tokio::test]
async fn into_outcome_does_not_poll_before_await() {
    let polls = AtomicU32::new(0);

    let future = async {
        polls.fetch_add(1, Ordering::SeqCst);
        Ok::<_, io::Error>(())
    }
    .into_outcome();

    assert_eq!(polls.load(Ordering::SeqCst), 0);
    assert!(future.await.is_success());
    assert_eq!(polls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn map_err_composes_after_await() {
    let outcome = async { Err::<u8, _>(io::Error::other("dns failure")) }
        .into_outcome()
        .await
        .map_err(|cause| io::Error::other(format!("resolving host: {cause}")));

    assert_eq!(outcome.error().unwrap().cause_count(), 2);
}
