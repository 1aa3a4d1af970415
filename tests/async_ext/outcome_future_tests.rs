//! Tests for OutcomeFuture and with_result_async.

use error_trail::async_ext::{with_result_async, OutcomeFuture};
use error_trail::{err, ok, ChainedError, Outcome, UnknownError};
use futures_core::future::FusedFuture;
use std::convert::Infallible;
use std::future::{ready, Ready};
use std::io;
use std::time::Duration;

#[test]
fn outcome_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<OutcomeFuture<Ready<Result<(), io::Error>>>>();
    assert_sync::<OutcomeFuture<Ready<Result<(), io::Error>>>>();
}

#[tokio::test]
async fn resolved_value_becomes_success() {
    let fetch = with_result_async(|id: u32| async move {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Ok::<_, io::Error>(id * 2)
    });

    assert_eq!(fetch(21).await, ok(42));
}

#[tokio::test]
async fn rejected_future_becomes_failure() {
    let fetch = with_result_async(|id: u32| async move {
        Err::<u32, _>(io::Error::other(format!("record {id} missing")))
    });

    let failed = fetch(9).await;
    assert_eq!(failed.error().unwrap().message(), "record 9 missing");
}

#[tokio::test]
async fn panic_while_polling_is_coerced() {
    let risky = with_result_async(|fail: bool| async move {
        tokio::task::yield_now().await;
        if fail {
            panic!("async boom");
        }
        Ok::<_, Infallible>(1)
    });

    assert_eq!(risky(false).await, ok(1));

    let failed = risky(true).await;
    let chain = failed.error().unwrap();
    assert_eq!(chain.message(), "Unknown error");
    assert!(chain.downcast_ref::<UnknownError>().is_some());
}

#[tokio::test]
async fn synchronous_panic_yields_failed_future() {
    let eager = with_result_async(|fail: bool| {
        if fail {
            panic!("before the future exists");
        }
        ready(Ok::<_, Infallible>("ready"))
    });

    assert_eq!(eager(false).await, ok("ready"));
    assert_eq!(eager(true).await.error().unwrap().message(), "Unknown error");
}

#[tokio::test]
async fn unwrap_inside_async_body_recovers_chain() {
    async fn lookup(key: &'static str) -> Outcome<u8> {
        if key == "known" {
            ok(1)
        } else {
            err(io::Error::other(format!("{key} is not configured")))
        }
    }

    let read = with_result_async(|key: &'static str| async move {
        Ok::<_, Infallible>(lookup(key).await.unwrap())
    });

    assert_eq!(read("known").await, ok(1));

    let failed = read("other").await;
    let chain = failed.error().unwrap();
    assert_eq!(chain.message(), "other is not configured");
    assert!(chain.downcast_ref::<UnknownError>().is_none());
}

#[tokio::test]
async fn outcome_output_passes_through() {
    let relay = with_result_async(|value: i8| async move {
        if value < 0 {
            err(io::Error::other("negative"))
        } else {
            ok(value)
        }
    });

    assert_eq!(relay(3).await, ok(3));
    assert_eq!(relay(-3).await.error().unwrap().message(), "negative");
}

#[tokio::test]
async fn failed_future_resolves_immediately() {
    let chain = ChainedError::from_error(io::Error::other("precomputed"));
    let future: OutcomeFuture<Ready<Result<u8, io::Error>>> = OutcomeFuture::failed(chain.clone());

    assert_eq!(future.await.into_error(), Some(chain));
}

#[tokio::test]
async fn future_is_terminated_after_completion() {
    let mut future = Box::pin(OutcomeFuture::new(ready(Ok::<_, io::Error>(5))));
    assert!(!future.is_terminated());

    let outcome = (&mut future).await;
    assert_eq!(outcome, ok(5));
    assert!(future.is_terminated());
}
