//! Async forms of the fan-in combinator.

use core::future::Future;

use futures_util::future::join_all;

use crate::types::partition::{partition_results, PartitionedResults};
use crate::types::Outcome;

/// Awaits one future yielding a batch of outcomes, then partitions it.
///
/// # Examples
///
/// ```
/// use error_trail::async_ext::partition_results_future;
/// use error_trail::{err, ok};
/// use std::io;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let batch = async { vec![ok(1), err(io::Error::other("lost")), ok(3)] };
/// let partitioned = partition_results_future(batch).await;
///
/// assert_eq!(partitioned.data(), &[1, 3]);
/// assert_eq!(partitioned.errors().map(|e| e.len()), Some(1));
/// # }
/// ```
pub async fn partition_results_future<T, Fut, I>(results: Fut) -> PartitionedResults<T>
where
    Fut: Future<Output = I>,
    I: IntoIterator<Item = Outcome<T>>,
{
    partition_results(results.await)
}

/// Resolves every future concurrently, then partitions the outcomes.
///
/// All futures are polled together rather than awaited one by one. The
/// partition follows input order, not completion order.
///
/// # Examples
///
/// ```
/// use error_trail::async_ext::partition_results_all;
/// use error_trail::ok;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let delayed = |value: u64| async move {
///     tokio::time::sleep(Duration::from_millis(30 - value * 10)).await;
///     ok(value)
/// };
///
/// let partitioned = partition_results_all([delayed(0), delayed(1), delayed(2)]).await;
/// assert_eq!(partitioned.data(), &[0, 1, 2]);
/// # }
/// ```
pub async fn partition_results_all<T, I>(futures: I) -> PartitionedResults<T>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T>>,
{
    partition_results(join_all(futures).await)
}
