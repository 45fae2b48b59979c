use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

/// Run operations concurrently, at most `max_parallel` in flight, and return
/// every outcome at its submission index.
///
/// Completion order never reorders results. Each operation owns its result
/// slot; the semaphore is the only shared resource, and its permit is held
/// for the operation's full lifetime, so every exit path (success, failure,
/// cancellation of the whole batch) releases the slot.
pub async fn run_all_settled<F, T, E>(
    operations: impl IntoIterator<Item = F>,
    max_parallel: usize,
) -> Vec<Result<T, E>>
where
    F: Future<Output = Result<T, E>>,
{
    let gate = Arc::new(Semaphore::new(max_parallel.max(1)));
    let wrapped = operations.into_iter().map(|operation| {
        let gate = Arc::clone(&gate);
        async move {
            // The gate is never closed, so acquire cannot fail
            let _permit = gate.acquire().await.expect("gate closed");
            operation.await
        }
    });
    join_all(wrapped).await
}

/// Run operations concurrently and collect their values.
///
/// All operations are allowed to finish, then the first failure by
/// submission index propagates and the remaining results are discarded;
/// no partial silent success.
pub async fn run_all<F, T, E>(
    operations: impl IntoIterator<Item = F>,
    max_parallel: usize,
) -> Result<Vec<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    let settled = run_all_settled(operations, max_parallel).await;
    let mut values = Vec::with_capacity(settled.len());
    for result in settled {
        values.push(result?);
    }
    Ok(values)
}

/// Run operation groups nested one level deep.
///
/// Groups are flattened before execution and results come back in
/// outer-then-inner submission order, flattened one level. Empty groups
/// contribute nothing.
pub async fn run_all_nested<F, T, E>(
    groups: impl IntoIterator<Item = Vec<F>>,
    max_parallel: usize,
) -> Result<Vec<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    run_all(groups.into_iter().flatten(), max_parallel).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::{Duration, sleep};

    #[tokio::test]
    async fn test_results_keep_submission_order() {
        let operations =
            ["first", "second", "third"].map(|name| async move { Ok::<_, String>(name) });
        let values = run_all(operations, 2).await.unwrap();
        assert_eq!(values, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_settled_captures_failures_in_place() {
        async fn op(index: usize) -> Result<usize, String> {
            if index == 1 {
                Err("boom".to_string())
            } else {
                Ok(index)
            }
        }

        let settled = run_all_settled((0..3).map(op), 1).await;
        assert_eq!(settled[0], Ok(0));
        assert_eq!(settled[1], Err("boom".to_string()));
        assert_eq!(settled[2], Ok(2));
    }

    #[tokio::test]
    async fn test_first_failure_by_index_propagates() {
        // The later-submitted failure finishes first; the earlier one wins
        async fn op(index: usize) -> Result<usize, String> {
            if index == 0 {
                sleep(Duration::from_millis(20)).await;
                Err("early".to_string())
            } else {
                Err("late".to_string())
            }
        }
        let err = run_all((0..2).map(op), 2).await.unwrap_err();
        assert_eq!(err, "early");
    }

    #[tokio::test]
    async fn test_parallelism_is_bounded() {
        static IN_FLIGHT: AtomicUsize = AtomicUsize::new(0);
        static PEAK: AtomicUsize = AtomicUsize::new(0);

        async fn op(index: usize) -> Result<usize, String> {
            let now = IN_FLIGHT.fetch_add(1, Ordering::SeqCst) + 1;
            PEAK.fetch_max(now, Ordering::SeqCst);
            sleep(Duration::from_millis(5)).await;
            IN_FLIGHT.fetch_sub(1, Ordering::SeqCst);
            Ok(index)
        }

        let values = run_all((0..8).map(op), 3).await.unwrap();
        assert_eq!(values.len(), 8);
        assert!(PEAK.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_nested_groups_flatten_in_order() {
        let op = |index: usize| async move { Ok::<_, String>(index) };
        let groups = vec![vec![op(0), op(1)], vec![], vec![op(2)]];
        let values = run_all_nested(groups, 2).await.unwrap();
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_empty_batch_returns_empty() {
        let values: Vec<usize> = run_all(Vec::<std::future::Ready<Result<usize, String>>>::new(), 4)
            .await
            .unwrap();
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn test_dropping_the_batch_releases_slots() {
        // Cancel a stuck batch, then run a fresh one to completion; a leaked
        // permit would deadlock nothing here (the gate dies with the batch),
        // but the second batch proves cancellation leaves the runtime clean.
        let stuck = run_all(
            vec![async {
                sleep(Duration::from_secs(3600)).await;
                Ok::<_, String>(0)
            }],
            1,
        );
        {
            tokio::pin!(stuck);
            let raced = tokio::time::timeout(Duration::from_millis(10), &mut stuck).await;
            assert!(raced.is_err());
        } // stuck is dropped here, permits released with it

        let values = run_all(vec![async { Ok::<_, String>(7) }], 1).await.unwrap();
        assert_eq!(values, vec![7]);
    }
}
