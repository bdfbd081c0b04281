//! Async task lifecycle tracking for debugging hung tasks and performance

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::task::JoinHandle;

/// Number of tracked tasks currently alive
static ACTIVE_TASKS: AtomicU64 = AtomicU64::new(0);

/// Ids handed to spawned tasks, for log correlation
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(0);

/// Tasks running longer than this are logged as potential hangs
const SLOW_TASK_SECS: u64 = 30;

/// Get current number of active tasks
pub fn active_task_count() -> u64 {
    ACTIVE_TASKS.load(Ordering::Relaxed)
}

/// Decrements the active counter when the task finishes or is aborted.
struct ActiveTask {
    counter: &'static AtomicU64,
}

impl ActiveTask {
    fn enter(counter: &'static AtomicU64) -> Self {
        counter.fetch_add(1, Ordering::Relaxed);
        Self { counter }
    }
}

impl Drop for ActiveTask {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Spawn an instrumented async task with lifecycle tracking
///
/// # Arguments
///
/// * `name` - Task name for logging (e.g., "explain_concept", "carousel_timer")
/// * `future` - The async task to execute
///
/// # Example
///
/// ```rust,ignore
/// spawn_tracked("explain_concept", async move {
///     service.generate(&prompt).await
/// });
/// ```
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    let active = ActiveTask::enter(&ACTIVE_TASKS);
    let start = Instant::now();

    tracing::debug!(task = %name, task_id = task_id, "Task spawned");

    tokio::spawn(async move {
        let _active = active;
        let result = future.await;
        let duration = start.elapsed();

        tracing::debug!(
            task = %name,
            task_id = task_id,
            duration_ms = duration.as_millis(),
            "Task completed"
        );

        if duration.as_secs() > SLOW_TASK_SECS {
            tracing::warn!(
                task = %name,
                task_id = task_id,
                duration_ms = duration.as_millis(),
                "Task took very long (potential hang)"
            );
        }

        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    #[test]
    fn test_active_task_guard_balances() {
        let first = ActiveTask::enter(&TEST_COUNTER);
        let second = ActiveTask::enter(&TEST_COUNTER);
        assert_eq!(TEST_COUNTER.load(Ordering::Relaxed), 2);

        drop(first);
        assert_eq!(TEST_COUNTER.load(Ordering::Relaxed), 1);
        drop(second);
        assert_eq!(TEST_COUNTER.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_spawn_tracked_returns_output() {
        let handle = spawn_tracked("test_task", async { 21 * 2 });
        assert_eq!(handle.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_aborted_task_still_completes_join() {
        let handle = spawn_tracked("test_abort", std::future::pending::<()>());
        handle.abort();
        let err = handle.await.unwrap_err();
        assert!(err.is_cancelled());
    }
}
