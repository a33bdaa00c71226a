//! Frontier work queue with a drain barrier
//!
//! The frontier is the shared queue of pending crawl tasks. Because workers
//! both consume from it and push newly discovered links back into it, the
//! total amount of work is unknown upfront; completion is tracked with an
//! outstanding-task counter instead of a fixed item count. The counter is
//! incremented on every push and decremented on every ack, and the drain
//! barrier releases exactly when it reaches zero.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::{Notify, Semaphore};

/// A unit of work for the crawl pool
///
/// `Shutdown` is the poison pill: it tells a worker to exit its loop. It is
/// never counted as outstanding work and must never be acked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Fetch and process one URL discovered at the given depth
    Fetch { url: String, depth: u32 },

    /// Exit the worker loop
    Shutdown,
}

impl Task {
    /// Convenience constructor for a fetch task
    pub fn fetch(url: impl Into<String>, depth: u32) -> Self {
        Task::Fetch {
            url: url.into(),
            depth,
        }
    }
}

/// Shared work queue of crawl tasks with completion tracking
///
/// The queue itself is FIFO; no ordering is guaranteed across concurrent
/// workers beyond that. The outstanding counter and the queue storage use
/// independent synchronization so that acking never contends with popping.
pub struct Frontier {
    /// Pending tasks, including any shutdown sentinels
    queue: Mutex<VecDeque<Task>>,

    /// One permit per queued task; `pop` blocks on this when the queue is empty
    available: Semaphore,

    /// Fetch tasks pushed but not yet acked
    outstanding: AtomicUsize,

    /// Signalled when `outstanding` drops to zero
    drained: Notify,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            available: Semaphore::new(0),
            outstanding: AtomicUsize::new(0),
            drained: Notify::new(),
        }
    }

    /// Enqueues a task
    ///
    /// Fetch tasks increment the outstanding counter and must later be
    /// matched by exactly one [`ack`](Self::ack). Shutdown sentinels are
    /// queued without being counted.
    pub fn push(&self, task: Task) {
        if matches!(task, Task::Fetch { .. }) {
            self.outstanding.fetch_add(1, Ordering::AcqRel);
        }
        self.queue.lock().unwrap().push_back(task);
        self.available.add_permits(1);
    }

    /// Dequeues the next task, waiting until one is available
    pub async fn pop(&self) -> Task {
        let permit = self
            .available
            .acquire()
            .await
            .expect("frontier semaphore is never closed");
        permit.forget();
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .expect("a permit is only issued for a queued task")
    }

    /// Acknowledges one popped fetch task as fully handled
    ///
    /// This must be called exactly once per popped `Fetch` task, on every
    /// exit path including early drops and fetch failures, after any child
    /// tasks have been pushed. When the last outstanding task is acked the
    /// drain barrier releases.
    pub fn ack(&self) {
        if self.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.drained.notify_waiters();
        }
    }

    /// Waits until every pushed fetch task has been popped and acked
    ///
    /// Returns immediately if nothing was ever pushed.
    pub async fn wait_drained(&self) {
        loop {
            // A Notified future only picks up notify_waiters() once it has
            // been enabled, so enable it before reading the counter or a
            // final ack landing in between would be lost.
            let notified = self.drained.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.outstanding.load(Ordering::Acquire) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Number of fetch tasks pushed but not yet acked
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    /// Number of tasks currently queued (including sentinels)
    pub fn len(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    /// Returns whether the queue is currently empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_push_pop_fifo_order() {
        let frontier = Frontier::new();
        frontier.push(Task::fetch("https://a.example/", 0));
        frontier.push(Task::fetch("https://b.example/", 1));

        assert_eq!(frontier.pop().await, Task::fetch("https://a.example/", 0));
        assert_eq!(frontier.pop().await, Task::fetch("https://b.example/", 1));
        assert!(frontier.is_empty());
    }

    #[tokio::test]
    async fn test_pop_blocks_until_push() {
        let frontier = Arc::new(Frontier::new());

        let popper = {
            let frontier = frontier.clone();
            tokio::spawn(async move { frontier.pop().await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!popper.is_finished());

        frontier.push(Task::fetch("https://a.example/", 0));
        let task = popper.await.unwrap();
        assert_eq!(task, Task::fetch("https://a.example/", 0));
    }

    #[tokio::test]
    async fn test_drain_returns_immediately_when_nothing_pushed() {
        let frontier = Frontier::new();
        frontier.wait_drained().await;
    }

    #[tokio::test]
    async fn test_shutdown_not_counted_as_outstanding() {
        let frontier = Frontier::new();
        frontier.push(Task::Shutdown);
        assert_eq!(frontier.outstanding(), 0);
        assert_eq!(frontier.len(), 1);

        // Drain must not wait on the sentinel.
        frontier.wait_drained().await;
        assert_eq!(frontier.pop().await, Task::Shutdown);
    }

    #[tokio::test]
    async fn test_drain_waits_for_ack() {
        let frontier = Arc::new(Frontier::new());
        frontier.push(Task::fetch("https://a.example/", 0));
        let _ = frontier.pop().await;

        let waiter = {
            let frontier = frontier.clone();
            tokio::spawn(async move { frontier.wait_drained().await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        frontier.ack();
        waiter.await.unwrap();
        assert_eq!(frontier.outstanding(), 0);
    }

    /// The drain barrier must see a final ack that lands between its
    /// counter check and its wait, not sleep through it.
    #[tokio::test]
    async fn test_drain_wakeup_not_lost_under_racing_ack() {
        for _ in 0..500 {
            let frontier = Arc::new(Frontier::new());
            frontier.push(Task::fetch("https://a.example/", 0));
            let _ = frontier.pop().await;

            let waiter = {
                let frontier = frontier.clone();
                tokio::spawn(async move { frontier.wait_drained().await })
            };

            // Ack from a plain thread so it can land at any point relative
            // to the waiter's polling.
            let acker = {
                let frontier = frontier.clone();
                std::thread::spawn(move || frontier.ack())
            };
            acker.join().unwrap();

            tokio::time::timeout(Duration::from_secs(1), waiter)
                .await
                .expect("drain waiter missed the final ack")
                .unwrap();
        }
    }

    /// Workers that fan out into more tasks than the pool has workers must
    /// neither deadlock the drain barrier nor release it early.
    #[tokio::test]
    async fn test_drain_under_concurrent_fanout() {
        let frontier = Arc::new(Frontier::new());
        let processed = Arc::new(AtomicUsize::new(0));

        // Three levels of fan-out 4 from a single root: 1 + 4 + 16 + 64 tasks.
        frontier.push(Task::fetch("root", 0));

        let mut workers = Vec::new();
        for _ in 0..2 {
            let frontier = frontier.clone();
            let processed = processed.clone();
            workers.push(tokio::spawn(async move {
                loop {
                    match frontier.pop().await {
                        Task::Fetch { url, depth } => {
                            if depth < 3 {
                                for i in 0..4 {
                                    frontier.push(Task::fetch(format!("{}/{}", url, i), depth + 1));
                                }
                            }
                            processed.fetch_add(1, Ordering::SeqCst);
                            frontier.ack();
                        }
                        Task::Shutdown => break,
                    }
                }
            }));
        }

        tokio::time::timeout(Duration::from_secs(5), frontier.wait_drained())
            .await
            .expect("drain barrier deadlocked");

        assert_eq!(processed.load(Ordering::SeqCst), 1 + 4 + 16 + 64);

        for _ in 0..workers.len() {
            frontier.push(Task::Shutdown);
        }
        for worker in workers {
            worker.await.unwrap();
        }
    }
}
