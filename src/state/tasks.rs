//! Cancellable delayed tasks
//!
//! Each [`TaskKind`] has at most one live task. Scheduling a kind again
//! aborts the previous task, and every completion carries a ticket so a
//! result that was already in flight when its task was cancelled can be
//! recognised and dropped.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Kinds of simulated-latency work the wizard runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Pause between picking a category and showing the basics form
    CategoryTransition,
    TitleSuggestions,
    DraftGeneration,
    /// "Building your preview" animation on entering the last step
    PreviewBuild,
}

/// Identifies one scheduled run of a task kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTicket {
    pub kind: TaskKind,
    generation: u64,
}

/// A finished task's output, tagged with its ticket
#[derive(Debug)]
pub struct Completed<T> {
    pub ticket: TaskTicket,
    pub output: T,
}

pub struct TaskScheduler<T> {
    tx: UnboundedSender<Completed<T>>,
    live: HashMap<TaskKind, (u64, JoinHandle<()>)>,
    next_generation: u64,
}

impl<T: Send + 'static> TaskScheduler<T> {
    pub fn new(tx: UnboundedSender<Completed<T>>) -> Self {
        Self {
            tx,
            live: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Run `work` in the background, replacing any live task of the same kind
    pub fn schedule<F>(&mut self, kind: TaskKind, work: F) -> TaskTicket
    where
        F: Future<Output = T> + Send + 'static,
    {
        self.cancel(kind);

        let generation = self.next_generation;
        self.next_generation += 1;
        let ticket = TaskTicket { kind, generation };

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let output = work.await;
            // The receiver is gone only during shutdown
            let _ = tx.send(Completed { ticket, output });
        });

        tracing::debug!(?kind, generation, "task scheduled");
        self.live.insert(kind, (generation, handle));
        ticket
    }

    /// Deliver `output` after `delay`
    pub fn schedule_after(&mut self, kind: TaskKind, delay: Duration, output: T) -> TaskTicket {
        self.schedule(kind, async move {
            tokio::time::sleep(delay).await;
            output
        })
    }

    /// Abort the live task of `kind`, if any
    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        match self.live.remove(&kind) {
            Some((generation, handle)) => {
                handle.abort();
                tracing::debug!(?kind, generation, "task cancelled");
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, (_, handle)) in self.live.drain() {
            handle.abort();
        }
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.live.contains_key(&kind)
    }

    /// Claim a completion. Returns false for results of cancelled or
    /// superseded runs; a claimed kind is no longer pending.
    pub fn accept(&mut self, ticket: TaskTicket) -> bool {
        match self.live.get(&ticket.kind) {
            Some((generation, _)) if *generation == ticket.generation => {
                self.live.remove(&ticket.kind);
                true
            }
            _ => {
                tracing::debug!(kind = ?ticket.kind, "stale task result dropped");
                false
            }
        }
    }
}

impl<T> Drop for TaskScheduler<T> {
    fn drop(&mut self) {
        for (_, (_, handle)) in self.live.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    const DELAY: Duration = Duration::from_millis(100);

    #[tokio::test(start_paused = true)]
    async fn test_delivers_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TaskScheduler::new(tx);

        let ticket = scheduler.schedule_after(TaskKind::DraftGeneration, DELAY, "draft");
        assert!(scheduler.is_pending(TaskKind::DraftGeneration));
        assert!(rx.try_recv().is_err());

        let done = rx.recv().await.unwrap();
        assert_eq!(done.ticket, ticket);
        assert_eq!(done.output, "draft");
        assert!(scheduler.accept(done.ticket));
        assert!(!scheduler.is_pending(TaskKind::DraftGeneration));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_replaces_previous_run() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TaskScheduler::new(tx);

        scheduler.schedule_after(TaskKind::TitleSuggestions, DELAY, "household");
        let second = scheduler.schedule_after(TaskKind::TitleSuggestions, DELAY, "beauty");

        let done = rx.recv().await.unwrap();
        assert_eq!(done.output, "beauty");
        assert_eq!(done.ticket, second);

        tokio::time::sleep(DELAY * 3).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TaskScheduler::new(tx);

        scheduler.schedule_after(TaskKind::PreviewBuild, DELAY, ());
        assert!(scheduler.cancel(TaskKind::PreviewBuild));
        assert!(!scheduler.cancel(TaskKind::PreviewBuild));

        tokio::time::sleep(DELAY * 3).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_in_flight_is_stale_after_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TaskScheduler::new(tx);

        scheduler.schedule_after(TaskKind::CategoryTransition, Duration::ZERO, 1);
        let done = rx.recv().await.unwrap();

        scheduler.cancel(TaskKind::CategoryTransition);
        assert!(!scheduler.accept(done.ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn test_kinds_are_independent() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TaskScheduler::new(tx);

        scheduler.schedule_after(TaskKind::TitleSuggestions, DELAY, "titles");
        scheduler.schedule_after(TaskKind::DraftGeneration, DELAY * 2, "draft");
        scheduler.cancel(TaskKind::TitleSuggestions);

        let done = rx.recv().await.unwrap();
        assert_eq!(done.output, "draft");
        assert!(scheduler.accept(done.ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TaskScheduler::new(tx);

        scheduler.schedule_after(TaskKind::TitleSuggestions, DELAY, 1);
        scheduler.schedule_after(TaskKind::DraftGeneration, DELAY, 2);
        scheduler.cancel_all();

        assert!(!scheduler.is_pending(TaskKind::TitleSuggestions));
        tokio::time::sleep(DELAY * 3).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_scheduler_aborts_live_tasks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TaskScheduler::new(tx);

        scheduler.schedule_after(TaskKind::PreviewBuild, DELAY, ());
        scheduler.schedule_after(TaskKind::DraftGeneration, DELAY * 2, ());
        drop(scheduler);

        tokio::time::sleep(DELAY * 3).await;
        assert!(rx.try_recv().is_err());
    }
}
