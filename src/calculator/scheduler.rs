//! Deferred work for the calculator.
//!
//! The engine never sleeps or spawns anything itself. It hands a
//! [`DeferredTask`] to a [`Scheduler`], and whoever owns the engine feeds the
//! task back through [`Calculator::run_deferred`](super::Calculator::run_deferred)
//! once the delay has elapsed.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Work the engine asks to have delivered back to it later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// Reset the calculator after an error has been shown.
    ClearError,
}

/// Capability to run a task after a delay.
pub trait Scheduler {
    fn run_after(&self, delay: Duration, task: DeferredTask);
}

/// Scheduler backed by the tokio timer.
///
/// Each task is slept on in its own tokio task and then sent over a flume
/// channel to the loop that owns the engine. Must be used from within a
/// tokio runtime.
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
    sender: flume::Sender<DeferredTask>,
}

impl TokioScheduler {
    /// Create a scheduler on the current runtime, returning the receiving end
    /// for deferred tasks.
    pub fn new() -> (Self, flume::Receiver<DeferredTask>) {
        let (sender, receiver) = flume::unbounded();
        let scheduler = Self {
            handle: tokio::runtime::Handle::current(),
            sender,
        };
        (scheduler, receiver)
    }
}

impl Scheduler for TokioScheduler {
    fn run_after(&self, delay: Duration, task: DeferredTask) {
        let sender = self.sender.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(task).is_err() {
                tracing::debug!("Deferred task {:?} dropped, receiver is gone", task);
            }
        });
    }
}

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    pending: Vec<(Duration, DeferredTask)>,
}

/// Scheduler driven by a manually advanced clock.
///
/// Clones share the same clock, so one clone can be given to the engine while
/// the test keeps another to advance time.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock and return every task that became due, oldest first.
    pub fn advance(&self, by: Duration) -> Vec<DeferredTask> {
        let mut clock = self.clock.borrow_mut();
        clock.now += by;
        let now = clock.now;

        let mut due: Vec<(Duration, DeferredTask)> = Vec::new();
        clock.pending.retain(|&(at, task)| {
            if at <= now {
                due.push((at, task));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(at, _)| at);
        due.into_iter().map(|(_, task)| task).collect()
    }

    /// Number of tasks that have not fired yet.
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }
}

impl Scheduler for ManualScheduler {
    fn run_after(&self, delay: Duration, task: DeferredTask) {
        let mut clock = self.clock.borrow_mut();
        let at = clock.now + delay;
        clock.pending.push((at, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_fires_when_due() {
        let scheduler = ManualScheduler::new();
        scheduler.run_after(Duration::from_millis(2000), DeferredTask::ClearError);

        assert!(scheduler.advance(Duration::from_millis(1999)).is_empty());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(
            scheduler.advance(Duration::from_millis(1)),
            vec![DeferredTask::ClearError]
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_manual_scheduler_clones_share_clock() {
        let scheduler = ManualScheduler::new();
        let engine_side = scheduler.clone();
        engine_side.run_after(Duration::from_millis(10), DeferredTask::ClearError);

        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(10)).len(), 1);
    }

    #[tokio::test]
    async fn test_tokio_scheduler_delivers_over_channel() {
        let (scheduler, receiver) = TokioScheduler::new();
        scheduler.run_after(Duration::from_millis(5), DeferredTask::ClearError);

        let task = receiver.recv_async().await.unwrap();
        assert_eq!(task, DeferredTask::ClearError);
    }
}
