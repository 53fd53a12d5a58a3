//! Deferred task dispatch.
//!
//! A [`Dispatcher`] is the "run on the next turn" primitive of the host event
//! loop. Code that must not mutate state from inside a notification (for
//! example clearing a selection from within its own selection-change slot)
//! posts a task instead, and the host drains the queue between turns with
//! [`Dispatcher::process_pending`].
//!
//! A turn only runs the tasks that were pending when it started. Tasks posted
//! by a running task wait for the following turn.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::CoreError;
use crate::logging::targets;

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

/// A boxed task closure.
type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// A cloneable handle to a shared queue of deferred tasks.
///
/// Clones share the same queue.
#[derive(Clone, Default)]
pub struct Dispatcher {
    tasks: Arc<Mutex<VecDeque<TaskData>>>,
}

impl Dispatcher {
    /// Create a dispatcher with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a task to run on the next turn.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn post<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = next_task_id();
        self.tasks.lock().push_back(TaskData {
            id,
            task: Box::new(task),
        });
        tracing::trace!(target: targets::DISPATCH, task = id.as_u64(), "task posted");
        id
    }

    /// Cancel a pending task.
    pub fn cancel(&self, id: TaskId) -> Result<(), CoreError> {
        let mut tasks = self.tasks.lock();
        match tasks.iter().position(|t| t.id == id) {
            Some(pos) => {
                tasks.remove(pos);
                Ok(())
            }
            None => Err(CoreError::InvalidTask),
        }
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.lock().is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Run one turn: every task that was pending when the call started.
    ///
    /// The queue lock is released before any task runs. Returns the number
    /// of tasks processed.
    pub fn process_pending(&self) -> usize {
        let batch = std::mem::take(&mut *self.tasks.lock());
        let count = batch.len();
        if count > 0 {
            tracing::debug!(target: targets::DISPATCH, count, "processing deferred tasks");
        }
        for task_data in batch {
            (task_data.task)();
        }
        count
    }

    /// Run turns until the queue is empty or `max_turns` turns have run.
    ///
    /// Returns the total number of tasks processed.
    pub fn process_until_idle(&self, max_turns: usize) -> usize {
        let mut total = 0;
        for _ in 0..max_turns {
            let processed = self.process_pending();
            if processed == 0 {
                break;
            }
            total += processed;
        }
        total
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.pending_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_post_and_process() {
        let dispatcher = Dispatcher::new();
        let ran = Arc::new(AtomicUsize::new(0));

        let ran_clone = ran.clone();
        dispatcher.post(move || {
            ran_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(dispatcher.has_pending());
        assert_eq!(ran.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.process_pending(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn test_task_posted_during_turn_waits_for_next_turn() {
        let dispatcher = Dispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let inner_dispatcher = dispatcher.clone();
        let log_outer = log.clone();
        dispatcher.post(move || {
            log_outer.lock().push("outer");
            let log_inner = log_outer.clone();
            inner_dispatcher.post(move || log_inner.lock().push("inner"));
        });

        assert_eq!(dispatcher.process_pending(), 1);
        assert_eq!(*log.lock(), vec!["outer"]);
        assert_eq!(dispatcher.pending_count(), 1);

        assert_eq!(dispatcher.process_pending(), 1);
        assert_eq!(*log.lock(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_cancel() {
        let dispatcher = Dispatcher::new();
        let ran = Arc::new(AtomicUsize::new(0));

        let ran_clone = ran.clone();
        let id = dispatcher.post(move || {
            ran_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(dispatcher.cancel(id), Ok(()));
        assert_eq!(dispatcher.cancel(id), Err(CoreError::InvalidTask));
        assert_eq!(dispatcher.process_pending(), 0);
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_process_until_idle_is_bounded() {
        let dispatcher = Dispatcher::new();

        // A task that always reschedules itself.
        fn reschedule(dispatcher: Dispatcher) {
            let next = dispatcher.clone();
            dispatcher.post(move || reschedule(next));
        }
        reschedule(dispatcher.clone());

        assert_eq!(dispatcher.process_until_idle(5), 5);
        assert_eq!(dispatcher.pending_count(), 1);
    }

    #[test]
    fn test_task_ids_are_unique() {
        let dispatcher = Dispatcher::new();
        let a = dispatcher.post(|| {});
        let b = dispatcher.post(|| {});
        assert_ne!(a, b);
        assert!(b.as_u64() > a.as_u64());
    }
}
