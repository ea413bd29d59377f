//! Scheduled-task list drained once per tick by the host loop.
//!
//! A delayed action is a payload with a countdown, keyed by the target it
//! acts on. Scheduling a new task for a key cancels the pending one, so no
//! two actions for the same target are ever in flight together.

#[derive(Debug, Clone)]
struct ScheduledTask<K, T> {
    key: K,
    remaining: f32,
    cancelled: bool,
    payload: T,
}

/// Countdown queue of deferred actions.
#[derive(Debug, Clone)]
pub struct TaskScheduler<K, T> {
    tasks: Vec<ScheduledTask<K, T>>,
}

impl<K: Copy + PartialEq, T> TaskScheduler<K, T> {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Queue `payload` to fire once `delay_seconds` have elapsed. Any pending
    /// task with the same key is cancelled first.
    pub fn schedule(&mut self, key: K, delay_seconds: f32, payload: T) {
        self.cancel(key);
        self.tasks.push(ScheduledTask {
            key,
            remaining: delay_seconds.max(0.0),
            cancelled: false,
            payload,
        });
    }

    /// Cancel pending tasks for `key`. A cancelled task never fires.
    pub fn cancel(&mut self, key: K) {
        for task in &mut self.tasks {
            if task.key == key {
                task.cancelled = true;
            }
        }
    }

    /// Number of pending (non-cancelled) tasks.
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.cancelled).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Advance countdowns by `dt` and return the payloads that came due, in
    /// scheduling order. Each payload is returned exactly once; a task fires
    /// at or after its delay, never before.
    pub fn advance(&mut self, dt: f32) -> Vec<T> {
        let mut due = Vec::new();
        let mut remaining_tasks = Vec::with_capacity(self.tasks.len());
        for mut task in self.tasks.drain(..) {
            if task.cancelled {
                continue;
            }
            task.remaining -= dt;
            if task.remaining <= 0.0 {
                due.push(task.payload);
            } else {
                remaining_tasks.push(task);
            }
        }
        self.tasks = remaining_tasks;
        due
    }
}

impl<K: Copy + PartialEq, T> Default for TaskScheduler<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once_at_or_after_delay() {
        let mut scheduler: TaskScheduler<u64, &str> = TaskScheduler::new();
        scheduler.schedule(1, 1.0, "done");

        assert!(scheduler.advance(0.5).is_empty());
        assert!(scheduler.advance(0.4).is_empty());
        assert_eq!(scheduler.advance(0.1), vec!["done"]);
        assert!(scheduler.advance(10.0).is_empty());
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut scheduler: TaskScheduler<u64, &str> = TaskScheduler::new();
        scheduler.schedule(1, 0.5, "a");
        scheduler.cancel(1);

        assert!(scheduler.advance(1.0).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn rescheduling_same_key_replaces_pending_task() {
        let mut scheduler: TaskScheduler<u64, &str> = TaskScheduler::new();
        scheduler.schedule(1, 0.5, "old");
        scheduler.schedule(1, 2.0, "new");

        assert_eq!(scheduler.pending(), 1);
        assert!(scheduler.advance(1.0).is_empty(), "old delay must not apply");
        assert_eq!(scheduler.advance(1.0), vec!["new"]);
    }

    #[test]
    fn due_tasks_keep_scheduling_order() {
        let mut scheduler: TaskScheduler<u64, u32> = TaskScheduler::new();
        scheduler.schedule(1, 0.3, 1);
        scheduler.schedule(2, 0.1, 2);
        scheduler.schedule(3, 0.2, 3);

        assert_eq!(scheduler.advance(0.5), vec![1, 2, 3]);
    }

    #[test]
    fn zero_delay_fires_on_next_tick() {
        let mut scheduler: TaskScheduler<u64, &str> = TaskScheduler::new();
        scheduler.schedule(1, 0.0, "now");
        assert_eq!(scheduler.advance(0.0), vec!["now"]);
    }

    #[test]
    fn independent_keys_do_not_interfere() {
        let mut scheduler: TaskScheduler<u64, &str> = TaskScheduler::new();
        scheduler.schedule(1, 1.0, "a");
        scheduler.schedule(2, 1.0, "b");
        scheduler.cancel(1);

        assert_eq!(scheduler.advance(1.0), vec!["b"]);
    }
}
