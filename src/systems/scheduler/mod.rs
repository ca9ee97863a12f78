//! Deterministic delayed tasks
//!
//! Tasks are due at an absolute frame timestamp and handed back by
//! `take_due` in due-time order (ties keep scheduling order). Nothing runs
//! on its own; the frame loop polls the queue with the caller's clock.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameTask {
    EvaluateOutcome,
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    due_ms: f64,
    seq: u64,
    task: GameTask,
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run once `delay_ms` of frame time has passed
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, task: GameTask) {
        let due_ms = now_ms + delay_ms.max(0.0);
        let entry = Scheduled {
            due_ms,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;

        // Keep sorted by (due, seq)
        let at = self
            .pending
            .iter()
            .position(|s| s.due_ms > due_ms)
            .unwrap_or(self.pending.len());
        self.pending.insert(at, entry);
    }

    /// Remove and return every task with `due_ms <= now_ms`
    pub fn take_due(&mut self, now_ms: f64) -> Vec<GameTask> {
        let split = self
            .pending
            .iter()
            .position(|s| s.due_ms > now_ms)
            .unwrap_or(self.pending.len());
        self.pending.drain(..split).map(|s| s.task).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    fn seqs(&self) -> Vec<u64> {
        self.pending.iter().map(|s| s.seq).collect()
    }
}
