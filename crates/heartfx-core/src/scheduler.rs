//! One-shot timers on a virtual clock.
//!
//! The host advances the clock from its frame callback, so nothing here owns a
//! real timer. Tasks fire in due-time order; equal due times fire in the order
//! they were scheduled.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// Identifies one scheduled task. Cancelling a fired or unknown handle is a no-op.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TaskHandle(u64);

struct Entry<T> {
    due_ms: f64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap pops the earliest entry first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .total_cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Scheduler<T> {
    queue: BinaryHeap<Entry<T>>,
    pending: HashSet<u64>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            pending: HashSet::new(),
            next_seq: 0,
        }
    }

    /// Queue `task` to fire `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, task: T) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            due_ms: now_ms + delay_ms.max(0.0),
            seq,
            task,
        });
        self.pending.insert(seq);
        TaskHandle(seq)
    }

    /// Returns true if the task was still pending.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.pending.remove(&handle.0)
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.contains(&handle.0)
    }

    /// Pop the earliest live task due at or before `now_ms`, with its due time.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, T)> {
        while let Some(top) = self.queue.peek() {
            if top.due_ms > now_ms {
                return None;
            }
            let entry = self.queue.pop()?;
            if self.pending.remove(&entry.seq) {
                return Some((entry.due_ms, entry.task));
            }
            // cancelled, discard
        }
        None
    }

    /// Drop every queued task.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.pending.clear();
    }

    /// Number of live (not cancelled, not fired) tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
