//! Generation-keyed timer queue
//!
//! Timers are plain data polled from the event loop. Every timer remembers
//! the generation it was scheduled in; `invalidate()` bumps the generation so
//! anything scheduled before a reset or a new round can never fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<K> {
    due: Instant,
    generation: u64,
    seq: u64,
    kind: K,
}

/// Cancellable one-shot timers
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    pending: Vec<Pending<K>>,
    generation: u64,
    next_seq: u64,
}

impl<K: Clone> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            generation: 0,
            next_seq: 0,
        }
    }

    /// Current generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Schedule `kind` to fire `after` from `now`
    pub fn schedule(&mut self, now: Instant, after: Duration, kind: K) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: now + after,
            generation: self.generation,
            seq,
            kind,
        });
    }

    /// Drop every pending timer and start a new generation
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pending.clear();
    }

    /// Number of live timers
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest deadline, used to bound the event poll timeout
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return the earliest timer due at `now` with its deadline.
    ///
    /// Ties are broken by scheduling order. Timers from an older generation
    /// are discarded rather than returned.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, K)> {
        loop {
            let index = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due <= now)
                .min_by_key(|(_, p)| (p.due, p.seq))
                .map(|(i, _)| i)?;

            let timer = self.pending.swap_remove(index);
            if timer.generation == self.generation {
                return Some((timer.due, timer.kind));
            }
        }
    }
}

impl<K: Clone> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Tick {
        A,
        B,
    }

    #[test]
    fn test_fires_in_due_order() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(now, Duration::from_millis(300), Tick::B);
        timers.schedule(now, Duration::from_millis(100), Tick::A);

        assert_eq!(timers.pop_due(now), None);
        let later = now + Duration::from_millis(500);
        assert_eq!(
            timers.pop_due(later),
            Some((now + Duration::from_millis(100), Tick::A))
        );
        assert_eq!(
            timers.pop_due(later),
            Some((now + Duration::from_millis(300), Tick::B))
        );
        assert_eq!(timers.pop_due(later), None);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_ties_keep_schedule_order() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(now, Duration::from_millis(50), Tick::B);
        timers.schedule(now, Duration::from_millis(50), Tick::A);
        let later = now + Duration::from_millis(50);
        assert_eq!(timers.pop_due(later).map(|(_, k)| k), Some(Tick::B));
        assert_eq!(timers.pop_due(later).map(|(_, k)| k), Some(Tick::A));
    }

    #[test]
    fn test_invalidate_drops_pending() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(now, Duration::from_millis(10), Tick::A);
        timers.invalidate();
        assert_eq!(timers.generation(), 1);
        assert_eq!(timers.pop_due(now + Duration::from_secs(1)), None);
        assert_eq!(timers.next_due(), None);
    }

    #[test]
    fn test_next_due() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        assert_eq!(timers.next_due(), None);
        timers.schedule(now, Duration::from_millis(200), Tick::A);
        timers.schedule(now, Duration::from_millis(50), Tick::B);
        assert_eq!(timers.next_due(), Some(now + Duration::from_millis(50)));
        assert_eq!(timers.len(), 2);
    }
}
