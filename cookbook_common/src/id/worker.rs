use std::thread;
use std::time::Duration;
use time::OffsetDateTime;

use crate::id::Id;

/// Generator for ids bound to a worker number.
///
/// Ids produced by one generator are strictly increasing: within a
/// millisecond they are ordered by the sequence number, and the sequence only
/// wraps after the generator has slept past the current millisecond.
#[derive(Debug, Clone, Copy)]
pub struct WorkerIdGenerator {
    worker: u16,
    next: u16,
    last_ms: i128,
}

/// Duration to sleep after overflowing the sequence number.
const SLEEP_DURATION: Duration = Duration::from_millis(1);

impl WorkerIdGenerator {
    /// Creates a new worker id generator.
    #[must_use]
    pub const fn new(worker: u16) -> Self {
        Self {
            worker,
            next: 0,
            last_ms: 0,
        }
    }

    /// Returns the worker number embedded in generated ids.
    #[must_use]
    pub const fn worker(&self) -> u16 {
        self.worker
    }

    /// Generates a new id.
    ///
    /// # Examples
    ///
    /// ```
    /// use cookbook_common::id::worker::WorkerIdGenerator;
    ///
    /// let mut g = WorkerIdGenerator::new(1);
    /// let a = g.generate();
    /// let b = g.generate();
    /// assert!(a < b);
    /// ```
    pub fn generate(&mut self) -> Id {
        let mut now = OffsetDateTime::now_utc();
        let mut now_ms = now.unix_timestamp_nanos() / 1_000_000;

        if now_ms > self.last_ms {
            self.last_ms = now_ms;
            self.next = 0;
        } else if self.next == u16::MAX {
            while now_ms <= self.last_ms {
                thread::sleep(SLEEP_DURATION);
                now = OffsetDateTime::now_utc();
                now_ms = now.unix_timestamp_nanos() / 1_000_000;
            }
            self.last_ms = now_ms;
            self.next = 0;
        } else {
            // Clock stood still or went backwards; keep counting on the last millisecond.
            now = OffsetDateTime::UNIX_EPOCH
                + time::Duration::milliseconds(self.last_ms as i64);
        }

        let id = Id::from_worker_parts(now, self.worker, self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn it_works() {
        let mut g = WorkerIdGenerator::new(42);
        let id = g.generate();
        let (_timestamp, worker, _sequence) = id.decode_worker();
        assert_eq!(worker, 42);
        assert_eq!(g.worker(), 42);
    }

    #[test]
    fn monotonic() {
        const N: usize = 1_000;
        let mut g = WorkerIdGenerator::new(1);

        let ids: Vec<_> = (0..N).map(|_| g.generate()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), N);
    }

    #[test]
    fn sequence_overflow() {
        let mut g = WorkerIdGenerator::new(1);
        let before = g.generate();
        g.next = u16::MAX;
        let after = g.generate();
        assert!(before < after);
    }
}
