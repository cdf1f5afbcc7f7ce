//! Cooperative, cancellable timers polled from a millisecond clock.
//!
//! Nothing here runs on its own: the owner calls `pop_due(now)` from its frame
//! loop or event handlers and reacts to whatever fired. Closing the queue
//! cancels every pending timer and refuses new ones, so a torn-down owner can
//! never be called back.

/// Identifies one scheduled timer for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<E> {
    handle: TimerHandle,
    due_ms: f64,
    event: E,
}

#[derive(Debug)]
pub struct TimerQueue<E> {
    pending: Vec<Pending<E>>,
    next_id: u64,
    closed: bool,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
            closed: false,
        }
    }

    /// Schedule `event` to fire once `due_ms` has been reached.
    ///
    /// Returns `None` after `close` has been called.
    pub fn schedule(&mut self, due_ms: f64, event: E) -> Option<TimerHandle> {
        if self.closed {
            return None;
        }
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due_ms,
            event,
        });
        Some(handle)
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(i) => {
                self.pending.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove and return the earliest timer due at `now_ms`, together with its
    /// scheduled due time. Timers due at the same instant fire in the order
    /// they were scheduled.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(f64, E)> {
        let mut best: Option<usize> = None;
        for (i, p) in self.pending.iter().enumerate() {
            if p.due_ms > now_ms {
                continue;
            }
            match best {
                Some(b) if self.pending[b].due_ms <= p.due_ms => {}
                _ => best = Some(i),
            }
        }
        let p = self.pending.remove(best?);
        Some((p.due_ms, p.event))
    }

    /// Cancel everything and refuse further scheduling. Safe to call more
    /// than once.
    pub fn close(&mut self) {
        self.pending.clear();
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
