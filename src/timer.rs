use std::collections::BTreeMap;
use std::time::Instant;

/// Handle to an armed deadline. Ids increase monotonically and are never
/// handed out twice, so a superseded handle can never match a live timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expired {
    pub id: TimerId,
    pub owner: String,
}

#[derive(Debug)]
struct Pending {
    owner: String,
    deadline: Instant,
}

/// Deadlines driven by an injected clock. Nothing fires on its own: the
/// caller hands in `now` and collects whatever has expired.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: BTreeMap<TimerId, Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, owner: &str, deadline: Instant) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.insert(
            id,
            Pending {
                owner: owner.to_string(),
                deadline,
            },
        );
        id
    }

    /// Returns false if the timer already fired or was canceled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Cancel `previous` (if any) and arm a fresh deadline in one step.
    pub fn rearm(&mut self, previous: Option<TimerId>, owner: &str, deadline: Instant) -> TimerId {
        if let Some(id) = previous {
            self.cancel(id);
        }
        self.arm(owner, deadline)
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest first. Equal deadlines come out in arming order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<Expired> {
        let mut due: Vec<(Instant, TimerId)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(id, p)| (p.deadline, *id))
            .collect();
        due.sort();

        due.into_iter()
            .filter_map(|(_, id)| {
                self.pending
                    .remove(&id)
                    .map(|p| Expired { id, owner: p.owner })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pop_due_returns_expired_in_deadline_order() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        let late = timers.arm("late", t0 + Duration::from_secs(3));
        let early = timers.arm("early", t0 + Duration::from_secs(1));
        let _future = timers.arm("future", t0 + Duration::from_secs(10));

        let fired = timers.pop_due(t0 + Duration::from_secs(5));
        assert_eq!(
            fired,
            vec![
                Expired { id: early, owner: "early".into() },
                Expired { id: late, owner: "late".into() },
            ]
        );
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn rearm_cancels_previous_handle() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        let first = timers.arm("card", t0 + Duration::from_secs(5));
        let second = timers.rearm(Some(first), "card", t0 + Duration::from_secs(9));

        assert_ne!(first, second);
        assert!(!timers.is_armed(first));
        assert!(timers.pop_due(t0 + Duration::from_secs(6)).is_empty());
        assert_eq!(timers.pop_due(t0 + Duration::from_secs(9)).len(), 1);
    }

    #[test]
    fn cancel_twice_reports_false() {
        let mut timers = TimerQueue::new();
        let id = timers.arm("card", Instant::now());
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.is_empty());
        assert!(timers.next_deadline().is_none());
    }
}
