use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPick {
    pub slot: usize,
    pub due_ms: u64,
}

/// Staggered picks waiting to fire. Entries are never cancelled; each one is
/// validated against the selection when it fires.
#[derive(Debug, Clone, Default)]
pub struct PickQueue {
    pending: VecDeque<PendingPick>,
    stagger_ms: u64,
}

impl PickQueue {
    pub fn new(stagger_ms: u64) -> Self {
        Self {
            pending: VecDeque::new(),
            stagger_ms,
        }
    }

    pub fn stagger_ms(&self) -> u64 {
        self.stagger_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, now_ms: u64, slots: Vec<usize>) {
        for (idx, slot) in slots.into_iter().enumerate() {
            self.pending.push_back(PendingPick {
                slot,
                due_ms: now_ms.saturating_add((idx as u64).saturating_mul(self.stagger_ms)),
            });
        }
        self.pending
            .make_contiguous()
            .sort_by_key(|pick| pick.due_ms);
    }

    /// Removes and returns every pick due at or before `now_ms`, oldest first.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<PendingPick> {
        let split = self
            .pending
            .iter()
            .position(|pick| pick.due_ms > now_ms)
            .unwrap_or(self.pending.len());
        self.pending.drain(..split).collect()
    }

    pub fn take_all(&mut self) -> Vec<PendingPick> {
        self.pending.drain(..).collect()
    }
}
