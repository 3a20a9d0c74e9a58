//! Per-actor running totals keyed by first-seen order.

use std::collections::HashMap;

use crate::TallyError;

/// Running totals with a stable slot per actor.
///
/// Slots are handed out in first-seen order, and that order is the tie-break
/// key for rankings: among equal totals the actor seen first ranks higher.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunningTotals<'a> {
    slots: HashMap<&'a str, usize>,
    totals: Vec<(&'a str, u64)>,
}

impl<'a> RunningTotals<'a> {
    /// Pre-register `actors` with a zero total, in iteration order.
    pub(crate) fn seeded<I>(actors: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = Self::default();
        for actor in actors {
            out.slot(actor);
        }
        out
    }

    fn slot(&mut self, actor: &'a str) -> usize {
        if let Some(&i) = self.slots.get(actor) {
            return i;
        }
        let i = self.totals.len();
        self.slots.insert(actor, i);
        self.totals.push((actor, 0));
        i
    }

    /// Add `quantity` to `actor`, registering the actor on first sight.
    ///
    /// A total that would exceed `u64::MAX` is an error; the stored total is
    /// left unchanged.
    pub(crate) fn add(&mut self, actor: &'a str, quantity: u64) -> Result<(), TallyError> {
        let i = self.slot(actor);
        let current = self.totals[i].1;
        self.totals[i].1 = current.checked_add(quantity).ok_or_else(|| {
            TallyError::Data(format!(
                "running total for {actor:?} overflows u64 (adding {quantity} to {current})"
            ))
        })?;
        Ok(())
    }

    /// All `(actor, total)` pairs in first-seen order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'a str, u64)> + '_ {
        self.totals.iter().copied()
    }

    /// The `n` highest totals, descending; ties keep first-seen order.
    pub(crate) fn top(&self, n: usize) -> Vec<(&'a str, u64)> {
        let mut order: Vec<usize> = (0..self.totals.len()).collect();
        order.sort_by(|&a, &b| self.totals[b].1.cmp(&self.totals[a].1).then(a.cmp(&b)));
        order.truncate(n);
        order.into_iter().map(|i| self.totals[i]).collect()
    }
}
