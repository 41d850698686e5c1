//! Derived indicator view: one marker per page, exactly one active.

use crate::IndicatorSlot;

/// Snapshot of the indicator row for a committed page.
///
/// Purely derived from the pager, so re-reading it twice for the same page
/// yields the same marker state. Hosts re-render from this after every
/// committed navigation (the `on_change` callback marks those) and once at
/// startup, after the marker nodes have been built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorState {
    count: usize,
    active: Option<usize>,
}

impl IndicatorState {
    pub(crate) fn new(count: usize, active: Option<usize>) -> Self {
        debug_assert!(
            active.is_none_or(|i| i < count),
            "active marker out of range (active={active:?}, count={count})"
        );
        Self { count, active }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the single active marker; `None` for an empty page set.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// 1-based token for per-page themed backgrounds ("bg1", "bg2", ...).
    pub fn theme_slot(&self) -> Option<usize> {
        self.active.map(|i| i + 1)
    }

    /// Iterates every marker in order without allocations.
    pub fn for_each_slot(&self, mut f: impl FnMut(IndicatorSlot)) {
        for index in 0..self.count {
            f(IndicatorSlot {
                index,
                active: self.is_active(index),
            });
        }
    }
}
