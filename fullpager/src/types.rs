/// Direction of a single-page navigation intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageDirection {
    Previous,
    Next,
}

/// A committed transition between two pages.
///
/// While one of these is held by the pager, the animation lock is engaged:
/// gesture-origin navigation is dropped until the lock window elapses (see
/// [`crate::Pager::update_transition`]) or the transition is force-completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageTransition {
    pub from: usize,
    pub to: usize,
    /// Clock reading at the moment the transition was committed.
    pub started_ms: u64,
}

/// One marker in the indicator row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorSlot {
    pub index: usize,
    pub active: bool,
}
