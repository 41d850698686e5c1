//! Gesture normalization: raw wheel/touch/key input → navigation intents.
//!
//! Everything here is pure state plus arithmetic. Suppressing the native
//! event (`preventDefault`/`stopPropagation` or the TUI equivalent) stays in
//! the host layer, which should do so before handing the event over so the
//! host page's own scrolling never fires concurrently.

use alloc::vec::Vec;

use crate::PageDirection;

/// Wheel deltas within `±threshold` are ignored, so trackpad jitter does not
/// flip pages.
pub const DEFAULT_WHEEL_THRESHOLD: f64 = 20.0;

/// Key codes mapped to [`PageDirection::Previous`] (arrow left/up).
pub const DEFAULT_PREVIOUS_KEYS: &[u32] = &[37, 38];
/// Key codes mapped to [`PageDirection::Next`] (arrow right/down).
pub const DEFAULT_NEXT_KEYS: &[u32] = &[39, 40];

/// Maps a wheel delta to an intent.
///
/// Deltas beyond `+threshold` page forward and deltas beyond `-threshold`
/// page backward; anything inside the deadzone (the threshold value itself
/// included) produces no intent.
pub fn wheel_intent(delta: f64, threshold: f64) -> Option<PageDirection> {
    if delta > threshold {
        Some(PageDirection::Next)
    } else if delta < -threshold {
        Some(PageDirection::Previous)
    } else {
        None
    }
}

/// Allow-lists of key codes that page backward/forward.
///
/// Codes outside both lists produce no intent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBindings {
    previous: Vec<u32>,
    next: Vec<u32>,
}

impl KeyBindings {
    pub fn new(previous: impl Into<Vec<u32>>, next: impl Into<Vec<u32>>) -> Self {
        Self {
            previous: previous.into(),
            next: next.into(),
        }
    }

    pub fn intent(&self, code: u32) -> Option<PageDirection> {
        if self.previous.contains(&code) {
            Some(PageDirection::Previous)
        } else if self.next.contains(&code) {
            Some(PageDirection::Next)
        } else {
            None
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIOUS_KEYS, DEFAULT_NEXT_KEYS)
    }
}

/// Tracks one touch sequence and produces at most one intent from it.
///
/// [`start`](Self::start) arms the tracker with the touch-start vertical
/// coordinate; the first [`movement`](Self::movement) resolves the gesture
/// and disarms it, so a continuous swipe cannot emit repeated intents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchTracker {
    origin_y: Option<f64>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.origin_y.is_some()
    }

    pub fn start(&mut self, y: f64) {
        self.origin_y = Some(y);
    }

    /// Resolves the armed gesture against the current vertical coordinate.
    ///
    /// The finger moving down (`y` grows) reads as the content scrolling back
    /// toward the previous page; moving up pages forward. Returns `None` when
    /// the tracker is not armed or the coordinate has not changed; either way
    /// the sequence is consumed.
    pub fn movement(&mut self, y: f64) -> Option<PageDirection> {
        let origin = self.origin_y.take()?;
        if y > origin {
            Some(PageDirection::Previous)
        } else if y < origin {
            Some(PageDirection::Next)
        } else {
            None
        }
    }

    /// Disarms the tracker without producing an intent (touch-end/cancel).
    pub fn cancel(&mut self) {
        self.origin_y = None;
    }
}
