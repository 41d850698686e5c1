use alloc::sync::Arc;
use core::cell::Cell;

use crate::gesture::{KeyBindings, TouchTracker, wheel_intent};
use crate::indicator::IndicatorState;
use crate::{PageDirection, PageTransition, PagerOptions};

/// A headless full-viewport paging state machine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it raw input values plus a monotonic millisecond
///   clock; the same clock must later drive [`Self::update_transition`].
/// - Rendering is exposed via [`Self::current_page`], [`Self::track_offset`]
///   and [`Self::indicator`].
///
/// For tween-driven track animation and a ready-made event/frame plumbing
/// layer, see the `fullpager-adapter` crate.
#[derive(Clone, Debug)]
pub struct Pager {
    options: PagerOptions,
    current_page: usize,
    scroll_enabled: bool,
    transition: Option<PageTransition>,
    touch: TouchTracker,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Pager {
    /// Creates a new pager from options.
    ///
    /// `options.initial_page` is clamped into `[0, count - 1]`; an empty page
    /// set pins the current page at zero.
    pub fn new(options: PagerOptions) -> Self {
        let current_page = if options.count == 0 {
            0
        } else {
            options.initial_page.min(options.count - 1)
        };
        pdebug!(
            count = options.count,
            current_page,
            scroll_enabled = options.scroll_enabled,
            "Pager::new"
        );
        Self {
            current_page,
            scroll_enabled: options.scroll_enabled,
            transition: None,
            touch: TouchTracker::new(),
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Pager, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_wheel_threshold(&mut self, wheel_threshold: f64) {
        self.options.wheel_threshold = wheel_threshold;
    }

    pub fn set_keys(&mut self, keys: KeyBindings) {
        self.options.keys = keys;
    }

    pub fn set_durations(&mut self, transition_duration_ms: u64, lock_duration_ms: u64) {
        self.options.transition_duration_ms = transition_duration_ms;
        self.options.lock_duration_ms = lock_duration_ms;
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.transition.is_some());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Useful when an adapter applies several mutations per frame and the
    /// callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.options.count
    }

    pub fn is_empty(&self) -> bool {
        self.options.count == 0
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The in-flight transition, if the animation lock is engaged.
    pub fn transition(&self) -> Option<PageTransition> {
        self.transition
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Re-enables gesture-origin navigation.
    pub fn enable_scroll(&mut self) {
        self.scroll_enabled = true;
    }

    /// Suppresses gesture-origin navigation until [`Self::enable_scroll`].
    ///
    /// Only [`Self::request_navigate`] observes the gate; [`Self::scroll_to`]
    /// and all rendering queries are unaffected.
    pub fn disable_scroll(&mut self) {
        self.scroll_enabled = false;
    }

    /// Committed offset of the page track.
    ///
    /// Pages move together as a single strip, each sized to one viewport, so
    /// the settled offset is `current_page × viewport_main`.
    pub fn track_offset(&self, viewport_main: u32) -> u64 {
        self.current_page as u64 * viewport_main as u64
    }

    /// Layout offset of one page inside the track (`index × viewport_main`).
    ///
    /// Hosts size each page element to the viewport and place it here, at
    /// startup and again on resize.
    pub fn page_offset(&self, index: usize, viewport_main: u32) -> Option<u64> {
        (index < self.options.count).then(|| index as u64 * viewport_main as u64)
    }

    /// Derived indicator snapshot for the current page.
    pub fn indicator(&self) -> IndicatorState {
        let active = (self.options.count > 0).then_some(self.current_page);
        IndicatorState::new(self.options.count, active)
    }

    /// Normalizes a wheel delta against the configured deadzone and applies
    /// the resulting intent. Returns whether a navigation was committed.
    pub fn handle_wheel(&mut self, delta: f64, now_ms: u64) -> bool {
        match wheel_intent(delta, self.options.wheel_threshold) {
            Some(direction) => self.request_navigate(direction, now_ms),
            None => false,
        }
    }

    /// Arms the touch tracker with the touch-start vertical coordinate.
    pub fn handle_touch_start(&mut self, y: f64) {
        self.touch.start(y);
    }

    /// Resolves the armed touch sequence and applies the resulting intent.
    ///
    /// Only the first move after [`Self::handle_touch_start`] produces an
    /// intent; later moves of the same sequence return `false`.
    pub fn handle_touch_move(&mut self, y: f64, now_ms: u64) -> bool {
        match self.touch.movement(y) {
            Some(direction) => self.request_navigate(direction, now_ms),
            None => false,
        }
    }

    /// Disarms a touch sequence that ended without a move.
    pub fn handle_touch_end(&mut self) {
        self.touch.cancel();
    }

    /// Looks up a key code in the configured allow-lists and applies the
    /// resulting intent. Returns whether a navigation was committed.
    pub fn handle_key(&mut self, code: u32, now_ms: u64) -> bool {
        match self.options.keys.intent(code) {
            Some(direction) => self.request_navigate(direction, now_ms),
            None => false,
        }
    }

    /// Applies a gesture-origin navigation intent.
    ///
    /// Accepted only while scrolling is enabled, no transition is in flight,
    /// and the ±1 move stays inside the page set. Rejected requests are
    /// dropped silently: no state change, no notification, `false` returned.
    pub fn request_navigate(&mut self, direction: PageDirection, now_ms: u64) -> bool {
        if !self.scroll_enabled || self.transition.is_some() {
            return false;
        }
        let Some(target) = self.neighbor(direction) else {
            return false;
        };
        self.commit(target, now_ms);
        true
    }

    /// Jumps to an absolute page.
    ///
    /// Validated against the page set only: the jump ignores both the
    /// animation lock and the scroll gate, so callers can retarget a pager
    /// mid-flight or while gestures are suppressed. A mid-flight jump
    /// replaces the in-flight transition and restarts the lock clock.
    pub fn scroll_to(&mut self, page: usize, now_ms: u64) -> bool {
        if page >= self.options.count {
            pwarn!(page, count = self.options.count, "scroll_to: page out of range");
            return false;
        }
        self.commit(page, now_ms);
        true
    }

    fn neighbor(&self, direction: PageDirection) -> Option<usize> {
        match direction {
            PageDirection::Previous => self.current_page.checked_sub(1),
            PageDirection::Next => {
                let next = self.current_page.saturating_add(1);
                (next < self.options.count).then_some(next)
            }
        }
    }

    fn commit(&mut self, target: usize, now_ms: u64) {
        ptrace!(from = self.current_page, to = target, now_ms, "commit");
        self.transition = Some(PageTransition {
            from: self.current_page,
            to: target,
            started_ms: now_ms,
        });
        self.current_page = target;
        self.notify();
    }

    /// Releases the animation lock once the lock window has elapsed.
    ///
    /// Call this from your frame loop or timer with the same clock that
    /// feeds the intake methods. The window is
    /// [`PagerOptions::effective_lock_ms`], measured from the commit.
    pub fn update_transition(&mut self, now_ms: u64) {
        let Some(t) = self.transition else {
            return;
        };
        if now_ms.saturating_sub(t.started_ms) >= self.options.effective_lock_ms() {
            self.finish_transition();
        }
    }

    /// Force-completes the in-flight transition (e.g. when the host observes
    /// a transition-end event). A no-op when nothing is in flight.
    pub fn finish_transition(&mut self) {
        if self.transition.take().is_some() {
            self.notify();
        }
    }
}
