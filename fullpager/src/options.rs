use alloc::sync::Arc;

use crate::gesture::{DEFAULT_WHEEL_THRESHOLD, KeyBindings};
use crate::pager::Pager;

/// A callback fired when a pager state update occurs.
///
/// The second argument is `is_animating`.
pub type OnChangeCallback = Arc<dyn Fn(&Pager, bool) + Send + Sync>;

/// Duration of the visual track transition.
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 750;

/// How long the animation lock holds after a commit.
///
/// Slightly longer than the visual transition, so the track has always
/// settled before new input is accepted.
pub const DEFAULT_LOCK_DURATION_MS: u64 = 800;

/// Configuration for [`crate::Pager`].
///
/// Cheap to clone: the only heavy field (`on_change`) is stored in an `Arc`.
#[derive(Clone)]
pub struct PagerOptions {
    /// Number of pages. Fixed for the lifetime of the pager.
    pub count: usize,

    /// Page shown before any navigation. Clamped into range by `Pager::new`.
    pub initial_page: usize,

    /// Wheel deadzone; see [`crate::wheel_intent`].
    pub wheel_threshold: f64,

    /// Key code allow-lists; see [`crate::KeyBindings`].
    pub keys: KeyBindings,

    /// Whether gesture-origin navigation starts out enabled.
    pub scroll_enabled: bool,

    /// Duration of the visual track transition.
    pub transition_duration_ms: u64,

    /// Requested lock window after a commit. The pager uses
    /// [`Self::effective_lock_ms`], which never undercuts the visual
    /// transition.
    pub lock_duration_ms: u64,

    /// Optional callback fired when the pager's internal state changes.
    ///
    /// The `is_animating` argument indicates whether a transition is in
    /// flight.
    pub on_change: Option<OnChangeCallback>,
}

impl PagerOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            initial_page: 0,
            wheel_threshold: DEFAULT_WHEEL_THRESHOLD,
            keys: KeyBindings::default(),
            scroll_enabled: true,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            lock_duration_ms: DEFAULT_LOCK_DURATION_MS,
            on_change: None,
        }
    }

    pub fn with_initial_page(mut self, initial_page: usize) -> Self {
        self.initial_page = initial_page;
        self
    }

    pub fn with_wheel_threshold(mut self, wheel_threshold: f64) -> Self {
        self.wheel_threshold = wheel_threshold;
        self
    }

    pub fn with_keys(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_scroll_enabled(mut self, scroll_enabled: bool) -> Self {
        self.scroll_enabled = scroll_enabled;
        self
    }

    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn with_lock_duration_ms(mut self, duration_ms: u64) -> Self {
        self.lock_duration_ms = duration_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Pager, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// The lock window actually applied after a commit.
    ///
    /// The lock must outlive the visual transition, so the requested lock
    /// duration is raised to `transition_duration_ms` when it falls short.
    pub fn effective_lock_ms(&self) -> u64 {
        self.lock_duration_ms.max(self.transition_duration_ms)
    }
}

impl core::fmt::Debug for PagerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("count", &self.count)
            .field("initial_page", &self.initial_page)
            .field("wheel_threshold", &self.wheel_threshold)
            .field("keys", &self.keys)
            .field("scroll_enabled", &self.scroll_enabled)
            .field("transition_duration_ms", &self.transition_duration_ms)
            .field("lock_duration_ms", &self.lock_duration_ms)
            .finish_non_exhaustive()
    }
}
