use fullpager::{Pager, PagerOptions};

use crate::{TrackTween, TransitionCurve};

/// A framework-neutral controller that wraps a [`fullpager::Pager`] and
/// drives the visual track transition.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `handle_wheel` / `handle_touch_*` / `handle_key` when input events
///   occur (suppress the native event first, so the host's own scrolling
///   never runs concurrently)
/// - `on_viewport_main` at startup and whenever the viewport is resized
/// - `tick(now_ms)` each frame/timer tick
///
/// `tick` returns the offset to render the track at while a transition tween
/// is running; apply it to the real page track, then re-render markers from
/// `pager().indicator()`.
#[derive(Clone, Debug)]
pub struct Controller {
    pager: Pager,
    tween: Option<TrackTween>,
    viewport_main: u32,
    curve: TransitionCurve,
}

impl Controller {
    pub fn new(options: PagerOptions) -> Self {
        Self::from_pager(Pager::new(options))
    }

    pub fn from_pager(pager: Pager) -> Self {
        Self {
            pager,
            tween: None,
            viewport_main: 0,
            curve: TransitionCurve::default(),
        }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn into_pager(self) -> Pager {
        self.pager
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    pub fn enable_scroll(&mut self) {
        self.pager.enable_scroll();
    }

    pub fn disable_scroll(&mut self) {
        self.pager.disable_scroll();
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some() || self.pager.is_animating()
    }

    pub fn curve(&self) -> TransitionCurve {
        self.curve
    }

    pub fn set_curve(&mut self, curve: TransitionCurve) {
        self.curve = curve;
    }

    pub fn viewport_main(&self) -> u32 {
        self.viewport_main
    }

    /// Call at startup and on every host resize.
    ///
    /// Pages are laid out as `index × viewport_main` slots, so a resize moves
    /// the whole track; an in-flight tween is re-aimed at the re-laid-out
    /// slot of the committed page.
    pub fn on_viewport_main(&mut self, viewport_main: u32) {
        self.viewport_main = viewport_main;
        if let Some(t) = &mut self.tween {
            t.to = self.pager.track_offset(viewport_main);
        }
    }

    /// Offset to render the track at, given `now_ms`.
    ///
    /// While a tween runs this is the sampled in-between offset; otherwise
    /// it is the committed page's slot.
    pub fn track_offset(&self, now_ms: u64) -> u64 {
        match &self.tween {
            Some(t) => t.sample(now_ms),
            None => self.pager.track_offset(self.viewport_main),
        }
    }

    /// Layout offsets for every page slot, in order.
    ///
    /// Hosts size each page element to the viewport and place it at the
    /// offset reported here.
    pub fn for_each_page_offset(&self, mut f: impl FnMut(usize, u64)) {
        for index in 0..self.pager.total_pages() {
            f(index, index as u64 * self.viewport_main as u64);
        }
    }

    pub fn handle_wheel(&mut self, delta: f64, now_ms: u64) -> bool {
        let accepted = self.pager.handle_wheel(delta, now_ms);
        if accepted {
            self.begin_tween(now_ms);
        }
        accepted
    }

    pub fn handle_touch_start(&mut self, y: f64) {
        self.pager.handle_touch_start(y);
    }

    pub fn handle_touch_move(&mut self, y: f64, now_ms: u64) -> bool {
        let accepted = self.pager.handle_touch_move(y, now_ms);
        if accepted {
            self.begin_tween(now_ms);
        }
        accepted
    }

    pub fn handle_touch_end(&mut self) {
        self.pager.handle_touch_end();
    }

    pub fn handle_key(&mut self, code: u32, now_ms: u64) -> bool {
        let accepted = self.pager.handle_key(code, now_ms);
        if accepted {
            self.begin_tween(now_ms);
        }
        accepted
    }

    /// Jumps to an absolute page; see [`fullpager::Pager::scroll_to`].
    ///
    /// A mid-flight jump retargets the running tween from its sampled
    /// position, which reads as an abrupt course change on screen.
    pub fn scroll_to(&mut self, page: usize, now_ms: u64) -> bool {
        let accepted = self.pager.scroll_to(page, now_ms);
        if accepted {
            self.begin_tween(now_ms);
        }
        accepted
    }

    fn begin_tween(&mut self, now_ms: u64) {
        let to = self.pager.track_offset(self.viewport_main);
        let duration = self.pager.options().transition_duration_ms;
        match &mut self.tween {
            Some(t) => t.retarget(now_ms, to, duration),
            None => {
                let from = self
                    .pager
                    .transition()
                    .map(|t| t.from as u64 * self.viewport_main as u64)
                    .unwrap_or(to);
                self.tween = Some(TrackTween::new(from, to, now_ms, duration, self.curve));
            }
        }
    }

    /// Advances the controller.
    ///
    /// Releases the pager's animation lock once its window elapses and,
    /// while a tween is running, returns the offset to apply to the track.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.pager.update_transition(now_ms);

        let tween = self.tween?;
        let off = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(off)
    }
}
