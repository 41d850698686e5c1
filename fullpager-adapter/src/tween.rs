/// A small tween over the page track offset, for adapter-driven transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackTween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub curve: TransitionCurve,
}

impl TrackTween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, curve: TransitionCurve) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            curve,
        }
    }

    /// Tween between two committed pages on a track of `viewport_main`-sized
    /// slots.
    pub fn between_pages(
        from_page: usize,
        to_page: usize,
        viewport_main: u32,
        start_ms: u64,
        duration_ms: u64,
        curve: TransitionCurve,
    ) -> Self {
        Self::new(
            from_page as u64 * viewport_main as u64,
            to_page as u64 * viewport_main as u64,
            start_ms,
            duration_ms,
            curve,
        )
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.curve.sample(t);

        let from = self.from as f32;
        let to = self.to as f32;
        let v = from + (to - from) * eased;
        v.max(0.0) as u64
    }

    /// Re-aims an in-flight tween at a new target, starting from the
    /// currently sampled offset.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.curve);
    }
}

/// Shape of a track transition over normalized time.
///
/// `EaseInOut` is the default and approximates the ease-in-out bezier most
/// fullpage stylesheets declare on their track; `Linear` exists for hosts
/// (and tests) that want exact intermediate offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionCurve {
    Linear,
    #[default]
    EaseInOut,
}

impl TransitionCurve {
    /// Maps normalized time `t` in `[0, 1]` to normalized progress.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            // Cubic ease, symmetric around the midpoint.
            Self::EaseInOut if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOut => {
                let u = 2.0 * (1.0 - t);
                1.0 - u * u * u / 2.0
            }
        }
    }
}
