//! A headless full-viewport paging engine.
//!
//! For adapter-level utilities (tween-driven track animation, event
//! plumbing), see the `fullpager-adapter` crate.
//!
//! This crate focuses on the state machine behind fullpage-style scroll
//! controllers: a fixed set of full-screen pages, a single authoritative
//! current-page index, an animation lock that serializes transitions, and
//! the normalization of wheel/touch/key input into navigation intents.
//!
//! It is UI-agnostic. A DOM/TUI layer is expected to provide:
//! - the number of page elements (fixed at construction)
//! - raw input values (wheel deltas, touch coordinates, key codes)
//! - a monotonic millisecond clock for the transition lifecycle
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod gesture;
mod indicator;
mod options;
mod pager;
mod types;


pub use gesture::{
    DEFAULT_NEXT_KEYS, DEFAULT_PREVIOUS_KEYS, DEFAULT_WHEEL_THRESHOLD, KeyBindings, TouchTracker,
    wheel_intent,
};
pub use indicator::IndicatorState;
pub use options::{
    DEFAULT_LOCK_DURATION_MS, DEFAULT_TRANSITION_DURATION_MS, OnChangeCallback, PagerOptions,
};
pub use pager::Pager;
pub use types::{IndicatorSlot, PageDirection, PageTransition};
