//! Adapter utilities for the `fullpager` crate.
//!
//! The `fullpager` crate is UI-agnostic and focuses on the navigation state
//! machine. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - Tween-driven track animation for committed page transitions
//! - A controller that plumbs raw input events and a frame clock through
//!   the pager
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use tween::{TrackTween, TransitionCurve};
