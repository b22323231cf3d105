//! Wheel/touch input normalization for the `smoothscroll` crate.
//!
//! This crate does not talk to any UI toolkit. A host translates its platform events into
//! [`DeviceEvent`] values (including the propagation path as [`ScrollNode`] geometry) and feeds
//! them to a [`ScrollHandle`], which:
//!
//! - converts wheel deltas (pixel / line / page units) into pixels
//! - turns touch drags into scroll deltas (drag down → scroll up)
//! - leaves events alone when a nested scroll container can still absorb them
//! - prevents the default action of every event it accepts
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod event;
mod handle;
mod nested;

#[cfg(test)]
mod tests;

pub use event::{DeltaMode, DeviceEvent, DeviceEventKind, EventType};
pub use handle::{EventSource, InputDelta, InputOptions, InputSource, LINE_HEIGHT, ScrollHandle};
pub use nested::{Overflow, ScrollNode, path_absorbs};
