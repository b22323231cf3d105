//! A headless smooth-scroll engine.
//!
//! For wheel/touch normalization and nested scroll container detection, see the
//! `smoothscroll-input` crate (re-exported as [`input`]).
//!
//! This crate keeps a simulated ("animated") scroll position in sync with a real viewport:
//! discrete wheel/touch deltas and programmatic jumps become a continuous, velocity-aware
//! motion, while scrolls the platform performs on its own (scrollbar drags, keyboard, native
//! momentum) are tracked without fighting them.
//!
//! It is UI-agnostic. A host layer is expected to provide (see [`Host`]):
//! - the viewport position, extent and an instant position setter
//! - display-refresh callbacks and timers
//! - selector/element resolution for `scroll_to`
//! - wheel/touch events on the root element
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod engine;
mod error;
mod host;
pub mod math;
mod options;
mod registry;
mod state;
mod tween;
mod types;


pub use engine::{MAX_FRAME_DELTA, ScrollSubscription, SmoothScroll};
pub use error::SubscribeError;
pub use host::{FrameRequestId, FrameScheduler, Host, TargetResolver, TimerId, Viewport};
pub use options::{
    DEFAULT_LERP, DEFAULT_SETTLE_DELAY_MS, DEFAULT_TOUCH_MULTIPLIER, DEFAULT_WHEEL_MULTIPLIER,
    EngineOptions, ScrollToOptions,
};
pub use registry::{EventRegistry, Listener, ListenerId, Subscription, emit};
pub use state::{ScrollSnapshot, ScrollState};
pub use tween::{Easing, Motion, ScrollTween, TweenStep};
pub use types::{Direction, Extent, ScrollEvent, ScrollTarget, ScrollingMode};

pub use smoothscroll_input::{self as input, DeviceEvent, EventSource, EventType};
