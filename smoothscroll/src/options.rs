use smoothscroll_input::InputOptions;

use crate::{Easing, Motion};

pub const DEFAULT_LERP: f64 = 0.11;
pub const DEFAULT_WHEEL_MULTIPLIER: f64 = 0.9;
pub const DEFAULT_TOUCH_MULTIPLIER: f64 = 3.0;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 400;

/// Configuration for [`crate::SmoothScroll`].
///
/// The engine takes ownership at construction and only hands out shared references afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOptions {
    /// Per-frame smoothing factor at 60fps. The decay rate is `lerp * 60` per second.
    pub lerp: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    /// Leaves the engine inert when the host reports a mobile device.
    pub disable_on_mobile: bool,
    /// Treats the scroll range as circular.
    pub loop_enabled: bool,
    /// Quiet period after the last native scroll before velocity is reset.
    pub settle_delay_ms: u64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            lerp: DEFAULT_LERP,
            wheel_multiplier: DEFAULT_WHEEL_MULTIPLIER,
            touch_multiplier: DEFAULT_TOUCH_MULTIPLIER,
            disable_on_mobile: true,
            loop_enabled: false,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lerp(mut self, lerp: f64) -> Self {
        self.lerp = lerp;
        self
    }

    pub fn with_wheel_multiplier(mut self, wheel_multiplier: f64) -> Self {
        self.wheel_multiplier = wheel_multiplier;
        self
    }

    pub fn with_touch_multiplier(mut self, touch_multiplier: f64) -> Self {
        self.touch_multiplier = touch_multiplier;
        self
    }

    pub fn with_disable_on_mobile(mut self, disable_on_mobile: bool) -> Self {
        self.disable_on_mobile = disable_on_mobile;
        self
    }

    pub fn with_loop(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub(crate) fn input_options(&self) -> InputOptions {
        InputOptions::default()
            .with_wheel_multiplier(self.wheel_multiplier)
            .with_touch_multiplier(self.touch_multiplier)
    }
}

/// Per-call options for [`crate::SmoothScroll::scroll_to`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions {
    /// Added to the resolved target before rounding.
    pub offset: f64,
    /// Jump without animating.
    pub immediate: bool,
    /// `true` for absolute jumps requested by application code.
    ///
    /// Input-driven calls pass `false`: in loop mode their target is taken as-is on the
    /// unbounded axis instead of being folded onto the shortest path, and they retarget an
    /// in-flight decay tween rather than restarting it.
    pub programmatic: bool,
    /// Overrides [`EngineOptions::lerp`] for this call.
    pub lerp: Option<f64>,
    /// Duration in seconds. Selects a timed tween.
    pub duration: Option<f64>,
    /// Easing curve. Selects a timed tween (1 second unless `duration` is set).
    pub easing: Option<Easing>,
}

impl Default for ScrollToOptions {
    fn default() -> Self {
        Self {
            offset: 0.0,
            immediate: false,
            programmatic: true,
            lerp: None,
            duration: None,
            easing: None,
        }
    }
}

impl ScrollToOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for an immediate jump.
    pub fn immediate() -> Self {
        Self::default().with_immediate(true)
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    pub fn with_programmatic(mut self, programmatic: bool) -> Self {
        self.programmatic = programmatic;
        self
    }

    pub fn with_lerp(mut self, lerp: f64) -> Self {
        self.lerp = Some(lerp);
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn motion(&self, default_lerp: f64) -> Motion {
        match (self.duration, self.easing) {
            (None, None) => Motion::from_lerp(self.lerp.unwrap_or(default_lerp)),
            (duration, easing) => Motion::Timed {
                duration: duration.unwrap_or(1.0),
                easing: easing.unwrap_or_default(),
            },
        }
    }
}
