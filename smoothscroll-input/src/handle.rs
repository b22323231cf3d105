use alloc::boxed::Box;
use core::fmt;

use crate::{DeltaMode, DeviceEvent, DeviceEventKind, EventType, path_absorbs};

/// Pixels per line for [`DeltaMode::Line`] wheel deltas.
pub const LINE_HEIGHT: f64 = 16.66;

/// Scale factors applied to normalized deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputOptions {
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            wheel_multiplier: 1.0,
            touch_multiplier: 1.0,
        }
    }
}

impl InputOptions {
    pub fn with_wheel_multiplier(mut self, wheel_multiplier: f64) -> Self {
        self.wheel_multiplier = wheel_multiplier;
        self
    }

    pub fn with_touch_multiplier(mut self, touch_multiplier: f64) -> Self {
        self.touch_multiplier = touch_multiplier;
        self
    }
}

/// Which device event produced an [`InputDelta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputSource {
    Wheel,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl InputSource {
    pub fn is_touch(self) -> bool {
        !matches!(self, Self::Wheel)
    }
}

/// A normalized, signed scroll delta in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputDelta {
    pub delta_x: f64,
    pub delta_y: f64,
    pub source: InputSource,
}

/// The root element a [`ScrollHandle`] listens on.
pub trait EventSource {
    fn add_listener(&mut self, event: EventType, passive: bool);
    fn remove_listener(&mut self, event: EventType);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

/// Normalizes wheel/touch events from one root element into scroll deltas.
///
/// Accepted events are reported both as the return value of [`ScrollHandle::handle_event`] and
/// through the optional callback registered with [`ScrollHandle::on_scroll`].
pub struct ScrollHandle {
    options: InputOptions,
    callback: Option<Box<dyn FnMut(&InputDelta)>>,
    touch: Point,
    last_delta: Point,
    attached: bool,
}

impl fmt::Debug for ScrollHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollHandle")
            .field("options", &self.options)
            .field("attached", &self.attached)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

impl ScrollHandle {
    /// Registers wheel and touch listeners on `source`.
    pub fn attach<S: EventSource + ?Sized>(source: &mut S, options: InputOptions) -> Self {
        for event in EventType::ALL {
            source.add_listener(event, event.is_passive());
        }
        idebug!(
            wheel_multiplier = options.wheel_multiplier,
            touch_multiplier = options.touch_multiplier,
            "ScrollHandle::attach"
        );
        Self {
            options,
            callback: None,
            touch: Point::default(),
            last_delta: Point::default(),
            attached: true,
        }
    }

    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Sets the scroll callback, replacing any previous one.
    pub fn on_scroll(&mut self, callback: impl FnMut(&InputDelta) + 'static) {
        if self.attached {
            self.callback = Some(Box::new(callback));
        }
    }

    /// Processes one device event.
    ///
    /// Returns `None` when the handle is detached or the event belongs to a nested scroll
    /// container (the event is then left untouched so that container scrolls natively).
    pub fn handle_event(&mut self, event: &mut DeviceEvent) -> Option<InputDelta> {
        if !self.attached {
            return None;
        }

        let delta = match event.kind() {
            DeviceEventKind::Wheel {
                delta_x,
                delta_y,
                mode,
                page_size,
            } => {
                if path_absorbs(event.path(), delta_x, delta_y) {
                    itrace!(delta_x, delta_y, "wheel absorbed by nested scroller");
                    return None;
                }
                event.prevent_default();
                let unit = match mode {
                    DeltaMode::Pixel => 1.0,
                    DeltaMode::Line => LINE_HEIGHT,
                    DeltaMode::Page => page_size,
                };
                let scale = unit * self.options.wheel_multiplier;
                InputDelta {
                    delta_x: delta_x * scale,
                    delta_y: delta_y * scale,
                    source: InputSource::Wheel,
                }
            }
            DeviceEventKind::TouchStart { x, y } => {
                self.touch = Point { x, y };
                self.last_delta = Point::default();
                InputDelta {
                    delta_x: 0.0,
                    delta_y: 0.0,
                    source: InputSource::TouchStart,
                }
            }
            DeviceEventKind::TouchMove { x, y } => {
                let m = self.options.touch_multiplier;
                let delta_x = -(x - self.touch.x) * m;
                let delta_y = -(y - self.touch.y) * m;
                if path_absorbs(event.path(), delta_x, delta_y) {
                    itrace!(delta_x, delta_y, "touch absorbed by nested scroller");
                    return None;
                }
                self.touch = Point { x, y };
                self.last_delta = Point {
                    x: delta_x,
                    y: delta_y,
                };
                event.prevent_default();
                InputDelta {
                    delta_x,
                    delta_y,
                    source: InputSource::TouchMove,
                }
            }
            DeviceEventKind::TouchEnd => InputDelta {
                delta_x: self.last_delta.x,
                delta_y: self.last_delta.y,
                source: InputSource::TouchEnd,
            },
        };

        if let Some(cb) = self.callback.as_mut() {
            cb(&delta);
        }
        Some(delta)
    }

    /// Removes all listeners from `source` and drops the callback. Safe to call twice.
    pub fn destroy<S: EventSource + ?Sized>(&mut self, source: &mut S) {
        if !self.attached {
            return;
        }
        for event in EventType::ALL {
            source.remove_listener(event);
        }
        self.attached = false;
        self.callback = None;
        idebug!("ScrollHandle::destroy");
    }
}
