use alloc::vec::Vec;

use crate::ScrollNode;

/// The device event types a [`crate::ScrollHandle`] listens to on its root element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventType {
    Wheel,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl EventType {
    pub const ALL: [Self; 4] = [
        Self::Wheel,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
    ];

    /// Passive listeners promise never to prevent the default action.
    ///
    /// Wheel and touch-move must stay non-passive so accepted deltas can take over scrolling.
    pub fn is_passive(self) -> bool {
        matches!(self, Self::TouchStart | Self::TouchEnd)
    }
}

/// Unit of a wheel delta as reported by the device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceEventKind {
    Wheel {
        delta_x: f64,
        delta_y: f64,
        mode: DeltaMode,
        /// Size of one "page" for [`DeltaMode::Page`] deltas (usually the viewport height).
        page_size: f64,
    },
    /// Position of the first touch point, in client coordinates.
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    TouchEnd,
}

impl DeviceEventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Wheel { .. } => EventType::Wheel,
            Self::TouchStart { .. } => EventType::TouchStart,
            Self::TouchMove { .. } => EventType::TouchMove,
            Self::TouchEnd => EventType::TouchEnd,
        }
    }
}

/// A platform-neutral wheel/touch event.
///
/// `path` is the propagation path from the event target up to (and including) the root
/// element, as far as it is made of elements. Only scroll geometry is needed.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceEvent {
    kind: DeviceEventKind,
    path: Vec<ScrollNode>,
    default_prevented: bool,
}

impl DeviceEvent {
    pub fn new(kind: DeviceEventKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
            default_prevented: false,
        }
    }

    /// A pixel-mode wheel event.
    pub fn wheel(delta_x: f64, delta_y: f64) -> Self {
        Self::new(DeviceEventKind::Wheel {
            delta_x,
            delta_y,
            mode: DeltaMode::Pixel,
            page_size: 0.0,
        })
    }

    pub fn touch_start(x: f64, y: f64) -> Self {
        Self::new(DeviceEventKind::TouchStart { x, y })
    }

    pub fn touch_move(x: f64, y: f64) -> Self {
        Self::new(DeviceEventKind::TouchMove { x, y })
    }

    pub fn touch_end() -> Self {
        Self::new(DeviceEventKind::TouchEnd)
    }

    pub fn with_path(mut self, path: Vec<ScrollNode>) -> Self {
        self.path = path;
        self
    }

    pub fn kind(&self) -> DeviceEventKind {
        self.kind
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    pub fn path(&self) -> &[ScrollNode] {
        &self.path
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Hosts check this after dispatch to decide whether to cancel the platform event.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
