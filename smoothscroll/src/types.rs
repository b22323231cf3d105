use alloc::borrow::ToOwned;
use alloc::string::String;
use core::str::FromStr;

use crate::SubscribeError;

/// Sign of the last position change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Forward
        } else if delta < 0.0 {
            Self::Backward
        } else {
            Self::Still
        }
    }

    pub fn signum(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }
}

/// Who is currently authoritative over the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollingMode {
    #[default]
    Idle,
    /// The platform is scrolling (scrollbar drag, keyboard, native momentum...).
    Native,
    /// A tween or touch drag owned by the engine.
    Programmatic,
}

/// One-shot guard for the native scroll notification caused by our own viewport write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum NativeScrollGate {
    #[default]
    Open,
    SuppressNext,
}

/// Events emitted by [`crate::SmoothScroll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEvent {
    Scroll,
    ScrollEnd,
}

impl ScrollEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::ScrollEnd => "scrollend",
        }
    }
}

impl FromStr for ScrollEvent {
    type Err = SubscribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scroll" => Ok(Self::Scroll),
            "scrollend" => Ok(Self::ScrollEnd),
            "" => Err(SubscribeError::EmptyEventName),
            other => Err(SubscribeError::UnknownEvent(other.to_owned())),
        }
    }
}

/// Scroll geometry of the viewport on the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    /// Total content size.
    pub scrollable: f64,
    /// Visible viewport size.
    pub visible: f64,
}

impl Extent {
    pub fn limit(&self) -> f64 {
        (self.scrollable - self.visible).max(0.0)
    }
}

/// Something [`crate::SmoothScroll::scroll_to`] can scroll to.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTarget<E> {
    Offset(f64),
    Top,
    Bottom,
    /// Resolved through [`crate::TargetResolver::query_selector`].
    Selector(String),
    Element(E),
}

impl<E> From<f64> for ScrollTarget<E> {
    fn from(value: f64) -> Self {
        Self::Offset(value)
    }
}

impl<E> From<&str> for ScrollTarget<E> {
    /// `"top"` and `"bottom"` are reserved; anything else is a selector.
    fn from(value: &str) -> Self {
        match value {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            selector => Self::Selector(selector.to_owned()),
        }
    }
}

impl<E> From<String> for ScrollTarget<E> {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
