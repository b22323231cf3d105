use smoothscroll_input::EventSource;

use crate::Extent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// The real scroll container.
pub trait Viewport {
    fn scroll_position(&self) -> f64;

    /// Instant, non-animated write. The host may later report it as a native scroll.
    fn set_scroll_position(&mut self, position: f64);

    fn extent(&self) -> Extent;

    /// Device-class policy input for [`crate::EngineOptions::disable_on_mobile`].
    fn is_mobile(&self) -> bool {
        false
    }

    /// Starts or stops forwarding native scroll notifications to
    /// [`crate::SmoothScroll::on_native_scroll`].
    fn listen_native_scroll(&mut self, _listen: bool) {}
}

/// Display-refresh callbacks and timers.
///
/// A fired frame request must be delivered to [`crate::SmoothScroll::on_frame`], and a fired
/// timer to [`crate::SmoothScroll::on_timeout`]. Requests are one-shot.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequestId;
    fn cancel_frame(&mut self, id: FrameRequestId);
    fn set_timeout(&mut self, delay_ms: u64) -> TimerId;
    fn clear_timeout(&mut self, id: TimerId);
}

/// Resolves selectors and element handles to positions.
pub trait TargetResolver {
    type Element;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Position of the element's leading edge relative to the top of the viewport.
    fn element_top(&self, element: &Self::Element) -> Option<f64>;
}

/// Everything [`crate::SmoothScroll`] needs from its environment.
pub trait Host: Viewport + FrameScheduler + TargetResolver + EventSource {}

impl<T: Viewport + FrameScheduler + TargetResolver + EventSource> Host for T {}
