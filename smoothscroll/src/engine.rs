use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::mem;

use smoothscroll_input::{DeviceEvent, InputSource, ScrollHandle};

use crate::host::{FrameRequestId, Host, TimerId};
use crate::math::{clamp, safe_index, wrapped_distance};
use crate::registry::{self, EventRegistry, Subscription};
use crate::types::NativeScrollGate;
use crate::{
    Direction, EngineOptions, Motion, ScrollEvent, ScrollSnapshot, ScrollState, ScrollTarget,
    ScrollToOptions, ScrollTween, ScrollingMode, SubscribeError,
};

/// Largest frame step fed to the tween, in seconds.
pub const MAX_FRAME_DELTA: f64 = 0.1;

pub type ScrollSubscription = Subscription<ScrollSnapshot>;

/// Work that waits for the next display refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    EmitScrollEnd,
    OpenNativeScrollGate,
}

/// A headless smooth-scroll engine.
///
/// The engine owns the simulated position and arbitrates between three writers: wheel/touch
/// input, native scroll notifications from the host, and programmatic `scroll_to` calls.
/// It does not hold any UI objects; the [`Host`] provides the viewport, frame scheduling,
/// timers and target resolution, and forwards platform callbacks:
///
/// - `on_frame(now_ms)` for each requested display refresh
/// - `on_native_scroll()` whenever the viewport reports a scroll
/// - `on_timeout(id)` when a timer set by the engine fires
/// - `on_device_event(&mut event)` for wheel/touch events on the root element
pub struct SmoothScroll<H: Host> {
    host: H,
    options: EngineOptions,
    enabled: bool,
    destroyed: bool,
    running: bool,

    state: ScrollState,
    gate: NativeScrollGate,
    tween: ScrollTween,
    time_ms: f64,

    registry: Rc<RefCell<EventRegistry<ScrollSnapshot>>>,
    input: Option<ScrollHandle>,

    frame_request: Option<FrameRequestId>,
    settle_timer: Option<TimerId>,
    deferred: Vec<Deferred>,
}

impl<H: Host> fmt::Debug for SmoothScroll<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmoothScroll")
            .field("options", &self.options)
            .field("enabled", &self.enabled)
            .field("destroyed", &self.destroyed)
            .field("running", &self.running)
            .field("state", &self.state)
            .field("tween", &self.tween)
            .finish_non_exhaustive()
    }
}

impl<H: Host> SmoothScroll<H> {
    /// Creates an engine seeded from the host's current scroll position.
    ///
    /// When `options.disable_on_mobile` is set and the host reports a mobile device, the engine
    /// stays inert: no listeners are attached and every operation is a no-op.
    pub fn new(mut host: H, options: EngineOptions) -> Self {
        let enabled = !(options.disable_on_mobile && host.is_mobile());
        sdebug!(
            enabled,
            lerp = options.lerp,
            loop_enabled = options.loop_enabled,
            "SmoothScroll::new"
        );

        let (state, input) = if enabled {
            let state = ScrollState::at(host.scroll_position());
            let input = ScrollHandle::attach(&mut host, options.input_options());
            host.listen_native_scroll(true);
            (state, Some(input))
        } else {
            (ScrollState::default(), None)
        };

        Self {
            host,
            options,
            enabled,
            destroyed: false,
            running: false,
            state,
            gate: NativeScrollGate::Open,
            tween: ScrollTween::new(),
            time_ms: 0.0,
            registry: Rc::new(RefCell::new(EventRegistry::new())),
            input,
            frame_request: None,
            settle_timer: None,
            deferred: Vec::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// `true` between `start()` and `stop()`.
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn is_live(&self) -> bool {
        self.enabled && !self.destroyed
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn mode(&self) -> ScrollingMode {
        self.state.mode
    }

    pub fn animated_scroll(&self) -> f64 {
        self.state.animated_scroll
    }

    pub fn target_scroll(&self) -> f64 {
        self.state.target_scroll
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    pub fn last_velocity(&self) -> f64 {
        self.state.last_velocity
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_active()
    }

    /// Scrollable extent minus visible extent, never negative.
    pub fn limit(&self) -> f64 {
        self.host.extent().limit()
    }

    fn loop_period(&self) -> Option<f64> {
        if !self.options.loop_enabled {
            return None;
        }
        let limit = self.limit();
        (limit > 0.0).then_some(limit)
    }

    /// Observable position. In loop mode this is the non-negative remainder of the distance
    /// travelled divided by the limit.
    pub fn scroll(&self) -> f64 {
        match self.loop_period() {
            Some(period) => safe_index(self.state.animated_scroll, period),
            None => self.state.animated_scroll,
        }
    }

    pub fn is_at_top(&self) -> bool {
        self.scroll().abs() < 0.01
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            position: self.scroll(),
            velocity: self.state.velocity,
            last_velocity: self.state.last_velocity,
            direction: self.state.direction,
        }
    }

    /// Subscribes to `"scroll"` or `"scrollend"` by name.
    pub fn subscribe(
        &mut self,
        event: &str,
        callback: impl Fn(&ScrollSnapshot) + 'static,
    ) -> Result<ScrollSubscription, SubscribeError> {
        let event: ScrollEvent = event.parse()?;
        Ok(self.on(event, callback))
    }

    /// Subscribes to `event`. Disabled or destroyed engines return an inert handle.
    pub fn on(
        &mut self,
        event: ScrollEvent,
        callback: impl Fn(&ScrollSnapshot) + 'static,
    ) -> ScrollSubscription {
        if !self.is_live() {
            return Subscription::inert();
        }
        let name = event.as_str();
        match self.registry.borrow_mut().on(name, callback) {
            Ok(id) => Subscription::new(&self.registry, name, id),
            Err(_) => Subscription::inert(),
        }
    }

    pub fn listener_count(&self, event: ScrollEvent) -> usize {
        self.registry.borrow().listener_count(event.as_str())
    }

    fn emit(&self, event: ScrollEvent) {
        if !self.is_live() {
            return;
        }
        let snapshot = self.snapshot();
        registry::emit(&self.registry, event.as_str(), &snapshot);
    }

    fn ensure_frame(&mut self) {
        if self.frame_request.is_none() {
            self.frame_request = Some(self.host.request_frame());
        }
    }

    fn defer(&mut self, work: Deferred) {
        self.deferred.push(work);
        self.ensure_frame();
    }

    fn suppress_next_native_scroll(&mut self) {
        self.gate = NativeScrollGate::SuppressNext;
        self.defer(Deferred::OpenNativeScrollGate);
    }

    fn write_viewport(&mut self) {
        let position = self.scroll();
        self.host.set_scroll_position(position);
    }

    fn clear_settle_timer(&mut self) {
        if let Some(id) = self.settle_timer.take() {
            self.host.clear_timeout(id);
        }
    }

    fn enter_programmatic(&mut self) {
        self.clear_settle_timer();
        if self.state.mode != ScrollingMode::Programmatic {
            strace!(from = ?self.state.mode, "mode -> Programmatic");
        }
        self.state.mode = ScrollingMode::Programmatic;
    }

    fn reset(&mut self) {
        self.clear_settle_timer();
        self.tween.cancel();
        self.state = ScrollState::at(self.host.scroll_position());
        self.emit(ScrollEvent::Scroll);
        self.defer(Deferred::EmitScrollEnd);
    }

    /// Re-seeds from the viewport and starts the frame loop.
    pub fn start(&mut self) {
        if !self.is_live() {
            return;
        }
        sdebug!(position = self.host.scroll_position(), "SmoothScroll::start");
        self.reset();
        self.running = true;
        self.ensure_frame();
    }

    /// Stops the frame loop and re-seeds from the viewport.
    pub fn stop(&mut self) {
        if !self.is_live() {
            return;
        }
        sdebug!("SmoothScroll::stop");
        if let Some(id) = self.frame_request.take() {
            self.host.cancel_frame(id);
        }
        self.running = false;
        self.reset();
    }

    /// Stops, detaches input and native scroll listeners, and drops all subscribers.
    ///
    /// Every later call is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if self.enabled {
            self.stop();
            if let Some(id) = self.frame_request.take() {
                self.host.cancel_frame(id);
            }
            self.deferred.clear();
            if let Some(mut input) = self.input.take() {
                input.destroy(&mut self.host);
            }
            self.host.listen_native_scroll(false);
            self.registry.borrow_mut().clear();
        }
        self.destroyed = true;
        sdebug!("SmoothScroll::destroy");
    }

    /// Display refresh callback for a frame requested through the host.
    ///
    /// Runs work deferred since the previous frame, then ticks when running.
    pub fn on_frame(&mut self, now_ms: f64) {
        if !self.is_live() {
            return;
        }
        self.frame_request = None;

        for work in mem::take(&mut self.deferred) {
            match work {
                Deferred::EmitScrollEnd => self.emit(ScrollEvent::ScrollEnd),
                Deferred::OpenNativeScrollGate => self.gate = NativeScrollGate::Open,
            }
        }

        if self.running {
            self.tick(now_ms);
        }
        if self.running || !self.deferred.is_empty() {
            self.ensure_frame();
        }
    }

    /// Advances the active tween by the time since the previous tick, capped at
    /// [`MAX_FRAME_DELTA`].
    pub fn tick(&mut self, now_ms: f64) {
        if !self.is_live() {
            return;
        }
        let elapsed = (now_ms - self.time_ms) * 0.001;
        let dt = if elapsed.is_nan() {
            0.0
        } else {
            clamp(0.0, elapsed, MAX_FRAME_DELTA)
        };
        self.time_ms = now_ms;

        let Some(step) = self.tween.advance(dt) else {
            return;
        };

        self.state.step_to(step.value);
        self.write_viewport();
        self.emit(ScrollEvent::Scroll);

        if step.done {
            strace!(to = self.state.target_scroll, "tween settled");
            self.state.mode = ScrollingMode::Idle;
            self.state.animated_scroll = self.state.target_scroll;
            self.write_viewport();
            self.emit(ScrollEvent::Scroll);
            self.defer(Deferred::EmitScrollEnd);
            self.suppress_next_native_scroll();
        }
    }

    /// Native scroll notification from the viewport.
    pub fn on_native_scroll(&mut self) {
        if !self.is_live() {
            return;
        }
        if self.gate == NativeScrollGate::SuppressNext {
            strace!("native scroll suppressed");
            self.gate = NativeScrollGate::Open;
            return;
        }
        if self.state.mode == ScrollingMode::Programmatic {
            return;
        }

        let reported = self.host.scroll_position();
        let position = match self.loop_period() {
            Some(period) => {
                self.state.animated_scroll + wrapped_distance(self.scroll(), reported, period)
            }
            None => reported,
        };

        self.state.step_to(position);
        self.state.target_scroll = position;
        self.state.mode = ScrollingMode::Native;
        self.emit(ScrollEvent::Scroll);

        self.clear_settle_timer();
        self.settle_timer = Some(self.host.set_timeout(self.options.settle_delay_ms));
    }

    /// Timer callback. Only the pending settle timer is honored.
    pub fn on_timeout(&mut self, id: TimerId) {
        if !self.is_live() || self.settle_timer != Some(id) {
            return;
        }
        self.settle_timer = None;
        strace!(velocity = self.state.velocity, "native scroll settled");

        self.state.settle();
        if self.state.mode == ScrollingMode::Native {
            self.state.mode = ScrollingMode::Idle;
        }
        self.emit(ScrollEvent::Scroll);
    }

    /// Wheel/touch event on the root element.
    ///
    /// Accepted deltas move the target; events absorbed by nested scroll containers are left
    /// untouched.
    pub fn on_device_event(&mut self, event: &mut DeviceEvent) {
        if !self.is_live() {
            return;
        }
        let Some(delta) = self.input.as_mut().and_then(|h| h.handle_event(event)) else {
            return;
        };

        if delta.source.is_touch() {
            self.enter_programmatic();
        }

        let target = self.state.target_scroll + delta.delta_y;
        self.scroll_to(
            ScrollTarget::Offset(target),
            ScrollToOptions::default().with_programmatic(false),
        );

        if delta.source == InputSource::TouchEnd && !self.tween.is_active() {
            self.state.mode = ScrollingMode::Idle;
            self.state.settle();
        }
    }

    fn resolve_target(&self, target: &ScrollTarget<H::Element>) -> Option<f64> {
        match target {
            ScrollTarget::Offset(value) => Some(*value),
            ScrollTarget::Top => Some(0.0),
            ScrollTarget::Bottom => Some(self.limit()),
            ScrollTarget::Selector(selector) => {
                let element = self.host.query_selector(selector)?;
                self.host.element_top(&element).map(|top| top + self.scroll())
            }
            ScrollTarget::Element(element) => {
                self.host.element_top(element).map(|top| top + self.scroll())
            }
        }
    }

    /// Maps a rounded target onto the scroll axis: clamped normally, shortest path in loop
    /// mode for programmatic calls.
    fn fit_target(&self, target: f64, programmatic: bool) -> f64 {
        match self.loop_period() {
            Some(period) if programmatic => {
                (self.state.animated_scroll + wrapped_distance(self.scroll(), target, period))
                    .round()
            }
            Some(_) => target,
            None => clamp(0.0, target, self.limit()),
        }
    }

    /// Scrolls to `target`.
    ///
    /// Unresolvable targets and targets equal to the current one are ignored. Immediate calls
    /// jump and cancel any tween; otherwise a tween runs from the animated position and is
    /// advanced by [`SmoothScroll::tick`].
    pub fn scroll_to(
        &mut self,
        target: impl Into<ScrollTarget<H::Element>>,
        options: ScrollToOptions,
    ) {
        if !self.is_live() {
            return;
        }
        let target = target.into();
        let Some(resolved) = self.resolve_target(&target) else {
            strace!("scroll_to: unresolvable target");
            return;
        };
        let raw = resolved + options.offset;
        if !raw.is_finite() {
            swarn!(raw, "scroll_to: target is not a finite number");
            return;
        }

        let target = self.fit_target(raw.round(), options.programmatic);
        if target == self.state.target_scroll {
            return;
        }
        strace!(
            to = target,
            immediate = options.immediate,
            programmatic = options.programmatic,
            "scroll_to"
        );

        if options.immediate {
            self.tween.cancel();
            self.clear_settle_timer();
            self.state.step_to(target);
            self.state.target_scroll = target;
            self.state.mode = ScrollingMode::Idle;
            self.write_viewport();
            self.emit(ScrollEvent::Scroll);
            // The jump has no follow-up motion; scrollend reports the engine at rest.
            self.state.settle();
            self.suppress_next_native_scroll();
            self.defer(Deferred::EmitScrollEnd);
            return;
        }

        self.state.target_scroll = target;
        let motion = options.motion(self.options.lerp);
        let retargeted = !options.programmatic
            && matches!(motion, Motion::Decay { .. })
            && self.tween.retarget(target);
        if !retargeted {
            self.tween.from_to(self.state.animated_scroll, target, motion);
        }
        self.enter_programmatic();
    }
}
