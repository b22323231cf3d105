// Example: driving the engine from a simulated host at 60fps.
use std::cell::RefCell;
use std::rc::Rc;

use smoothscroll::{
    DeviceEvent, EngineOptions, EventSource, EventType, Extent, FrameRequestId, FrameScheduler,
    ScrollEvent, ScrollToOptions, SmoothScroll, TargetResolver, TimerId, Viewport,
};

#[derive(Default)]
struct Page {
    position: f64,
    next_id: u64,
    frame: Option<FrameRequestId>,
    timers: Vec<(TimerId, f64)>,
    now_ms: f64,
    sections: Vec<(&'static str, f64)>,
}

impl Viewport for Page {
    fn scroll_position(&self) -> f64 {
        self.position
    }

    fn set_scroll_position(&mut self, position: f64) {
        self.position = position.clamp(0.0, self.extent().limit());
    }

    fn extent(&self) -> Extent {
        Extent {
            scrollable: 5000.0,
            visible: 900.0,
        }
    }
}

impl FrameScheduler for Page {
    fn request_frame(&mut self) -> FrameRequestId {
        self.next_id += 1;
        let id = FrameRequestId(self.next_id);
        self.frame = Some(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if self.frame == Some(id) {
            self.frame = None;
        }
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push((id, self.now_ms + delay_ms as f64));
        id
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.timers.retain(|(t, _)| *t != id);
    }
}

impl TargetResolver for Page {
    type Element = usize;

    fn query_selector(&self, selector: &str) -> Option<usize> {
        self.sections.iter().position(|(name, _)| *name == selector)
    }

    fn element_top(&self, element: &usize) -> Option<f64> {
        self.sections
            .get(*element)
            .map(|(_, top)| top - self.position)
    }
}

impl EventSource for Page {
    fn add_listener(&mut self, _event: EventType, _passive: bool) {}
    fn remove_listener(&mut self, _event: EventType) {}
}

/// Advances simulated time by one frame, firing due timers and the pending frame.
fn step(s: &mut SmoothScroll<Page>) {
    let now = s.host().now_ms + 16.0;
    s.host_mut().now_ms = now;

    let due: Vec<TimerId> = s
        .host()
        .timers
        .iter()
        .filter(|(_, at)| *at <= now)
        .map(|(id, _)| *id)
        .collect();
    for id in due {
        s.host_mut().clear_timeout(id);
        s.on_timeout(id);
    }

    if s.host_mut().frame.take().is_some() {
        s.on_frame(now);
    }
}

fn main() {
    let page = Page {
        sections: vec![("#intro", 0.0), ("#pricing", 2400.0), ("#faq", 3600.0)],
        ..Page::default()
    };
    let mut s = SmoothScroll::new(page, EngineOptions::default());

    let frames = Rc::new(RefCell::new(0u32));
    s.on(ScrollEvent::Scroll, {
        let frames = Rc::clone(&frames);
        move |snap| {
            *frames.borrow_mut() += 1;
            if *frames.borrow() % 10 == 0 {
                println!(
                    "scroll pos={:.1} v={:.2} dir={:?}",
                    snap.position, snap.velocity, snap.direction
                );
            }
        }
    });
    s.on(ScrollEvent::ScrollEnd, |snap| {
        println!("scrollend pos={:.1}", snap.position)
    });

    s.start();

    // A few wheel notches accumulate into one smooth motion.
    for _ in 0..3 {
        s.on_device_event(&mut DeviceEvent::wheel(0.0, 120.0));
        step(&mut s);
    }
    while s.is_animating() {
        step(&mut s);
    }
    step(&mut s);
    println!("after wheel: scroll={}", s.scroll());

    // Anchor jump with a fixed duration.
    s.scroll_to(
        "#pricing",
        ScrollToOptions::default().with_duration(0.6).with_offset(-80.0),
    );
    while s.is_animating() {
        step(&mut s);
    }
    step(&mut s);
    println!("after anchor: scroll={}", s.scroll());

    // The user drags the scrollbar: the engine follows, then settles.
    s.host_mut().position = 2000.0;
    s.on_native_scroll();
    for _ in 0..30 {
        step(&mut s);
    }
    println!("after native: mode={:?} velocity={}", s.mode(), s.velocity());

    s.destroy();
}
