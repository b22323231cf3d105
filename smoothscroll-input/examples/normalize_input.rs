// Example: feeding host events through a ScrollHandle.
use smoothscroll_input::{
    DeltaMode, DeviceEvent, DeviceEventKind, EventSource, EventType, InputOptions, ScrollHandle,
    ScrollNode,
};

#[derive(Default)]
struct Root {
    listeners: Vec<EventType>,
}

impl EventSource for Root {
    fn add_listener(&mut self, event: EventType, passive: bool) {
        println!("listen {event:?} passive={passive}");
        self.listeners.push(event);
    }

    fn remove_listener(&mut self, event: EventType) {
        self.listeners.retain(|e| *e != event);
    }
}

fn main() {
    let mut root = Root::default();
    let mut handle = ScrollHandle::attach(
        &mut root,
        InputOptions::default()
            .with_wheel_multiplier(0.9)
            .with_touch_multiplier(3.0),
    );
    handle.on_scroll(|d| println!("callback: {d:?}"));

    // Three lines of wheel scrolling on the page itself.
    let mut ev = DeviceEvent::new(DeviceEventKind::Wheel {
        delta_x: 0.0,
        delta_y: 3.0,
        mode: DeltaMode::Line,
        page_size: 900.0,
    });
    let out = handle.handle_event(&mut ev);
    println!("line wheel -> {out:?} prevented={}", ev.is_default_prevented());

    // The same wheel over a side panel that can still scroll: left to the panel.
    let panel = ScrollNode::vertical(300.0, 1200.0, 100.0);
    let mut ev = DeviceEvent::wheel(0.0, 40.0).with_path(vec![panel, ScrollNode::default()]);
    let out = handle.handle_event(&mut ev);
    println!("panel wheel -> {out:?} prevented={}", ev.is_default_prevented());

    // A short drag upwards, then release.
    for mut ev in [
        DeviceEvent::touch_start(200.0, 500.0),
        DeviceEvent::touch_move(200.0, 480.0),
        DeviceEvent::touch_move(200.0, 450.0),
        DeviceEvent::touch_end(),
    ] {
        let out = handle.handle_event(&mut ev);
        println!("{:?} -> {out:?}", ev.event_type());
    }

    handle.destroy(&mut root);
    println!("listeners after destroy: {}", root.listeners.len());
}
