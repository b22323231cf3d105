use crate::*;

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

#[derive(Default)]
struct RecordingSource {
    listeners: Vec<(EventType, bool)>,
    removed: Vec<EventType>,
}

impl EventSource for RecordingSource {
    fn add_listener(&mut self, event: EventType, passive: bool) {
        self.listeners.push((event, passive));
    }

    fn remove_listener(&mut self, event: EventType) {
        self.listeners.retain(|(e, _)| *e != event);
        self.removed.push(event);
    }
}

fn attach(options: InputOptions) -> (RecordingSource, ScrollHandle) {
    let mut source = RecordingSource::default();
    let handle = ScrollHandle::attach(&mut source, options);
    (source, handle)
}

#[test]
fn attach_registers_wheel_and_touch_listeners() {
    let (source, handle) = attach(InputOptions::default());
    assert!(handle.is_attached());
    assert_eq!(
        source.listeners,
        vec![
            (EventType::Wheel, false),
            (EventType::TouchStart, true),
            (EventType::TouchMove, false),
            (EventType::TouchEnd, true),
        ]
    );
}

#[test]
fn wheel_pixel_delta_is_scaled_and_prevented() {
    let (_source, mut handle) = attach(InputOptions::default().with_wheel_multiplier(0.5));
    let mut ev = DeviceEvent::wheel(10.0, 40.0);
    let delta = handle.handle_event(&mut ev).unwrap();
    assert_eq!(delta.delta_x, 5.0);
    assert_eq!(delta.delta_y, 20.0);
    assert_eq!(delta.source, InputSource::Wheel);
    assert!(ev.is_default_prevented());
}

#[test]
fn wheel_line_and_page_modes_convert_to_pixels() {
    let (_source, mut handle) = attach(InputOptions::default());

    let mut lines = DeviceEvent::new(DeviceEventKind::Wheel {
        delta_x: 0.0,
        delta_y: 3.0,
        mode: DeltaMode::Line,
        page_size: 800.0,
    });
    let delta = handle.handle_event(&mut lines).unwrap();
    assert!((delta.delta_y - 3.0 * LINE_HEIGHT).abs() < 1e-9);

    let mut pages = DeviceEvent::new(DeviceEventKind::Wheel {
        delta_x: 0.0,
        delta_y: -1.0,
        mode: DeltaMode::Page,
        page_size: 800.0,
    });
    let delta = handle.handle_event(&mut pages).unwrap();
    assert_eq!(delta.delta_y, -800.0);
}

#[test]
fn wheel_inside_scrollable_container_is_left_alone() {
    let (_source, mut handle) = attach(InputOptions::default());
    let inner = ScrollNode::vertical(100.0, 500.0, 50.0);
    let mut ev = DeviceEvent::wheel(0.0, 30.0).with_path(vec![inner, ScrollNode::default()]);
    assert!(handle.handle_event(&mut ev).is_none());
    assert!(!ev.is_default_prevented());
}

#[test]
fn nested_container_at_boundary_does_not_absorb() {
    // Already scrolled to the bottom: scrolling further down belongs to the root.
    let at_bottom = ScrollNode::vertical(100.0, 500.0, 400.0);
    assert!(!at_bottom.can_absorb(0.0, 10.0));
    assert!(at_bottom.can_absorb(0.0, -10.0));

    let at_top = ScrollNode::vertical(100.0, 500.0, 0.0);
    assert!(!at_top.can_absorb(0.0, -10.0));
    assert!(at_top.can_absorb(0.0, 10.0));
}

#[test]
fn nested_check_respects_axis_and_overflow() {
    let horizontal = ScrollNode::horizontal(100.0, 300.0, 0.0);
    assert!(!horizontal.can_absorb(0.0, 10.0));
    assert!(horizontal.can_absorb(10.0, 0.0));

    let hidden = ScrollNode {
        overflow_y: Overflow::Hidden,
        ..ScrollNode::vertical(100.0, 500.0, 50.0)
    };
    assert!(!hidden.can_absorb(0.0, 10.0));

    let no_overflow = ScrollNode::vertical(100.0, 100.0, 0.0);
    assert!(!no_overflow.can_absorb(0.0, 10.0));
    assert!(!path_absorbs(&[hidden, no_overflow], 0.0, 10.0));
}

#[test]
fn touch_drag_down_scrolls_up() {
    let (_source, mut handle) = attach(InputOptions::default().with_touch_multiplier(2.0));

    let mut start = DeviceEvent::touch_start(10.0, 100.0);
    let delta = handle.handle_event(&mut start).unwrap();
    assert_eq!((delta.delta_x, delta.delta_y), (0.0, 0.0));
    assert_eq!(delta.source, InputSource::TouchStart);
    assert!(!start.is_default_prevented());

    let mut mv = DeviceEvent::touch_move(10.0, 130.0);
    let delta = handle.handle_event(&mut mv).unwrap();
    assert_eq!(delta.delta_y, -60.0);
    assert_eq!(delta.delta_x, 0.0);
    assert!(mv.is_default_prevented());

    let mut mv = DeviceEvent::touch_move(10.0, 120.0);
    let delta = handle.handle_event(&mut mv).unwrap();
    assert_eq!(delta.delta_y, 20.0);
}

#[test]
fn touch_end_repeats_last_move_delta() {
    let (_source, mut handle) = attach(InputOptions::default());
    handle.handle_event(&mut DeviceEvent::touch_start(0.0, 50.0));
    handle.handle_event(&mut DeviceEvent::touch_move(0.0, 40.0));

    let delta = handle.handle_event(&mut DeviceEvent::touch_end()).unwrap();
    assert_eq!(delta.delta_y, 10.0);
    assert_eq!(delta.source, InputSource::TouchEnd);

    // A fresh touch resets the carried delta.
    handle.handle_event(&mut DeviceEvent::touch_start(0.0, 50.0));
    let delta = handle.handle_event(&mut DeviceEvent::touch_end()).unwrap();
    assert_eq!(delta.delta_y, 0.0);
}

#[test]
fn absorbed_touch_move_keeps_previous_anchor_point() {
    let (_source, mut handle) = attach(InputOptions::default());
    handle.handle_event(&mut DeviceEvent::touch_start(0.0, 100.0));

    let inner = ScrollNode::vertical(100.0, 500.0, 200.0);
    let mut mv = DeviceEvent::touch_move(0.0, 90.0).with_path(vec![inner]);
    assert!(handle.handle_event(&mut mv).is_none());

    // The inner scroller reached its end; displacement is measured from the touch start.
    let at_end = ScrollNode::vertical(100.0, 500.0, 400.0);
    let mut mv = DeviceEvent::touch_move(0.0, 80.0).with_path(vec![at_end]);
    let delta = handle.handle_event(&mut mv).unwrap();
    assert_eq!(delta.delta_y, 20.0);
}

#[test]
fn callback_receives_accepted_deltas() {
    let (_source, mut handle) = attach(InputOptions::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    handle.on_scroll({
        let seen = Rc::clone(&seen);
        move |d: &InputDelta| seen.borrow_mut().push(d.delta_y)
    });

    handle.handle_event(&mut DeviceEvent::wheel(0.0, 12.0));
    let inner = ScrollNode::vertical(100.0, 500.0, 50.0);
    handle.handle_event(&mut DeviceEvent::wheel(0.0, 12.0).with_path(vec![inner]));
    handle.handle_event(&mut DeviceEvent::wheel(0.0, -3.0));

    assert_eq!(*seen.borrow(), vec![12.0, -3.0]);
}

#[test]
fn destroy_is_idempotent_and_silences_handle() {
    let (mut source, mut handle) = attach(InputOptions::default());
    let calls = Rc::new(RefCell::new(0u32));
    handle.on_scroll({
        let calls = Rc::clone(&calls);
        move |_: &InputDelta| *calls.borrow_mut() += 1
    });

    handle.destroy(&mut source);
    handle.destroy(&mut source);
    assert!(!handle.is_attached());
    assert!(source.listeners.is_empty());
    assert_eq!(source.removed.len(), EventType::ALL.len());

    let mut ev = DeviceEvent::wheel(0.0, 10.0);
    assert!(handle.handle_event(&mut ev).is_none());
    assert!(!ev.is_default_prevented());
    assert_eq!(*calls.borrow(), 0);
}
