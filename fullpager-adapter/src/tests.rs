use crate::*;

use fullpager::PagerOptions;

#[test]
fn controller_tween_drives_track_offset() {
    let mut c = Controller::new(PagerOptions::new(5));
    c.on_viewport_main(100);

    assert!(c.handle_wheel(25.0, 0));
    assert_eq!(c.current_page(), 1);

    let mut last = 0u64;
    let mut saw_mid = false;
    for now in (0..=760u64).step_by(40) {
        if let Some(off) = c.tick(now) {
            assert!(off >= last);
            if off > 0 && off < 100 {
                saw_mid = true;
            }
            last = off;
        }
    }
    assert!(saw_mid);
    assert_eq!(c.track_offset(800), 100);

    // The lock outlives the tween and clears on its own window.
    assert!(c.pager().is_animating());
    assert_eq!(c.tick(800), None);
    assert!(!c.pager().is_animating());
    assert!(!c.is_animating());
}

#[test]
fn gestures_are_dropped_while_locked() {
    let mut c = Controller::new(PagerOptions::new(3));
    c.on_viewport_main(50);

    assert!(c.handle_key(40, 0));
    assert!(!c.handle_key(40, 100));
    assert!(!c.handle_wheel(40.0, 200));
    c.handle_touch_start(300.0);
    assert!(!c.handle_touch_move(250.0, 300));
    assert_eq!(c.current_page(), 1);

    assert_eq!(c.tick(800), Some(50));
    assert!(c.handle_key(40, 810));
    assert_eq!(c.current_page(), 2);
}

#[test]
fn scroll_to_retargets_an_in_flight_tween() {
    let mut c = Controller::new(PagerOptions::new(6));
    c.on_viewport_main(10);

    assert!(c.scroll_to(5, 0));
    c.tick(400);

    // Mid-flight jump: ignores lock and gate, re-aims the tween from the
    // sampled position.
    assert!(c.scroll_to(1, 400));
    for now in [450u64, 600, 900, 1150] {
        c.tick(now);
    }
    assert_eq!(c.current_page(), 1);
    assert_eq!(c.track_offset(1300), 10);

    c.tick(1200);
    assert!(!c.is_animating());
}

#[test]
fn scroll_to_ignores_the_gate() {
    let mut c = Controller::new(PagerOptions::new(4));
    c.on_viewport_main(100);
    c.disable_scroll();

    assert!(!c.handle_wheel(40.0, 0));
    assert!(c.scroll_to(2, 0));
    assert_eq!(c.current_page(), 2);
    assert_eq!(c.track_offset(1000), 200);
}

#[test]
fn resize_retargets_to_the_new_slot() {
    let mut c = Controller::new(PagerOptions::new(4));
    c.on_viewport_main(100);

    assert!(c.scroll_to(2, 0));
    c.on_viewport_main(50);

    assert_eq!(c.tick(750), Some(100));
    assert_eq!(c.track_offset(760), 100);

    let mut offsets = Vec::new();
    c.for_each_page_offset(|index, off| offsets.push((index, off)));
    assert_eq!(offsets, [(0, 0), (1, 50), (2, 100), (3, 150)]);
}

#[test]
fn tween_between_pages_uses_slot_offsets() {
    let t = TrackTween::between_pages(1, 3, 100, 0, 750, TransitionCurve::Linear);
    assert_eq!(t.sample(0), 100);
    assert_eq!(t.sample(375), 200);
    assert!(t.is_done(750));
    assert_eq!(t.sample(750), 300);

    let mut t = TrackTween::new(0, 100, 0, 100, TransitionCurve::Linear);
    t.retarget(50, 0, 100);
    assert_eq!(t.from, 50);
    assert_eq!(t.to, 0);
    assert_eq!(t.sample(150), 0);
}
