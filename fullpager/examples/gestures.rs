// Example: feeding raw input values straight into the pager.
use fullpager::{Pager, PagerOptions, TouchTracker, wheel_intent};

fn main() {
    let mut pager = Pager::new(PagerOptions::new(4));
    let mut now_ms = 0u64;

    // Wheel deltas inside the deadzone are ignored.
    for delta in [5.0, 15.0, 25.0, 120.0] {
        let accepted = pager.handle_wheel(delta, now_ms);
        println!(
            "wheel {delta:>5}: accepted={accepted} page={}",
            pager.current_page()
        );
        now_ms += 1000;
        pager.update_transition(now_ms);
    }

    // One swipe resolves to exactly one intent.
    pager.handle_touch_start(300.0);
    let accepted = pager.handle_touch_move(240.0, now_ms);
    println!("swipe up: accepted={accepted} page={}", pager.current_page());
    now_ms += 1000;
    pager.update_transition(now_ms);

    // Arrow keys use the default allow-lists (37/38 back, 39/40 forward).
    let accepted = pager.handle_key(38, now_ms);
    println!("key 38: accepted={accepted} page={}", pager.current_page());

    // The normalizers are also usable standalone.
    println!("intent(25, 20) = {:?}", wheel_intent(25.0, 20.0));
    let mut touch = TouchTracker::new();
    touch.start(100.0);
    println!("swipe down from 100 to 180 = {:?}", touch.movement(180.0));
}
