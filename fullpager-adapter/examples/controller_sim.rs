use fullpager::PagerOptions;
use fullpager_adapter::Controller;

fn main() {
    // Example: a host frame loop driving the controller without any UI.
    //
    // An adapter would:
    // - suppress the native event, then forward it (handle_wheel/touch/key)
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the page track
    // - re-render the indicator markers after committed changes
    let mut c = Controller::new(PagerOptions::new(5));
    c.on_viewport_main(900);

    let accepted = c.handle_wheel(48.0, 0);
    println!("wheel accepted={accepted} page={}", c.current_page());

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        match c.tick(now_ms) {
            Some(off) => {
                if now_ms % 160 < 16 {
                    println!("t={now_ms} track_offset={off}");
                }
            }
            None => {
                if !c.is_animating() {
                    break;
                }
            }
        }
    }

    let indicator = c.pager().indicator();
    let mut row = String::new();
    indicator.for_each_slot(|slot| row.push(if slot.active { '*' } else { '.' }));
    println!(
        "settled: page={} markers={row} track_offset={}",
        c.current_page(),
        c.track_offset(now_ms)
    );
}
