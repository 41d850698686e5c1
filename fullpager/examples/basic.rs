// Example: minimal navigation with the lock lifecycle and indicator sync.
use fullpager::{PageDirection, Pager, PagerOptions};

fn main() {
    let mut pager = Pager::new(PagerOptions::new(5));

    pager.request_navigate(PageDirection::Next, 0);
    // Dropped: the lock window (800 ms by default) is still open.
    pager.request_navigate(PageDirection::Next, 100);
    // The frame loop releases the lock, then the next intent lands.
    pager.update_transition(800);
    pager.request_navigate(PageDirection::Next, 810);

    println!("page {}/{}", pager.current_page() + 1, pager.total_pages());

    let indicator = pager.indicator();
    let mut row = String::new();
    indicator.for_each_slot(|slot| row.push(if slot.active { '*' } else { '.' }));
    println!("markers={row} theme=bg{}", indicator.theme_slot().unwrap());

    println!("track_offset={} (viewport 900)", pager.track_offset(900));
}
