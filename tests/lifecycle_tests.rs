// Host-side tests for page lifecycle decisions.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::stops_loops_on_pagehide;

#[test]
fn discarded_page_stops_loops() {
    assert!(stops_loops_on_pagehide(false));
}

#[test]
fn cached_page_keeps_loops_for_restore() {
    // Back/forward cache entry: the loops must still be alive on pageshow
    assert!(!stops_loops_on_pagehide(true));
}
