// Host-side tests for the page-effect decisions.

#![allow(dead_code)]
mod page {
    pub mod constants {
        include!("../src/page/constants.rs");
    }
    pub mod logic {
        include!("../src/page/logic.rs");
    }
}

use page::logic::*;

fn sections() -> Vec<SectionPos> {
    [("home", 0.0), ("about", 800.0), ("projects", 1600.0), ("contact", 2400.0)]
        .into_iter()
        .map(|(id, top)| SectionPos::new(id.to_string(), top))
        .collect()
}

#[test]
fn active_section_is_last_one_scrolled_into_lead() {
    let s = sections();
    assert_eq!(active_section(&s, 0.0), Some("home"));
    assert_eq!(active_section(&s, 599.0), Some("home"));
    assert_eq!(active_section(&s, 600.0), Some("about"));
    assert_eq!(active_section(&s, 1500.0), Some("projects"));
    assert_eq!(active_section(&s, 10_000.0), Some("contact"));
    assert_eq!(active_section(&[], 100.0), None);
}

#[test]
fn section_without_id_activates_no_link() {
    let s = vec![
        SectionPos::new("home".to_string(), 0.0),
        SectionPos::new(String::new(), 800.0),
    ];
    assert_eq!(s[1].id, None);
    assert_eq!(active_section(&s, 0.0), Some("home"));

    let current = active_section(&s, 900.0);
    assert_eq!(current, None);
    assert!(!is_link_active("#", current));
    assert!(!is_link_active("#home", current));
}

#[test]
fn nav_link_matches_section_by_fragment() {
    assert_eq!(link_target("#about"), "about");
    assert!(is_link_active("#about", Some("about")));
    assert!(!is_link_active("#home", Some("about")));
    assert!(!is_link_active("#about", None));
}

#[test]
fn hamburger_toggles_between_flex_and_none() {
    assert_eq!(toggled_menu_display("flex"), "none");
    assert_eq!(toggled_menu_display("none"), "flex");
    assert_eq!(toggled_menu_display(""), "flex");
}

#[test]
fn menu_layout_switches_at_breakpoint() {
    assert_eq!(
        menu_layout(1024.0),
        MenuLayout {
            menu: Some("flex"),
            hamburger: "none"
        }
    );
    assert_eq!(menu_layout(768.0).menu, Some("flex"));
    let narrow = menu_layout(767.0);
    assert_eq!(narrow.menu, None);
    assert_eq!(narrow.hamburger, "flex");
}

#[test]
fn escape_closes_menu_only_on_narrow_windows() {
    assert!(closes_menu_on_key("Escape", 500.0));
    assert!(!closes_menu_on_key("Escape", 768.0));
    assert!(!closes_menu_on_key("Enter", 500.0));
}

#[test]
fn smooth_scroll_leaves_room_for_header() {
    assert_eq!(smooth_scroll_top(1000.0), 920.0);
}

#[test]
fn section_reveals_once_above_bottom_margin() {
    assert!(should_reveal(599.0, 700.0));
    assert!(!should_reveal(600.0, 700.0));
}

#[test]
fn scroll_percent_tracks_document_position() {
    assert_eq!(scroll_percent(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_percent(1000.0, 3000.0, 1000.0), 50.0);
    assert_eq!(scroll_percent(2000.0, 3000.0, 1000.0), 100.0);
}

#[test]
fn scroll_percent_is_zero_for_documents_that_fit() {
    assert_eq!(scroll_percent(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_percent(0.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn counter_target_parses_leading_integer() {
    assert_eq!(parse_counter_target("150+"), Some(150));
    assert_eq!(parse_counter_target("  42 projects"), Some(42));
    assert_eq!(parse_counter_target("-7"), Some(-7));
    assert_eq!(parse_counter_target("Many"), None);
    assert_eq!(parse_counter_target(""), None);
    assert_eq!(parse_counter_target("+"), None);
}

#[test]
fn counter_counts_up_in_ticks_and_ends_on_target() {
    let mut anim = CounterAnimation::new(250);
    let mut labels = Vec::new();
    while !anim.is_done() {
        labels.push(anim.tick());
        assert!(labels.len() <= 200, "counter never finished");
    }
    // 2000 ms in 16 ms ticks
    assert_eq!(labels.len(), 125);
    assert_eq!(labels[0], "2+");
    assert_eq!(labels[1], "4+");
    assert_eq!(labels.last().map(String::as_str), Some("250+"));

    let values: Vec<i64> = labels
        .iter()
        .map(|l| l.trim_end_matches('+').parse().unwrap())
        .collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn zero_counter_finishes_immediately() {
    let mut anim = CounterAnimation::new(0);
    assert_eq!(anim.tick(), "0+");
    assert!(anim.is_done());
}

#[test]
fn tilt_follows_pointer_within_card() {
    let center = tilt_angles(150.0, 250.0, 100.0, 200.0, 100.0, 100.0).unwrap();
    assert_eq!(center, (0.0, 0.0));

    let (rx, ry) = tilt_angles(200.0, 200.0, 100.0, 200.0, 100.0, 100.0).unwrap();
    assert_eq!((rx, ry), (-5.0, 5.0));

    assert!(tilt_angles(10.0, 10.0, 0.0, 0.0, 0.0, 50.0).is_none());
}

#[test]
fn tilt_transform_format() {
    assert_eq!(
        tilt_transform(-5.0, 2.5),
        "perspective(1000px) rotateX(-5deg) rotateY(2.5deg) scale(1.02)"
    );
}

#[test]
fn email_validation() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("a.b@sub.example.org"));
    assert!(!is_valid_email("ada@example"));
    assert!(!is_valid_email("ada@.com"));
    assert!(!is_valid_email("ada@example."));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ada@@example.com"));
    assert!(!is_valid_email("ada lovelace@example.com"));
    assert!(!is_valid_email("ada@exa@mple.com"));
}
