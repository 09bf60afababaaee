// Page-effects tuning; the DOM contract (class names, timings) of the landing page.

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Navigation
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const SECTION_TAG_SELECTOR: &str = "section";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ACTIVE_CLASS: &str = "active";
/// A section counts as current once scrolled to within this distance of its top.
pub const NAV_SECTION_LEAD_PX: f64 = 200.0;
/// Smooth-scroll targets stop this far above the section, below the fixed header.
pub const SCROLL_HEADER_OFFSET_PX: f64 = 80.0;

// Fade-in cards
pub const FADE_SELECTOR: &str = ".service-card, .project-card, .stat-item, .contact-item";
pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const FADE_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const FADE_TRANSITION: &str = "all 0.6s ease-out";

// Counters
pub const STAT_ITEM_SELECTOR: &str = ".stat-item";
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_TICK_MS: i32 = 16;
pub const ANIMATED_ATTR: &str = "data-animated";

// Card tilt
pub const STAT_CARD_SELECTOR: &str = ".stat-card";
pub const TILT_DEG_PER_UNIT: f64 = 10.0;
pub const TILT_RESET_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) scale(1)";

// Progress bar
pub const PROGRESS_BAR_STYLE: [(&str, &str); 8] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("height", "3px"),
    ("background", "linear-gradient(90deg, #00f5ff, #00ff88)"),
    ("z-index", "999"),
    ("width", "0%"),
    ("transition", "width 0.1s ease"),
];

// Section reveal
pub const SECTION_CLASS_SELECTOR: &str = ".section";
pub const REVEAL_MARGIN_PX: f64 = 100.0;
pub const SECTION_HIDDEN_TRANSFORM: &str = "translateY(50px)";
pub const SECTION_TRANSITION: &str = "0.8s ease";

pub const SHOWN_TRANSFORM: &str = "translateY(0)";
