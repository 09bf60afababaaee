// Decision logic behind the page effects, free of DOM types.

use crate::page::constants::{
    COUNTER_DURATION_MS, COUNTER_TICK_MS, MOBILE_BREAKPOINT_PX, NAV_SECTION_LEAD_PX,
    REVEAL_MARGIN_PX, SCROLL_HEADER_OFFSET_PX, TILT_DEG_PER_UNIT,
};

/// A page section's id and document offset.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionPos {
    pub id: Option<String>,
    pub top: f64,
}

impl SectionPos {
    /// An empty DOM id means the section has none.
    pub fn new(id: String, top: f64) -> Self {
        Self {
            id: Some(id).filter(|id| !id.is_empty()),
            top,
        }
    }
}

/// Id of the last section whose top, minus the lead distance, has been
/// scrolled past. A section without an id activates no link.
pub fn active_section(sections: &[SectionPos], page_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| page_y >= s.top - NAV_SECTION_LEAD_PX)
        .last()
        .and_then(|s| s.id.as_deref())
}

/// Fragment named by an in-page link, `"#about"` -> `"about"`.
#[inline]
pub fn link_target(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

#[inline]
pub fn is_link_active(href: &str, current: Option<&str>) -> bool {
    current.is_some_and(|c| link_target(href) == c)
}

#[inline]
pub fn toggled_menu_display(current: &str) -> &'static str {
    if current == "flex" {
        "none"
    } else {
        "flex"
    }
}

/// Display values for the nav menu and hamburger at a given window width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuLayout {
    /// `None` leaves the menu as the user last set it.
    pub menu: Option<&'static str>,
    pub hamburger: &'static str,
}

pub fn menu_layout(width: f64) -> MenuLayout {
    if width >= MOBILE_BREAKPOINT_PX {
        MenuLayout {
            menu: Some("flex"),
            hamburger: "none",
        }
    } else {
        MenuLayout {
            menu: None,
            hamburger: "flex",
        }
    }
}

#[inline]
pub fn closes_menu_on_key(key: &str, width: f64) -> bool {
    key == "Escape" && width < MOBILE_BREAKPOINT_PX
}

#[inline]
pub fn smooth_scroll_top(offset_top: f64) -> f64 {
    offset_top - SCROLL_HEADER_OFFSET_PX
}

#[inline]
pub fn should_reveal(rect_top: f64, inner_height: f64) -> bool {
    rect_top < inner_height - REVEAL_MARGIN_PX
}

/// Page scroll progress in percent; 0 when the document does not scroll.
pub fn scroll_percent(scroll_y: f64, scroll_height: f64, inner_height: f64) -> f64 {
    let scrollable = scroll_height - inner_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Leading integer of a counter label (`"150+"` -> 150), like `parseInt`.
pub fn parse_counter_target(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Count-up from 0 to a target in fixed ticks over the counter duration.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        let ticks = COUNTER_DURATION_MS / COUNTER_TICK_MS as f64;
        Self {
            target,
            current: 0.0,
            increment: target as f64 / ticks,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one tick and return the label to show.
    pub fn tick(&mut self) -> String {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            format!("{}+", self.target)
        } else {
            format!("{}+", self.current.floor() as i64)
        }
    }
}

/// Card tilt in degrees `(rotate_x, rotate_y)` for a pointer over a rect;
/// `None` for an empty rect.
pub fn tilt_angles(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<(f64, f64)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let x = (client_x - left) / width;
    let y = (client_y - top) / height;
    Some(((y - 0.5) * TILT_DEG_PER_UNIT, (x - 0.5) * TILT_DEG_PER_UNIT))
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) scale(1.02)",
        rotate_x, rotate_y
    )
}

/// `local@domain.tld`: no whitespace, one `@`, and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
