//! Scroll-reactive navigation bar.
//!
//! Every scroll event updates two things synchronously:
//!
//! - **Theme**: white text over the hero, dark text once the page has
//!   scrolled to within `edge_offset` pixels of the hero's bottom.
//! - **Active section**: the section whose vertical span contains
//!   `offset + edge_offset`. If none does, the previous highlight stays.
//!
//! Visibility is debounced: each event reschedules a single quiet-period
//! timer, and only when it fires does the navbar hide (net downward scroll
//! past `hide_after`) or show (anything else).
//!
//! The controller also carries the mobile menu's open state and computes
//! smooth-scroll targets for in-page anchors.

use crate::timers::{TimerId, TimerQueue};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavSettings {
    /// Pixels for the theme threshold, the active-section marker and anchor targets.
    pub edge_offset: f64,
    /// Scroll offset below which the navbar is never hidden.
    pub hide_after: f64,
    /// Quiet period before deciding visibility.
    pub debounce: Duration,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            edge_offset: 100.0,
            hide_after: 100.0,
            debounce: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// White text, used over the hero image.
    LightOnDark,
    /// Dark text, used over the page body.
    DarkOnLight,
}

impl Theme {
    /// Text color class applied to the logo, links and menu button.
    pub fn text_class(self) -> &'static str {
        match self {
            Theme::LightOnDark => "text-white",
            Theme::DarkOnLight => "text-gray-900",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// Vertical extent of one page section with an id.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Measured page geometry the controller reacts to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub hero_height: f64,
    /// Sections in document order.
    pub sections: Vec<SectionSpan>,
}

impl PageLayout {
    pub fn section(&self, id: &str) -> Option<&SectionSpan> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Theme for a scroll offset: dark text from `hero_height - edge_offset` on.
pub fn theme_for(offset: f64, hero_height: f64, edge_offset: f64) -> Theme {
    if offset >= hero_height - edge_offset {
        Theme::DarkOnLight
    } else {
        Theme::LightOnDark
    }
}

#[derive(Debug)]
pub struct NavController {
    settings: NavSettings,
    theme: Theme,
    visibility: Visibility,
    /// Offset at the last visibility decision.
    last_offset: f64,
    /// Debounce timer and the offset it will decide on.
    pending: Option<(TimerId, f64)>,
    active_section: Option<String>,
    menu_open: bool,
}

impl NavController {
    pub fn new(settings: NavSettings) -> Self {
        Self {
            settings,
            theme: Theme::LightOnDark,
            visibility: Visibility::Shown,
            last_offset: 0.0,
            pending: None,
            active_section: None,
            menu_open: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Whether a nav link with this `href` should carry the active marker.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active_section, href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }

    /// Handle a scroll event at `offset` pixels from the top.
    pub fn on_scroll(&mut self, timers: &mut TimerQueue, offset: f64, layout: &PageLayout) {
        self.theme = theme_for(offset, layout.hero_height, self.settings.edge_offset);

        if let Some((id, _)) = self.pending.take() {
            timers.clear(id);
        }
        let id = timers.set_timeout(self.settings.debounce);
        self.pending = Some((id, offset));

        let marker = offset + self.settings.edge_offset;
        if let Some(section) = layout.sections.iter().rev().find(|s| s.contains(marker)) {
            self.active_section = Some(section.id.clone());
        }
    }

    /// Handle a fired timer. Returns `true` if it was the visibility debounce.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        let offset = match self.pending {
            Some((pending, offset)) if pending == id => offset,
            _ => return false,
        };
        self.pending = None;
        self.visibility = if offset > self.last_offset && offset > self.settings.hide_after {
            Visibility::Hidden
        } else {
            Visibility::Shown
        };
        self.last_offset = offset;
        true
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Mobile menu button.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any link inside the mobile menu closes it.
    pub fn menu_link_clicked(&mut self) {
        self.menu_open = false;
    }

    /// Scroll target for an in-page anchor, leaving room for the navbar.
    /// `None` for non-anchor hrefs and unknown sections.
    pub fn anchor_target(&self, href: &str, layout: &PageLayout) -> Option<f64> {
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        layout
            .section(id)
            .map(|s| s.top - self.settings.edge_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn layout() -> PageLayout {
        PageLayout {
            hero_height: 800.0,
            sections: vec![
                SectionSpan::new("hero", 0.0, 800.0),
                SectionSpan::new("about", 800.0, 600.0),
                SectionSpan::new("courses", 1400.0, 1000.0),
                SectionSpan::new("contact", 2400.0, 500.0),
            ],
        }
    }

    fn settle(nav: &mut NavController, timers: &mut TimerQueue) {
        timers.run_for(ms(1000), |_, id| {
            nav.on_timer(id);
        });
    }

    fn scroll_and_settle(nav: &mut NavController, timers: &mut TimerQueue, offset: f64) {
        nav.on_scroll(timers, offset, &layout());
        settle(nav, timers);
    }

    #[test]
    fn theme_switches_near_hero_bottom() {
        assert_eq!(theme_for(0.0, 800.0, 100.0), Theme::LightOnDark);
        assert_eq!(theme_for(650.0, 800.0, 100.0), Theme::LightOnDark);
        assert_eq!(theme_for(699.5, 800.0, 100.0), Theme::LightOnDark);
        assert_eq!(theme_for(700.0, 800.0, 100.0), Theme::DarkOnLight);
        assert_eq!(theme_for(720.0, 800.0, 100.0), Theme::DarkOnLight);
        assert_eq!(theme_for(750.0, 800.0, 100.0), Theme::DarkOnLight);
    }

    #[test]
    fn theme_updates_without_waiting() {
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        nav.on_scroll(&mut timers, 720.0, &layout());
        assert_eq!(nav.theme(), Theme::DarkOnLight);
        nav.on_scroll(&mut timers, 10.0, &layout());
        assert_eq!(nav.theme(), Theme::LightOnDark);
    }

    #[test]
    fn theme_text_classes() {
        assert_eq!(Theme::LightOnDark.text_class(), "text-white");
        assert_eq!(Theme::DarkOnLight.text_class(), "text-gray-900");
    }

    #[test]
    fn hides_after_quiet_period_on_downward_scroll() {
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        nav.on_scroll(&mut timers, 500.0, &layout());
        assert_eq!(nav.visibility(), Visibility::Shown);

        timers.run_for(ms(99), |_, id| {
            nav.on_timer(id);
        });
        assert_eq!(nav.visibility(), Visibility::Shown);
        timers.run_for(ms(1), |_, id| {
            nav.on_timer(id);
        });
        assert_eq!(nav.visibility(), Visibility::Hidden);
    }

    #[test]
    fn shows_on_upward_scroll() {
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        scroll_and_settle(&mut nav, &mut timers, 900.0);
        assert_eq!(nav.visibility(), Visibility::Hidden);
        scroll_and_settle(&mut nav, &mut timers, 600.0);
        assert_eq!(nav.visibility(), Visibility::Shown);
    }

    #[test]
    fn never_hides_near_top() {
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        scroll_and_settle(&mut nav, &mut timers, 80.0);
        assert_eq!(nav.visibility(), Visibility::Shown);
        scroll_and_settle(&mut nav, &mut timers, 100.0);
        assert_eq!(nav.visibility(), Visibility::Shown);
    }

    #[test]
    fn rapid_events_coalesce_into_one_decision() {
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        for offset in [150.0, 300.0, 450.0, 600.0] {
            nav.on_scroll(&mut timers, offset, &layout());
            timers.run_for(ms(50), |_, id| {
                nav.on_timer(id);
            });
            assert_eq!(timers.pending(), 1);
            assert_eq!(nav.visibility(), Visibility::Shown);
        }
        settle(&mut nav, &mut timers);
        assert_eq!(nav.visibility(), Visibility::Hidden);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn decision_compares_against_last_decision() {
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        scroll_and_settle(&mut nav, &mut timers, 1200.0);
        // Down then back up within one quiet period: net movement is upward.
        nav.on_scroll(&mut timers, 1300.0, &layout());
        nav.on_scroll(&mut timers, 1100.0, &layout());
        settle(&mut nav, &mut timers);
        assert_eq!(nav.visibility(), Visibility::Shown);
    }

    #[test]
    fn active_section_follows_marker() {
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        assert_eq!(nav.active_section(), None);

        nav.on_scroll(&mut timers, 0.0, &layout());
        assert_eq!(nav.active_section(), Some("hero"));
        // 700 + 100 lands exactly on the top of "about".
        nav.on_scroll(&mut timers, 700.0, &layout());
        assert_eq!(nav.active_section(), Some("about"));
        nav.on_scroll(&mut timers, 1350.0, &layout());
        assert_eq!(nav.active_section(), Some("courses"));
        assert!(nav.is_link_active("#courses"));
        assert!(!nav.is_link_active("#about"));
    }

    #[test]
    fn no_matching_section_keeps_previous_highlight() {
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        nav.on_scroll(&mut timers, 2500.0, &layout());
        assert_eq!(nav.active_section(), Some("contact"));
        nav.on_scroll(&mut timers, 5000.0, &layout());
        assert_eq!(nav.active_section(), Some("contact"));
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let overlapping = PageLayout {
            hero_height: 800.0,
            sections: vec![
                SectionSpan::new("outer", 0.0, 2000.0),
                SectionSpan::new("inner", 500.0, 200.0),
            ],
        };
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        nav.on_scroll(&mut timers, 450.0, &overlapping);
        assert_eq!(nav.active_section(), Some("inner"));
    }

    #[test]
    fn non_anchor_link_is_never_active() {
        let mut timers = TimerQueue::new();
        let mut nav = NavController::new(NavSettings::default());
        nav.on_scroll(&mut timers, 0.0, &layout());
        assert!(!nav.is_link_active("hero"));
        assert!(!nav.is_link_active("https://example.com/#hero"));
    }

    #[test]
    fn mobile_menu_toggles_and_closes_on_link() {
        let mut nav = NavController::new(NavSettings::default());
        assert!(!nav.menu_open());
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.menu_link_clicked();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn anchor_target_leaves_room_for_navbar() {
        let nav = NavController::new(NavSettings::default());
        assert_eq!(nav.anchor_target("#courses", &layout()), Some(1300.0));
        assert_eq!(nav.anchor_target("#missing", &layout()), None);
        assert_eq!(nav.anchor_target("#", &layout()), None);
        assert_eq!(nav.anchor_target("courses.html", &layout()), None);
    }
}
