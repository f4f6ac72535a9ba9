//! Page sections and navigation bar state.

use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_NAV_SCROLL_THRESHOLD;
use crate::error::PortfolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Sections in page order
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Sections listed in the nav bar and footer
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section root
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|sec| sec.id() == s)
            .ok_or_else(|| PortfolioError::UnknownSection(s.to_string()))
    }
}

/// Nav bar state: solid background once scrolled, mobile menu open/closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    scroll_threshold: f64,
    scrolled: bool,
    menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_SCROLL_THRESHOLD)
    }
}

impl NavState {
    pub fn new(scroll_threshold: f64) -> Self {
        Self {
            scroll_threshold,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Update from the window scroll offset. Returns whether `scrolled` changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.scroll_threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu and return the element id to scroll to.
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.menu_open = false;
        section.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
        assert!("footer".parse::<Section>().is_err());
    }

    #[test]
    fn nav_excludes_hero() {
        assert!(!Section::NAV.contains(&Section::Hero));
    }

    #[test]
    fn scrolled_flips_past_threshold() {
        let mut nav = NavState::default();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.scrolled());
        assert!(nav.on_scroll(50.5));
        assert!(nav.scrolled());
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.scrolled());
    }

    #[test]
    fn navigate_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open());
        assert_eq!(nav.navigate(Section::Skills), "skills");
        assert!(!nav.menu_open());
    }
}
