//! Experience timeline "show more" toggle.

use crate::content::TimelineEntry;

/// Entries always shown, even when collapsed
pub const PRIMARY_EXPERIENCE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExperienceToggle {
    expanded: bool,
}

impl ExperienceToggle {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn show_more(&mut self) {
        self.expanded = true;
    }

    pub fn show_less(&mut self) {
        self.expanded = false;
    }

    /// Entries to render for the current state.
    pub fn visible<'a>(&self, entries: &'a [TimelineEntry]) -> &'a [TimelineEntry] {
        if self.expanded {
            entries
        } else {
            &entries[..entries.len().min(PRIMARY_EXPERIENCE_COUNT)]
        }
    }

    /// Number of entries hidden behind "show more".
    pub fn hidden_count(&self, entries: &[TimelineEntry]) -> usize {
        entries.len() - self.visible(entries).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EXPERIENCE;

    #[test]
    fn collapsed_by_default() {
        let toggle = ExperienceToggle::default();
        assert!(!toggle.is_expanded());
        assert_eq!(toggle.visible(EXPERIENCE).len(), PRIMARY_EXPERIENCE_COUNT);
        assert_eq!(toggle.hidden_count(EXPERIENCE), 3);
    }

    #[test]
    fn show_more_then_less() {
        let mut toggle = ExperienceToggle::default();
        toggle.show_more();
        assert!(toggle.is_expanded());
        assert_eq!(toggle.visible(EXPERIENCE).len(), EXPERIENCE.len());

        toggle.show_less();
        assert!(!toggle.is_expanded());
    }

    #[test]
    fn show_more_is_idempotent() {
        let mut toggle = ExperienceToggle::default();
        toggle.show_more();
        toggle.show_more();
        assert!(toggle.is_expanded());
    }

    #[test]
    fn short_list_is_never_sliced_out_of_bounds() {
        let toggle = ExperienceToggle::default();
        assert_eq!(toggle.visible(&EXPERIENCE[..2]).len(), 2);
        assert_eq!(toggle.hidden_count(&EXPERIENCE[..2]), 0);
    }

    #[test]
    fn primary_entries_keep_order() {
        let toggle = ExperienceToggle::default();
        let visible = toggle.visible(EXPERIENCE);
        assert_eq!(visible[0].period, "August 2025 - Present");
        assert_eq!(visible[3].period, "December 2022 - June 2024");
    }
}
