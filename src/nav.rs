use tracing::debug;

use crate::models::JobPosting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Listings,
    Detail,
}

/// Which page is shown and what it needs to render.
///
/// `page == Page::Detail` always has a `selected` job: the only way in is
/// [`NavigationState::go_to_detail`], which takes the job by reference.
#[derive(Debug, Clone)]
pub struct NavigationState {
    page: Page,
    selected: Option<JobPosting>,
    carried_query: String,
    scroll: u16,
    // bumped on every entry to the listing page so the view can reseed itself once
    listings_entries: u64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            selected: None,
            carried_query: String::new(),
            scroll: 0,
            listings_entries: 0,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected(&self) -> Option<&JobPosting> {
        self.selected.as_ref()
    }

    pub fn carried_query(&self) -> &str {
        &self.carried_query
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn listings_entries(&self) -> u64 {
        self.listings_entries
    }

    pub fn go_home(&mut self) {
        self.transition(Page::Home);
    }

    pub fn go_to_listings(&mut self, query: &str) {
        self.carried_query = query.to_string();
        self.listings_entries += 1;
        self.transition(Page::Listings);
    }

    pub fn go_to_detail(&mut self, job: &JobPosting) {
        self.selected = Some(job.clone());
        self.transition(Page::Detail);
    }

    /// Detail -> listings with the carried query, listings -> home.
    pub fn back(&mut self) {
        match self.page {
            Page::Detail => {
                let query = std::mem::take(&mut self.carried_query);
                self.go_to_listings(&query);
            }
            Page::Listings => self.go_home(),
            Page::Home => {}
        }
    }

    /// Remember the listing page's live query so `back` can restore it.
    pub fn carry_query(&mut self, query: &str) {
        self.carried_query = query.to_string();
    }

    /// Scroll towards the end, never past `max`.
    pub fn scroll_down(&mut self, lines: u16, max: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn transition(&mut self, to: Page) {
        debug!(from = ?self.page, to = ?to, query = %self.carried_query, "navigate");
        self.page = to;
        self.scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::sample_jobs;

    #[test]
    fn test_starts_on_home() {
        let nav = NavigationState::new();
        assert_eq!(nav.page(), Page::Home);
        assert!(nav.selected().is_none());
        assert_eq!(nav.carried_query(), "");
    }

    #[test]
    fn test_go_to_listings_carries_query() {
        let mut nav = NavigationState::new();
        nav.go_to_listings("engineer");
        assert_eq!(nav.page(), Page::Listings);
        assert_eq!(nav.carried_query(), "engineer");
        assert_eq!(nav.listings_entries(), 1);

        nav.go_to_listings("");
        assert_eq!(nav.carried_query(), "");
        assert_eq!(nav.listings_entries(), 2);
    }

    #[test]
    fn test_detail_always_has_selection() {
        let jobs = sample_jobs();
        let mut nav = NavigationState::new();
        nav.go_to_detail(&jobs[2]);
        assert_eq!(nav.page(), Page::Detail);
        assert_eq!(nav.selected().map(|j| j.id.as_str()), Some("3"));
    }

    #[test]
    fn test_home_keeps_selection_and_query() {
        let jobs = sample_jobs();
        let mut nav = NavigationState::new();
        nav.go_to_listings("driver");
        nav.go_to_detail(&jobs[0]);
        nav.go_home();
        assert_eq!(nav.page(), Page::Home);
        assert_eq!(nav.selected().map(|j| j.id.as_str()), Some("1"));
        assert_eq!(nav.carried_query(), "driver");
    }

    #[test]
    fn test_back_from_detail_restores_carried_query() {
        let jobs = sample_jobs();
        let mut nav = NavigationState::new();
        nav.go_to_listings("");
        nav.carry_query("driver");
        nav.go_to_detail(&jobs[0]);
        nav.back();
        assert_eq!(nav.page(), Page::Listings);
        assert_eq!(nav.carried_query(), "driver");

        nav.back();
        assert_eq!(nav.page(), Page::Home);
        nav.back();
        assert_eq!(nav.page(), Page::Home);
    }

    #[test]
    fn test_every_transition_scrolls_to_top() {
        let jobs = sample_jobs();
        let mut nav = NavigationState::new();
        nav.go_to_detail(&jobs[0]);
        nav.scroll_down(9, 100);
        assert_eq!(nav.scroll(), 9);
        nav.scroll_up(3);
        assert_eq!(nav.scroll(), 6);
        nav.back();
        assert_eq!(nav.scroll(), 0);

        nav.scroll_down(4, 100);
        nav.go_home();
        assert_eq!(nav.scroll(), 0);
        nav.scroll_up(10);
        assert_eq!(nav.scroll(), 0);
    }

    #[test]
    fn test_scroll_down_is_capped() {
        let jobs = sample_jobs();
        let mut nav = NavigationState::new();
        nav.go_to_detail(&jobs[0]);
        for _ in 0..500 {
            nav.scroll_down(10, 16);
        }
        assert_eq!(nav.scroll(), 16);
        nav.scroll_up(10);
        assert_eq!(nav.scroll(), 6);
        nav.scroll_down(3, 4);
        assert_eq!(nav.scroll(), 4);
    }
}
