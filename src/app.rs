use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::filter::{self, FilterState};
use crate::i18n::Language;
use crate::models::JobPosting;
use crate::nav::{NavigationState, Page};
use crate::tui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    Search,
    Jobs,
}

/// Ephemeral state of the listing page; rebuilt on every entry.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub filter: FilterState,
    pub selected: usize,
    entry: u64,
}

pub struct App {
    pub catalog: Catalog,
    pub lang: Language,
    pub nav: NavigationState,
    pub home_search: String,
    pub home_focus: HomeFocus,
    pub home_selected: usize,
    pub listing: Option<ListingView>,
    pub should_quit: bool,
    featured_limit: usize,
    recent_limit: usize,
}

impl App {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog,
            lang: config.language,
            nav: NavigationState::new(),
            home_search: String::new(),
            home_focus: HomeFocus::Search,
            home_selected: 0,
            listing: None,
            should_quit: false,
            featured_limit: config.featured_limit,
            recent_limit: config.recent_limit,
        }
    }

    pub fn featured(&self) -> Vec<&JobPosting> {
        filter::featured(&self.catalog.jobs, self.featured_limit)
    }

    pub fn recent(&self) -> Vec<&JobPosting> {
        filter::recent(&self.catalog.jobs, self.recent_limit)
    }

    /// Featured section followed by recent openings, as navigated on the home page.
    pub fn home_jobs(&self) -> Vec<&JobPosting> {
        let mut jobs = self.featured();
        jobs.extend(self.recent());
        jobs
    }

    pub fn visible_jobs(&self) -> Vec<&JobPosting> {
        match &self.listing {
            Some(view) => filter::filter_jobs(&self.catalog.jobs, &view.filter),
            None => Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::F(1) => self.nav.go_home(),
            KeyCode::F(2) => {
                self.lang = self.lang.next();
                info!(lang = %self.lang, "language switched");
            }
            KeyCode::F(6) => self.nav.go_to_listings(""),
            _ => match self.nav.page() {
                Page::Home => self.handle_home_key(key),
                Page::Listings => self.handle_listings_key(key),
                Page::Detail => self.handle_detail_key(key),
            },
        }
        self.sync_views();
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match self.home_focus {
            HomeFocus::Search => match key.code {
                KeyCode::Enter => {
                    let query = self.home_search.clone();
                    self.nav.go_to_listings(&query);
                }
                KeyCode::Backspace => {
                    self.home_search.pop();
                }
                KeyCode::Tab | KeyCode::Down => self.home_focus = HomeFocus::Jobs,
                KeyCode::Esc => {
                    if self.home_search.is_empty() {
                        self.should_quit = true;
                    } else {
                        self.home_search.clear();
                    }
                }
                KeyCode::Char(c) if is_text(&key) => self.home_search.push(c),
                _ => {}
            },
            HomeFocus::Jobs => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.home_selected + 1 < self.home_jobs().len() {
                        self.home_selected += 1;
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.home_selected == 0 {
                        self.home_focus = HomeFocus::Search;
                    } else {
                        self.home_selected -= 1;
                    }
                }
                KeyCode::Enter => {
                    let job = self.home_jobs().get(self.home_selected).map(|j| (*j).clone());
                    if let Some(job) = job {
                        // back from here lands on an unfiltered listing
                        self.nav.carry_query("");
                        self.nav.go_to_detail(&job);
                    }
                }
                KeyCode::Tab | KeyCode::Char('/') => self.home_focus = HomeFocus::Search,
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn handle_listings_key(&mut self, key: KeyEvent) {
        let Some(view) = self.listing.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.nav.back(),
            KeyCode::Backspace => {
                view.filter.pop_char();
                view.selected = 0;
            }
            KeyCode::Delete => {
                view.filter.clear_query();
                view.selected = 0;
            }
            KeyCode::F(3) => {
                view.filter.cycle_job_type();
                view.selected = 0;
            }
            KeyCode::F(4) => {
                view.filter.cycle_category(&self.catalog.categories);
                view.selected = 0;
            }
            KeyCode::F(5) => {
                view.filter.reset();
                view.selected = 0;
            }
            KeyCode::Down => {
                let count = filter::filter_jobs(&self.catalog.jobs, &view.filter).len();
                if view.selected + 1 < count {
                    view.selected += 1;
                }
            }
            KeyCode::Up => view.selected = view.selected.saturating_sub(1),
            KeyCode::Enter => {
                let visible = filter::filter_jobs(&self.catalog.jobs, &view.filter);
                if let Some(job) = visible.get(view.selected) {
                    self.nav.carry_query(&view.filter.query);
                    self.nav.go_to_detail(job);
                }
            }
            KeyCode::Char(c) if is_text(&key) => {
                view.filter.push_char(c);
                view.selected = 0;
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        // keep the last line of the detail on screen
        let max_scroll = self
            .nav
            .selected()
            .map(|job| tui::detail_height(job, self.lang))
            .unwrap_or(0)
            .saturating_sub(1);
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => self.nav.back(),
            KeyCode::Down | KeyCode::Char('j') => self.nav.scroll_down(1, max_scroll),
            KeyCode::Up | KeyCode::Char('k') => self.nav.scroll_up(1),
            KeyCode::PageDown => self.nav.scroll_down(10, max_scroll),
            KeyCode::PageUp => self.nav.scroll_up(10),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Create or discard per-page state after a navigation change.
    fn sync_views(&mut self) {
        let page = self.nav.page();
        if page == Page::Listings {
            let entry = self.nav.listings_entries();
            let stale = self.listing.as_ref().is_none_or(|v| v.entry != entry);
            if stale {
                self.listing = Some(ListingView {
                    filter: FilterState::seeded(self.nav.carried_query()),
                    selected: 0,
                    entry,
                });
            }
        } else {
            self.listing = None;
        }
        if page != Page::Home {
            self.home_search.clear();
            self.home_focus = HomeFocus::Search;
            self.home_selected = 0;
        }
    }
}

fn is_text(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
