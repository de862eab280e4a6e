/**
 * View Routing
 *
 * Maps paths to views. Search results travel inside the view value and
 * are gone once the user navigates away.
 */

use crate::shared::search::{sort_by_match, SearchResult};

pub const HOME_PATH: &str = "/";
pub const SEARCH_RESULTS_PATH: &str = "/search-results";
pub const PROFILE_PATH: &str = "/profile";

/// Current app view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AppView {
    /// Landing page with the search bar
    #[default]
    Home,
    /// Ranked sources for the last query, best match first
    SearchResults(Vec<SearchResult>),
    /// Profile management, logged-in users only
    Profile,
}

impl AppView {
    /// Resolve a path. Results are not part of the path, so
    /// `/search-results` opens an empty list; unknown paths go home.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => AppView::Home,
            SEARCH_RESULTS_PATH => AppView::SearchResults(Vec::new()),
            PROFILE_PATH => AppView::Profile,
            _ => AppView::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AppView::Home => HOME_PATH,
            AppView::SearchResults(_) => SEARCH_RESULTS_PATH,
            AppView::Profile => PROFILE_PATH,
        }
    }

    /// Results view with the entries ordered for display.
    pub fn search_results(mut results: Vec<SearchResult>) -> Self {
        sort_by_match(&mut results);
        AppView::SearchResults(results)
    }
}
