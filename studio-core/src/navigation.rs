//! Views, result dispatch and the search overlay state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StudioError;
use crate::fixtures::StudioData;
use crate::search::{search, SearchKind, SearchResult};

/// A named screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Clients,
    Galleries,
    Bookings,
    Packages,
    Referrals,
}

impl View {
    /// Sidebar order.
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::Clients,
        View::Galleries,
        View::Bookings,
        View::Packages,
        View::Referrals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Clients => "clients",
            View::Galleries => "galleries",
            View::Bookings => "bookings",
            View::Packages => "packages",
            View::Referrals => "referrals",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Clients => "Clients",
            View::Galleries => "Galleries",
            View::Bookings => "Bookings",
            View::Packages => "Packages",
            View::Referrals => "Referrals",
        }
    }

    pub fn index(&self) -> usize {
        View::ALL.iter().position(|v| v == self).unwrap_or(0)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| StudioError::unknown_view(s))
    }
}

impl SearchKind {
    /// View that lists entities of this kind.
    pub fn target_view(&self) -> View {
        match self {
            SearchKind::Client => View::Clients,
            SearchKind::Gallery => View::Galleries,
            SearchKind::Booking => View::Bookings,
        }
    }
}

/// View to switch to when `result` is chosen.
pub fn dispatch(result: &SearchResult) -> View {
    let view = result.kind.target_view();
    debug!(kind = ?result.kind, id = %result.id, view = %view, "dispatching search result");
    view
}

/// Query, visibility and results of the global search overlay.
///
/// Owned by the application shell. Choosing a result or dismissing the
/// overlay resets it to closed with an empty query.
#[derive(Debug, Default, Clone)]
pub struct SearchOverlay {
    query: String,
    open: bool,
    results: Vec<SearchResult>,
    selected: usize,
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and forget the query (`Esc`).
    pub fn dismiss(&mut self) {
        self.open = false;
        self.query.clear();
        self.results.clear();
        self.selected = 0;
    }

    /// Empty the query but keep the overlay open.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = 0;
    }

    /// Replace the query and rerun the search.
    pub fn set_query(&mut self, query: impl Into<String>, data: &StudioData) {
        self.query = query.into();
        self.open = true;
        self.refresh(data);
    }

    pub fn push_char(&mut self, c: char, data: &StudioData) {
        self.query.push(c);
        self.open = true;
        self.refresh(data);
    }

    pub fn pop_char(&mut self, data: &StudioData) {
        self.query.pop();
        self.refresh(data);
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1) % self.results.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.results.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.results.len() - 1);
        }
    }

    /// Dispatch the result at `index` and reset the overlay.
    ///
    /// Returns `None` (and leaves the overlay untouched) when there is no
    /// result at that position.
    pub fn select(&mut self, index: usize) -> Option<View> {
        let view = self.results.get(index).map(dispatch)?;
        self.dismiss();
        Some(view)
    }

    /// Dispatch the highlighted result.
    pub fn confirm(&mut self) -> Option<View> {
        self.select(self.selected)
    }

    fn refresh(&mut self, data: &StudioData) {
        self.results = search(&self.query, &data.clients, &data.galleries, &data.bookings);
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingStatus, GalleryStatus};
    use crate::testing::{booking, client, gallery};

    fn data() -> StudioData {
        StudioData {
            clients: vec![client("c-1", "Ana Ruiz", "ana@x.com")],
            galleries: vec![gallery("g-1", "Ana's Wedding", "Ana Ruiz", GalleryStatus::Ready)],
            bookings: vec![booking("b-1", "Ana Ruiz", "Park", "2024-05-10", BookingStatus::Pending)],
            ..StudioData::default()
        }
    }

    #[test]
    fn test_view_parse_roundtrip() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>().unwrap(), view);
        }
        assert_eq!("Galleries".parse::<View>().unwrap(), View::Galleries);
        assert!("settings".parse::<View>().is_err());
        assert_eq!(View::Bookings.index(), 3);
    }

    #[test]
    fn test_dispatch_mapping() {
        let data = data();
        let results = search("ana", &data.clients, &data.galleries, &data.bookings);
        let views: Vec<_> = results.iter().map(dispatch).collect();
        assert_eq!(views, [View::Clients, View::Galleries, View::Bookings]);
    }

    #[test]
    fn test_select_resets_overlay() {
        let data = data();
        let mut overlay = SearchOverlay::new();
        for c in "ana".chars() {
            overlay.push_char(c, &data);
        }
        assert!(overlay.is_open());
        assert_eq!(overlay.results().len(), 3);

        assert_eq!(overlay.select(1), Some(View::Galleries));
        assert!(!overlay.is_open());
        assert!(overlay.query().is_empty());
        assert!(overlay.results().is_empty());
    }

    #[test]
    fn test_select_out_of_range_keeps_state() {
        let data = data();
        let mut overlay = SearchOverlay::new();
        overlay.set_query("zzz", &data);
        assert!(overlay.results().is_empty());
        assert_eq!(overlay.confirm(), None);
        assert!(overlay.is_open());
        assert_eq!(overlay.query(), "zzz");
    }

    #[test]
    fn test_selection_wraps_and_dismiss_clears() {
        let data = data();
        let mut overlay = SearchOverlay::new();
        overlay.set_query("ana", &data);
        overlay.select_prev();
        assert_eq!(overlay.selected(), 2);
        overlay.select_next();
        assert_eq!(overlay.selected(), 0);
        overlay.select_next();
        assert_eq!(overlay.confirm(), Some(View::Galleries));

        overlay.set_query("ana", &data);
        overlay.dismiss();
        assert!(!overlay.is_open());
        assert!(overlay.query().is_empty());
    }

    #[test]
    fn test_backspace_to_empty_clears_results() {
        let data = data();
        let mut overlay = SearchOverlay::new();
        overlay.set_query("a", &data);
        assert!(!overlay.results().is_empty());
        overlay.pop_char(&data);
        assert!(overlay.results().is_empty());
        assert!(overlay.is_open());
    }
}
