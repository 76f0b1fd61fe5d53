//! Application state for the studio dashboard TUI
//!
//! `App` is the single owner of every piece of mutable UI state: the active
//! view, the search overlay, and each list view's filter. Views read from it;
//! nothing is kept in globals.

use studio_core::filters::{filter_bookings, filter_clients, filter_galleries, StatusFilter};
use studio_core::referrals::top_referrers;
use studio_core::{BookingStatus, GalleryStatus, SearchOverlay, StudioConfig, StudioData, View};

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate views and lists
    #[default]
    Normal,
    /// Global search overlay has focus
    Search,
    /// Typing into the clients view filter box
    ClientFilter,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub data: StudioData,
    pub config: StudioConfig,
    /// Current input mode
    pub mode: Mode,
    /// Active view in the main pane
    pub view: View,
    pub overlay: SearchOverlay,
    pub booking_filter: StatusFilter<BookingStatus>,
    pub gallery_filter: StatusFilter<GalleryStatus>,
    /// Clients view free-text box
    pub client_query: String,
    /// Currently selected row in the active list
    pub selected_index: usize,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
}

impl App {
    pub fn new(data: StudioData, config: StudioConfig) -> Self {
        let view = config.ui.default_view;
        Self {
            data,
            config,
            mode: Mode::Normal,
            view,
            overlay: SearchOverlay::new(),
            booking_filter: StatusFilter::All,
            gallery_filter: StatusFilter::All,
            client_query: String::new(),
            selected_index: 0,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a view; per-view filters are kept.
    pub fn switch_view(&mut self, view: View) {
        self.view = view;
        self.selected_index = 0;
    }

    pub fn next_view(&mut self) {
        let idx = (self.view.index() + 1) % View::ALL.len();
        self.switch_view(View::ALL[idx]);
    }

    pub fn prev_view(&mut self) {
        let idx = self
            .view
            .index()
            .checked_sub(1)
            .unwrap_or(View::ALL.len() - 1);
        self.switch_view(View::ALL[idx]);
    }

    pub fn open_search(&mut self) {
        self.mode = Mode::Search;
        self.overlay.open();
    }

    /// `Esc` in the overlay: close it and forget the query.
    pub fn dismiss_search(&mut self) {
        self.overlay.dismiss();
        self.mode = Mode::Normal;
    }

    pub fn search_insert(&mut self, c: char) {
        self.overlay.push_char(c, &self.data);
    }

    pub fn search_backspace(&mut self) {
        self.overlay.pop_char(&self.data);
    }

    /// Dispatch the highlighted result and jump to its view.
    pub fn confirm_search(&mut self) {
        if let Some(view) = self.overlay.confirm() {
            self.mode = Mode::Normal;
            self.switch_view(view);
            self.set_status(format!("Opened {}", view.label()));
        }
    }

    /// Next status filter for the bookings or galleries view.
    pub fn cycle_filter(&mut self) {
        match self.view {
            View::Bookings => {
                self.booking_filter = self.booking_filter.cycle(&BookingStatus::ALL);
                self.set_status(format!("Bookings: {}", self.booking_filter.label()));
            }
            View::Galleries => {
                self.gallery_filter = self.gallery_filter.cycle(&GalleryStatus::ALL);
                self.set_status(format!("Galleries: {}", self.gallery_filter.label()));
            }
            _ => return,
        }
        self.selected_index = 0;
    }

    pub fn enter_client_filter(&mut self) {
        if self.view == View::Clients {
            self.mode = Mode::ClientFilter;
        }
    }

    pub fn client_filter_insert(&mut self, c: char) {
        self.client_query.push(c);
        self.selected_index = 0;
    }

    pub fn client_filter_backspace(&mut self) {
        self.client_query.pop();
        self.selected_index = 0;
    }

    /// Leave the filter box, optionally emptying it.
    pub fn exit_client_filter(&mut self, clear: bool) {
        if clear {
            self.client_query.clear();
            self.selected_index = 0;
        }
        self.mode = Mode::Normal;
    }

    /// Rows in the active view's list (0 for the dashboard).
    pub fn list_len(&self) -> usize {
        match self.view {
            View::Dashboard => 0,
            View::Clients => filter_clients(&self.data.clients, &self.client_query).len(),
            View::Galleries => filter_galleries(&self.data.galleries, self.gallery_filter).len(),
            View::Bookings => filter_bookings(&self.data.bookings, self.booking_filter).len(),
            View::Packages => self.data.packages.len(),
            View::Referrals => top_referrers(&self.data.clients).len(),
        }
    }

    /// Select next row in list
    pub fn select_next(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    /// Select previous row in list
    pub fn select_prev(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.selected_index = self.selected_index.checked_sub(1).unwrap_or(len - 1);
        }
    }
}
