//! Global search across clients, galleries and bookings.
//!
//! Results are not scored. Clients come first, then galleries, then bookings,
//! each group in source order, and the whole list is cut at [`MAX_RESULTS`].
//! Every call rescans all three collections; they are small and in memory.

use serde::Serialize;
use tracing::debug;

use crate::filters::{booking_matches, client_matches, gallery_matches};
use crate::model::{Booking, Client, Gallery};

/// Upper bound on results returned by [`search`].
pub const MAX_RESULTS: usize = 8;

/// Entity type a search result points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Client,
    Gallery,
    Booking,
}

impl SearchKind {
    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::Client => "Client",
            SearchKind::Gallery => "Gallery",
            SearchKind::Booking => "Booking",
        }
    }
}

/// One row in the search overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub kind: SearchKind,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl SearchResult {
    fn from_client(client: &Client) -> Self {
        Self {
            kind: SearchKind::Client,
            id: client.id.clone(),
            title: client.name.clone(),
            subtitle: client.email.clone(),
            avatar: client.avatar.clone(),
        }
    }

    fn from_gallery(gallery: &Gallery) -> Self {
        Self {
            kind: SearchKind::Gallery,
            id: gallery.id.clone(),
            title: gallery.title.clone(),
            subtitle: format!("{} • {} photos", gallery.client_name, gallery.image_count),
            avatar: Some(gallery.cover_image.clone()),
        }
    }

    fn from_booking(booking: &Booking) -> Self {
        Self {
            kind: SearchKind::Booking,
            id: booking.id.clone(),
            title: booking.client_name.clone(),
            subtitle: format!(
                "{} • {}",
                booking.package_name,
                booking.date.format("%-m/%-d/%Y")
            ),
            avatar: booking.client_avatar.clone(),
        }
    }
}

/// Search all three collections for `query`.
///
/// A blank query returns nothing rather than everything.
pub fn search(
    query: &str,
    clients: &[Client],
    galleries: &[Gallery],
    bookings: &[Booking],
) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let matched = clients
        .iter()
        .filter(|c| client_matches(&needle, c))
        .map(SearchResult::from_client)
        .chain(
            galleries
                .iter()
                .filter(|g| gallery_matches(&needle, g))
                .map(SearchResult::from_gallery),
        )
        .chain(
            bookings
                .iter()
                .filter(|b| booking_matches(&needle, b))
                .map(SearchResult::from_booking),
        );

    let results: Vec<SearchResult> = matched.take(MAX_RESULTS).collect();
    debug!(query = %query, returned = results.len(), "search completed");
    results
}
