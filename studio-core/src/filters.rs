//! Match predicates and the per-view list filters.
//!
//! Predicates take a needle that is already lower-cased; callers lower-case
//! once per query rather than once per entity.

use std::fmt;
use std::str::FromStr;

use crate::error::StudioError;
use crate::model::{Booking, BookingStatus, Client, Gallery, GalleryStatus};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Client matches on name or email.
pub fn client_matches(needle: &str, client: &Client) -> bool {
    !needle.is_empty() && (contains_ci(&client.name, needle) || contains_ci(&client.email, needle))
}

/// Gallery matches on title or the denormalized client name.
pub fn gallery_matches(needle: &str, gallery: &Gallery) -> bool {
    !needle.is_empty()
        && (contains_ci(&gallery.title, needle) || contains_ci(&gallery.client_name, needle))
}

/// Booking matches on the denormalized client name or location.
pub fn booking_matches(needle: &str, booking: &Booking) -> bool {
    !needle.is_empty()
        && (contains_ci(&booking.client_name, needle) || contains_ci(&booking.location, needle))
}

/// Active status filter of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    pub fn admits(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Next filter in the tab order: all, then each status, then back to all.
    pub fn cycle(&self, statuses: &[S]) -> Self {
        match self {
            StatusFilter::All => statuses
                .first()
                .map_or(StatusFilter::All, |s| StatusFilter::Only(*s)),
            StatusFilter::Only(current) => statuses
                .iter()
                .position(|s| s == current)
                .and_then(|idx| statuses.get(idx + 1))
                .map_or(StatusFilter::All, |s| StatusFilter::Only(*s)),
        }
    }
}

impl StatusFilter<BookingStatus> {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

impl StatusFilter<GalleryStatus> {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

impl<S: fmt::Display> fmt::Display for StatusFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl<S> FromStr for StatusFilter<S>
where
    S: FromStr<Err = StudioError>,
{
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Bookings admitted by `filter`, ordered by ascending date.
///
/// The sort is stable, so bookings sharing a date keep their source order.
pub fn filter_bookings(bookings: &[Booking], filter: StatusFilter<BookingStatus>) -> Vec<&Booking> {
    let mut out: Vec<&Booking> = bookings.iter().filter(|b| filter.admits(b.status)).collect();
    out.sort_by_key(|b| b.date);
    out
}

/// Galleries admitted by `filter`, in source order.
pub fn filter_galleries(
    galleries: &[Gallery],
    filter: StatusFilter<GalleryStatus>,
) -> Vec<&Gallery> {
    galleries.iter().filter(|g| filter.admits(g.status)).collect()
}

/// Clients whose name or email contains `query`, in source order.
///
/// An empty box shows everyone.
pub fn filter_clients<'a>(clients: &'a [Client], query: &str) -> Vec<&'a Client> {
    let needle = query.to_lowercase();
    clients
        .iter()
        .filter(|c| needle.is_empty() || client_matches(&needle, c))
        .collect()
}
