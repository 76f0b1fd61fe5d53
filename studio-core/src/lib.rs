pub mod config;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod fixtures;
pub mod model;
pub mod navigation;
pub mod referrals;
pub mod search;

#[cfg(test)]
mod testing;

pub use config::StudioConfig;
pub use error::{Result, StudioError};
pub use filters::{filter_bookings, filter_clients, filter_galleries, StatusFilter};
pub use fixtures::StudioData;
pub use model::{
    Booking, BookingStatus, Client, DashboardStats, Gallery, GalleryStatus, PricingPackage,
};
pub use navigation::{dispatch, SearchOverlay, View};
pub use search::{search, SearchKind, SearchResult, MAX_RESULTS};
