//! Read model for the dashboard view.

use serde::Serialize;

use crate::fixtures::StudioData;
use crate::model::{format_money, Booking, DashboardStats, Gallery};

/// How many bookings and galleries the dashboard previews.
pub const RECENT_LIMIT: usize = 4;

/// A headline counter with an optional trend badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    /// Percentage change; cosmetic, never computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<i32>,
}

/// Stat cards in display order.
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Clients",
            value: stats.total_clients.to_string(),
            trend: Some(12),
        },
        StatCard {
            title: "Upcoming Shoots",
            value: stats.upcoming_bookings.to_string(),
            trend: None,
        },
        StatCard {
            title: "Pending Deliveries",
            value: stats.pending_deliveries.to_string(),
            trend: None,
        },
        StatCard {
            title: "Monthly Revenue",
            value: format_money(stats.monthly_revenue),
            trend: Some(8),
        },
        StatCard {
            title: "Referrals",
            value: stats.referrals_this_month.to_string(),
            trend: Some(25),
        },
    ]
}

/// First bookings in source order (not date order).
pub fn recent_bookings(bookings: &[Booking]) -> &[Booking] {
    &bookings[..bookings.len().min(RECENT_LIMIT)]
}

/// First galleries in source order.
pub fn recent_galleries(galleries: &[Gallery]) -> &[Gallery] {
    &galleries[..galleries.len().min(RECENT_LIMIT)]
}

/// Everything the dashboard screen shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary<'a> {
    pub cards: Vec<StatCard>,
    pub recent_bookings: &'a [Booking],
    pub recent_galleries: &'a [Gallery],
}

impl<'a> DashboardSummary<'a> {
    pub fn build(data: &'a StudioData) -> Self {
        Self {
            cards: stat_cards(&data.stats),
            recent_bookings: recent_bookings(&data.bookings),
            recent_galleries: recent_galleries(&data.galleries),
        }
    }
}
