//! Studio entities as loaded from the fixture source.
//!
//! Records are read-only after load. Denormalized name fields on galleries and
//! bookings (`client_name`, `package_name`) are copies taken when the fixture
//! was written and are never reconciled with the entity they point at.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StudioError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub referred_by: Option<String>,
    #[serde(default)]
    pub referral_count: u32,
    #[serde(default)]
    pub total_spent: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryStatus {
    Editing,
    Ready,
    Delivered,
}

impl GalleryStatus {
    pub const ALL: [GalleryStatus; 3] = [Self::Editing, Self::Ready, Self::Delivered];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryStatus::Editing => "editing",
            GalleryStatus::Ready => "ready",
            GalleryStatus::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryStatus::Editing => "Editing",
            GalleryStatus::Ready => "Ready",
            GalleryStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for GalleryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryStatus {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "editing" => Ok(Self::Editing),
            "ready" => Ok(Self::Ready),
            "delivered" => Ok(Self::Delivered),
            _ => Err(StudioError::unknown_status("gallery", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub title: String,
    pub cover_image: String,
    #[serde(default)]
    pub image_count: u32,
    pub status: GalleryStatus,
    #[serde(default)]
    pub delivery_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(StudioError::unknown_status("booking", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    #[serde(default)]
    pub client_avatar: Option<String>,
    pub package_id: String,
    pub package_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reminder: Option<DateTime<Utc>>,
}

impl Booking {
    /// Confirmed shoots get an automatic reminder the day before.
    pub fn reminder_hint(&self) -> Option<&'static str> {
        (self.status == BookingStatus::Confirmed).then_some("Reminder set for 24h before")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPackage {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub duration: String,
    #[serde(default)]
    pub popular: bool,
}

/// Headline counters shown on the dashboard. Precomputed by the fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: u32,
    pub upcoming_bookings: u32,
    pub pending_deliveries: u32,
    pub monthly_revenue: u64,
    pub referrals_this_month: u32,
}

/// Format a whole-unit amount as `$12,450`.
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a date with a strftime pattern, falling back to ISO when the
/// pattern does not parse.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_date_pattern_and_fallback() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date, "%a, %b %-d, %Y"), "Sat, Mar 9, 2024");
        assert_eq!(format_date(date, "%Q"), "2024-03-09");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(950), "$950");
        assert_eq!(format_money(1000), "$1,000");
        assert_eq!(format_money(12450), "$12,450");
        assert_eq!(format_money(1234567), "$1,234,567");
    }

    #[test]
    fn test_status_parsing_is_closed() {
        assert_eq!("Ready".parse::<GalleryStatus>().unwrap(), GalleryStatus::Ready);
        assert_eq!(
            " cancelled ".parse::<BookingStatus>().unwrap(),
            BookingStatus::Cancelled
        );
        assert!("archived".parse::<GalleryStatus>().is_err());
        assert!("unknown".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_booking_deserializes_with_optional_fields_absent() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "b-1",
            "clientId": "c-1",
            "clientName": "Ana Ruiz",
            "packageId": "p-1",
            "packageName": "Portrait",
            "date": "2024-05-10",
            "time": "10:00 AM",
            "location": "Central Park",
            "status": "confirmed"
        }))
        .unwrap();

        assert!(booking.client_avatar.is_none());
        assert!(booking.notes.is_none());
        assert_eq!(booking.reminder_hint(), Some("Reminder set for 24h before"));
    }

    #[test]
    fn test_unknown_status_rejected_on_deserialize() {
        let result: std::result::Result<Gallery, _> = serde_json::from_value(json!({
            "id": "g-1",
            "clientId": "c-1",
            "clientName": "Ana Ruiz",
            "title": "Spring",
            "coverImage": "cover.jpg",
            "imageCount": 10,
            "status": "archived",
            "createdAt": "2024-01-01T00:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_package_popular_defaults_false() {
        let pkg: PricingPackage = serde_json::from_value(json!({
            "id": "p-1",
            "name": "Mini",
            "price": 250,
            "description": "Quick session",
            "features": ["30 minutes"],
            "duration": "30 min"
        }))
        .unwrap();
        assert!(!pkg.popular);
    }
}
