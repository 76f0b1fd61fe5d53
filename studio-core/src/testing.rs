//! Entity builders for unit tests.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::model::{Booking, BookingStatus, Client, Gallery, GalleryStatus};

pub fn client(id: &str, name: &str, email: &str) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "(555) 010-0000".to_string(),
        avatar: None,
        referred_by: None,
        referral_count: 0,
        total_spent: 0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn gallery(id: &str, title: &str, client_name: &str, status: GalleryStatus) -> Gallery {
    Gallery {
        id: id.to_string(),
        client_id: format!("client-of-{id}"),
        client_name: client_name.to_string(),
        title: title.to_string(),
        cover_image: format!("https://img.example/{id}.jpg"),
        image_count: 24,
        status,
        delivery_date: None,
        created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    }
}

pub fn booking(
    id: &str,
    client_name: &str,
    location: &str,
    date: &str,
    status: BookingStatus,
) -> Booking {
    Booking {
        id: id.to_string(),
        client_id: format!("client-of-{id}"),
        client_name: client_name.to_string(),
        client_avatar: None,
        package_id: "p-1".to_string(),
        package_name: "Portrait Session".to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: "10:00 AM".to_string(),
        location: location.to_string(),
        status,
        notes: None,
        reminder: None,
    }
}
