use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use studio_core::{
    filter_bookings, filter_clients, filter_galleries, search, Booking, BookingStatus, Client,
    Gallery, GalleryStatus, SearchKind, StatusFilter, MAX_RESULTS,
};

// Small alphabet so random queries actually hit something
const TEXT: &str = "[abcAB ]{0,10}";
const QUERY: &str = "[abcAB]{1,3}";

fn arb_clients() -> impl Strategy<Value = Vec<Client>> {
    prop::collection::vec((TEXT, TEXT), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, email))| Client {
                id: format!("c-{i}"),
                name,
                email,
                phone: String::new(),
                avatar: None,
                referred_by: None,
                referral_count: 0,
                total_spent: 0,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            })
            .collect()
    })
}

fn arb_gallery_status() -> impl Strategy<Value = GalleryStatus> {
    prop::sample::select(GalleryStatus::ALL.to_vec())
}

fn arb_booking_status() -> impl Strategy<Value = BookingStatus> {
    prop::sample::select(BookingStatus::ALL.to_vec())
}

fn arb_galleries() -> impl Strategy<Value = Vec<Gallery>> {
    prop::collection::vec((TEXT, TEXT, arb_gallery_status()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, client_name, status))| Gallery {
                id: format!("g-{i}"),
                client_id: String::new(),
                client_name,
                title,
                cover_image: String::new(),
                image_count: 0,
                status,
                delivery_date: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            })
            .collect()
    })
}

fn arb_bookings() -> impl Strategy<Value = Vec<Booking>> {
    prop::collection::vec((TEXT, TEXT, 0u32..730, arb_booking_status()), 0..12).prop_map(|rows| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (client_name, location, offset, status))| Booking {
                id: format!("b-{i}"),
                client_id: String::new(),
                client_name,
                client_avatar: None,
                package_id: String::new(),
                package_name: "Mini Session".to_string(),
                date: base + chrono::Duration::days(i64::from(offset)),
                time: String::new(),
                location,
                status,
                notes: None,
                reminder: None,
            })
            .collect()
    })
}

fn arb_booking_filter() -> impl Strategy<Value = StatusFilter<BookingStatus>> {
    prop_oneof![
        Just(StatusFilter::All),
        arb_booking_status().prop_map(StatusFilter::Only),
    ]
}

fn arb_gallery_filter() -> impl Strategy<Value = StatusFilter<GalleryStatus>> {
    prop_oneof![
        Just(StatusFilter::All),
        arb_gallery_status().prop_map(StatusFilter::Only),
    ]
}

fn kind_rank(kind: SearchKind) -> u8 {
    match kind {
        SearchKind::Client => 0,
        SearchKind::Gallery => 1,
        SearchKind::Booking => 2,
    }
}

fn source_index(id: &str) -> usize {
    id[2..].parse().unwrap()
}

fn has(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}

proptest! {
    /// Property: never more than MAX_RESULTS results
    #[test]
    fn prop_result_count_bounded(
        query in QUERY,
        clients in arb_clients(),
        galleries in arb_galleries(),
        bookings in arb_bookings(),
    ) {
        let results = search(&query, &clients, &galleries, &bookings);
        prop_assert!(results.len() <= MAX_RESULTS);
    }

    /// Property: every result's source entity contains the query in a matched field
    #[test]
    fn prop_results_actually_match(
        query in QUERY,
        clients in arb_clients(),
        galleries in arb_galleries(),
        bookings in arb_bookings(),
    ) {
        for result in search(&query, &clients, &galleries, &bookings) {
            let idx = source_index(&result.id);
            let matched = match result.kind {
                SearchKind::Client => {
                    let c = &clients[idx];
                    has(&c.name, &query) || has(&c.email, &query)
                }
                SearchKind::Gallery => {
                    let g = &galleries[idx];
                    has(&g.title, &query) || has(&g.client_name, &query)
                }
                SearchKind::Booking => {
                    let b = &bookings[idx];
                    has(&b.client_name, &query) || has(&b.location, &query)
                }
            };
            prop_assert!(matched, "{:?} does not match {:?}", result, query);
        }
    }

    /// Property: grouped client, gallery, booking; source order inside each group
    #[test]
    fn prop_results_grouped_in_source_order(
        query in QUERY,
        clients in arb_clients(),
        galleries in arb_galleries(),
        bookings in arb_bookings(),
    ) {
        let results = search(&query, &clients, &galleries, &bookings);
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(kind_rank(a.kind) <= kind_rank(b.kind));
            if a.kind == b.kind {
                prop_assert!(source_index(&a.id) < source_index(&b.id));
            }
        }
    }

    /// Property: the untruncated match count caps at MAX_RESULTS exactly
    #[test]
    fn prop_truncation_keeps_prefix(
        query in QUERY,
        clients in arb_clients(),
        galleries in arb_galleries(),
    ) {
        let matching_clients = clients
            .iter()
            .filter(|c| has(&c.name, &query) || has(&c.email, &query))
            .count();
        let matching_galleries = galleries
            .iter()
            .filter(|g| has(&g.title, &query) || has(&g.client_name, &query))
            .count();
        let results = search(&query, &clients, &galleries, &[]);
        prop_assert_eq!(results.len(), (matching_clients + matching_galleries).min(MAX_RESULTS));
    }

    /// Property: whitespace-only queries return nothing
    #[test]
    fn prop_blank_query_empty(
        blank in "[ \t]{0,4}",
        clients in arb_clients(),
        galleries in arb_galleries(),
        bookings in arb_bookings(),
    ) {
        prop_assert!(search(&blank, &clients, &galleries, &bookings).is_empty());
    }

    /// Property: booking list is date-ordered under every filter
    #[test]
    fn prop_bookings_sorted_by_date(bookings in arb_bookings(), filter in arb_booking_filter()) {
        let out = filter_bookings(&bookings, filter);
        for pair in out.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date);
        }
        prop_assert!(out.iter().all(|b| filter.admits(b.status)));
    }

    /// Property: filters are idempotent
    #[test]
    fn prop_filters_idempotent(
        clients in arb_clients(),
        galleries in arb_galleries(),
        bookings in arb_bookings(),
        booking_filter in arb_booking_filter(),
        gallery_filter in arb_gallery_filter(),
        query in "[abc]{0,2}",
    ) {
        let once: Vec<Booking> = filter_bookings(&bookings, booking_filter).into_iter().cloned().collect();
        let twice: Vec<Booking> = filter_bookings(&once, booking_filter).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);

        let once: Vec<Gallery> = filter_galleries(&galleries, gallery_filter).into_iter().cloned().collect();
        let twice: Vec<Gallery> = filter_galleries(&once, gallery_filter).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);

        let once: Vec<Client> = filter_clients(&clients, &query).into_iter().cloned().collect();
        let twice: Vec<Client> = filter_clients(&once, &query).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn test_unicode_case_folding() {
    let clients = vec![Client {
        id: "c-0".to_string(),
        name: "ÉMILE Zoë".to_string(),
        email: "emile@example.com".to_string(),
        phone: String::new(),
        avatar: None,
        referred_by: None,
        referral_count: 0,
        total_spent: 0,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }];

    assert_eq!(search("émile", &clients, &[], &[]).len(), 1);
    assert_eq!(search("ZOË", &clients, &[], &[]).len(), 1);
    assert_eq!(filter_clients(&clients, "zoë").len(), 1);
}

#[test]
fn test_example_bookings_start_with_earliest() {
    let mut bookings = Vec::new();
    for (i, date) in ["2024-05-10", "2024-03-01"].iter().enumerate() {
        bookings.push(Booking {
            id: format!("b-{i}"),
            client_id: String::new(),
            client_name: "Ana".to_string(),
            client_avatar: None,
            package_id: String::new(),
            package_name: String::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: String::new(),
            location: String::new(),
            status: BookingStatus::Pending,
            notes: None,
            reminder: None,
        });
    }

    let sorted = filter_bookings(&bookings, StatusFilter::All);
    assert_eq!(sorted[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}
