//! Referral program read model.
//!
//! Reward amounts are display placeholders: a flat figure per referral, not a
//! ledger of what was actually paid out.

use serde::Serialize;

use crate::model::Client;

/// Cosmetic reward shown per referral.
pub const REWARD_PER_REFERRAL: u64 = 50;

/// Discount both parties get when a referral books.
pub const REFERRAL_DISCOUNT_PERCENT: u8 = 10;

pub const DEFAULT_REFERRAL_CODE: &str = "PHOTO2024";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Referrer<'a> {
    pub rank: usize,
    pub client: &'a Client,
    pub referrals: u32,
    pub earned: u64,
}

/// Sum of referral counts across all clients.
pub fn total_referrals(clients: &[Client]) -> u64 {
    clients.iter().map(|c| u64::from(c.referral_count)).sum()
}

/// Clients with at least one referral, most referrals first.
///
/// Ties keep source order.
pub fn top_referrers(clients: &[Client]) -> Vec<Referrer<'_>> {
    let mut ranked: Vec<&Client> = clients.iter().filter(|c| c.referral_count > 0).collect();
    ranked.sort_by(|a, b| b.referral_count.cmp(&a.referral_count));
    ranked
        .into_iter()
        .enumerate()
        .map(|(idx, client)| Referrer {
            rank: idx + 1,
            client,
            referrals: client.referral_count,
            earned: u64::from(client.referral_count) * REWARD_PER_REFERRAL,
        })
        .collect()
}

/// Clients who came in through `referrer_id`.
pub fn referred_by<'a>(clients: &'a [Client], referrer_id: &str) -> Vec<&'a Client> {
    clients
        .iter()
        .filter(|c| c.referred_by.as_deref() == Some(referrer_id))
        .collect()
}

pub fn referral_pitch() -> String {
    format!(
        "Share this code with your clients. When their referrals book a session, \
         both parties receive a {REFERRAL_DISCOUNT_PERCENT}% discount."
    )
}

/// "1 referral" / "3 referrals".
pub fn pluralize_referrals(count: u32) -> String {
    if count == 1 {
        "1 referral".to_string()
    } else {
        format!("{count} referrals")
    }
}
