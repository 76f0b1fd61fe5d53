//! Fixture source: the static dataset standing in for a backend.
//!
//! The default dataset is compiled into the binary. An alternate JSON file
//! with the same camelCase shape can be loaded with [`StudioData::from_path`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, StudioError};
use crate::model::{Booking, Client, DashboardStats, Gallery, PricingPackage};

const BUILTIN_FIXTURE: &str = include_str!("../fixtures/studio.json");

/// Every collection the dashboard reads, plus the precomputed stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioData {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub galleries: Vec<Gallery>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub packages: Vec<PricingPackage>,
    #[serde(default)]
    pub stats: DashboardStats,
}

impl StudioData {
    /// The dataset shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_FIXTURE, "builtin fixture")
    }

    /// Load a fixture file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw, &path.display().to_string())
    }

    /// Use `path` when given, otherwise the builtin dataset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    fn from_json_str(raw: &str, origin: &str) -> Result<Self> {
        let data: StudioData =
            serde_json::from_str(raw).map_err(|err| StudioError::json(origin, err))?;
        data.validate()?;
        info!(
            origin,
            clients = data.clients.len(),
            galleries = data.galleries.len(),
            bookings = data.bookings.len(),
            packages = data.packages.len(),
            "loaded studio fixtures"
        );
        Ok(data)
    }

    /// Ids must be unique within each collection.
    ///
    /// Cross-collection references (`client_id`, `package_id`) are not checked.
    pub fn validate(&self) -> Result<()> {
        ensure_unique("clients", self.clients.iter().map(|c| c.id.as_str()))?;
        ensure_unique("galleries", self.galleries.iter().map(|g| g.id.as_str()))?;
        ensure_unique("bookings", self.bookings.iter().map(|b| b.id.as_str()))?;
        ensure_unique("packages", self.packages.iter().map(|p| p.id.as_str()))?;
        Ok(())
    }
}

fn ensure_unique<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StudioError::duplicate_id(collection, id));
        }
    }
    Ok(())
}
