// Snapshot wire models (GET /api/dados)

use serde::{Deserialize, Serialize};

use super::Site;

/// Number of historical traffic samples per site.
pub const TRAFFIC_SAMPLES: usize = 10;

/// Link status; serializes to uppercase JSON ("ONLINE" / "OFFLINE").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SiteState {
    Online,
    Offline,
}

impl SiteState {
    pub fn is_online(self) -> bool {
        matches!(self, SiteState::Online)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SiteState::Online => "ONLINE",
            SiteState::Offline => "OFFLINE",
        }
    }
}

/// One site's record in a snapshot: static roster fields plus randomized readings.
///
/// Field names follow the public feed (`nome`, `gestor`, `tel`, `trafego`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStatus {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "gestor")]
    pub manager: String,
    #[serde(rename = "tel")]
    pub phone: String,
    #[serde(rename = "base", default)]
    pub baseline: u32,
    pub total: i64,
    pub status: SiteState,
    /// Load samples, oldest first. Generated with exactly TRAFFIC_SAMPLES entries;
    /// readers must tolerate shorter arrays.
    #[serde(rename = "trafego", default)]
    pub traffic: Vec<u32>,
}

impl SiteStatus {
    pub fn from_site(site: &Site, total: i64, status: SiteState, traffic: Vec<u32>) -> Self {
        Self {
            id: site.id,
            name: site.name.clone(),
            manager: site.manager.clone(),
            phone: site.phone.clone(),
            baseline: site.baseline,
            total,
            status,
            traffic,
        }
    }
}

/// One complete point-in-time set of per-site records, in roster order.
pub type Snapshot = Vec<SiteStatus>;

/// One point of the averaged traffic series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficPoint {
    pub label: String,
    pub value: u32,
}
