// Mock status generator: randomized snapshot per request over a fixed roster

use std::sync::Arc;

use rand::Rng;

use crate::models::{Roster, SiteState, SiteStatus, Snapshot, TRAFFIC_SAMPLES};

/// Chance that a site reports OFFLINE in a given snapshot.
pub const OFFLINE_PROBABILITY: f64 = 0.05;
/// Totals jitter in [-TOTAL_JITTER, TOTAL_JITTER) around the baseline.
pub const TOTAL_JITTER: i64 = 10;
/// Traffic samples are drawn from [0, TRAFFIC_MAX).
pub const TRAFFIC_MAX: u32 = 100;

/// Synthesizes snapshots for an immutable roster. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Generator {
    roster: Arc<Roster>,
}

impl Generator {
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Snapshot using the thread-local RNG.
    pub fn generate(&self) -> Snapshot {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Snapshot drawing from `rng`; one record per site in roster order.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Snapshot {
        let snapshot: Snapshot = self
            .roster
            .sites()
            .iter()
            .map(|site| {
                let total =
                    i64::from(site.baseline) + rng.gen_range(0..2 * TOTAL_JITTER) - TOTAL_JITTER;
                let status = if rng.gen_bool(OFFLINE_PROBABILITY) {
                    SiteState::Offline
                } else {
                    SiteState::Online
                };
                let traffic = (0..TRAFFIC_SAMPLES)
                    .map(|_| rng.gen_range(0..TRAFFIC_MAX))
                    .collect();
                SiteStatus::from_site(site, total, status, traffic)
            })
            .collect();
        tracing::trace!(sites = snapshot.len(), "snapshot generated");
        snapshot
    }
}
