// Cross-site traffic average per time slot

use crate::models::{SiteStatus, TRAFFIC_SAMPLES, TrafficPoint};

/// Averaged series over all slots, oldest (`T-10`) first.
pub fn average_traffic(snapshot: &[SiteStatus]) -> Vec<TrafficPoint> {
    (0..TRAFFIC_SAMPLES)
        .map(|i| traffic_point(snapshot, i))
        .collect()
}

/// Mean of `traffic[index]` across sites, rounded, labelled `T-(10 - index)`.
///
/// Sites lacking the slot count as 0. An empty snapshot divides by 1 and so
/// yields 0; that fallback only avoids a division by zero.
pub fn traffic_point(snapshot: &[SiteStatus], index: usize) -> TrafficPoint {
    let sum: u64 = snapshot
        .iter()
        .map(|s| u64::from(s.traffic.get(index).copied().unwrap_or(0)))
        .sum();
    let count = snapshot.len().max(1);
    let mean = sum as f64 / count as f64;
    TrafficPoint {
        label: format!("T-{}", TRAFFIC_SAMPLES - index),
        value: mean.round() as u32,
    }
}
