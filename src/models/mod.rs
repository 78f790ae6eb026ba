// Domain models: roster entries and snapshot records

mod site;
mod snapshot;

pub use site::{Roster, Site};
pub(crate) use site::reference_sites;
pub use snapshot::{SiteState, SiteStatus, Snapshot, TRAFFIC_SAMPLES, TrafficPoint};
