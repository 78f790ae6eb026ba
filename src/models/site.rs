// Roster models: static site entries, loaded once at startup

use serde::{Deserialize, Serialize};

/// One monitored school. Immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: u32,
    pub name: String,
    pub manager: String,
    /// Digits only by convention; not validated.
    pub phone: String,
    /// Typical connected device count; generated totals jitter around it.
    pub baseline: u32,
}

/// Ordered, immutable list of monitored sites.
///
/// Declaration order is the order of every snapshot built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    sites: Vec<Site>,
}

impl Roster {
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    /// The reference roster: seven schools of the CDE district.
    pub fn reference() -> Self {
        Self::new(reference_sites())
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == id)
    }
}

pub(crate) fn reference_sites() -> Vec<Site> {
    let entries: [(u32, &str, &str, &str, u32); 7] = [
        (1, "ESCOLA CDE01", "FRANCINETE SERRAO DO NASCIMENTO", "92994458698", 90),
        (2, "ESCOLA CDE02", "MARIA FRANCISCA DE ALMEIDA SILVA", "92994378040", 85),
        (3, "ESCOLA CDE03", "ADRIANA DE LIMA BRASIL", "92994363985", 70),
        (4, "ESCOLA CDE04", "ANSELMO DE OLIVEIRA PALHETA NETO", "92994331857", 75),
        (5, "ESCOLA CDE05", "DALTON RONNER BATISTA DOS SANTOS", "92994514127", 80),
        (6, "ESCOLA CDE06", "HAYDEÉ DOS SANTOS CARNEIRO", "92994576703", 95),
        (7, "ESCOLA CDE07", "JEANE MELGUEIROS HIDALGO", "92994518779", 88),
    ];
    entries
        .into_iter()
        .map(|(id, name, manager, phone, baseline)| Site {
            id,
            name: name.into(),
            manager: manager.into(),
            phone: phone.into(),
            baseline,
        })
        .collect()
}
