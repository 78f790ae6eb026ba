// Shared test helpers

#![allow(dead_code)]

use async_trait::async_trait;
use nocwatch::models::*;
use nocwatch::poller::Clock;
use nocwatch::source::{FetchError, SnapshotSource};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn record(id: u32, traffic: Vec<u32>) -> SiteStatus {
    SiteStatus {
        id,
        name: format!("ESCOLA CDE0{}", id),
        manager: format!("GESTOR {}", id),
        phone: format!("9299400000{}", id),
        baseline: 80,
        total: 80,
        status: SiteState::Online,
        traffic,
    }
}

/// Source that counts calls and replays scripted results (last one repeats).
pub struct ScriptedSource {
    calls: Arc<AtomicUsize>,
    script: Vec<Option<Snapshot>>,
    delay: Duration,
}

impl ScriptedSource {
    pub fn ok(snapshot: Snapshot) -> Self {
        Self::scripted(vec![Some(snapshot)])
    }

    /// `None` entries fail with a non-success status.
    pub fn scripted(script: Vec<Option<Snapshot>>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            script,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl SnapshotSource for ScriptedSource {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let step = self.script.get(n).or(self.script.last()).cloned().flatten();
        step.ok_or(FetchError::Status(503))
    }
}

/// Clock returning `tick-N` on the N-th call, plus its call counter.
pub fn counting_clock() -> (Clock, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let clock: Clock = Arc::new(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("tick-{}", n)
    });
    (clock, calls)
}
