use moka::future::Cache;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use crate::models::board::BoardSnapshot;

/// Hands out increasing numbers to refresh cycles.
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    issued: AtomicU64,
}

impl RefreshSequencer {
    pub fn next(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

/// Latest committed snapshot per location code.
///
/// A snapshot is only accepted from the most recently started cycle, so a slow
/// fetch that finishes after a newer one started is dropped.
pub struct BoardStore {
    snapshots: Cache<String, Arc<BoardSnapshot>>,
    sequencer: RefreshSequencer,
    commit_lock: Mutex<()>,
}

impl BoardStore {
    pub fn new() -> Self {
        BoardStore {
            snapshots: Cache::new(16),
            sequencer: RefreshSequencer::default(),
            commit_lock: Mutex::new(()),
        }
    }

    /// Starts a refresh cycle and returns its sequence number.
    pub fn begin(&self) -> u64 {
        self.sequencer.next()
    }

    /// Stores `snapshot` if its cycle is still the latest one started.
    pub async fn commit(&self, code: &str, snapshot: BoardSnapshot) -> bool {
        let _guard = self.commit_lock.lock().await;

        if snapshot.sequence != self.sequencer.latest() {
            return false;
        }

        self.snapshots
            .insert(code.to_string(), Arc::new(snapshot))
            .await;
        true
    }

    pub async fn get(&self, code: &str) -> Option<Arc<BoardSnapshot>> {
        self.snapshots.get(code).await
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
