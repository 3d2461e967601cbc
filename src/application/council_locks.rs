//! Per-council critical sections.
//!
//! Every write to a council runs while holding that council's async mutex,
//! so "record vote, read quorum, compare, terminate, synthesize" is one
//! atomic step with respect to other writes on the same council. Reads take
//! no lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::CouncilId;

/// Guard held for the duration of one council write.
pub type CouncilGuard = OwnedMutexGuard<()>;

#[derive(Debug, Default)]
pub struct CouncilLocks {
    locks: Mutex<HashMap<CouncilId, Arc<AsyncMutex<()>>>>,
}

impl CouncilLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `council_id`.
    pub async fn acquire(&self, council_id: &CouncilId) -> CouncilGuard {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(*council_id).or_default())
        };
        lock.lock_owned().await
    }

    /// Drops the lock of every council nobody holds or waits on.
    ///
    /// Clones of a lock are only handed out under the map's mutex, so a
    /// strong count of one means no guard and no waiter exists.
    pub fn prune(&self) {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|_, lock| Arc::strong_count(lock) > 1);
    }

    /// Number of councils with a lock entry.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
