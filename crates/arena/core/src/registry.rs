//! Match-id-keyed registry for concurrently running matches.
//!
//! Turn resolution inside one match is sequential and non-reentrant, so the
//! only locking needed is one exclusive critical section per match id: two
//! submissions to the same match serialize, submissions to different matches
//! never contend with each other.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::arena::Arena;
use crate::unit::Unit;

/// Opaque identifier for a registered match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(u64);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match#{}", self.0)
    }
}

/// Errors from registry operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown match id: {0}")]
    UnknownMatch(MatchId),
    #[error("match lock poisoned: {0}")]
    Poisoned(MatchId),
}

/// Shared store of live arenas keyed by match id.
#[derive(Default)]
pub struct MatchRegistry {
    matches: Mutex<HashMap<MatchId, Arc<Mutex<Arena>>>>,
    next_id: AtomicU64,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `arena`, start a match between `player` and `enemy` in it
    /// and return the new match's id.
    pub fn create_match(&self, mut arena: Arena, player: Unit, enemy: Unit) -> MatchId {
        arena.start_game(player, enemy);
        let id = MatchId(self.next_id.fetch_add(1, Ordering::Relaxed));

        let mut matches = self.lock_map();
        matches.insert(id, Arc::new(Mutex::new(arena)));
        id
    }

    /// Run `f` against the arena for `id` under its exclusive lock.
    pub fn with_arena<R>(
        &self,
        id: MatchId,
        f: impl FnOnce(&mut Arena) -> R,
    ) -> Result<R, RegistryError> {
        let slot = {
            let matches = self.lock_map();
            matches
                .get(&id)
                .cloned()
                .ok_or(RegistryError::UnknownMatch(id))?
        };

        let mut arena = slot.lock().map_err(|_| RegistryError::Poisoned(id))?;
        Ok(f(&mut arena))
    }

    /// Drop a match from the registry. Returns true if it existed.
    pub fn remove_match(&self, id: MatchId) -> bool {
        let mut matches = self.lock_map();
        matches.remove(&id).is_some()
    }

    /// Ids of every registered match, in id order.
    pub fn match_ids(&self) -> Vec<MatchId> {
        let matches = self.lock_map();
        let mut ids: Vec<MatchId> = matches.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Lock the id map, recovering from poisoning: the map itself is only
    /// ever mutated by single insert/remove calls and stays consistent.
    fn lock_map(&self) -> std::sync::MutexGuard<'_, HashMap<MatchId, Arc<Mutex<Arena>>>> {
        self.matches.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
