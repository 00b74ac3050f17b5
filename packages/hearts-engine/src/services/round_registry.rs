//! Concurrent registry of live rounds.
//!
//! Each round sits behind its own mutex, so operations on one round are
//! serialized while different rounds proceed in parallel. The engine never
//! persists anything; hosts that need durability save snapshots.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::round::Round;
use crate::domain::snapshot::RoundSnapshot;
use crate::errors::domain::{DomainError, ValidationKind};

/// `(game_id, round_position)`
pub type RoundKey = (i64, u32);

/// Live rounds keyed by game and position.
pub struct RoundRegistry {
    rounds: DashMap<RoundKey, Arc<Mutex<Round>>>,
}

impl RoundRegistry {
    pub fn new() -> Self {
        Self {
            rounds: DashMap::new(),
        }
    }

    /// Insert a round. Fails if the key is already taken.
    pub fn register(&self, game_id: i64, round: Round) -> Result<RoundKey, DomainError> {
        let key = (game_id, round.position());
        match self.rounds.entry(key) {
            Entry::Occupied(_) => Err(DomainError::validation(
                ValidationKind::Other("ROUND_EXISTS".into()),
                format!("Round {} of game {game_id} is already registered", key.1),
            )),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(round)));
                debug!(game_id, round = key.1, "Round registered");
                Ok(key)
            }
        }
    }

    /// Shared handle to a round, if registered.
    pub fn get(&self, key: RoundKey) -> Option<Arc<Mutex<Round>>> {
        self.rounds.get(&key).map(|entry| entry.value().clone())
    }

    /// Run `f` with exclusive access to one round.
    ///
    /// The map shard is released before the round lock is taken, so a slow
    /// closure never blocks lookups of other rounds.
    pub fn with_round<T>(
        &self,
        key: RoundKey,
        f: impl FnOnce(&mut Round) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let handle = self.get(key).ok_or_else(|| not_found(key))?;
        let mut round = handle.lock();
        f(&mut round)
    }

    pub fn snapshot(&self, key: RoundKey) -> Result<RoundSnapshot, DomainError> {
        let handle = self.get(key).ok_or_else(|| not_found(key))?;
        let round = handle.lock();
        Ok(round.snapshot())
    }

    /// Rebuild a round from a snapshot and register it.
    pub fn restore(&self, game_id: i64, snapshot: RoundSnapshot) -> Result<RoundKey, DomainError> {
        let round = Round::from_snapshot(snapshot)?;
        self.register(game_id, round)
    }

    pub fn remove(&self, key: RoundKey) -> Option<Round> {
        let (_, handle) = self.rounds.remove(&key)?;
        // Another caller may still hold the Arc; take a copy in that case.
        Some(match Arc::try_unwrap(handle) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => shared.lock().clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl Default for RoundRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(key: RoundKey) -> DomainError {
    DomainError::validation(
        ValidationKind::Other("ROUND_NOT_FOUND".into()),
        format!("No round {} registered for game {}", key.1, key.0),
    )
}
