//! Subject-keyed result cache with stale-result discard.
//!
//! A lookup takes a [`CacheTicket`] before it starts and hands it back with
//! the result. The result is stored only if, in between, the subject was not
//! invalidated, the cache was not cleared, and the active subject did not
//! change. Late answers for a previous identity are dropped.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use barber_core::identity::Identity;
use barber_core::role::RoleAssignment;
use barber_core::store::{DataStore, RoleInvalidator};

use crate::error::AccessError;
use crate::resolver::RoleResolver;

/// Proof of when a lookup started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTicket {
    subject_id: String,
    generation: u64,
    epoch: u64,
}

impl CacheTicket {
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }
}

#[derive(Debug)]
struct CacheState<T> {
    entries: HashMap<String, T>,
    generations: HashMap<String, u64>,
    epoch: u64,
    active: Option<String>,
}

impl<T> Default for CacheState<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            generations: HashMap::new(),
            epoch: 0,
            active: None,
        }
    }
}

impl<T> CacheState<T> {
    fn generation(&self, subject_id: &str) -> u64 {
        self.generations.get(subject_id).copied().unwrap_or(0)
    }

    fn bump(&mut self, subject_id: &str) {
        *self.generations.entry(subject_id.to_string()).or_insert(0) += 1;
    }
}

#[derive(Debug)]
pub struct SubjectCache<T> {
    state: Mutex<CacheState<T>>,
}

impl<T> Default for SubjectCache<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
        }
    }
}

impl<T: Clone> SubjectCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, subject_id: &str) -> Option<T> {
        self.lock().entries.get(subject_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn active_subject(&self) -> Option<String> {
        self.lock().active.clone()
    }

    /// Start a lookup for `subject_id`.
    pub fn begin(&self, subject_id: &str) -> CacheTicket {
        let state = self.lock();
        CacheTicket {
            subject_id: subject_id.to_string(),
            generation: state.generation(subject_id),
            epoch: state.epoch,
        }
    }

    /// Store `value` if `ticket` is still current. Returns whether it was stored.
    pub fn complete(&self, ticket: &CacheTicket, value: T) -> bool {
        let mut state = self.lock();
        let subject_current = state
            .active
            .as_deref()
            .is_none_or(|active| active == ticket.subject_id);
        let fresh = state.epoch == ticket.epoch
            && state.generation(&ticket.subject_id) == ticket.generation
            && subject_current;
        if fresh {
            state.entries.insert(ticket.subject_id.clone(), value);
        } else {
            tracing::debug!(subject_id = %ticket.subject_id, "discarding stale lookup result");
        }
        fresh
    }

    /// Drop the entry for `subject_id` and void its outstanding tickets.
    pub fn invalidate(&self, subject_id: &str) {
        let mut state = self.lock();
        state.entries.remove(subject_id);
        state.bump(subject_id);
    }

    /// Drop everything and void every outstanding ticket.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.generations.clear();
        state.epoch += 1;
    }

    /// Record the current identity. Entries for other subjects are dropped,
    /// and tickets issued for them can no longer complete.
    pub fn switch_subject(&self, subject_id: Option<&str>) {
        let mut state = self.lock();
        if state.active.as_deref() == subject_id {
            return;
        }
        let previous = state.active.take();
        state.entries.retain(|key, _| Some(key.as_str()) == subject_id);
        if let Some(previous) = previous {
            state.bump(&previous);
        }
        state.active = subject_id.map(str::to_string);
    }
}

impl<T: Clone + Send> RoleInvalidator for SubjectCache<T> {
    fn invalidate(&self, subject_id: &str) {
        Self::invalidate(self, subject_id);
    }
}

/// [`RoleResolver`] in front of a shared [`SubjectCache`].
///
/// Errors are never cached; the next call retries the store.
pub struct CachedResolver<S> {
    resolver: RoleResolver<S>,
    cache: Arc<SubjectCache<RoleAssignment>>,
}

impl<S: DataStore> CachedResolver<S> {
    pub fn new(store: S) -> Self {
        Self::with_cache(store, Arc::new(SubjectCache::new()))
    }

    pub const fn with_cache(store: S, cache: Arc<SubjectCache<RoleAssignment>>) -> Self {
        Self {
            resolver: RoleResolver::new(store),
            cache,
        }
    }

    /// Shared handle, e.g. for registering as a `RoleInvalidator`.
    pub fn cache(&self) -> Arc<SubjectCache<RoleAssignment>> {
        Arc::clone(&self.cache)
    }

    pub const fn resolver(&self) -> &RoleResolver<S> {
        &self.resolver
    }

    /// Resolve through the cache.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`RoleResolver::resolve`] error.
    pub async fn resolve(&self, identity: Option<&Identity>) -> Result<RoleAssignment, AccessError> {
        let Some(identity) = identity else {
            return Ok(RoleAssignment::None);
        };
        let subject_id = identity.subject_id();
        if let Some(hit) = self.cache.get(subject_id) {
            tracing::debug!(subject_id, "role cache hit");
            return Ok(hit);
        }

        let ticket = self.cache.begin(subject_id);
        let assignment = self.resolver.resolve_subject(subject_id).await?;
        self.cache.complete(&ticket, assignment.clone());
        Ok(assignment)
    }
}
