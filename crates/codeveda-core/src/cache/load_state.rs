//! Loading state for a page that awaits a document.
//!
//! A page may start a new load (or be torn down) before an earlier fetch
//! resolves. Each load is tagged with a `Generation`; results carrying an
//! older generation are dropped instead of overwriting newer state.

use super::CacheError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    /// Degraded view: the message is shown in place of the content.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct LoadTracker<T> {
    generation: u64,
    state: LoadState<T>,
}

impl<T> Default for LoadTracker<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: LoadState::Idle,
        }
    }
}

impl<T> LoadTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding any load still in flight.
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.state = LoadState::Loading;
        Generation(self.generation)
    }

    /// Drop whatever is loading or loaded, e.g. when the page unmounts.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state = LoadState::Idle;
    }

    /// Record the outcome of the load started at `generation`.
    /// Returns false (and changes nothing) if that load was superseded.
    pub fn apply(&mut self, generation: Generation, result: Result<T, CacheError>) -> bool {
        if generation.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn into_state(self) -> LoadState<T> {
        self.state
    }
}
