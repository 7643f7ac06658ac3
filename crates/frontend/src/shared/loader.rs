//! Remote data loading for panels.
//!
//! Every load takes a ticket; a response is applied only while its ticket is
//! the latest one, so a slow reply for a previous selection can never replace
//! the record of the current one.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::directory_api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct LoadSlot<T> {
    latest: u64,
    state: LoadState<T>,
}

impl<T> Default for LoadSlot<T> {
    fn default() -> Self {
        Self {
            latest: 0,
            state: LoadState::Idle,
        }
    }
}

impl<T> LoadSlot<T> {
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        self.state = LoadState::Loading;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Applies `result` if `ticket` is still current. Returns whether it did.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(message) => LoadState::Failed(message),
        };
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }
}

/// Reactive wrapper around [`LoadSlot`] owned by one view.
pub struct Loader<T: Send + Sync + 'static> {
    slot: RwSignal<LoadSlot<T>>,
}

impl<T: Send + Sync + 'static> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Loader<T> {}

impl<T: Clone + Send + Sync + 'static> Loader<T> {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(LoadSlot::default()),
        }
    }

    /// Starts `request`; `what` names it in the console log.
    pub fn load<F>(&self, what: String, request: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let slot = self.slot;
        let Some(ticket) = slot.try_update(|s| s.begin()) else {
            return;
        };
        log::debug!("loading {}", what);

        spawn_local(async move {
            let result = request.await.map_err(|err| {
                log::warn!("failed to load {}: {}", what, err);
                err.user_message()
            });
            let applied = slot
                .try_update(|s| s.complete(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("discarding stale response for {}", what);
            }
        });
    }

    pub fn state(&self) -> LoadState<T> {
        self.slot.with(|s| s.state().clone())
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cycle() {
        let mut slot = LoadSlot::<Vec<u32>>::default();
        assert_eq!(slot.state(), &LoadState::Idle);

        let ticket = slot.begin();
        assert_eq!(slot.state(), &LoadState::Loading);

        assert!(slot.complete(ticket, Ok(vec![1, 2])));
        assert_eq!(slot.state(), &LoadState::Loaded(vec![1, 2]));
    }

    #[test]
    fn test_failure_is_kept_as_message() {
        let mut slot = LoadSlot::<u32>::default();
        let ticket = slot.begin();
        slot.complete(ticket, Err("person not found".into()));
        assert_eq!(slot.state(), &LoadState::Failed("person not found".into()));
    }

    #[test]
    fn test_last_navigation_wins() {
        // persons/1 -> persons/2, the reply for 1 arrives after the one for 2
        let mut slot = LoadSlot::<&str>::default();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.complete(second, Ok("person 2")));
        assert!(!slot.complete(first, Ok("person 1")));
        assert_eq!(slot.state(), &LoadState::Loaded("person 2"));
    }

    #[test]
    fn test_stale_reply_does_not_end_pending_load() {
        let mut slot = LoadSlot::<&str>::default();
        let first = slot.begin();
        let _second = slot.begin();

        assert!(!slot.complete(first, Ok("person 1")));
        assert_eq!(slot.state(), &LoadState::Loading);
    }
}
