//! Generic list-screen controller

use shared::error::AppError;
use shared::models::Record;
use shared::{QueryRequest, RecordId};
use std::marker::PhantomData;

use super::search::{Searchable, matches_query};
use crate::ClientResult;
use crate::gateway::Gateway;

/// Which flag a load runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// First load or a reload after a filter change
    Initial,
    /// Pull-to-refresh
    Refresh,
}

/// What the screen should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    Loading,
    Refreshing,
    /// Last load succeeded with at least one row
    Loaded,
    /// Last load succeeded with zero rows
    Empty,
    /// Last load failed; see [`ListController::error`]
    Failed,
}

/// Identifies one issued load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    mode: LoadMode,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }
}

/// A load that has been issued but not fetched
///
/// Owns everything the request needs, so the fetch can run while the
/// controller is used for something else.
#[derive(Debug)]
pub struct PendingLoad<T> {
    ticket: LoadTicket,
    gateway: Gateway,
    request: QueryRequest,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> PendingLoad<T> {
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    pub async fn fetch(self) -> CompletedLoad<T> {
        let result = self.gateway.try_list::<T>(&self.request).await;
        CompletedLoad {
            ticket: self.ticket,
            result,
        }
    }
}

/// A fetched load waiting to be applied
#[derive(Debug)]
pub struct CompletedLoad<T> {
    ticket: LoadTicket,
    result: ClientResult<Vec<T>>,
}

impl<T> CompletedLoad<T> {
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }
}

/// State holder for one list screen
///
/// Items are replaced wholesale by each applied load. Loads are numbered;
/// only the most recently issued one may change state, so a slow response
/// that arrives after a newer load or after [`invalidate`](Self::invalidate)
/// is dropped.
#[derive(Debug)]
pub struct ListController<T> {
    pub(super) gateway: Gateway,
    pub(super) request: QueryRequest,
    pub(super) items: Vec<T>,
    query: String,
    loading: bool,
    refreshing: bool,
    loaded: bool,
    error: Option<AppError>,
    generation: u64,
}

impl<T: Record> ListController<T> {
    /// Controller listing `T` with its default query
    pub fn new(gateway: Gateway) -> Self {
        Self::with_request(gateway, T::default_query())
    }

    pub fn with_request(gateway: Gateway, request: QueryRequest) -> Self {
        Self {
            gateway,
            request,
            items: Vec::new(),
            query: String::new(),
            loading: false,
            refreshing: false,
            loaded: false,
            error: None,
            generation: 0,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Store query the next load will send
    pub fn request(&self) -> &QueryRequest {
        &self.request
    }

    // ========== Loading ==========

    /// Issue a load: bumps the generation and raises the flag for `mode`
    ///
    /// The previous error stays until a result is applied.
    pub fn begin_load(&mut self, mode: LoadMode) -> PendingLoad<T> {
        self.generation += 1;
        self.loading = mode == LoadMode::Initial;
        self.refreshing = mode == LoadMode::Refresh;

        PendingLoad {
            ticket: LoadTicket {
                generation: self.generation,
                mode,
            },
            gateway: self.gateway.clone(),
            request: self.request.clone(),
            _record: PhantomData,
        }
    }

    /// Apply a fetched load; returns `false` if it was stale and ignored
    pub fn complete(&mut self, done: CompletedLoad<T>) -> bool {
        let collection = T::COLLECTION;
        if done.ticket.generation != self.generation {
            tracing::debug!(
                collection = %collection,
                stale = done.ticket.generation,
                current = self.generation,
                "Discarding stale load"
            );
            return false;
        }

        self.loading = false;
        self.refreshing = false;
        self.loaded = true;
        match done.result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(collection = %collection, error = %e, "Load failed");
                self.items = Vec::new();
                self.error = Some(AppError::load_failed(collection.as_str(), e.to_string()));
            }
        }
        true
    }

    /// Load under the `loading` flag
    pub async fn load(&mut self) {
        let pending = self.begin_load(LoadMode::Initial);
        let done = pending.fetch().await;
        self.complete(done);
    }

    /// Same as [`load`](Self::load) under the `refreshing` flag
    pub async fn refresh(&mut self) {
        let pending = self.begin_load(LoadMode::Refresh);
        let done = pending.fetch().await;
        self.complete(done);
    }

    /// Screen went away: drop whatever is still in flight
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.refreshing = false;
    }

    // ========== State ==========

    /// Rows from the last applied load
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Failure of the last applied load
    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn load_state(&self) -> LoadState {
        if self.loading {
            LoadState::Loading
        } else if self.refreshing {
            LoadState::Refreshing
        } else if self.error.is_some() {
            LoadState::Failed
        } else if !self.loaded {
            LoadState::Idle
        } else if self.items.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Loaded
        }
    }

    // ========== Search ==========

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl<T: Record + Searchable> ListController<T> {
    /// Items matching the current search text
    pub fn visible(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| matches_query(*item, &self.query))
            .collect()
    }
}
