//! Query cache for remote data.
//!
//! Each piece of remote data lives in a [`Query`] slot addressed by a
//! [`QueryKey`]. A slot remembers its last data, its last error, whether a
//! fetch is in flight and whether it has been invalidated. Fetches are
//! issued with a [`FetchTicket`]; invalidating a slot while a fetch is in
//! flight makes that ticket obsolete, so only the newest fetch can land.

use std::collections::HashMap;

use crate::models::{Post, PostId};

/// Address of a cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full post list
    Posts,
    /// One post's detail record
    Post(PostId),
}

/// Observable state of a query, derived from its slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryState<'a, T> {
    /// Nothing requested yet
    Idle,
    /// First fetch in flight, no data to show
    Loading,
    /// Data available (possibly being refreshed in the background)
    Resolved(&'a T),
    /// Fetch failed and there is no earlier data
    Failed(&'a str),
}

impl<'a, T> QueryState<'a, T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&'a T> {
        match self {
            QueryState::Resolved(data) => Some(*data),
            _ => None,
        }
    }
}

/// Proof that a fetch was started for a specific generation of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// A single cached query.
#[derive(Debug, Clone)]
pub struct Query<T> {
    data: Option<T>,
    error: Option<String>,
    fetching: bool,
    stale: bool,
    generation: u64,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            fetching: false,
            stale: false,
            generation: 0,
        }
    }
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QueryState<'_, T> {
        if let Some(data) = &self.data {
            QueryState::Resolved(data)
        } else if self.fetching {
            QueryState::Loading
        } else if let Some(error) = &self.error {
            QueryState::Failed(error)
        } else {
            QueryState::Idle
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Most recent fetch error, kept even when older data is still shown.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Whether an observer of this slot should start a fetch now.
    ///
    /// Never-fetched slots and invalidated slots need one. A failed slot
    /// waits for an explicit invalidation.
    pub fn needs_fetch(&self) -> bool {
        if self.stale {
            return true;
        }
        !self.fetching && self.data.is_none() && self.error.is_none()
    }

    /// Mark the slot stale so the next sync re-fetches it.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Record that a fetch started. Any earlier ticket stops counting.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.fetching = true;
        self.stale = false;
        FetchTicket(self.generation)
    }

    /// Store a fetch result.
    ///
    /// Returns `false` and leaves the slot untouched if `ticket` was
    /// superseded by a later fetch.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.fetching = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => {
                self.error = Some(error);
            }
        }
        true
    }
}

/// All cached queries for the view.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    posts: Query<Vec<Post>>,
    details: HashMap<PostId, Query<Post>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &Query<Vec<Post>> {
        &self.posts
    }

    pub fn posts_mut(&mut self) -> &mut Query<Vec<Post>> {
        &mut self.posts
    }

    pub fn detail(&self, id: PostId) -> Option<&Query<Post>> {
        self.details.get(&id)
    }

    /// Detail slot for `id`, created empty on first use.
    pub fn detail_mut(&mut self, id: PostId) -> &mut Query<Post> {
        self.details.entry(id).or_default()
    }

    /// Invalidate the slot behind `key`. Unknown detail keys are ignored.
    pub fn invalidate(&mut self, key: QueryKey) {
        match key {
            QueryKey::Posts => self.posts.invalidate(),
            QueryKey::Post(id) => {
                if let Some(query) = self.details.get_mut(&id) {
                    query.invalidate();
                }
            }
        }
    }

    /// Whether any slot has a fetch in flight.
    pub fn is_fetching(&self) -> bool {
        self.posts.is_fetching() || self.details.values().any(Query::is_fetching)
    }
}
