//! Per-user session context.
//!
//! A session starts unauthenticated and holds at most one customer snapshot once a
//! lookup succeeds. There is no way back to unauthenticated; sessions live in memory
//! and disappear when the bot restarts.

use crate::{
    core::profile::{self, ProfileEdit},
    entities::customer,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Session state for one Discord user.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    /// No successful lookup yet
    #[default]
    Unauthenticated,
    /// Holds the active subject's snapshot
    Authenticated(customer::Model),
}

impl Session {
    /// Replaces the subject with a freshly resolved customer.
    pub fn authenticate(&mut self, customer: customer::Model) {
        *self = Self::Authenticated(customer);
    }

    /// Applies a persisted profile update to the snapshot held right now.
    ///
    /// Does nothing unless the session is authenticated as `customer_id`. Points are
    /// added to the current balance, so every update that reached the database counts
    /// once even when several were in flight from the same starting snapshot.
    pub fn apply_update(
        &mut self,
        customer_id: i64,
        edit: &ProfileEdit,
        today: NaiveDate,
    ) -> Option<&customer::Model> {
        match self {
            Self::Authenticated(current) if current.id == customer_id => {
                *current = profile::apply_edit(current, edit, today);
                Some(&*current)
            }
            _ => None,
        }
    }

    /// The active subject, if any.
    #[must_use]
    pub const fn subject(&self) -> Option<&customer::Model> {
        match self {
            Self::Authenticated(customer) => Some(customer),
            Self::Unauthenticated => None,
        }
    }
}

/// Sessions keyed by Discord user id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<u64, Session>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the user's subject, if they are authenticated.
    pub async fn subject(&self, user_id: u64) -> Option<customer::Model> {
        self.sessions
            .read()
            .await
            .get(&user_id)
            .and_then(Session::subject)
            .cloned()
    }

    /// Marks the user as authenticated as `customer`.
    pub async fn authenticate(&self, user_id: u64, customer: customer::Model) {
        debug!(user_id, customer_id = customer.id, "Session authenticated");
        self.sessions
            .write()
            .await
            .entry(user_id)
            .or_default()
            .authenticate(customer);
    }

    /// Applies a persisted update under the write lock and returns the new snapshot.
    ///
    /// `None` when the user switched to another customer (or never authenticated)
    /// while the update was running.
    pub async fn apply_update(
        &self,
        user_id: u64,
        customer_id: i64,
        edit: &ProfileEdit,
        today: NaiveDate,
    ) -> Option<customer::Model> {
        let mut sessions = self.sessions.write().await;
        let snapshot = sessions
            .get_mut(&user_id)?
            .apply_update(customer_id, edit, today)
            .cloned();
        if snapshot.is_none() {
            debug!(user_id, customer_id, "Session moved on; update not applied");
        }
        snapshot
    }
}
