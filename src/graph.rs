//! In-memory store for users and the symmetric friendship relation.

pub mod types;

use std::collections::BTreeSet;

use ahash::{AHashMap, AHashSet};
use chrono::Utc;
use log::debug;

use crate::errors::SocialGraphError;

pub use types::{NewUser, UserProfile, normalize_key};

/// Undirected social graph. Every friendship is stored as two halves in
/// `adjacency`, and both halves are always inserted and removed together.
#[derive(Debug, Default, Clone)]
pub struct SocialGraph {
    users: AHashMap<String, UserProfile>,
    adjacency: AHashMap<String, AHashSet<String>>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(users: usize) -> Self {
        Self {
            users: AHashMap::with_capacity(users),
            adjacency: AHashMap::with_capacity(users),
        }
    }

    /// Registers a user and returns its normalized key.
    pub fn insert_user(&mut self, user: NewUser) -> Result<String, SocialGraphError> {
        let key = types::validate_user(&user)?;
        if self.users.contains_key(&key) {
            return Err(SocialGraphError::already_exists(key));
        }
        let profile = UserProfile {
            username: key.clone(),
            name: user.name,
            age: user.age,
            location: user.location,
            created_at: Utc::now(),
        };
        self.users.insert(key.clone(), profile);
        self.adjacency.insert(key.clone(), AHashSet::new());
        debug!("added user {key}");
        Ok(key)
    }

    pub fn add_user(
        &mut self,
        username: &str,
        name: &str,
        age: u32,
        location: &str,
    ) -> Result<String, SocialGraphError> {
        self.insert_user(NewUser::new(username, name, age, location))
    }

    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<(), SocialGraphError> {
        let (a, b) = self.resolve_pair(a, b)?;
        if a == b {
            return Err(SocialGraphError::self_loop(a));
        }
        if self.are_friends(&a, &b) {
            return Err(SocialGraphError::already_friends(a, b));
        }
        // Both endpoints were resolved above, so both halves are inserted.
        if let Some(set) = self.adjacency.get_mut(&a) {
            set.insert(b.clone());
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.insert(a.clone());
        }
        debug!("added friendship {a} <-> {b}");
        Ok(())
    }

    /// Removes the friendship between `a` and `b`. Returns `false` when both
    /// users exist but were not friends.
    pub fn remove_friendship(&mut self, a: &str, b: &str) -> Result<bool, SocialGraphError> {
        let (a, b) = self.resolve_pair(a, b)?;
        let removed = self
            .adjacency
            .get_mut(&a)
            .map(|set| set.remove(&b))
            .unwrap_or(false);
        if removed {
            if let Some(set) = self.adjacency.get_mut(&b) {
                set.remove(&a);
            }
            debug!("removed friendship {a} <-> {b}");
        }
        Ok(removed)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.users.contains_key(&normalize_key(key))
    }

    pub fn are_friends(&self, a: &str, b: &str) -> bool {
        let b = normalize_key(b);
        self.adjacency_of(a)
            .map(|set| set.contains(&b))
            .unwrap_or(false)
    }

    pub fn user(&self, key: &str) -> Option<&UserProfile> {
        self.users.get(&normalize_key(key))
    }

    /// Owned, ordered copy of the neighbor set of `key`; empty for unknown
    /// users. Allocates on every call, so use [`Self::are_friends`] or
    /// [`Self::degree`] for membership and counts.
    pub fn neighbors(&self, key: &str) -> BTreeSet<String> {
        self.adjacency_of(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Neighbors of `key` in ascending key order. Every traversal iterates
    /// through this view.
    pub fn sorted_neighbors(&self, key: &str) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .adjacency_of(key)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();
        out.sort_unstable();
        out
    }

    pub fn degree(&self, key: &str) -> usize {
        self.adjacency_of(key).map(|set| set.len()).unwrap_or(0)
    }

    /// All user keys in ascending order.
    pub fn user_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.users.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn friendship_count(&self) -> usize {
        self.total_degree() / 2
    }

    pub fn total_degree(&self) -> usize {
        self.adjacency.values().map(|set| set.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// `(user, sorted neighbors)` for every user, ordered by user key.
    pub fn adjacency_list(&self) -> Vec<(String, Vec<String>)> {
        self.user_ids()
            .into_iter()
            .map(|id| {
                let friends = self
                    .sorted_neighbors(id)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                (id.to_string(), friends)
            })
            .collect()
    }

    pub(crate) fn adjacency_of(&self, key: &str) -> Option<&AHashSet<String>> {
        match self.adjacency.get(key) {
            Some(set) => Some(set),
            None => self.adjacency.get(&normalize_key(key)),
        }
    }

    pub(crate) fn raw_adjacency(&self) -> impl Iterator<Item = (&String, &AHashSet<String>)> {
        self.adjacency.iter()
    }

    /// Normalizes a key and fails with `NotFound` when no such user exists.
    pub(crate) fn require(&self, key: &str) -> Result<String, SocialGraphError> {
        let key = normalize_key(key);
        if !self.users.contains_key(&key) {
            return Err(SocialGraphError::not_found(key));
        }
        Ok(key)
    }

    fn resolve_pair(&self, a: &str, b: &str) -> Result<(String, String), SocialGraphError> {
        Ok((self.require(a)?, self.require(b)?))
    }
}
