use std::sync::Arc;

use parking_lot::RwLock;

use crate::{errors::SocialGraphError, graph::SocialGraph};

/// Cloneable handle for callers that share one graph across threads.
/// Mutations hold the write lock for their whole duration, so a query never
/// observes a half-applied change.
#[derive(Clone, Default)]
pub struct SharedSocialGraph {
    inner: Arc<RwLock<SocialGraph>>,
}

impl SharedSocialGraph {
    pub fn new(graph: SocialGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&SocialGraph) -> T) -> T {
        f(&self.inner.read())
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut SocialGraph) -> T) -> T {
        f(&mut self.inner.write())
    }

    pub fn add_user(
        &self,
        username: &str,
        name: &str,
        age: u32,
        location: &str,
    ) -> Result<String, SocialGraphError> {
        self.write(|graph| graph.add_user(username, name, age, location))
    }

    pub fn add_friendship(&self, a: &str, b: &str) -> Result<(), SocialGraphError> {
        self.write(|graph| graph.add_friendship(a, b))
    }

    pub fn remove_friendship(&self, a: &str, b: &str) -> Result<bool, SocialGraphError> {
        self.write(|graph| graph.remove_friendship(a, b))
    }
}

impl From<SocialGraph> for SharedSocialGraph {
    fn from(graph: SocialGraph) -> Self {
        Self::new(graph)
    }
}
