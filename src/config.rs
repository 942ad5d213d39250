//! Construction options for [`SocialGraph`] and the ranking helpers.

use crate::graph::SocialGraph;

pub const DEFAULT_TOP_N: usize = 5;

/// Configuration for opening a graph.
///
/// ```rust
/// use socialgraph::{GraphConfig, open_graph};
///
/// let cfg = GraphConfig::default().with_reserved_users(16);
/// let graph = open_graph(&cfg);
/// assert!(graph.is_empty());
/// assert_eq!(cfg.default_top_n, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphConfig {
    /// Pre-allocate room for this many users.
    pub reserve_users: Option<usize>,
    /// Result size used by ranking queries when the caller does not pass one.
    pub default_top_n: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            reserve_users: None,
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl GraphConfig {
    pub fn with_reserved_users(mut self, users: usize) -> Self {
        self.reserve_users = Some(users);
        self
    }

    pub fn with_default_top_n(mut self, top_n: usize) -> Self {
        self.default_top_n = top_n;
        self
    }
}

pub fn open_graph(cfg: &GraphConfig) -> SocialGraph {
    match cfg.reserve_users {
        Some(users) => SocialGraph::with_capacity(users),
        None => SocialGraph::new(),
    }
}
