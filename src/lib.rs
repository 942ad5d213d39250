//! In-memory social network graph engine.
//!
//! Users are vertices keyed by a case-normalized username; friendships are
//! undirected edges kept as symmetric neighbor sets. On top of the store the
//! crate offers BFS/DFS traversal, shortest paths, connected components,
//! mutual friends, friend-of-friend recommendations, degree ranking and
//! network statistics. Every traversal walks neighbors in ascending key order,
//! so results are reproducible.
//!
//! ```rust
//! use socialgraph::{SocialGraph, bfs::shortest_path};
//!
//! let mut graph = SocialGraph::new();
//! graph.add_user("alice", "Alice", 25, "Paris")?;
//! graph.add_user("bob", "Bob", 28, "Lyon")?;
//! graph.add_friendship("alice", "bob")?;
//! assert_eq!(
//!     shortest_path(&graph, "alice", "bob")?,
//!     Some(vec!["alice".to_string(), "bob".to_string()])
//! );
//! # Ok::<(), socialgraph::SocialGraphError>(())
//! ```

pub mod algo;
pub mod bench_utils;
pub mod bfs;
pub mod client;
pub mod config;
pub mod dataset;
pub mod dfs;
pub mod errors;
pub mod graph;
pub mod query;
pub mod recommend;
pub mod safety;
pub mod shared;
pub mod snapshot;
pub mod stats;

pub use crate::algo::DegreeRank;
pub use crate::bfs::BfsTree;
pub use crate::config::{GraphConfig, open_graph};
pub use crate::dataset::NetworkDataset;
pub use crate::errors::SocialGraphError;
pub use crate::graph::{NewUser, SocialGraph, UserProfile};
pub use crate::query::GraphQuery;
pub use crate::recommend::{FriendRecommender, Recommendation};
pub use crate::shared::SharedSocialGraph;
pub use crate::snapshot::{GraphSnapshot, SnapshotEdge, SnapshotNode};
pub use crate::stats::NetworkStatistics;
