//! Plain-data view of the whole network for visualization adapters.

use serde::{Deserialize, Serialize};

use crate::{errors::SocialGraphError, graph::SocialGraph};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: String,
    pub display_name: String,
    pub degree: usize,
}

/// One undirected friendship; `source < target`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub source: String,
    pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
}

impl GraphSnapshot {
    pub fn capture(graph: &SocialGraph) -> Self {
        let mut nodes = Vec::with_capacity(graph.user_count());
        let mut edges = Vec::with_capacity(graph.friendship_count());
        for id in graph.user_ids() {
            let display_name = graph
                .user(id)
                .map(|profile| profile.name.clone())
                .unwrap_or_else(|| id.to_string());
            nodes.push(SnapshotNode {
                id: id.to_string(),
                display_name,
                degree: graph.degree(id),
            });
            for friend in graph.sorted_neighbors(id) {
                // each pair is seen from both ends; keep the ordered half
                if id < friend {
                    edges.push(SnapshotEdge {
                        source: id.to_string(),
                        target: friend.to_string(),
                    });
                }
            }
        }
        Self { nodes, edges }
    }

    pub fn to_json(&self) -> Result<String, SocialGraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self, SocialGraphError> {
        Ok(serde_json::from_str(input)?)
    }
}

impl SocialGraph {
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::capture(self)
    }
}
