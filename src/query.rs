use std::collections::BTreeSet;

use crate::{
    algo::{self, DegreeRank},
    bfs::{self, BfsTree},
    config::{DEFAULT_TOP_N, GraphConfig},
    dfs,
    errors::SocialGraphError,
    graph::SocialGraph,
    recommend::{self, Recommendation},
    stats::{self, NetworkStatistics},
};

/// Read-only query surface over a [`SocialGraph`].
pub struct GraphQuery<'a> {
    graph: &'a SocialGraph,
    top_n: usize,
}

impl<'a> GraphQuery<'a> {
    pub fn new(graph: &'a SocialGraph) -> Self {
        Self {
            graph,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_config(graph: &'a SocialGraph, cfg: &GraphConfig) -> Self {
        Self {
            graph,
            top_n: cfg.default_top_n,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn friends(&self, user: &str) -> BTreeSet<String> {
        self.graph.neighbors(user)
    }

    pub fn mutual_friends(&self, a: &str, b: &str) -> BTreeSet<String> {
        recommend::mutual_friends(self.graph, a, b)
    }

    pub fn bfs(&self, start: &str) -> Result<BfsTree, SocialGraphError> {
        bfs::bfs_tree(self.graph, start)
    }

    pub fn dfs(&self, start: &str) -> Result<Vec<String>, SocialGraphError> {
        dfs::dfs_order(self.graph, start)
    }

    pub fn shortest_path(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Option<Vec<String>>, SocialGraphError> {
        bfs::shortest_path(self.graph, start, end)
    }

    pub fn degrees_of_separation(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Option<usize>, SocialGraphError> {
        bfs::degrees_of_separation(self.graph, start, end)
    }

    pub fn has_path(&self, a: &str, b: &str) -> Result<bool, SocialGraphError> {
        dfs::is_reachable(self.graph, a, b)
    }

    pub fn recommendations(&self, user: &str) -> Vec<Recommendation> {
        recommend::recommend_friends(self.graph, user, self.top_n)
    }

    pub fn influencers(&self) -> Vec<DegreeRank> {
        algo::influencers(self.graph, self.top_n)
    }

    pub fn communities(&self) -> Vec<Vec<String>> {
        algo::connected_components(self.graph)
    }

    pub fn statistics(&self) -> NetworkStatistics {
        stats::network_statistics(self.graph)
    }
}

impl SocialGraph {
    pub fn query(&self) -> GraphQuery<'_> {
        GraphQuery::new(self)
    }
}
