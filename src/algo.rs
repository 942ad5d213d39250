use std::collections::VecDeque;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::graph::SocialGraph;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRank {
    pub user: String,
    pub degree: usize,
}

/// Partitions users into connected components. Each component is sorted and
/// components are ordered by their smallest member.
pub fn connected_components(graph: &SocialGraph) -> Vec<Vec<String>> {
    let mut components = Vec::new();
    let mut visited = AHashSet::new();
    for id in graph.user_ids() {
        if !visited.insert(id) {
            continue;
        }
        let mut queue = VecDeque::new();
        queue.push_back(id);
        let mut component = Vec::new();
        while let Some(node) = queue.pop_front() {
            component.push(node.to_string());
            for next in graph.sorted_neighbors(node) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        component.sort();
        components.push(component);
    }
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

/// Every user with its degree. Ties are broken by ascending key in both
/// directions.
pub fn nodes_by_degree(graph: &SocialGraph, descending: bool) -> Vec<DegreeRank> {
    let mut degrees: Vec<DegreeRank> = graph
        .user_ids()
        .into_iter()
        .map(|id| DegreeRank {
            user: id.to_string(),
            degree: graph.degree(id),
        })
        .collect();
    degrees.sort_by(|a, b| {
        if descending {
            b.degree.cmp(&a.degree).then_with(|| a.user.cmp(&b.user))
        } else {
            a.degree.cmp(&b.degree).then_with(|| a.user.cmp(&b.user))
        }
    });
    degrees
}

/// Top `top_n` users by degree centrality.
pub fn influencers(graph: &SocialGraph, top_n: usize) -> Vec<DegreeRank> {
    let mut ranked = nodes_by_degree(graph, true);
    ranked.truncate(top_n);
    ranked
}
