//! Breadth-first traversal, shortest paths and degrees of separation.

use std::collections::{BTreeMap, VecDeque};

use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::Serialize;

use crate::{errors::SocialGraphError, graph::SocialGraph};

/// Result of a full BFS from `root`: visitation order, the parent of every
/// discovered user, and the users grouped by distance from `root`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BfsTree {
    pub root: String,
    pub order: Vec<String>,
    pub parents: BTreeMap<String, String>,
    pub levels: Vec<Vec<String>>,
}

impl BfsTree {
    pub fn depth_of(&self, key: &str) -> Option<usize> {
        self.levels
            .iter()
            .position(|level| level.iter().any(|member| member == key))
    }

    /// Walks parent pointers from `key` back to the root.
    pub fn path_to(&self, key: &str) -> Option<Vec<String>> {
        if key == self.root {
            return Some(vec![self.root.clone()]);
        }
        let mut path = vec![key.to_string()];
        let mut current = key;
        while let Some(parent) = self.parents.get(current) {
            path.push(parent.clone());
            if *parent == self.root {
                path.reverse();
                return Some(path);
            }
            current = parent;
        }
        None
    }
}

pub fn bfs_tree(graph: &SocialGraph, start: &str) -> Result<BfsTree, SocialGraphError> {
    let start = graph.require(start)?;
    let mut order = Vec::new();
    let mut parents = BTreeMap::new();
    let mut levels: Vec<Vec<String>> = Vec::new();
    let mut seen = AHashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.as_str());
    queue.push_back((start.as_str(), 0usize));
    while let Some((node, depth)) = queue.pop_front() {
        order.push(node.to_string());
        if levels.len() <= depth {
            levels.push(Vec::new());
        }
        levels[depth].push(node.to_string());
        for next in graph.sorted_neighbors(node) {
            if seen.insert(next) {
                parents.insert(next.to_string(), node.to_string());
                queue.push_back((next, depth + 1));
            }
        }
    }
    debug!(
        "bfs from {start} visited {} users across {} levels",
        order.len(),
        levels.len()
    );
    Ok(BfsTree {
        root: start.clone(),
        order,
        parents,
        levels,
    })
}

pub fn bfs_order(graph: &SocialGraph, start: &str) -> Result<Vec<String>, SocialGraphError> {
    Ok(bfs_tree(graph, start)?.order)
}

pub fn bfs_levels(graph: &SocialGraph, start: &str) -> Result<Vec<Vec<String>>, SocialGraphError> {
    Ok(bfs_tree(graph, start)?.levels)
}

/// Minimum-hop path from `start` to `end`, inclusive of both endpoints.
/// `Ok(None)` means both users exist but are not connected.
pub fn shortest_path(
    graph: &SocialGraph,
    start: &str,
    end: &str,
) -> Result<Option<Vec<String>>, SocialGraphError> {
    let start = graph.require(start)?;
    let end = graph.require(end)?;
    if start == end {
        return Ok(Some(vec![start]));
    }
    let mut queue = VecDeque::new();
    let mut parents: AHashMap<&str, &str> = AHashMap::new();
    let mut seen = AHashSet::new();
    queue.push_back(start.as_str());
    seen.insert(start.as_str());
    while let Some(node) = queue.pop_front() {
        if node == end {
            let mut path = vec![end.clone()];
            let mut current = node;
            while let Some(&parent) = parents.get(current) {
                path.push(parent.to_string());
                current = parent;
            }
            path.reverse();
            return Ok(Some(path));
        }
        for next in graph.sorted_neighbors(node) {
            if seen.insert(next) {
                parents.insert(next, node);
                queue.push_back(next);
            }
        }
    }
    Ok(None)
}

/// Edge count of the shortest path between two users.
pub fn degrees_of_separation(
    graph: &SocialGraph,
    start: &str,
    end: &str,
) -> Result<Option<usize>, SocialGraphError> {
    Ok(shortest_path(graph, start, end)?.map(|path| path.len() - 1))
}
