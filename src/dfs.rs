use ahash::AHashSet;
use log::debug;

use crate::{errors::SocialGraphError, graph::SocialGraph};

/// Depth-first visitation order from `start`, smallest neighbor first.
pub fn dfs_order(graph: &SocialGraph, start: &str) -> Result<Vec<String>, SocialGraphError> {
    dfs_visit(graph, start, None)
}

/// Depth-first walk from `start` on an explicit stack. Users are marked on pop,
/// so duplicate stack entries are skipped. When `target` is given the walk stops
/// right after visiting it; the returned order ends with `target` in that case.
pub fn dfs_visit(
    graph: &SocialGraph,
    start: &str,
    target: Option<&str>,
) -> Result<Vec<String>, SocialGraphError> {
    let start = graph.require(start)?;
    let target = target.map(|key| graph.require(key)).transpose()?;
    let mut visited = Vec::new();
    let mut seen = AHashSet::new();
    let mut stack = vec![start.as_str()];
    while let Some(node) = stack.pop() {
        if !seen.insert(node) {
            continue;
        }
        visited.push(node.to_string());
        if target.as_deref() == Some(node) {
            break;
        }
        for next in graph.sorted_neighbors(node).into_iter().rev() {
            if !seen.contains(next) {
                stack.push(next);
            }
        }
    }
    debug!("dfs from {start} visited {} users", visited.len());
    Ok(visited)
}

pub fn is_reachable(graph: &SocialGraph, from: &str, to: &str) -> Result<bool, SocialGraphError> {
    let to = graph.require(to)?;
    let visited = dfs_visit(graph, from, Some(to.as_str()))?;
    Ok(visited.last() == Some(&to))
}
