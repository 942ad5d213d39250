//! Mutual friends and friend-of-friend recommendations.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::graph::SocialGraph;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user: String,
    /// Number of two-hop paths from the requesting user.
    pub mutual_count: usize,
    /// Mutual friends the candidate was reached through, ascending.
    pub via: Vec<String>,
}

/// Friends shared by `a` and `b`. Unknown users have no friends.
pub fn mutual_friends(graph: &SocialGraph, a: &str, b: &str) -> BTreeSet<String> {
    let (Some(left), Some(right)) = (graph.adjacency_of(a), graph.adjacency_of(b)) else {
        return BTreeSet::new();
    };
    let (small, large) = if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    };
    small
        .iter()
        .filter(|friend| large.contains(*friend))
        .cloned()
        .collect()
}

pub struct FriendRecommender<'a> {
    graph: &'a SocialGraph,
}

impl<'a> FriendRecommender<'a> {
    pub fn new(graph: &'a SocialGraph) -> Self {
        Self { graph }
    }

    /// Every friend-of-friend candidate for `user`, best first.
    pub fn candidates(&self, user: &str) -> Vec<Recommendation> {
        let Some(friends) = self.graph.adjacency_of(user) else {
            return Vec::new();
        };
        let user = crate::graph::normalize_key(user);
        let mut paths: AHashMap<&str, Vec<String>> = AHashMap::new();
        for friend in self.graph.sorted_neighbors(&user) {
            for candidate in self.graph.sorted_neighbors(friend) {
                if candidate == user || friends.contains(candidate) {
                    continue;
                }
                paths.entry(candidate).or_default().push(friend.to_string());
            }
        }
        let mut candidates: Vec<Recommendation> = paths
            .into_iter()
            .map(|(candidate, via)| Recommendation {
                user: candidate.to_string(),
                mutual_count: via.len(),
                via,
            })
            .collect();
        candidates.sort_by(compare_candidates);
        candidates
    }

    pub fn recommend(&self, user: &str, top_n: usize) -> Vec<Recommendation> {
        let mut candidates = self.candidates(user);
        candidates.truncate(top_n);
        candidates
    }
}

pub fn recommend_friends(graph: &SocialGraph, user: &str, top_n: usize) -> Vec<Recommendation> {
    FriendRecommender::new(graph).recommend(user, top_n)
}

fn compare_candidates(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.mutual_count
        .cmp(&a.mutual_count)
        .then_with(|| a.user.cmp(&b.user))
}

impl SocialGraph {
    pub fn recommender(&self) -> FriendRecommender<'_> {
        FriendRecommender::new(self)
    }
}
