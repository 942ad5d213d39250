use serde::{Deserialize, Serialize};

use crate::{algo::connected_components, graph::SocialGraph};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkStatistics {
    pub user_count: usize,
    pub friendship_count: usize,
    pub average_degree: f64,
    /// Actual friendships over `n(n-1)/2`; zero below two users.
    pub density: f64,
    pub max_degree: usize,
    pub most_connected: Option<String>,
    pub isolated_users: usize,
    pub component_count: usize,
}

impl NetworkStatistics {
    pub fn is_complete(&self) -> bool {
        self.user_count >= 2 && self.friendship_count == possible_friendships(self.user_count)
    }
}

pub fn possible_friendships(user_count: usize) -> usize {
    if user_count < 2 {
        return 0;
    }
    user_count * (user_count - 1) / 2
}

pub fn network_statistics(graph: &SocialGraph) -> NetworkStatistics {
    let user_count = graph.user_count();
    let total_degree = graph.total_degree();
    let friendship_count = total_degree / 2;
    let average_degree = if user_count == 0 {
        0.0
    } else {
        total_degree as f64 / user_count as f64
    };
    let possible = possible_friendships(user_count);
    let density = if possible == 0 {
        0.0
    } else {
        friendship_count as f64 / possible as f64
    };

    let mut max_degree = 0;
    let mut most_connected = None;
    let mut isolated_users = 0;
    for id in graph.user_ids() {
        let degree = graph.degree(id);
        if degree == 0 {
            isolated_users += 1;
        }
        // ids ascend, so strict comparison keeps the smallest key on ties
        if most_connected.is_none() || degree > max_degree {
            max_degree = degree;
            most_connected = Some(id.to_string());
        }
    }

    NetworkStatistics {
        user_count,
        friendship_count,
        average_degree,
        density,
        max_degree,
        most_connected,
        isolated_users,
        component_count: connected_components(graph).len(),
    }
}
