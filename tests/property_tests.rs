use std::collections::{BTreeSet, VecDeque};

use socialgraph::{
    SocialGraph,
    algo::connected_components,
    bench_utils::{GraphShape, generate_graph, user_key},
    bfs::shortest_path,
    recommend::recommend_friends,
    safety::validate_integrity,
    stats::network_statistics,
};

const SEEDS: [u64; 6] = [1, 7, 42, 99, 1234, 0xBEEF];

fn random_graph(users: usize, edges: usize, seed: u64) -> SocialGraph {
    generate_graph(GraphShape::RandomErdosRenyi { edges }, users, seed).expect("graph")
}

/// Hop distances from `start` to every user, computed independently.
fn brute_force_distances(graph: &SocialGraph, users: usize, start: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; users];
    dist[start] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for other in 0..users {
            if dist[other].is_none() && graph.are_friends(&user_key(node), &user_key(other)) {
                dist[other] = dist[node].map(|d| d + 1);
                queue.push_back(other);
            }
        }
    }
    dist
}

#[test]
fn test_symmetry_and_no_self_loops() {
    for seed in SEEDS {
        let graph = random_graph(15, 25, seed);
        for user in graph.user_ids() {
            let friends = graph.neighbors(user);
            assert!(!friends.contains(user));
            for friend in &friends {
                assert!(graph.are_friends(friend, user));
            }
        }
        assert!(!validate_integrity(&graph).has_issues());
    }
}

#[test]
fn test_shortest_path_matches_brute_force() {
    let users = 12;
    for seed in SEEDS {
        let graph = random_graph(users, 16, seed);
        for start in 0..users {
            let expected = brute_force_distances(&graph, users, start);
            for end in 0..users {
                let path = shortest_path(&graph, &user_key(start), &user_key(end)).unwrap();
                assert_eq!(path.as_ref().map(|p| p.len() - 1), expected[end]);
                if let Some(path) = path {
                    assert_eq!(path.first(), Some(&user_key(start)));
                    assert_eq!(path.last(), Some(&user_key(end)));
                    for hop in path.windows(2) {
                        assert!(graph.are_friends(&hop[0], &hop[1]));
                    }
                }
            }
        }
    }
}

#[test]
fn test_components_partition_users() {
    for seed in SEEDS {
        let graph = random_graph(20, 14, seed);
        let components = connected_components(&graph);
        let mut seen = BTreeSet::new();
        for component in &components {
            for user in component {
                assert!(seen.insert(user.clone()), "{user} in two components");
                for friend in graph.neighbors(user) {
                    assert!(component.contains(&friend));
                }
            }
        }
        let all: BTreeSet<String> = graph.user_ids().into_iter().map(str::to_string).collect();
        assert_eq!(seen, all);
        assert_eq!(network_statistics(&graph).component_count, components.len());
    }
}

#[test]
fn test_recommendations_exclude_self_and_friends() {
    for seed in SEEDS {
        let graph = random_graph(15, 30, seed);
        for user in graph.user_ids() {
            let friends = graph.neighbors(user);
            let recs = recommend_friends(&graph, user, usize::MAX);
            for pair in recs.windows(2) {
                assert!(pair[0].mutual_count >= pair[1].mutual_count);
            }
            for rec in recs {
                assert_ne!(rec.user, user);
                assert!(!friends.contains(&rec.user));
            }
        }
    }
}

#[test]
fn test_density_bounds() {
    for seed in SEEDS {
        let stats = network_statistics(&random_graph(10, 20, seed));
        assert!(stats.density >= 0.0 && stats.density <= 1.0);
        assert!(stats.density < 1.0);
    }
    let complete = network_statistics(&generate_graph(GraphShape::Complete, 7, 0).unwrap());
    assert_eq!(complete.density, 1.0);
}

#[test]
fn test_shapes_have_expected_statistics() {
    let line = network_statistics(&generate_graph(GraphShape::Line, 10, 0).unwrap());
    assert_eq!(line.friendship_count, 9);
    assert_eq!(line.max_degree, 2);

    let star = network_statistics(&generate_graph(GraphShape::Star, 10, 0).unwrap());
    assert_eq!(star.max_degree, 9);
    assert_eq!(star.most_connected.as_deref(), Some(user_key(0).as_str()));

    let grid = generate_graph(GraphShape::Grid2D { width: 3, height: 3 }, 9, 0).unwrap();
    assert_eq!(grid.friendship_count(), 12);
    assert_eq!(grid.degree(&user_key(4)), 4);
}
