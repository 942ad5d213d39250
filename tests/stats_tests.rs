use socialgraph::{
    SocialGraph,
    stats::{network_statistics, possible_friendships},
};

fn build_graph(users: &[&str], edges: &[(&str, &str)]) -> SocialGraph {
    let mut graph = SocialGraph::new();
    for user in users {
        graph.add_user(user, user, 31, "").unwrap();
    }
    for &(a, b) in edges {
        graph.add_friendship(a, b).unwrap();
    }
    graph
}

#[test]
fn test_statistics_scenario() {
    let graph = build_graph(
        &["alice", "bob", "charlie", "diana"],
        &[
            ("alice", "bob"),
            ("alice", "charlie"),
            ("bob", "charlie"),
            ("charlie", "diana"),
        ],
    );
    let stats = network_statistics(&graph);
    assert_eq!(stats.user_count, 4);
    assert_eq!(stats.friendship_count, 4);
    assert!((stats.average_degree - 2.0).abs() < 1e-9);
    assert!((stats.density - 4.0 / 6.0).abs() < 1e-9);
    assert_eq!(stats.max_degree, 3);
    assert_eq!(stats.most_connected.as_deref(), Some("charlie"));
    assert_eq!(stats.isolated_users, 0);
    assert_eq!(stats.component_count, 1);
    assert!(!stats.is_complete());
}

#[test]
fn test_statistics_empty_and_single_user() {
    let empty = network_statistics(&SocialGraph::new());
    assert_eq!(empty.user_count, 0);
    assert_eq!(empty.average_degree, 0.0);
    assert_eq!(empty.density, 0.0);
    assert_eq!(empty.most_connected, None);

    let single = network_statistics(&build_graph(&["solo"], &[]));
    assert_eq!(single.user_count, 1);
    assert_eq!(single.density, 0.0);
    assert_eq!(single.isolated_users, 1);
    assert_eq!(single.most_connected.as_deref(), Some("solo"));
}

#[test]
fn test_density_is_one_for_complete_graph() {
    let graph = build_graph(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("a", "c"), ("a", "d"), ("b", "c"), ("b", "d"), ("c", "d")],
    );
    let stats = network_statistics(&graph);
    assert_eq!(stats.density, 1.0);
    assert!(stats.is_complete());
}

#[test]
fn test_most_connected_tie_takes_smallest_key() {
    let graph = build_graph(&["b", "a", "c", "d"], &[("b", "c"), ("a", "d")]);
    let stats = network_statistics(&graph);
    assert_eq!(stats.max_degree, 1);
    assert_eq!(stats.most_connected.as_deref(), Some("a"));
    assert_eq!(stats.component_count, 2);
}

#[test]
fn test_possible_friendships() {
    assert_eq!(possible_friendships(0), 0);
    assert_eq!(possible_friendships(1), 0);
    assert_eq!(possible_friendships(2), 1);
    assert_eq!(possible_friendships(10), 45);
}
