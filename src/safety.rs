use std::fmt;

use serde::Serialize;

use crate::graph::SocialGraph;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub total_users: usize,
    pub total_friendships: usize,
    /// Halves whose mirror half is missing.
    pub asymmetric_links: usize,
    pub self_loops: usize,
    /// Halves pointing at a user that does not exist.
    pub dangling_links: usize,
}

impl IntegrityReport {
    pub fn has_issues(&self) -> bool {
        self.asymmetric_links > 0 || self.self_loops > 0 || self.dangling_links > 0
    }
}

#[derive(Debug)]
pub struct IntegrityError {
    pub report: IntegrityReport,
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "integrity violations detected: {} asymmetric, {} self-loops, {} dangling",
            self.report.asymmetric_links, self.report.self_loops, self.report.dangling_links
        )
    }
}

impl std::error::Error for IntegrityError {}

pub fn validate_integrity(graph: &SocialGraph) -> IntegrityReport {
    let mut report = IntegrityReport {
        total_users: graph.user_count(),
        total_friendships: graph.friendship_count(),
        ..IntegrityReport::default()
    };
    for (user, friends) in graph.raw_adjacency() {
        for friend in friends {
            if friend == user {
                report.self_loops += 1;
                continue;
            }
            if !graph.exists(friend) {
                report.dangling_links += 1;
                continue;
            }
            let mirrored = graph
                .adjacency_of(friend)
                .map(|set| set.contains(user))
                .unwrap_or(false);
            if !mirrored {
                report.asymmetric_links += 1;
            }
        }
    }
    report
}

pub fn run_integrity_checks(graph: &SocialGraph) -> Result<IntegrityReport, IntegrityError> {
    let report = validate_integrity(graph);
    if report.has_issues() {
        return Err(IntegrityError { report });
    }
    Ok(report)
}
