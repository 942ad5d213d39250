//! Synthetic networks for benchmarks and randomized tests.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    dataset::NetworkDataset,
    errors::SocialGraphError,
    graph::{NewUser, SocialGraph},
};

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Complete,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize },
}

/// Zero-padded so lexical order of keys matches index order.
pub fn user_key(idx: usize) -> String {
    format!("user{idx:06}")
}

pub fn generate_dataset(shape: GraphShape, user_count: usize, seed: u64) -> NetworkDataset {
    assert!(user_count > 1, "user_count must exceed 1");
    let pairs = match shape {
        GraphShape::Line => (0..user_count - 1).map(|idx| (idx, idx + 1)).collect(),
        GraphShape::Star => (1..user_count).map(|leaf| (0, leaf)).collect(),
        GraphShape::Complete => (0..user_count)
            .flat_map(|a| ((a + 1)..user_count).map(move |b| (a, b)))
            .collect(),
        GraphShape::Grid2D { width, height } => grid_pairs(width, height, user_count),
        GraphShape::RandomErdosRenyi { edges } => random_pairs(user_count, edges, seed),
    };
    NetworkDataset {
        users: (0..user_count)
            .map(|idx| {
                let age = 18 + (idx % 60) as u32;
                NewUser::new(&user_key(idx), &format!("User {idx}"), age, "")
            })
            .collect(),
        friendships: pairs
            .into_iter()
            .map(|(a, b)| (user_key(a), user_key(b)))
            .collect(),
    }
}

pub fn generate_graph(
    shape: GraphShape,
    user_count: usize,
    seed: u64,
) -> Result<SocialGraph, SocialGraphError> {
    generate_dataset(shape, user_count, seed).build()
}

/// Index of the highest-degree user in `dataset`, lowest index on ties.
pub fn hub_index(dataset: &NetworkDataset) -> usize {
    let mut counts = vec![0usize; dataset.users.len()];
    for (a, b) in &dataset.friendships {
        for key in [a, b] {
            let parsed = key.strip_prefix("user").map(str::parse::<usize>);
            if let Some(Ok(idx)) = parsed {
                counts[idx] += 1;
            }
        }
    }
    let mut best = (0usize, 0usize);
    for (idx, degree) in counts.into_iter().enumerate() {
        if degree > best.0 {
            best = (degree, idx);
        }
    }
    best.1
}

fn grid_pairs(width: usize, height: usize, user_count: usize) -> Vec<(usize, usize)> {
    assert_eq!(
        width * height,
        user_count,
        "grid dimensions must match user count"
    );
    let mut pairs = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let base = y * width + x;
            if x + 1 < width {
                pairs.push((base, base + 1));
            }
            if y + 1 < height {
                pairs.push((base, base + width));
            }
        }
    }
    pairs
}

/// Uniformly samples `edge_count` distinct pairs by skipping through the
/// pair index space with geometric gaps.
fn random_pairs(user_count: usize, edge_count: usize, seed: u64) -> Vec<(usize, usize)> {
    let total = (user_count * (user_count - 1) / 2) as u64;
    assert!(
        edge_count as u64 <= total,
        "edge_count exceeds possible pairs"
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(edge_count);
    let mut idx = 0u64;
    let mut remaining = edge_count as u64;
    while remaining > 0 && idx < total {
        let p = remaining as f64 / (total - idx) as f64;
        idx += geometric_gap(&mut rng, p);
        if idx >= total {
            break;
        }
        pairs.push(pair_at(idx, user_count as u64));
        idx += 1;
        remaining -= 1;
    }
    pairs
}

fn geometric_gap(rng: &mut StdRng, p: f64) -> u64 {
    if p >= 1.0 {
        return 0;
    }
    let u = rng.r#gen::<f64>().max(f64::MIN_POSITIVE);
    (u.ln() / (1.0 - p).ln()).floor().max(0.0) as u64
}

fn pair_at(mut idx: u64, users: u64) -> (usize, usize) {
    for left in 0..users - 1 {
        let span = users - left - 1;
        if idx < span {
            return (left as usize, (left + 1 + idx) as usize);
        }
        idx -= span;
    }
    ((users - 2) as usize, (users - 1) as usize)
}
