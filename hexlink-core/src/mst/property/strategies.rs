//! Strategy builders for spanning forest property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{DISCONNECTED, GraphOp, OpsFixture, WeightProfile};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 24;
const MAX_OPS: usize = 160;

/// Generates operation sequences across every weight profile.
pub(super) fn ops_fixture_strategy() -> impl Strategy<Value = OpsFixture> {
    (any::<WeightProfile>(), any::<u64>()).prop_map(|(profile, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(profile, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen profile.
pub(super) fn generate_fixture(profile: WeightProfile, rng: &mut SmallRng) -> OpsFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let op_count = rng.gen_range(1..=MAX_OPS);
    let (connect_share, disconnect_share) = match profile {
        WeightProfile::Uniform | WeightProfile::Tied => (0.45, 0.15),
        WeightProfile::Sparse => (0.2, 0.4),
        WeightProfile::Dense => (0.7, 0.05),
    };

    let ops = (0..op_count)
        .map(|_| {
            let (a, b) = distinct_pair(vertex_count, rng);
            let roll: f64 = rng.gen_range(0.0..1.0);
            if roll < connect_share {
                GraphOp::Connect {
                    a,
                    b,
                    weight: edge_weight(profile, rng),
                }
            } else if roll < connect_share + disconnect_share {
                GraphOp::Disconnect { a, b }
            } else if rng.gen_bool(0.05) {
                GraphOp::Query { a, b: a }
            } else {
                GraphOp::Query { a, b }
            }
        })
        .collect();

    OpsFixture {
        vertex_count,
        ops,
        profile,
    }
}

/// Draws two distinct vertices by offsetting the second from the first.
fn distinct_pair(vertex_count: usize, rng: &mut SmallRng) -> (usize, usize) {
    let a = rng.gen_range(0..vertex_count);
    let offset = rng.gen_range(1..vertex_count);
    (a, (a + offset) % vertex_count)
}

fn edge_weight(profile: WeightProfile, rng: &mut SmallRng) -> u8 {
    match profile {
        WeightProfile::Tied => rng.gen_range(1..=2),
        _ => rng.gen_range(0..DISCONNECTED),
    }
}
