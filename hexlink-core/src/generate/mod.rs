//! Random graph generation with a fixed edge density.
//!
//! The builder draws exactly `floor(pairs · density)` edges. When full
//! connectivity is requested it first threads a random spanning tree through
//! the vertices, then tops the budget up by selection sampling over the
//! pairs that are still disconnected.

use rand::{Rng, distributions::uniform::SampleUniform, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    error::GenerateError,
    graph::{WeightedGraph, storage::pair_count},
    weight::Weight,
};

const DEFAULT_EDGE_DENSITY: f64 = 0.5;

/// Configures and builds random [`WeightedGraph`] instances.
///
/// Randomness is injected at [`RandomGraphBuilder::build`], so a seeded RNG
/// reproduces the same graph.
///
/// # Examples
/// ```
/// use hexlink_core::{RandomGraphBuilder, SearchStrategy};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut graph = RandomGraphBuilder::new(6, 0_u32)
///     .with_edge_density(0.4)
///     .with_weight_range(1, 10)
///     .with_full_connectivity(true)
///     .build(&mut rng)?;
///
/// assert_eq!(graph.edge_count(), 6);
/// assert!(graph.is_connected(0, 5, SearchStrategy::SpanningForest)?);
/// # Ok::<(), hexlink_core::GenerateError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RandomGraphBuilder<W> {
    vertex_count: usize,
    disconnected: W,
    edge_density: f64,
    min_weight: W,
    max_weight: W,
    fully_connected: bool,
}

impl<W: Weight + SampleUniform> RandomGraphBuilder<W> {
    /// Creates a builder for `vertex_count` vertices using `disconnected` as
    /// the missing-edge sentinel.
    ///
    /// Defaults to an edge density of one half, every weight equal to
    /// [`Weight::ZERO`], and no forced connectivity.
    #[must_use]
    pub const fn new(vertex_count: usize, disconnected: W) -> Self {
        Self {
            vertex_count,
            disconnected,
            edge_density: DEFAULT_EDGE_DENSITY,
            min_weight: W::ZERO,
            max_weight: W::ZERO,
            fully_connected: false,
        }
    }

    /// Sets the fraction of vertex pairs that receive an edge.
    #[must_use]
    pub const fn with_edge_density(mut self, density: f64) -> Self {
        self.edge_density = density;
        self
    }

    /// Sets the inclusive range edge weights are sampled from.
    #[must_use]
    pub fn with_weight_range(mut self, min: W, max: W) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Requests a spanning tree before the remaining edges are sampled.
    #[must_use]
    pub const fn with_full_connectivity(mut self, enabled: bool) -> Self {
        self.fully_connected = enabled;
        self
    }

    /// Returns the configured edge density.
    #[must_use]
    pub const fn edge_density(&self) -> f64 {
        self.edge_density
    }

    /// Returns the number of edges a build will produce once the
    /// configuration validates.
    #[must_use]
    pub fn edge_budget(&self) -> usize {
        pair_count(self.vertex_count).map_or(0, |pairs| edge_budget(pairs, self.edge_density))
    }

    /// Validates the configuration and draws a graph from `rng`.
    ///
    /// # Errors
    /// Returns [`GenerateError::Graph`] for an empty vertex set,
    /// [`GenerateError::EdgeDensityOutOfRange`] unless the density lies in
    /// `[0, 1]`, [`GenerateError::InvalidWeightRange`] unless
    /// `ZERO <= min <= max`, [`GenerateError::SentinelInWeightRange`] when a
    /// sampled weight could equal the sentinel, and
    /// [`GenerateError::InsufficientEdgeBudget`] when forced connectivity
    /// needs more edges than the density allows.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, rng),
        fields(
            vertices = self.vertex_count,
            density = self.edge_density,
            connected = self.fully_connected
        ),
    )]
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<WeightedGraph<W>, GenerateError> {
        let mut graph = WeightedGraph::new(self.vertex_count, self.disconnected)?;
        self.validate()?;

        let budget = self.edge_budget();
        let required = self.vertex_count - 1;
        if self.fully_connected && budget < required {
            return Err(GenerateError::InsufficientEdgeBudget { budget, required });
        }

        let forced = if self.fully_connected {
            self.thread_spanning_tree(&mut graph, rng)?
        } else {
            0
        };
        let sampled = self.sample_remaining(&mut graph, budget - forced, rng);

        debug!(budget, forced, sampled, "random graph generated");
        Ok(graph)
    }

    fn validate(&self) -> Result<(), GenerateError> {
        let density = self.edge_density;
        if !(0.0..=1.0).contains(&density) {
            return Err(GenerateError::EdgeDensityOutOfRange { density });
        }
        if self.min_weight < W::ZERO || self.min_weight > self.max_weight {
            return Err(GenerateError::InvalidWeightRange {
                min: format!("{:?}", self.min_weight),
                max: format!("{:?}", self.max_weight),
            });
        }
        if (self.min_weight..=self.max_weight).contains(&self.disconnected) {
            return Err(GenerateError::SentinelInWeightRange {
                sentinel: format!("{:?}", self.disconnected),
            });
        }
        Ok(())
    }

    /// Joins each vertex, in shuffled order, to a random earlier one.
    fn thread_spanning_tree<R: Rng + ?Sized>(
        &self,
        graph: &mut WeightedGraph<W>,
        rng: &mut R,
    ) -> Result<usize, GenerateError> {
        let mut order: Vec<usize> = (0..self.vertex_count).collect();
        order.shuffle(rng);
        for position in 1..order.len() {
            let anchor = order[rng.gen_range(0..position)];
            let weight = self.sample_weight(rng);
            graph.set_weight(order[position], anchor, weight)?;
        }
        Ok(order.len() - 1)
    }

    /// Adds exactly `budget` edges among the still-disconnected pairs, each
    /// pair equally likely to be chosen.
    fn sample_remaining<R: Rng + ?Sized>(
        &self,
        graph: &mut WeightedGraph<W>,
        budget: usize,
        rng: &mut R,
    ) -> usize {
        let candidates: Vec<(usize, usize)> = graph
            .storage()
            .pairs()
            .filter(|&(_, _, weight)| weight == self.disconnected)
            .map(|(low, high, _)| (low, high))
            .collect();

        let mut remaining_budget = budget;
        let mut remaining_candidates = candidates.len();
        for (low, high) in candidates {
            if remaining_budget == 0 {
                break;
            }
            if rng.gen_range(0..remaining_candidates) < remaining_budget {
                let weight = self.sample_weight(rng);
                graph.store(low, high, weight);
                remaining_budget -= 1;
            }
            remaining_candidates -= 1;
        }
        budget - remaining_budget
    }

    fn sample_weight<R: Rng + ?Sized>(&self, rng: &mut R) -> W {
        rng.gen_range(self.min_weight..=self.max_weight)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    reason = "density is validated to [0, 1] so the product fits the pair count"
)]
fn edge_budget(pairs: usize, density: f64) -> usize {
    if !(0.0..=1.0).contains(&density) {
        return 0;
    }
    ((pairs as f64) * density).floor() as usize
}
