//! Edge-sampling policies for walk extraction.
//!
//! During a sampled walk the walker repeatedly asks a [`Sampler`] to pick
//! one of the candidate outgoing edges of the current vertex. Exhaustive
//! strategies (breadth-first enumeration) bypass sampling entirely and
//! explore every candidate.
//!
//! Samplers draw from a caller-supplied seeded RNG, so identical graph,
//! seed, and request sequence reproduce identical choices.

mod frequency;
mod uniform;

pub use frequency::{ObjFreqSampler, PredFreqSampler};
pub use uniform::UniformSampler;

use crate::{Hop, KnowledgeGraph};
use rand_xorshift::XorShiftRng;
use serde::{Deserialize, Serialize};

/// Policy selecting the next hop among candidate edges.
pub trait Sampler: Send + Sync {
    /// Gather per-graph statistics (e.g. predicate frequencies) before an
    /// extraction run. Counters are scoped to the fitted graph; refitting on
    /// another graph replaces them.
    fn fit(&mut self, _kg: &KnowledgeGraph) {}

    /// Choose one of `hops`, or `None` when there is nothing to choose (the
    /// walk terminates early).
    fn sample<'a>(&self, rng: &mut XorShiftRng, hops: &'a [Hop]) -> Option<&'a Hop>;
}

/// Sampling strategy configuration surface.
///
/// # Example
///
/// ```rust
/// use grafwalk::samplers::SamplerStrategy;
///
/// let sampler = SamplerStrategy::Weighted { inverse: true }.build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplerStrategy {
    /// Every candidate edge equally likely.
    Uniform,
    /// Edges weighted by global predicate frequency; `inverse` flips the
    /// bias toward rare predicates.
    Weighted {
        /// Weight by reciprocal frequency instead of frequency.
        inverse: bool,
    },
    /// Edges weighted by object in-degree; `inverse` flips the bias toward
    /// rarely referenced objects.
    ObjectWeighted {
        /// Weight by reciprocal in-degree instead of in-degree.
        inverse: bool,
    },
}

impl SamplerStrategy {
    /// Build the sampler this strategy describes.
    pub fn build(&self) -> Box<dyn Sampler> {
        match *self {
            Self::Uniform => Box::new(UniformSampler),
            Self::Weighted { inverse } => Box::new(PredFreqSampler::new(inverse)),
            Self::ObjectWeighted { inverse } => Box::new(ObjFreqSampler::new(inverse)),
        }
    }
}

impl Default for SamplerStrategy {
    fn default() -> Self {
        Self::Uniform
    }
}

/// Cumulative-sum draw over arbitrary non-negative weights.
///
/// Falls back to a uniform draw when every weight is zero (e.g. an unfitted
/// frequency sampler), so a sampler never turns a reachable hop into a dead
/// end.
pub(crate) fn weighted_choice<'a>(
    rng: &mut XorShiftRng,
    hops: &'a [Hop],
    weights: &[f64],
) -> Option<&'a Hop> {
    use rand::prelude::*;

    if hops.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return hops.choose(rng);
    }
    let mut target = rng.random_range(0.0..total);
    for (hop, w) in hops.iter().zip(weights) {
        target -= w;
        if target < 0.0 {
            return Some(hop);
        }
    }
    hops.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vertex;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn hop(pred: &str, obj: &str) -> Hop {
        let subj = Arc::new(Vertex::new("s"));
        let obj = Arc::new(Vertex::new(obj));
        (Arc::new(Vertex::predicate(pred, subj, obj.clone())), obj)
    }

    #[test]
    fn test_strategy_builds() {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let hops = vec![hop("p", "a"), hop("q", "b")];
        for strategy in [
            SamplerStrategy::Uniform,
            SamplerStrategy::Weighted { inverse: false },
            SamplerStrategy::ObjectWeighted { inverse: true },
        ] {
            let sampler = strategy.build();
            assert!(sampler.sample(&mut rng, &hops).is_some());
        }
    }

    #[test]
    fn test_weighted_choice_zero_weights_falls_back() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        let hops = vec![hop("p", "a"), hop("q", "b")];
        assert!(weighted_choice(&mut rng, &hops, &[0.0, 0.0]).is_some());
    }

    #[test]
    fn test_weighted_choice_empty() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        assert!(weighted_choice(&mut rng, &[], &[]).is_none());
    }

    #[test]
    fn test_weighted_choice_skews() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        let hops = vec![hop("common", "a"), hop("rare", "b")];
        let weights = [100.0, 1.0];

        let mut common = 0;
        for _ in 0..200 {
            if let Some((p, _)) = weighted_choice(&mut rng, &hops, &weights) {
                if p.label() == "common" {
                    common += 1;
                }
            }
        }
        assert!(common > 150);
    }
}
