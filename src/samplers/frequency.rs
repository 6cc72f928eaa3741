//! Frequency-biased edge sampling.
//!
//! Weights candidate edges by statistics observed over the whole graph,
//! approximating importance sampling: frequent predicates (or heavily
//! referenced objects) are favored, or disfavored with `inverse`.

use super::{weighted_choice, Sampler};
use crate::{Hop, KnowledgeGraph};
use rand_xorshift::XorShiftRng;
use std::collections::HashMap;

/// Weight edges by global predicate frequency.
///
/// `fit` snapshots the predicate counters of the graph; the counters are
/// scoped to that graph and persist across extraction runs against it.
#[derive(Debug, Clone, Default)]
pub struct PredFreqSampler {
    inverse: bool,
    counts: HashMap<String, usize>,
}

impl PredFreqSampler {
    /// Create a predicate-frequency sampler. With `inverse`, rare
    /// predicates are favored instead of frequent ones.
    pub fn new(inverse: bool) -> Self {
        Self {
            inverse,
            counts: HashMap::new(),
        }
    }

    fn weight(&self, hop: &Hop) -> f64 {
        let count = self.counts.get(hop.0.label()).copied().unwrap_or(0);
        bias(count, self.inverse)
    }
}

impl Sampler for PredFreqSampler {
    fn fit(&mut self, kg: &KnowledgeGraph) {
        self.counts = kg.predicate_counts();
    }

    fn sample<'a>(&self, rng: &mut XorShiftRng, hops: &'a [Hop]) -> Option<&'a Hop> {
        let weights: Vec<f64> = hops.iter().map(|h| self.weight(h)).collect();
        weighted_choice(rng, hops, &weights)
    }
}

/// Weight edges by the in-degree of the object they lead to.
#[derive(Debug, Clone, Default)]
pub struct ObjFreqSampler {
    inverse: bool,
    counts: HashMap<String, usize>,
}

impl ObjFreqSampler {
    /// Create an object-frequency sampler. With `inverse`, rarely
    /// referenced objects are favored.
    pub fn new(inverse: bool) -> Self {
        Self {
            inverse,
            counts: HashMap::new(),
        }
    }

    fn weight(&self, hop: &Hop) -> f64 {
        let count = self.counts.get(hop.1.label()).copied().unwrap_or(0);
        bias(count, self.inverse)
    }
}

impl Sampler for ObjFreqSampler {
    fn fit(&mut self, kg: &KnowledgeGraph) {
        self.counts = kg.object_counts();
    }

    fn sample<'a>(&self, rng: &mut XorShiftRng, hops: &'a [Hop]) -> Option<&'a Hop> {
        let weights: Vec<f64> = hops.iter().map(|h| self.weight(h)).collect();
        weighted_choice(rng, hops, &weights)
    }
}

fn bias(count: usize, inverse: bool) -> f64 {
    if count == 0 {
        return 0.0;
    }
    if inverse {
        1.0 / count as f64
    } else {
        count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn sample_graph() -> KnowledgeGraph {
        let mut kg = KnowledgeGraph::new();
        // "common" appears four times, "rare" once.
        kg.add_edge("root", "common", "a");
        kg.add_edge("root", "rare", "b");
        kg.add_edge("x", "common", "a");
        kg.add_edge("y", "common", "a");
        kg.add_edge("z", "common", "a");
        kg
    }

    fn tally(sampler: &dyn Sampler, kg: &KnowledgeGraph, seed: u64) -> (usize, usize) {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let root = kg.vertex("root").unwrap();
        let hops = kg.hops(&root);

        let mut common = 0;
        let mut rare = 0;
        for _ in 0..300 {
            match sampler.sample(&mut rng, &hops) {
                Some((p, _)) if p.label() == "common" => common += 1,
                Some(_) => rare += 1,
                None => {}
            }
        }
        (common, rare)
    }

    #[test]
    fn test_pred_freq_prefers_frequent() {
        let kg = sample_graph();
        let mut sampler = PredFreqSampler::new(false);
        sampler.fit(&kg);

        let (common, rare) = tally(&sampler, &kg, 13);
        assert!(common > rare * 2, "common={common} rare={rare}");
    }

    #[test]
    fn test_pred_freq_inverse_prefers_rare() {
        let kg = sample_graph();
        let mut sampler = PredFreqSampler::new(true);
        sampler.fit(&kg);

        let (common, rare) = tally(&sampler, &kg, 13);
        assert!(rare > common * 2, "common={common} rare={rare}");
    }

    #[test]
    fn test_obj_freq_prefers_referenced() {
        let kg = sample_graph();
        let mut sampler = ObjFreqSampler::new(false);
        sampler.fit(&kg);

        // Object "a" has in-degree 4, "b" has 1.
        let (toward_a, toward_b) = tally(&sampler, &kg, 29);
        assert!(toward_a > toward_b * 2, "a={toward_a} b={toward_b}");
    }

    #[test]
    fn test_unfitted_sampler_still_samples() {
        let kg = sample_graph();
        let sampler = PredFreqSampler::new(false);
        let root = kg.vertex("root").unwrap();
        let hops = kg.hops(&root);

        let mut rng = XorShiftRng::seed_from_u64(5);
        assert!(sampler.sample(&mut rng, &hops).is_some());
    }
}
