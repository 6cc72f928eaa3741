//! Uniform edge sampling.

use super::Sampler;
use crate::Hop;
use rand::prelude::*;
use rand_xorshift::XorShiftRng;

/// Every candidate edge is equally likely. The default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSampler;

impl Sampler for UniformSampler {
    fn sample<'a>(&self, rng: &mut XorShiftRng, hops: &'a [Hop]) -> Option<&'a Hop> {
        hops.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vertex;
    use std::sync::Arc;

    fn hop(obj: &str) -> Hop {
        let subj = Arc::new(Vertex::new("s"));
        let obj = Arc::new(Vertex::new(obj));
        (Arc::new(Vertex::predicate("p", subj, obj.clone())), obj)
    }

    #[test]
    fn test_empty_is_dead_end() {
        let mut rng = XorShiftRng::seed_from_u64(0);
        assert!(UniformSampler.sample(&mut rng, &[]).is_none());
    }

    #[test]
    fn test_deterministic_given_seed() {
        let hops = vec![hop("a"), hop("b"), hop("c"), hop("d")];

        let picks: Vec<String> = {
            let mut rng = XorShiftRng::seed_from_u64(99);
            (0..20)
                .filter_map(|_| UniformSampler.sample(&mut rng, &hops))
                .map(|(_, o)| o.label().to_string())
                .collect()
        };
        let again: Vec<String> = {
            let mut rng = XorShiftRng::seed_from_u64(99);
            (0..20)
                .filter_map(|_| UniformSampler.sample(&mut rng, &hops))
                .map(|(_, o)| o.label().to_string())
                .collect()
        };
        assert_eq!(picks, again);
    }
}
