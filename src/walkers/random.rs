//! Random walk extraction.

use super::{
    combine_with_reverse, dedupe, enumerate_walks, extract_per_root, root_rng, root_vertex,
    sample_walks, to_labels, VertexWalk, Walk, Walker, WalkerConfig,
};
use crate::samplers::{Sampler, UniformSampler};
use crate::{KnowledgeGraph, Result};
use std::collections::HashMap;

/// The default, general-purpose strategy.
///
/// With `max_walks` set, repeatedly samples one outgoing edge at a time
/// through the configured [`Sampler`] until the depth bound or a dead end,
/// and deduplicates the results. Without it, enumerates every walk up to
/// `max_depth` by breadth-first search.
///
/// # Example
///
/// ```rust
/// use grafwalk::walkers::{RandomWalker, Walker, WalkerConfig};
/// use grafwalk::KnowledgeGraph;
///
/// let kg = KnowledgeGraph::from_triples([("Alice", "knows", "Bob")]);
/// let mut walker = RandomWalker::new(WalkerConfig::new(2).with_max_walks(5)).unwrap();
///
/// let walks = walker.extract(&kg, &["Alice".to_string()]).unwrap();
/// assert_eq!(walks["Alice"][0][0], "Alice");
/// ```
pub struct RandomWalker {
    config: WalkerConfig,
    sampler: Box<dyn Sampler>,
}

impl RandomWalker {
    /// Create a random walker with uniform edge sampling.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        Self::with_sampler(config, Box::new(UniformSampler))
    }

    /// Create a random walker with a custom sampling policy.
    pub fn with_sampler(config: WalkerConfig, sampler: Box<dyn Sampler>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, sampler })
    }

    fn walks_for(&self, kg: &KnowledgeGraph, root: &str) -> Vec<Walk> {
        let walks = extract_vertex_walks(kg, root, &self.config, &*self.sampler);
        dedupe(walks.iter().map(to_labels).collect())
    }
}

impl Walker for RandomWalker {
    fn extract(
        &mut self,
        kg: &KnowledgeGraph,
        roots: &[String],
    ) -> Result<HashMap<String, Vec<Walk>>> {
        self.sampler.fit(kg);
        let this = &*self;
        Ok(extract_per_root(kg, roots, |kg, root| {
            this.walks_for(kg, root)
        }))
    }
}

/// Shared random traversal: sampled (capped) or enumerated (uncapped)
/// walks, fused with their reverse counterparts when configured.
///
/// Also used by [`WalkletWalker`](super::WalkletWalker), which shreds the
/// result differently.
pub(crate) fn extract_vertex_walks(
    kg: &KnowledgeGraph,
    root: &str,
    config: &WalkerConfig,
    sampler: &dyn Sampler,
) -> Vec<VertexWalk> {
    let vertex = root_vertex(kg, root);
    let mut rng = root_rng(config.random_state, root);

    let forward = match config.max_walks {
        None => enumerate_walks(kg, &vertex, config.max_depth, false),
        Some(n) => sample_walks(kg, &vertex, config.max_depth, n, sampler, &mut rng, false),
    };
    if !config.with_reverse {
        return forward;
    }
    let backward = match config.max_walks {
        None => enumerate_walks(kg, &vertex, config.max_depth, true),
        Some(n) => sample_walks(kg, &vertex, config.max_depth, n, sampler, &mut rng, true),
    };
    combine_with_reverse(&forward, &backward)
}
