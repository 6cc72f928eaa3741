//! Walklet extraction: walks shredded into (root, vertex) pairs.

use super::random::extract_vertex_walks;
use super::{dedupe, extract_per_root, to_labels, Walk, Walker, WalkerConfig};
use crate::samplers::{Sampler, UniformSampler};
use crate::{KnowledgeGraph, Result};
use std::collections::HashMap;

/// Emits two-token walks pairing the walk head with every later vertex.
///
/// Traversal is identical to [`RandomWalker`](super::RandomWalker); instead
/// of keeping whole walks, each one is shredded into `(head, vertex)` pairs
/// covering predicates and objects alike. The embedding trainer then sees
/// each neighbor in the root's context window regardless of hop distance.
pub struct WalkletWalker {
    config: WalkerConfig,
    sampler: Box<dyn Sampler>,
}

impl WalkletWalker {
    /// Create a walklet walker with uniform edge sampling.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        Self::with_sampler(config, Box::new(UniformSampler))
    }

    /// Create a walklet walker with a custom sampling policy.
    pub fn with_sampler(config: WalkerConfig, sampler: Box<dyn Sampler>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, sampler })
    }

    fn walks_for(&self, kg: &KnowledgeGraph, root: &str) -> Vec<Walk> {
        let walks = extract_vertex_walks(kg, root, &self.config, &*self.sampler);

        let mut walklets = Vec::new();
        for walk in &walks {
            let labels = to_labels(walk);
            if labels.len() == 1 {
                walklets.push(labels);
                continue;
            }
            for token in &labels[1..] {
                walklets.push(vec![labels[0].clone(), token.clone()]);
            }
        }
        dedupe(walklets)
    }
}

impl Walker for WalkletWalker {
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
