//! Anonymous (structurally canonicalized) walk extraction.

use super::{
    combine_with_reverse, dedupe, enumerate_walks, extract_per_root, root_rng, root_vertex,
    VertexWalk, Walk, Walker, WalkerConfig,
};
use crate::{KnowledgeGraph, Result};
use rand::prelude::*;
use rand_xorshift::XorShiftRng;
use std::collections::HashMap;

/// Entity-anonymized walks: topology in, identity out.
///
/// Walks are enumerated exhaustively up to `max_depth`, then each object
/// position (every even offset past the first element) is replaced by the
/// rank of its label's first appearance, counted from 1. The first element
/// and all predicate labels stay literal, so the shape of the neighborhood
/// survives while entity identity does not leak into the embedding signal.
///
/// With `max_walks` set, the enumeration is subsampled down to the cap with
/// the seeded RNG. With `with_reverse`, forward and backward walks are
/// fused at the root before canonicalization, numbering over the fused
/// sequence.
///
/// # Example
///
/// ```rust
/// use grafwalk::walkers::{AnonymousWalker, Walker, WalkerConfig};
/// use grafwalk::KnowledgeGraph;
///
/// let kg = KnowledgeGraph::from_triples([("Alice", "knows", "Bob")]);
/// let mut walker = AnonymousWalker::new(WalkerConfig::new(1)).unwrap();
///
/// let walks = walker.extract(&kg, &["Alice".to_string()]).unwrap();
/// assert!(walks["Alice"].contains(&vec![
///     "Alice".to_string(),
///     "knows".to_string(),
///     "1".to_string(),
/// ]));
/// ```
pub struct AnonymousWalker {
    config: WalkerConfig,
}

impl AnonymousWalker {
    /// Create an anonymous walker.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    fn walks_for(&self, kg: &KnowledgeGraph, root: &str) -> Vec<Walk> {
        let vertex = root_vertex(kg, root);
        let mut rng = root_rng(self.config.random_state, root);

        let forward = subsample(
            enumerate_walks(kg, &vertex, self.config.max_depth, false),
            self.config.max_walks,
            &mut rng,
        );
        let combined = if self.config.with_reverse {
            let backward = subsample(
                enumerate_walks(kg, &vertex, self.config.max_depth, true),
                self.config.max_walks,
                &mut rng,
            );
            combine_with_reverse(&forward, &backward)
        } else {
            forward
        };
        dedupe(combined.iter().map(|w| canonicalize(w)).collect())
    }
}

impl Walker for AnonymousWalker {
    fn extract(
        &mut self,
        kg: &KnowledgeGraph,
        roots: &[String],
    ) -> Result<HashMap<String, Vec<Walk>>> {
        let this = &*self;
        Ok(extract_per_root(kg, roots, |kg, root| {
            this.walks_for(kg, root)
        }))
    }
}

/// Replace each object position by the first-appearance rank of its label.
///
/// Position 0 and odd (predicate) positions keep their literal labels, so
/// the leading element is never a canonical numeral; repeated objects reuse
/// their rank.
fn canonicalize(walk: &VertexWalk) -> Walk {
    let mut ranks: HashMap<&str, usize> = HashMap::new();
    let mut canonical = Walk::with_capacity(walk.len());
    for (i, vertex) in walk.iter().enumerate() {
        if i == 0 || i % 2 == 1 {
            canonical.push(vertex.label().to_string());
        } else {
            let next = ranks.len() + 1;
            let rank = *ranks.entry(vertex.label()).or_insert(next);
            canonical.push(rank.to_string());
        }
    }
    canonical
}

fn subsample(
    walks: Vec<VertexWalk>,
    max_walks: Option<usize>,
    rng: &mut XorShiftRng,
) -> Vec<VertexWalk> {
    match max_walks {
        Some(n) if walks.len() > n => walks.choose_multiple(rng, n).cloned().collect(),
        _ => walks,
    }
}
