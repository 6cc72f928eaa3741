//! Walk-extraction strategies.
//!
//! A [`Walker`] turns the neighborhood of each root entity into a bounded
//! collection of walks: alternating subject/predicate/object label
//! sequences, always rooted at the queried entity. Strategies share one
//! [`extract`](Walker::extract) contract and differ in how they traverse
//! ([`RandomWalker`] samples, [`AnonymousWalker`] enumerates and
//! canonicalizes, [`WalkletWalker`] shreds walks into pairs) so new
//! variants plug in without touching the graph or the driver.
//!
//! Traversal is bounded by depth alone: cycles are legal and a walk may
//! revisit vertices. Determinism is per root, derived from `random_state`
//! and the root label, so results do not depend on sibling roots or
//! scheduling.

mod anonymous;
mod random;
mod walklet;

pub use anonymous::AnonymousWalker;
pub use random::RandomWalker;
pub use walklet::WalkletWalker;

use crate::samplers::Sampler;
use crate::{Error, KnowledgeGraph, Result, Vertex};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One extracted walk, rendered as vertex labels.
pub type Walk = Vec<String>;

/// A walk still carrying its vertices, before label rendering.
pub(crate) type VertexWalk = Vec<Arc<Vertex>>;

/// Shared walker parameters.
///
/// `max_depth` is the number of hops, so a forward walk holds at most
/// `2 * max_depth + 1` labels. `max_walks` caps the walks kept per root;
/// `None` enumerates every reachable walk. `with_reverse` additionally
/// extends walks backward through incoming edges and combines both
/// directions pairwise at the root.
///
/// # Example
///
/// ```rust
/// use grafwalk::walkers::WalkerConfig;
///
/// let config = WalkerConfig::new(2)
///     .with_max_walks(25)
///     .with_random_state(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Maximum number of hops per direction.
    pub max_depth: usize,
    /// Cap on walks kept per root; `None` means enumerate all.
    pub max_walks: Option<usize>,
    /// Also walk backward through incoming edges.
    pub with_reverse: bool,
    /// Seed for reproducible extraction.
    pub random_state: u64,
}

impl WalkerConfig {
    /// Create a configuration with the given depth bound and defaults
    /// otherwise.
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            max_walks: None,
            with_reverse: false,
            random_state: 42,
        }
    }

    /// Cap the number of walks kept per root.
    pub fn with_max_walks(mut self, max_walks: usize) -> Self {
        self.max_walks = Some(max_walks);
        self
    }

    /// Extend walks backward through incoming edges as well.
    pub fn with_reverse(mut self, with_reverse: bool) -> Self {
        self.with_reverse = with_reverse;
        self
    }

    /// Seed the extraction run.
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = random_state;
        self
    }

    /// Reject malformed parameters. Walker constructors call this so bad
    /// configurations fail before any extraction starts.
    pub fn validate(&self) -> Result<()> {
        if self.max_walks == Some(0) {
            return Err(Error::InvalidConfig(
                "max_walks must be positive; use None to enumerate all walks".into(),
            ));
        }
        Ok(())
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

/// A walk-extraction strategy.
pub trait Walker: Send {
    /// Extract walks for every root, keyed by root label.
    ///
    /// Identical `(graph, root, configuration)` inputs yield identical walk
    /// sets. Roots are expected to exist in the graph; the extraction
    /// driver validates this up front.
    fn extract(
        &mut self,
        kg: &KnowledgeGraph,
        roots: &[String],
    ) -> Result<HashMap<String, Vec<Walk>>>;
}

/// Deterministic per-root RNG: mixes the run seed with the root label so a
/// root's walks do not depend on which other roots are extracted alongside
/// it.
pub(crate) fn root_rng(random_state: u64, root: &str) -> XorShiftRng {
    let mut hasher = DefaultHasher::new();
    root.hash(&mut hasher);
    XorShiftRng::seed_from_u64(random_state ^ hasher.finish())
}

/// The root's vertex, or a detached entity vertex when the root is not
/// materialized (it then dead-ends immediately).
pub(crate) fn root_vertex(kg: &KnowledgeGraph, root: &str) -> Arc<Vertex> {
    kg.vertex(root)
        .unwrap_or_else(|| Arc::new(Vertex::new(root)))
}

/// Enumerate every walk of up to `max_depth` hops from `root`,
/// breadth-first.
///
/// At each level an extendable walk is replaced by its extensions; a walk
/// at a dead end is kept as is. Cycles are not pruned, only depth bounds
/// the search. Reverse walks grow at the front and keep the root last, so
/// they can later be fused with forward walks at the root.
pub(crate) fn enumerate_walks(
    kg: &KnowledgeGraph,
    root: &Arc<Vertex>,
    max_depth: usize,
    reverse: bool,
) -> Vec<VertexWalk> {
    let mut walks: Vec<VertexWalk> = vec![vec![root.clone()]];
    for _ in 0..max_depth {
        let mut next: Vec<VertexWalk> = Vec::with_capacity(walks.len());
        for walk in walks {
            let hops = if reverse {
                kg.hops_reverse(walk.first().map_or(root, |v| v))
            } else {
                kg.hops(walk.last().map_or(root, |v| v))
            };
            if hops.is_empty() {
                next.push(walk);
                continue;
            }
            for (pred, other) in hops {
                if reverse {
                    let mut extended = Vec::with_capacity(walk.len() + 2);
                    extended.push(other);
                    extended.push(pred);
                    extended.extend_from_slice(&walk);
                    next.push(extended);
                } else {
                    let mut extended = walk.clone();
                    extended.push(pred);
                    extended.push(other);
                    next.push(extended);
                }
            }
        }
        walks = next;
    }
    walks
}

/// Sample up to `max_walks` walks of up to `max_depth` hops from `root`,
/// one edge at a time through `sampler`. Duplicates are collapsed, so fewer
/// walks may come back.
pub(crate) fn sample_walks(
    kg: &KnowledgeGraph,
    root: &Arc<Vertex>,
    max_depth: usize,
    max_walks: usize,
    sampler: &dyn Sampler,
    rng: &mut XorShiftRng,
    reverse: bool,
) -> Vec<VertexWalk> {
    let mut walks: Vec<VertexWalk> = Vec::with_capacity(max_walks);
    let mut seen: HashSet<VertexWalk> = HashSet::with_capacity(max_walks);

    for _ in 0..max_walks {
        let mut walk: VertexWalk = vec![root.clone()];
        for _ in 0..max_depth {
            let hops = if reverse {
                kg.hops_reverse(walk.first().map_or(root, |v| v))
            } else {
                kg.hops(walk.last().map_or(root, |v| v))
            };
            let Some((pred, other)) = sampler.sample(rng, &hops) else {
                break;
            };
            if reverse {
                walk.insert(0, pred.clone());
                walk.insert(0, other.clone());
            } else {
                walk.push(pred.clone());
                walk.push(other.clone());
            }
        }
        if seen.insert(walk.clone()) {
            walks.push(walk);
        }
    }
    walks
}

/// Fuse backward and forward walks at the root: every pair contributes
/// `backward[..len-1] ++ forward`, so the root appears once and the result
/// is bounded by `backward.len() * forward.len()` walks.
pub(crate) fn combine_with_reverse(
    forward: &[VertexWalk],
    backward: &[VertexWalk],
) -> Vec<VertexWalk> {
    let mut combined = Vec::with_capacity(forward.len() * backward.len());
    for b in backward {
        for f in forward {
            let mut walk = Vec::with_capacity(b.len() - 1 + f.len());
            walk.extend_from_slice(&b[..b.len() - 1]);
            walk.extend_from_slice(f);
            combined.push(walk);
        }
    }
    combined
}

/// Render a vertex walk as its label sequence.
pub(crate) fn to_labels(walk: &VertexWalk) -> Walk {
    walk.iter().map(|v| v.label().to_string()).collect()
}

/// Drop duplicate walks, keeping first-seen order.
pub(crate) fn dedupe(walks: Vec<Walk>) -> Vec<Walk> {
    let mut seen: HashSet<Walk> = HashSet::with_capacity(walks.len());
    let mut out = Vec::with_capacity(walks.len());
    for walk in walks {
        if seen.insert(walk.clone()) {
            out.push(walk);
        }
    }
    out
}

/// Fan a per-root extraction function out over the roots.
///
/// Extraction never mutates the graph (lazy resolution merges under the
/// graph's own lock), so roots are partitioned across rayon workers.
pub(crate) fn extract_per_root<F>(
    kg: &KnowledgeGraph,
    roots: &[String],
    per_root: F,
) -> HashMap<String, Vec<Walk>>
where
    F: Fn(&KnowledgeGraph, &str) -> Vec<Walk> + Sync,
{
    roots
        .par_iter()
        .map(|root| (root.clone(), per_root(kg, root)))
        .collect()
}
