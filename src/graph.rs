//! Knowledge graph implementation using petgraph.

use crate::{EdgeResolver, Result, Vertex};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An outgoing or incoming edge: the predicate vertex and the vertex on the
/// far side of it.
pub type Hop = (Arc<Vertex>, Arc<Vertex>);

/// A directed multigraph of (subject, predicate, object) triples.
///
/// Entity vertices are graph nodes; each predicate occurrence is a parallel
/// edge whose weight is the predicate [`Vertex`] carrying `prev`/`next`
/// back-references to the subject and object it connects. Self-loops and
/// multi-edges are permitted, and the graph may contain cycles.
///
/// A graph is either fully materialized (built from triples or an N-Triples
/// file) or backed by an [`EdgeResolver`] that fetches the outgoing edges of
/// a vertex the first time they are requested. Walkers cannot tell the two
/// apart: [`hops`](KnowledgeGraph::hops) resolves, merges, and caches on
/// demand. The store sits behind one `RwLock` so that on-demand merging
/// works from shared references; once population is complete, traversal is
/// read-only.
///
/// # Example
///
/// ```rust
/// use grafwalk::KnowledgeGraph;
///
/// let mut kg = KnowledgeGraph::new();
/// kg.add_edge("Alice", "knows", "Bob");
/// kg.add_edge("Alice", "knows", "Dean");
///
/// assert_eq!(kg.entity_count(), 3);
/// assert_eq!(kg.triple_count(), 2);
/// ```
pub struct KnowledgeGraph {
    store: RwLock<Store>,
    resolver: Option<Box<dyn EdgeResolver>>,
    skip_predicates: HashSet<String>,
}

#[derive(Default)]
struct Store {
    graph: DiGraph<Arc<Vertex>, Arc<Vertex>>,
    label_index: HashMap<String, NodeIndex>,
    /// Vertices whose outgoing edges have been fetched already. Only
    /// consulted when a resolver is configured.
    resolved: HashSet<NodeIndex>,
    predicate_counts: HashMap<String, usize>,
    object_counts: HashMap<String, usize>,
    triple_count: usize,
}

impl Store {
    fn get_or_create(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.label_index.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(Arc::new(Vertex::new(label)));
        self.label_index.insert(label.to_string(), idx);
        idx
    }

    /// Insert one triple. Returns false if the identical triple is already
    /// present.
    fn insert_edge(&mut self, subject: &str, predicate: &str, object: &str) -> bool {
        let s = self.get_or_create(subject);
        let o = self.get_or_create(object);

        let duplicate = self
            .graph
            .edges_connecting(s, o)
            .any(|e| e.weight().label() == predicate);
        if duplicate {
            return false;
        }

        let pred = Arc::new(Vertex::predicate(
            predicate,
            self.graph[s].clone(),
            self.graph[o].clone(),
        ));
        self.graph.add_edge(s, o, pred);

        *self.predicate_counts.entry(predicate.to_string()).or_insert(0) += 1;
        *self.object_counts.entry(object.to_string()).or_insert(0) += 1;
        self.triple_count += 1;
        true
    }

    fn outgoing(&self, idx: NodeIndex) -> Vec<Hop> {
        self.graph
            .edges(idx)
            .map(|e| (e.weight().clone(), self.graph[e.target()].clone()))
            .collect()
    }

    fn incoming(&self, idx: NodeIndex) -> Vec<Hop> {
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| (e.weight().clone(), self.graph[e.source()].clone()))
            .collect()
    }
}

impl Default for KnowledgeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeGraph {
    /// Create an empty knowledge graph.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
            resolver: None,
            skip_predicates: HashSet::new(),
        }
    }

    /// Drop every edge whose predicate label is in `predicates`, whether it
    /// arrives via [`add_edge`](KnowledgeGraph::add_edge) or a resolver.
    pub fn with_skip_predicates<I, S>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_predicates = predicates.into_iter().map(Into::into).collect();
        self
    }

    /// Back unmaterialized vertices by `resolver`.
    pub fn with_resolver(mut self, resolver: Box<dyn EdgeResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Build a graph from an iterator of (subject, predicate, object)
    /// triples.
    pub fn from_triples<I, S>(triples: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let mut kg = Self::new();
        for (s, p, o) in triples {
            kg.add_edge(s.into(), p.into(), o.into());
        }
        kg
    }

    /// Load from an N-Triples file.
    pub fn from_ntriples_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut kg = Self::new();
        kg.load_ntriples_file(path)?;
        Ok(kg)
    }

    /// Merge the triples of an N-Triples file into this graph.
    pub fn load_ntriples_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        crate::formats::ntriples::read_file(self, path)
    }

    /// Add the triple (subject, predicate, object).
    ///
    /// Constructs the predicate vertex with its subject/object
    /// back-references. Re-adding an identical triple is a no-op, as is
    /// adding an edge whose predicate is in the skip set.
    pub fn add_edge(
        &mut self,
        subject: impl AsRef<str>,
        predicate: impl AsRef<str>,
        object: impl AsRef<str>,
    ) {
        let predicate = predicate.as_ref();
        if self.skip_predicates.contains(predicate) {
            return;
        }
        self.write()
            .insert_edge(subject.as_ref(), predicate, object.as_ref());
    }

    /// Whether an entity vertex with this label is materialized in the graph.
    pub fn contains(&self, label: &str) -> bool {
        self.read().label_index.contains_key(label)
    }

    /// Whether `label` can act as a walk root.
    ///
    /// For materialized graphs this is plain membership. For resolver-backed
    /// graphs an unknown label is probed once: an instance the collaborator
    /// resolves to at least one edge is accepted and merged.
    pub fn contains_instance(&self, label: &str) -> bool {
        if self.contains(label) {
            return true;
        }
        if self.resolver.is_some() {
            return !self.hops(&Vertex::new(label)).is_empty();
        }
        false
    }

    /// The materialized entity vertex for `label`, if any.
    pub fn vertex(&self, label: &str) -> Option<Arc<Vertex>> {
        let store = self.read();
        store.label_index.get(label).map(|&idx| store.graph[idx].clone())
    }

    /// The outgoing (predicate, object) pairs of `vertex`.
    ///
    /// If the vertex has not been materialized and a resolver is configured,
    /// its edges are fetched, merged, and cached for the lifetime of the
    /// graph first. A vertex the resolver cannot find yields an empty set (a
    /// dead end), never an error. The result is deterministic as a set;
    /// callers impose ordering where it matters.
    pub fn hops(&self, vertex: &Vertex) -> Vec<Hop> {
        if vertex.is_predicate() {
            return Vec::new();
        }
        {
            let store = self.read();
            if let Some(&idx) = store.label_index.get(vertex.label()) {
                if self.resolver.is_none() || store.resolved.contains(&idx) {
                    return store.outgoing(idx);
                }
            } else if self.resolver.is_none() {
                return Vec::new();
            }
        }
        self.resolve_and_merge(vertex.label())
    }

    /// The incoming (predicate, subject) pairs of `vertex`, for reverse
    /// traversal.
    ///
    /// The resolver contract only covers outgoing edges, so reverse hops see
    /// materialized edges only.
    pub fn hops_reverse(&self, vertex: &Vertex) -> Vec<Hop> {
        if vertex.is_predicate() {
            return Vec::new();
        }
        let store = self.read();
        match store.label_index.get(vertex.label()) {
            Some(&idx) => store.incoming(idx),
            None => Vec::new(),
        }
    }

    fn resolve_and_merge(&self, label: &str) -> Vec<Hop> {
        let resolver = match &self.resolver {
            Some(r) => r,
            None => return Vec::new(),
        };
        let edges = resolver.resolve(label);

        let mut store = self.write();
        let idx = store.get_or_create(label);
        // A sibling worker may have resolved this vertex while we were
        // fetching; merging twice would be harmless but wasteful.
        if !store.resolved.contains(&idx) {
            for (predicate, object) in edges {
                if self.skip_predicates.contains(&predicate) {
                    continue;
                }
                store.insert_edge(label, &predicate, &object);
            }
            store.resolved.insert(idx);
        }
        store.outgoing(idx)
    }

    /// Number of entity vertices.
    pub fn entity_count(&self) -> usize {
        self.read().graph.node_count()
    }

    /// Number of distinct triples.
    pub fn triple_count(&self) -> usize {
        self.read().triple_count
    }

    /// Occurrence count per predicate label across the whole graph.
    pub fn predicate_counts(&self) -> HashMap<String, usize> {
        self.read().predicate_counts.clone()
    }

    /// In-degree per object label across the whole graph.
    pub fn object_counts(&self) -> HashMap<String, usize> {
        self.read().object_counts.clone()
    }

    /// Snapshot of all materialized triples as (subject, predicate, object)
    /// vertices.
    pub fn triples(&self) -> Vec<(Arc<Vertex>, Arc<Vertex>, Arc<Vertex>)> {
        let store = self.read();
        store
            .graph
            .edge_indices()
            .filter_map(|e| {
                let (s, o) = store.graph.edge_endpoints(e)?;
                Some((
                    store.graph[s].clone(),
                    store.graph[e].clone(),
                    store.graph[o].clone(),
                ))
            })
            .collect()
    }

    /// Compute statistics about the graph.
    pub fn stats(&self) -> KnowledgeGraphStats {
        let store = self.read();
        let entity_count = store.graph.node_count();
        let triple_count = store.triple_count;
        let avg_out_degree = if entity_count > 0 {
            triple_count as f64 / entity_count as f64
        } else {
            0.0
        };
        KnowledgeGraphStats {
            entity_count,
            triple_count,
            predicate_type_count: store.predicate_counts.len(),
            avg_out_degree,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for KnowledgeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.read();
        f.debug_struct("KnowledgeGraph")
            .field("entities", &store.graph.node_count())
            .field("triples", &store.triple_count)
            .field("lazy", &self.resolver.is_some())
            .finish()
    }
}

/// Statistics about a knowledge graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeGraphStats {
    /// Number of entity vertices.
    pub entity_count: usize,
    /// Number of distinct triples.
    pub triple_count: usize,
    /// Number of unique predicate labels.
    pub predicate_type_count: usize,
    /// Average out-degree (triples per entity).
    pub avg_out_degree: f64,
}
