#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

//! Walk extraction for knowledge graphs.
//!
//! `grafwalk` turns the neighborhood of entities in a labeled directed
//! multigraph into bounded, reproducible walks: alternating
//! subject/predicate/object token sequences for a downstream
//! sequence-embedding trainer (skip-gram/CBOW style). It is the
//! graph-and-traversal half of an RDF2Vec-style pipeline; embedding
//! training itself is out of scope.
//!
//! - [`Vertex`] - an entity or predicate occurrence, a plain value object
//! - [`KnowledgeGraph`] - a directed multigraph of triples, fully
//!   materialized or backed by an [`EdgeResolver`] that fetches edges on
//!   demand
//! - [`samplers`] - policies biasing which outgoing edge a walk follows
//! - [`walkers`] - traversal strategies sharing one `extract` contract
//! - [`WalkExtractor`] - runs walkers over roots and flattens the corpus
//!
//! Walks are bounded by depth alone, so cyclic graphs are fine and a walk
//! may revisit vertices. Given the same graph, roots, configuration, and
//! seed, extraction is reproducible bit for bit - walkers thread explicit
//! seeded RNGs instead of touching process-global state.
//!
//! # Example
//!
//! ```rust
//! use grafwalk::walkers::{RandomWalker, WalkerConfig};
//! use grafwalk::{KnowledgeGraph, WalkExtractor};
//!
//! let mut kg = KnowledgeGraph::new();
//! kg.add_edge("Alice", "knows", "Bob");
//! kg.add_edge("Bob", "knows", "Dean");
//! kg.add_edge("Dean", "loves", "Alice");
//!
//! let walker = RandomWalker::new(
//!     WalkerConfig::new(2).with_max_walks(25).with_random_state(42),
//! )?;
//! let mut extractor = WalkExtractor::new(vec![Box::new(walker)]);
//!
//! let corpus = extractor.extract(&kg, &["Alice".to_string()])?;
//! assert!(corpus.iter().all(|walk| walk[0] == "Alice"));
//! # Ok::<(), grafwalk::Error>(())
//! ```

mod error;
mod extraction;
pub mod formats;
mod graph;
mod resolver;
pub mod samplers;
mod vertex;
pub mod walkers;

pub use error::{Error, Result};
pub use extraction::WalkExtractor;
pub use graph::{Hop, KnowledgeGraph, KnowledgeGraphStats};
pub use resolver::EdgeResolver;
pub use vertex::Vertex;
pub use walkers::{Walk, Walker, WalkerConfig};

// Re-export petgraph for advanced graph operations
pub use petgraph;
