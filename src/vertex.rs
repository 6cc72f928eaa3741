//! Vertex types for walkable knowledge graphs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A vertex in a knowledge graph: either an entity or a predicate occurrence.
///
/// Entity vertices are identified by their label alone. Predicate vertices
/// additionally carry back-references to the subject (`prev`) and object
/// (`next`) they connect, so a walk can be reconstructed from the predicate
/// vertex alone.
///
/// Equality and hashing consider only the label and the predicate flag;
/// vertices are interchangeable value objects.
///
/// # Example
///
/// ```rust
/// use grafwalk::Vertex;
/// use std::sync::Arc;
///
/// let alice = Arc::new(Vertex::new("Alice"));
/// let bob = Arc::new(Vertex::new("Bob"));
/// let knows = Vertex::predicate("knows", alice.clone(), bob.clone());
///
/// assert!(knows.is_predicate());
/// assert_eq!(knows.prev().map(Vertex::label), Some("Alice"));
/// assert_eq!(knows.next().map(Vertex::label), Some("Bob"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    label: String,
    predicate: bool,
    prev: Option<Arc<Vertex>>,
    next: Option<Arc<Vertex>>,
}

impl Vertex {
    /// Create an entity vertex. Entity vertices carry no back-references.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            predicate: false,
            prev: None,
            next: None,
        }
    }

    /// Create a predicate vertex connecting `prev` (subject) to `next` (object).
    pub fn predicate(label: impl Into<String>, prev: Arc<Vertex>, next: Arc<Vertex>) -> Self {
        Self {
            label: label.into(),
            predicate: true,
            prev: Some(prev),
            next: Some(next),
        }
    }

    /// The vertex label (entity or predicate URI).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this vertex is a predicate occurrence.
    pub fn is_predicate(&self) -> bool {
        self.predicate
    }

    /// The subject vertex this predicate connects, if any.
    pub fn prev(&self) -> Option<&Vertex> {
        self.prev.as_deref()
    }

    /// The object vertex this predicate connects, if any.
    pub fn next(&self) -> Option<&Vertex> {
        self.next.as_deref()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.predicate == other.predicate && self.label == other.label
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.predicate.hash(state);
        self.label.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl From<&str> for Vertex {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Vertex {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entity_has_no_links() {
        let v = Vertex::new("Alice");
        assert!(!v.is_predicate());
        assert!(v.prev().is_none());
        assert!(v.next().is_none());
    }

    #[test]
    fn test_predicate_links() {
        let subj = Arc::new(Vertex::new("Alice"));
        let obj = Arc::new(Vertex::new("Bob"));
        let pred = Vertex::predicate("knows", subj, obj);

        assert!(pred.is_predicate());
        assert_eq!(pred.prev().map(Vertex::label), Some("Alice"));
        assert_eq!(pred.next().map(Vertex::label), Some("Bob"));
    }

    #[test]
    fn test_equality_ignores_links() {
        let a = Arc::new(Vertex::new("A"));
        let b = Arc::new(Vertex::new("B"));
        let c = Arc::new(Vertex::new("C"));

        let p1 = Vertex::predicate("knows", a.clone(), b);
        let p2 = Vertex::predicate("knows", a, c);
        assert_eq!(p1, p2);

        let mut set = HashSet::new();
        set.insert(p1);
        assert!(set.contains(&p2));
    }

    #[test]
    fn test_entity_and_predicate_differ() {
        let subj = Arc::new(Vertex::new("x"));
        let obj = Arc::new(Vertex::new("y"));
        let entity = Vertex::new("knows");
        let pred = Vertex::predicate("knows", subj, obj);
        assert_ne!(entity, pred);
    }
}
