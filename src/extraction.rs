//! Extraction driver: walkers in, corpus out.

use crate::walkers::{Walk, Walker};
use crate::{Error, KnowledgeGraph, Result};

/// Runs a set of walkers over a graph and flattens their walks into one
/// corpus of token sequences for the embedding trainer.
///
/// Every root must already exist in the graph; extraction fails fast with
/// [`Error::UnknownInstance`] before any walk is attempted otherwise. Walks
/// are concatenated in walker order, then in the given root order, with no
/// cross-walker deduplication.
///
/// # Example
///
/// ```rust
/// use grafwalk::walkers::{RandomWalker, WalkerConfig};
/// use grafwalk::{KnowledgeGraph, WalkExtractor};
///
/// let kg = KnowledgeGraph::from_triples([
///     ("Alice", "knows", "Bob"),
///     ("Bob", "knows", "Dean"),
/// ]);
/// let walker = RandomWalker::new(WalkerConfig::new(2).with_max_walks(10)).unwrap();
/// let mut extractor = WalkExtractor::new(vec![Box::new(walker)]);
///
/// let corpus = extractor.extract(&kg, &["Alice".to_string()]).unwrap();
/// assert!(corpus.iter().all(|walk| walk[0] == "Alice"));
/// ```
pub struct WalkExtractor {
    walkers: Vec<Box<dyn Walker>>,
}

impl WalkExtractor {
    /// Create a driver over the given walking strategies.
    pub fn new(walkers: Vec<Box<dyn Walker>>) -> Self {
        Self { walkers }
    }

    /// Extract the corpus for `instances`.
    pub fn extract(&mut self, kg: &KnowledgeGraph, instances: &[String]) -> Result<Vec<Walk>> {
        for instance in instances {
            if !kg.contains_instance(instance) {
                return Err(Error::UnknownInstance(instance.clone()));
            }
        }

        let mut corpus = Vec::new();
        for walker in &mut self.walkers {
            let mut per_root = walker.extract(kg, instances)?;
            for instance in instances {
                if let Some(walks) = per_root.remove(instance) {
                    corpus.extend(walks);
                }
            }
        }
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walkers::{AnonymousWalker, RandomWalker, WalkerConfig};

    fn graph() -> KnowledgeGraph {
        KnowledgeGraph::from_triples([
            ("Alice", "knows", "Bob"),
            ("Bob", "knows", "Dean"),
            ("Dean", "loves", "Alice"),
        ])
    }

    #[test]
    fn test_unknown_instance_fails_fast() {
        let kg = graph();
        let walker = RandomWalker::new(WalkerConfig::new(2)).unwrap();
        let mut extractor = WalkExtractor::new(vec![Box::new(walker)]);

        let result = extractor.extract(&kg, &["Alice".to_string(), "Nobody".to_string()]);
        match result {
            Err(Error::UnknownInstance(name)) => assert_eq!(name, "Nobody"),
            other => panic!("expected UnknownInstance, got {other:?}"),
        }
    }

    #[test]
    fn test_corpus_concatenates_walkers() {
        let kg = graph();
        let random = RandomWalker::new(WalkerConfig::new(1)).unwrap();
        let anonymous = AnonymousWalker::new(WalkerConfig::new(1)).unwrap();
        let mut extractor = WalkExtractor::new(vec![Box::new(random), Box::new(anonymous)]);

        let corpus = extractor.extract(&kg, &["Alice".to_string()]).unwrap();

        // One literal depth-1 walk from the random walker, one canonical
        // walk from the anonymous walker, in walker order.
        assert_eq!(
            corpus,
            vec![
                vec!["Alice".to_string(), "knows".to_string(), "Bob".to_string()],
                vec!["Alice".to_string(), "knows".to_string(), "1".to_string()],
            ]
        );
    }

    #[test]
    fn test_roots_ordered_as_given() {
        let kg = graph();
        let walker = RandomWalker::new(WalkerConfig::new(0)).unwrap();
        let mut extractor = WalkExtractor::new(vec![Box::new(walker)]);

        let corpus = extractor
            .extract(&kg, &["Bob".to_string(), "Alice".to_string()])
            .unwrap();
        assert_eq!(
            corpus,
            vec![vec!["Bob".to_string()], vec!["Alice".to_string()]]
        );
    }

    #[test]
    fn test_remote_roots_accepted() {
        let kg = KnowledgeGraph::new().with_resolver(Box::new(|entity: &str| {
            if entity == "Remote" {
                vec![("links".to_string(), "Target".to_string())]
            } else {
                Vec::new()
            }
        }));
        let walker = RandomWalker::new(WalkerConfig::new(1)).unwrap();
        let mut extractor = WalkExtractor::new(vec![Box::new(walker)]);

        let corpus = extractor.extract(&kg, &["Remote".to_string()]).unwrap();
        assert_eq!(
            corpus,
            vec![vec![
                "Remote".to_string(),
                "links".to_string(),
                "Target".to_string()
            ]]
        );
    }
}
