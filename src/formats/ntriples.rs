//! N-Triples ingestion and export.
//!
//! Line-based RDF format: each line is `<subject> <predicate> <object> .`
//! Parsing goes through Rio; writing stays a plain line writer because
//! graph labels are not guaranteed to round-trip as strict IRIs.
//!
//! Reference: <https://www.w3.org/TR/rdf12-n-triples/>

use crate::{Error, KnowledgeGraph, Result};
use rio_api::model::{NamedNode, Subject, Term};
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Parse N-Triples from a reader and merge the triples into `kg`.
pub fn read<R: BufRead>(kg: &mut KnowledgeGraph, reader: R) -> Result<()> {
    let mut parser = NTriplesParser::new(reader);

    parser
        .parse_all(&mut |triple| {
            let subject = match triple.subject {
                Subject::NamedNode(n) => n.iri.to_string(),
                Subject::BlankNode(n) => format!("_:{}", n.id),
                Subject::Triple(t) => format!("{}", t),
            };

            let predicate = match triple.predicate {
                NamedNode { iri } => iri.to_string(),
            };

            let object = match triple.object {
                Term::NamedNode(n) => n.iri.to_string(),
                Term::BlankNode(n) => format!("_:{}", n.id),
                Term::Literal(l) => format!("{}", l),
                Term::Triple(t) => format!("{}", t),
            };

            kg.add_edge(subject, predicate, object);
            Ok(()) as std::result::Result<(), TurtleError>
        })
        .map_err(|e| Error::ParseTriple(e.to_string()))?;

    Ok(())
}

/// Parse an N-Triples file and merge the triples into `kg`.
pub fn read_file(kg: &mut KnowledgeGraph, path: impl AsRef<Path>) -> Result<()> {
    let file = File::open(path)?;
    read(kg, BufReader::new(file))
}

/// Parse N-Triples from a string and merge the triples into `kg`.
pub fn read_str(kg: &mut KnowledgeGraph, s: &str) -> Result<()> {
    read(kg, std::io::Cursor::new(s))
}

/// Write the materialized triples of `kg` in N-Triples lines.
pub fn write<W: Write>(kg: &KnowledgeGraph, writer: W) -> Result<()> {
    let mut writer = writer;
    for (subject, predicate, object) in kg.triples() {
        writeln!(writer, "<{subject}> <{predicate}> <{object}> .")?;
    }
    Ok(())
}

/// Write the materialized triples of `kg` to a file.
pub fn write_file(kg: &KnowledgeGraph, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write(kg, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vertex;

    const SAMPLE: &str = "\
<http://example.org/Alice> <http://example.org/knows> <http://example.org/Bob> .
<http://example.org/Bob> <http://example.org/knows> <http://example.org/Dean> .
";

    #[test]
    fn test_read_str() {
        let mut kg = KnowledgeGraph::new();
        read_str(&mut kg, SAMPLE).unwrap();

        assert_eq!(kg.entity_count(), 3);
        assert_eq!(kg.triple_count(), 2);

        let root = Vertex::new("http://example.org/Alice");
        let hops = kg.hops(&root);
        assert_eq!(hops.len(), 1);
        assert_eq!(hops[0].1.label(), "http://example.org/Bob");
    }

    #[test]
    fn test_read_respects_skip_predicates() {
        let mut kg = KnowledgeGraph::new().with_skip_predicates(["http://example.org/knows"]);
        read_str(&mut kg, SAMPLE).unwrap();
        assert_eq!(kg.triple_count(), 0);
    }

    #[test]
    fn test_file_roundtrip() {
        let mut kg = KnowledgeGraph::new();
        read_str(&mut kg, SAMPLE).unwrap();

        let path = std::env::temp_dir().join("grafwalk_ntriples_roundtrip.nt");
        write_file(&kg, &path).unwrap();

        let loaded = KnowledgeGraph::from_ntriples_file(&path).unwrap();
        assert_eq!(loaded.entity_count(), kg.entity_count());
        assert_eq!(loaded.triple_count(), kg.triple_count());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let mut kg = KnowledgeGraph::new();
        assert!(read_str(&mut kg, "not an ntriples line\n").is_err());
    }
}
