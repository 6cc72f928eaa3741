//! Serialization formats for graph ingestion and export.

pub mod ntriples;
