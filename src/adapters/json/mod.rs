//! File-backed adapters using JSON documents.

mod file_alternative_reader;

pub use file_alternative_reader::JsonFileAlternativeReader;
