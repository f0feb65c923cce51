//! Tests for the analysis pipeline
//!
//! Runs the pipeline against in-memory sources and temporary files.

use crate::text_stream::ReaderSource;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;


/// In-memory source over `content`
pub fn source(content: &str) -> ReaderSource<Cursor<Vec<u8>>> {
    ReaderSource::new(Cursor::new(content.as_bytes().to_vec()))
}

pub fn origin() -> &'static Path {
    Path::new("memory.csv")
}

/// Write `content` to `name` inside a fresh temporary directory
pub fn create_input_file(name: &str, content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
