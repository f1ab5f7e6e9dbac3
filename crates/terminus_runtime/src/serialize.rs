//! Screen graph snapshots using `MessagePack`.
//!
//! Snapshots are the compiled form of an adventure: already validated and
//! faster to load than JSON. Authoring limits are not stored; a loaded graph
//! uses the default limits until the caller sets its own.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use terminus_foundation::{Error, Result};
use terminus_storage::ScreenGraph;

/// Serializes a screen graph to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(graph: &ScreenGraph) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(graph).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a screen graph from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails or the graph has dangling
/// navigation targets.
pub fn from_bytes(bytes: &[u8]) -> Result<ScreenGraph> {
    let graph: ScreenGraph =
        rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))?;
    graph.validate_links()?;
    Ok(graph)
}

/// Saves a screen graph to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(graph: &ScreenGraph, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(graph)?;

    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush file '{}': {e}", path.display())))?;

    Ok(())
}

/// Loads a screen graph from a snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ScreenGraph> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    from_bytes(&bytes)
}
