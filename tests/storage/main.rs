//! Integration tests for Layer 2: Storage
//!
//! Tests for screen graph construction, path authoring, and link checking.

mod graph;
mod paths;
