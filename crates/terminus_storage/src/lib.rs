//! Screen graph storage and path authoring for Terminus.
//!
//! This crate provides:
//! - [`ScreenGraph`] - Immutable screen graph with structural sharing
//! - [`NewPath`] / [`PathTarget`] - Authoring new commands between screens
//! - [`ScreenLookup`] - The read-only view the engine resolves turns against

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod lookup;
pub mod path;

pub use graph::ScreenGraph;
pub use lookup::ScreenLookup;
pub use path::{AddedPath, NewPath, PathTarget};
