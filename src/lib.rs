//! Terminus - Screen-graph text adventure engine
//!
//! This crate re-exports all layers of the Terminus system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: terminus_runtime    - Adventure files, snapshots, REPL, CLI
//! Layer 3: terminus_engine     - State codec, command effects, turn resolution
//! Layer 2: terminus_storage    - Screen graph and path authoring
//! Layer 1: terminus_text       - Normalization, command matching, item equivalence
//! Layer 0: terminus_foundation - Core types (Screen, Command, ClientGameState, Error)
//! ```

pub use terminus_engine as engine;
pub use terminus_foundation as foundation;
pub use terminus_runtime as runtime;
pub use terminus_storage as storage;
pub use terminus_text as text;
