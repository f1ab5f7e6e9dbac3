//! Adventure files, snapshots, configuration, and the play REPL for Terminus.
//!
//! This crate provides:
//! - [`Repl`] - Interactive play loop over a [`Session`]
//! - [`GameConfig`] - Messages, limits, and logging settings
//! - Adventure loading from JSON and graph snapshots in `MessagePack`
//! - [`logging::init`] - The `tracing` subscriber for the CLI

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adventure;
pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod serialize;
pub mod session;

pub use adventure::{export_adventure, load_adventure, parse_adventure};
pub use config::GameConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::{Session, TurnReport};
