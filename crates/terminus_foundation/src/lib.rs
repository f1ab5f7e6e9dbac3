//! Core types, identifiers, validation, and errors for Terminus.
//!
//! This crate provides:
//! - [`Screen`] and [`Command`] - Nodes and edges of the adventure graph
//! - [`ClientGameState`] - The player's client-held inventory
//! - [`ScreenId`] / [`CommandId`] - Opaque identifiers
//! - [`Limits`] and the `validate_*` functions - Input boundary checks
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod limits;
pub mod screen;
pub mod state;
pub mod validate;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::{CommandId, ScreenId};
pub use limits::Limits;
pub use screen::{Command, CommandAction, Screen};
pub use state::{ClientGameState, Inventory};
pub use validate::{
    validate_body, validate_command_text, validate_item_list, validate_item_name, wrap_text,
};
