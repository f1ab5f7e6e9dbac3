//! Text comparison for player input and item names.
//!
//! # Architecture
//!
//! ```text
//! "  LOOK   Bone "
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NORMALIZER    │  → ["look", "bone"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command { text: "look bone", .. } on the screen
//! │ MATCHER         │
//! └─────────────────┘
//! ```
//!
//! Item names are compared by [`equivalence`], which trims and folds case but
//! keeps accents significant.
//!
//! # Modules
//!
//! - [`normalize`] - Case folding, whitespace collapsing, NFKC tokens
//! - [`matcher`] - Finding the command on a screen that equals typed input
//! - [`equivalence`] - Item name comparison and inventory lookup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod equivalence;
pub mod matcher;
pub mod normalize;

pub use equivalence::{contains_equivalent, items_equivalent, position_of_equivalent};
pub use matcher::{commands_equivalent, find_equivalent_command};
pub use normalize::{collation_key, normalize_for_comparison};
