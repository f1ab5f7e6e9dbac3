//! Command application engine for Terminus.
//!
//! This crate provides:
//! - [`codec`] - Encoding [`ClientGameState`] to and from URL-safe tokens
//! - [`effect`] - Applying a command's item rules to a state token
//! - [`turn`] - Resolving typed input on a screen into a [`TurnOutcome`]
//!
//! Every operation is a pure function of its inputs. Game state lives in the
//! caller's token, never in the engine.
//!
//! [`ClientGameState`]: terminus_foundation::ClientGameState

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod effect;
pub mod error;
pub mod turn;

pub use codec::{decode, encode};
pub use effect::{AppliedEffects, CommandEffect, apply_command, apply_effects, effect_on};
pub use error::{EffectError, StateDecodeError};
pub use turn::{Messages, TurnError, TurnOutcome, new_game_token, resolve_turn};
