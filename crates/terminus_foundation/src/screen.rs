//! Screens and the commands that connect them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::id::{CommandId, ScreenId};

/// What a command does once its item rules are satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommandAction {
    /// Move the player to another screen.
    Navigate {
        /// The destination screen.
        target: ScreenId,
    },
    /// Print a message and stay on the current screen.
    PrintMessage {
        /// Message lines, in display order.
        lines: Vec<String>,
    },
}

/// A player-typed trigger on a screen.
///
/// The command text is stored as authored; normalization only happens at
/// comparison time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    /// Command id, unique within its screen.
    pub id: CommandId,
    /// The command text as authored.
    pub text: String,
    /// Items removed from the inventory as a cost.
    pub items_taken: Vec<String>,
    /// Items added to the inventory as a reward.
    pub items_given: Vec<String>,
    /// When set, a given item already held is not added again.
    pub limit_items_given: bool,
    /// Items that must be held; they are not consumed.
    pub items_required: Vec<String>,
    /// The effect of the command.
    pub action: CommandAction,
}

impl Command {
    /// Creates a navigation command with no item rules.
    #[must_use]
    pub fn navigate(text: impl Into<String>, target: ScreenId) -> Self {
        Self::with_action(text, CommandAction::Navigate { target })
    }

    /// Creates a print-message command with no item rules.
    #[must_use]
    pub fn print_message(text: impl Into<String>, lines: Vec<String>) -> Self {
        Self::with_action(text, CommandAction::PrintMessage { lines })
    }

    fn with_action(text: impl Into<String>, action: CommandAction) -> Self {
        Self {
            id: CommandId::generate(),
            text: text.into(),
            items_taken: Vec::new(),
            items_given: Vec::new(),
            limit_items_given: false,
            items_required: Vec::new(),
            action,
        }
    }

    /// Builder method to set the command id.
    #[must_use]
    pub fn with_id(mut self, id: CommandId) -> Self {
        self.id = id;
        self
    }

    /// Builder method to set the items taken.
    #[must_use]
    pub fn taking<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items_taken = items.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the items given.
    #[must_use]
    pub fn giving<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items_given = items.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the items required.
    #[must_use]
    pub fn requiring<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items_required = items.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set whether given items are limited to one copy.
    #[must_use]
    pub fn limit_given(mut self, limit: bool) -> Self {
        self.limit_items_given = limit;
        self
    }

    /// Returns the navigation target, if this is a navigation command.
    #[must_use]
    pub fn target(&self) -> Option<&ScreenId> {
        match &self.action {
            CommandAction::Navigate { target } => Some(target),
            CommandAction::PrintMessage { .. } => None,
        }
    }
}

/// A node in the adventure graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Screen {
    /// Screen id.
    pub id: ScreenId,
    /// Display lines, in order.
    pub body: Vec<String>,
    /// Outgoing commands, in creation order.
    pub commands: Vec<Command>,
}

impl Screen {
    /// Creates a screen with no commands.
    #[must_use]
    pub fn new(id: ScreenId, body: Vec<String>) -> Self {
        Self {
            id,
            body,
            commands: Vec::new(),
        }
    }

    /// Returns the command with the given id.
    #[must_use]
    pub fn command(&self, id: &CommandId) -> Option<&Command> {
        self.commands.iter().find(|c| &c.id == id)
    }

    /// Iterates over the ids of screens this screen links to.
    pub fn targets(&self) -> impl Iterator<Item = &ScreenId> {
        self.commands.iter().filter_map(Command::target)
    }
}
