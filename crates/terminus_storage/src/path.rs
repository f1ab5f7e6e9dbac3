//! Authoring requests for new paths between screens.

use terminus_foundation::{Command, CommandAction, CommandId, ScreenId};

/// Where a new command leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathTarget {
    /// Create a fresh screen with this body and navigate to it.
    NewScreen {
        /// Body lines of the new screen.
        body: Vec<String>,
    },
    /// Navigate to a screen that already exists.
    Existing(ScreenId),
    /// Print these lines and stay put.
    Message(Vec<String>),
}

/// A command to append to a screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPath {
    /// The command text as authored.
    pub command: String,
    /// Where the command leads.
    pub target: PathTarget,
    /// Items removed as a cost.
    pub items_taken: Vec<String>,
    /// Items added as a reward.
    pub items_given: Vec<String>,
    /// Whether a given item already held is skipped.
    pub limit_items_given: bool,
    /// Items that must be held.
    pub items_required: Vec<String>,
}

impl NewPath {
    /// Creates a path to a brand new screen.
    #[must_use]
    pub fn to_new_screen(command: impl Into<String>, body: Vec<String>) -> Self {
        Self::new(command, PathTarget::NewScreen { body })
    }

    /// Creates a path to an existing screen.
    #[must_use]
    pub fn to_existing(command: impl Into<String>, target: ScreenId) -> Self {
        Self::new(command, PathTarget::Existing(target))
    }

    /// Creates a command that prints a message.
    #[must_use]
    pub fn message(command: impl Into<String>, lines: Vec<String>) -> Self {
        Self::new(command, PathTarget::Message(lines))
    }

    fn new(command: impl Into<String>, target: PathTarget) -> Self {
        Self {
            command: command.into(),
            target,
            items_taken: Vec::new(),
            items_given: Vec::new(),
            limit_items_given: false,
            items_required: Vec::new(),
        }
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

    /// Builder method to limit given items to one held copy.
    #[must_use]
    pub fn limit_given(mut self, limit: bool) -> Self {
        self.limit_items_given = limit;
        self
    }

    /// Builds the command once the target screen id is known.
    pub(crate) fn into_command(self, id: CommandId, action: CommandAction) -> Command {
        Command {
            id,
            text: self.command,
            items_taken: self.items_taken,
            items_given: self.items_given,
            limit_items_given: self.limit_items_given,
            items_required: self.items_required,
            action,
        }
    }
}

/// Ids produced by adding a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddedPath {
    /// The new command.
    pub command: CommandId,
    /// The screen created for [`PathTarget::NewScreen`], if any.
    pub screen: Option<ScreenId>,
}
