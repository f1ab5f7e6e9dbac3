//! Screen graph with immutable snapshots.
//!
//! The `ScreenGraph` holds every screen of an adventure. It uses persistent
//! maps, so cloning is cheap and every mutation returns a new graph while the
//! old one stays valid.

use im::OrdMap;
use terminus_foundation::{
    Command, CommandAction, CommandId, Error, ErrorContext, ErrorKind, Limits, Result, Screen,
    ScreenId, validate_body, validate_command_text, validate_item_list,
};
use terminus_text::commands_equivalent;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::lookup::ScreenLookup;
use crate::path::{AddedPath, NewPath, PathTarget};

/// Immutable snapshot of an adventure's screens.
///
/// The first screen added becomes the start screen unless one is set
/// explicitly.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenGraph {
    /// Screens keyed by id.
    screens: OrdMap<ScreenId, Screen>,
    /// Where a new game begins.
    start: Option<ScreenId>,
    /// Authoring limits. Not persisted; set by the loader.
    #[cfg_attr(feature = "serde", serde(skip))]
    limits: Limits,
}

impl ScreenGraph {
    /// Creates an empty graph with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set authoring limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the authoring limits.
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the number of screens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Returns true if the graph has no screens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Returns the start screen id.
    #[must_use]
    pub fn start(&self) -> Option<&ScreenId> {
        self.start.as_ref()
    }

    /// Returns the screen with the given id.
    #[must_use]
    pub fn screen(&self, id: &ScreenId) -> Option<&Screen> {
        self.screens.get(id)
    }

    /// Iterates over all screens in id order.
    pub fn screens(&self) -> impl Iterator<Item = &Screen> {
        self.screens.values()
    }

    /// Sets the start screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen does not exist.
    pub fn set_start(&self, id: ScreenId) -> Result<ScreenGraph> {
        if !self.screens.contains_key(&id) {
            return Err(Error::screen_not_found(id));
        }
        Ok(ScreenGraph {
            start: Some(id),
            ..self.clone()
        })
    }

    /// Adds a screen with a fresh id and no commands.
    ///
    /// Returns a new graph and the new screen's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the body fails validation.
    pub fn add_screen(&self, body: Vec<String>) -> Result<(ScreenGraph, ScreenId)> {
        validate_body(&body, &self.limits)?;
        let id = ScreenId::generate();
        let graph = self.with_screen(Screen::new(id.clone(), body));
        debug!(screen = %id, "added screen");
        Ok((graph, id))
    }

    /// Inserts a fully formed screen, such as one read from a file.
    ///
    /// Navigation targets are not checked here, since a screen may point at
    /// one inserted later; see [`ScreenGraph::validate_links`].
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken, the body or any command fails
    /// validation, or two commands on the screen are equivalent.
    pub fn insert_screen(&self, screen: Screen) -> Result<ScreenGraph> {
        if self.screens.contains_key(&screen.id) {
            return Err(Error::new(ErrorKind::DuplicateScreen(screen.id)));
        }

        let in_screen = |e: Error| e.with_context(ErrorContext::new().with_screen(screen.id.clone()));

        validate_body(&screen.body, &self.limits).map_err(in_screen)?;
        for (index, command) in screen.commands.iter().enumerate() {
            self.validate_command(command).map_err(in_screen)?;
            if screen.commands[..index]
                .iter()
                .any(|earlier| commands_equivalent(&earlier.text, &command.text))
            {
                return Err(Error::duplicate_command(
                    screen.id.clone(),
                    command.text.clone(),
                ));
            }
        }

        Ok(self.with_screen(screen))
    }

    /// Appends a command to `from`, creating the target screen if asked.
    ///
    /// Returns a new graph and the ids that were created.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` or an existing target is missing, the
    /// screen already has an equivalent command, or any text fails
    /// validation.
    pub fn add_path(&self, from: &ScreenId, path: NewPath) -> Result<(ScreenGraph, AddedPath)> {
        let screen = self
            .screens
            .get(from)
            .ok_or_else(|| Error::screen_not_found(from.clone()))?;

        if screen
            .commands
            .iter()
            .any(|existing| commands_equivalent(&existing.text, &path.command))
        {
            return Err(Error::duplicate_command(from.clone(), path.command));
        }

        let mut screens = self.screens.clone();
        let (action, created) = match &path.target {
            PathTarget::NewScreen { body } => {
                validate_body(body, &self.limits)?;
                let id = ScreenId::generate();
                screens.insert(id.clone(), Screen::new(id.clone(), body.clone()));
                (CommandAction::Navigate { target: id.clone() }, Some(id))
            }
            PathTarget::Existing(target) => {
                if !screens.contains_key(target) {
                    return Err(Error::screen_not_found(target.clone()));
                }
                (
                    CommandAction::Navigate {
                        target: target.clone(),
                    },
                    None,
                )
            }
            PathTarget::Message(lines) => (
                CommandAction::PrintMessage {
                    lines: lines.clone(),
                },
                None,
            ),
        };

        let command_id = CommandId::generate();
        let command = path.into_command(command_id.clone(), action);
        self.validate_command(&command)
            .map_err(|e| e.with_context(ErrorContext::new().with_screen(from.clone())))?;

        let mut updated = screen.clone();
        updated.commands.push(command);
        screens.insert(from.clone(), updated);

        debug!(
            screen = %from,
            command = %command_id,
            created = created.is_some(),
            "added path"
        );

        Ok((
            ScreenGraph {
                screens,
                ..self.clone()
            },
            AddedPath {
                command: command_id,
                screen: created,
            },
        ))
    }

    /// Lists `(screen, target)` pairs whose navigation target does not exist.
    #[must_use]
    pub fn dangling_targets(&self) -> Vec<(ScreenId, ScreenId)> {
        self.screens
            .values()
            .flat_map(|screen| {
                screen
                    .targets()
                    .filter(|target| !self.screens.contains_key(*target))
                    .map(|target| (screen.id.clone(), target.clone()))
            })
            .collect()
    }

    /// Checks that every navigation target and the start screen exist.
    ///
    /// # Errors
    ///
    /// Returns the first dangling reference found.
    pub fn validate_links(&self) -> Result<()> {
        if let Some(start) = &self.start {
            if !self.screens.contains_key(start) {
                return Err(Error::screen_not_found(start.clone())
                    .with_context(ErrorContext::new().with_frame("start screen")));
            }
        }
        match self.dangling_targets().into_iter().next() {
            Some((screen, target)) => Err(Error::screen_not_found(target)
                .with_context(ErrorContext::new().with_screen(screen))),
            None => Ok(()),
        }
    }

    fn with_screen(&self, screen: Screen) -> ScreenGraph {
        let mut screens = self.screens.clone();
        let start = self.start.clone().or_else(|| Some(screen.id.clone()));
        screens.insert(screen.id.clone(), screen);
        ScreenGraph {
            screens,
            start,
            ..self.clone()
        }
    }

    fn validate_command(&self, command: &Command) -> Result<()> {
        let limits = &self.limits;
        validate_command_text(&command.text, limits)?;
        validate_item_list(&command.items_required, limits)?;
        validate_item_list(&command.items_taken, limits)?;
        validate_item_list(&command.items_given, limits)?;
        if let CommandAction::PrintMessage { lines } = &command.action {
            validate_body(lines, limits)?;
        }
        Ok(())
    }
}

impl ScreenLookup for ScreenGraph {
    fn get_screen(&self, id: &ScreenId) -> Option<&Screen> {
        self.screen(id)
    }
}
