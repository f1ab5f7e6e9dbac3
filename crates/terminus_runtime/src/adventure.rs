//! Adventure files.
//!
//! An adventure is a JSON document listing every screen and its commands:
//!
//! ```json
//! {
//!   "start": "kennel",
//!   "screens": [
//!     {
//!       "id": "kennel",
//!       "body": "A dog sleeps next to a bone.",
//!       "commands": [
//!         { "command": "look bone", "type": "printMessage",
//!           "printMessage": ["It has been chewed."] },
//!         { "command": "leave", "type": "navigate", "targetScreenId": "yard",
//!           "itemsRequired": ["Leash"] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! A body or message may be a list of lines or a single string; strings are
//! word-wrapped to the configured width.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use terminus_foundation::{
    Command, CommandAction, CommandId, Error, ErrorContext, Limits, Result, Screen, ScreenId,
    wrap_text,
};
use terminus_storage::ScreenGraph;

#[derive(Debug, Serialize, Deserialize)]
struct AdventureDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    screens: Vec<ScreenDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ScreenDoc {
    id: String,
    body: TextDoc,
    #[serde(default)]
    commands: Vec<CommandDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommandDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items_taken: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items_given: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    limit_items_given: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items_required: Vec<String>,
    #[serde(flatten)]
    action: ActionDoc,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ActionDoc {
    Navigate {
        #[serde(rename = "targetScreenId")]
        target_screen_id: String,
    },
    PrintMessage {
        #[serde(rename = "printMessage")]
        print_message: TextDoc,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum TextDoc {
    Lines(Vec<String>),
    Prose(String),
}

impl TextDoc {
    fn into_lines(self, limits: &Limits) -> Vec<String> {
        match self {
            Self::Lines(lines) => lines,
            Self::Prose(text) => wrap_text(&text, limits.max_body_line_width),
        }
    }
}

impl CommandDoc {
    fn into_command(self, limits: &Limits) -> Command {
        let action = match self.action {
            ActionDoc::Navigate { target_screen_id } => CommandAction::Navigate {
                target: ScreenId::new(target_screen_id),
            },
            ActionDoc::PrintMessage { print_message } => CommandAction::PrintMessage {
                lines: print_message.into_lines(limits),
            },
        };
        Command {
            id: self.id.map_or_else(CommandId::generate, CommandId::new),
            text: self.command,
            items_taken: self.items_taken,
            items_given: self.items_given,
            limit_items_given: self.limit_items_given,
            items_required: self.items_required,
            action,
        }
    }

    fn from_command(command: &Command) -> Self {
        let action = match &command.action {
            CommandAction::Navigate { target } => ActionDoc::Navigate {
                target_screen_id: target.to_string(),
            },
            CommandAction::PrintMessage { lines } => ActionDoc::PrintMessage {
                print_message: TextDoc::Lines(lines.clone()),
            },
        };
        Self {
            id: Some(command.id.to_string()),
            command: command.text.clone(),
            items_taken: command.items_taken.clone(),
            items_given: command.items_given.clone(),
            limit_items_given: command.limit_items_given,
            items_required: command.items_required.clone(),
            action,
        }
    }
}

/// Parses an adventure document into a validated screen graph.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, any screen or command fails
/// validation, or a navigation target or the start screen does not exist.
pub fn parse_adventure(json: &str, limits: &Limits) -> Result<ScreenGraph> {
    let doc: AdventureDoc =
        serde_json::from_str(json).map_err(|e| Error::serialization(e.to_string()))?;

    let mut graph = ScreenGraph::new().with_limits(limits.clone());
    for screen_doc in doc.screens {
        let mut screen = Screen::new(
            ScreenId::new(screen_doc.id),
            screen_doc.body.into_lines(limits),
        );
        screen.commands = screen_doc
            .commands
            .into_iter()
            .map(|c| c.into_command(limits))
            .collect();
        graph = graph.insert_screen(screen)?;
    }

    if let Some(start) = doc.start {
        graph = graph.set_start(ScreenId::new(start))?;
    }
    graph.validate_links()?;

    tracing::debug!(screens = graph.len(), "parsed adventure");
    Ok(graph)
}

/// Loads an adventure file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse; the error
/// context names the file.
pub fn load_adventure<P: AsRef<Path>>(path: P, limits: &Limits) -> Result<ScreenGraph> {
    let path = path.as_ref();
    let in_file = |e: Error| {
        let context = e.context.clone().unwrap_or_default();
        e.with_context(context.with_source(path.display().to_string()))
    };

    let json = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read '{}': {e}", path.display())))?;
    parse_adventure(&json, limits).map_err(in_file)
}

/// Renders a screen graph as an adventure document.
///
/// Screens are written in id order with their commands in creation order.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn export_adventure(graph: &ScreenGraph) -> Result<String> {
    let doc = AdventureDoc {
        start: graph.start().map(ToString::to_string),
        screens: graph
            .screens()
            .map(|screen| ScreenDoc {
                id: screen.id.to_string(),
                body: TextDoc::Lines(screen.body.clone()),
                commands: screen.commands.iter().map(CommandDoc::from_command).collect(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc).map_err(|e| {
        Error::serialization(e.to_string())
            .with_context(ErrorContext::new().with_frame("exporting adventure"))
    })
}
