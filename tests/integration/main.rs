//! End-to-end tests
//!
//! Loads adventure documents and plays them through a [`Session`], the way
//! the CLI does.
//!
//! [`Session`]: terminus_runtime::Session

mod adventure;

/// A small adventure exercising every command rule.
pub const GYM: &str = r#"{
    "start": "route",
    "screens": [
        {
            "id": "route",
            "body": ["Route 1. A gym stands to the north."],
            "commands": [
                { "command": "search grass", "type": "printMessage",
                  "printMessage": ["You find a Boulder Badge!"],
                  "itemsGiven": ["Boulder Badge"], "limitItemsGiven": true },
                { "command": "go north", "type": "navigate", "targetScreenId": "gym",
                  "itemsRequired": ["boulder badge"] }
            ]
        },
        {
            "id": "gym",
            "body": "The leader wants a Boulder Badge in trade for the Golden Staff.",
            "commands": [
                { "command": "trade", "type": "printMessage",
                  "printMessage": ["Done."],
                  "itemsTaken": ["Boulder Badge"], "itemsGiven": ["Golden Staff"] },
                { "command": "go south", "type": "navigate", "targetScreenId": "route" }
            ]
        }
    ]
}"#;
