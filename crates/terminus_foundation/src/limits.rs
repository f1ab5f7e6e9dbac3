//! Size limits enforced at input boundaries.

/// Bounds applied when authoring screens and commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum display width (in characters) of a body or message line.
    pub max_body_line_width: usize,

    /// Maximum length (in characters, after trimming) of an item name.
    pub max_item_name_len: usize,

    /// Maximum length (in characters, after trimming) of a command text.
    pub max_command_len: usize,

    /// Maximum number of entries in a single item list of a command.
    pub max_items_per_list: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_body_line_width: 80,
            max_item_name_len: 50,
            max_command_len: 100,
            max_items_per_list: 20,
        }
    }
}

impl Limits {
    /// Builder method to set the body line width.
    #[must_use]
    pub fn with_body_line_width(mut self, width: usize) -> Self {
        self.max_body_line_width = width;
        self
    }

    /// Builder method to set the item name length.
    #[must_use]
    pub fn with_item_name_len(mut self, len: usize) -> Self {
        self.max_item_name_len = len;
        self
    }

    /// Builder method to set the command text length.
    #[must_use]
    pub fn with_command_len(mut self, len: usize) -> Self {
        self.max_command_len = len;
        self
    }

    /// Builder method to set the item list size.
    #[must_use]
    pub fn with_items_per_list(mut self, count: usize) -> Self {
        self.max_items_per_list = count;
        self
    }
}
