//! Validation of authored content at input boundaries.
//!
//! These checks run when screens and commands are created. The matching and
//! effect layers assume their inputs already passed here.

use crate::error::{Error, ErrorKind, Result};
use crate::limits::Limits;

/// Characters that may not appear in an item name.
const ITEM_SEPARATORS: &[char] = &[',', ';', '|'];

/// Validates a single item name.
///
/// # Errors
///
/// Returns an error if the name is blank, too long, or contains control or
/// separator characters.
pub fn validate_item_name(name: &str, limits: &Limits) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_item_name(name, "must not be blank"));
    }
    let len = trimmed.chars().count();
    if len > limits.max_item_name_len {
        return Err(Error::invalid_item_name(
            name,
            format!("{len} characters (max {})", limits.max_item_name_len),
        ));
    }
    if let Some(c) = trimmed
        .chars()
        .find(|c| c.is_control() || ITEM_SEPARATORS.contains(c))
    {
        return Err(Error::invalid_item_name(
            name,
            format!("contains forbidden character {c:?}"),
        ));
    }
    Ok(())
}

/// Validates every name in an item list, and the size of the list.
///
/// # Errors
///
/// Returns the first failing name, or an error if the list is too long.
pub fn validate_item_list(items: &[String], limits: &Limits) -> Result<()> {
    if items.len() > limits.max_items_per_list {
        return Err(Error::invalid_item_name(
            items.join(", "),
            format!(
                "{} items in one list (max {})",
                items.len(),
                limits.max_items_per_list
            ),
        ));
    }
    items
        .iter()
        .try_for_each(|item| validate_item_name(item, limits))
}

/// Validates the text of a command.
///
/// # Errors
///
/// Returns an error if the text is blank, too long, or contains control
/// characters.
pub fn validate_command_text(text: &str, limits: &Limits) -> Result<()> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_command_text(text, "must not be blank"));
    }
    let len = trimmed.chars().count();
    if len > limits.max_command_len {
        return Err(Error::invalid_command_text(
            text,
            format!("{len} characters (max {})", limits.max_command_len),
        ));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(Error::invalid_command_text(
            text,
            "contains control characters",
        ));
    }
    Ok(())
}

/// Validates a screen body or message: non-empty, every line within width.
///
/// # Errors
///
/// Returns an error for an empty body or the first line that is too wide.
pub fn validate_body(lines: &[String], limits: &Limits) -> Result<()> {
    if lines.is_empty() {
        return Err(Error::new(ErrorKind::InvalidScreenBody(
            "must have at least one line".to_string(),
        )));
    }
    for (index, line) in lines.iter().enumerate() {
        if line.contains(['\n', '\r']) {
            return Err(Error::new(ErrorKind::InvalidScreenBody(format!(
                "line {index} contains a line break"
            ))));
        }
        let width = line.chars().count();
        if width > limits.max_body_line_width {
            return Err(Error::new(ErrorKind::BodyLineTooWide {
                line: index,
                width,
                max: limits.max_body_line_width,
            }));
        }
    }
    Ok(())
}

/// Word-wraps prose into lines no wider than `width` characters.
///
/// Paragraph breaks in the input are kept as empty lines. Words wider than
/// `width` are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                let chunk_width = chunk.len();
                let needed = if current_width == 0 {
                    chunk_width
                } else {
                    current_width + 1 + chunk_width
                };

                if needed > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                if current_width > 0 {
                    current.push(' ');
                    current_width += 1;
                }
                current.extend(chunk);
                current_width += chunk_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
