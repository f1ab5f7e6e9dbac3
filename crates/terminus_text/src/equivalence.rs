//! Item name equivalence.
//!
//! Two item names are the same item when, after trimming, they differ only
//! by case or compatibility form. Accents and internal spacing are kept.

use crate::normalize::collation_key;

fn item_key(name: &str) -> String {
    collation_key(name.trim())
}

/// Returns true if two item names refer to the same item.
#[must_use]
pub fn items_equivalent(a: &str, b: &str) -> bool {
    item_key(a) == item_key(b)
}

/// Returns the index of the first held item equivalent to `name`.
pub fn position_of_equivalent<'a, I>(items: I, name: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a String>,
{
    let key = item_key(name);
    items.into_iter().position(|held| item_key(held) == key)
}

/// Returns true if any held item is equivalent to `name`.
pub fn contains_equivalent<'a, I>(items: I, name: &str) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    position_of_equivalent(items, name).is_some()
}
