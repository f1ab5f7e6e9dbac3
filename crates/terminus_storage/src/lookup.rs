//! Read-only screen lookup.

use std::collections::HashMap;

use terminus_foundation::{Screen, ScreenId};

/// Resolves screen ids to screens.
///
/// Turn resolution only ever reads through this trait, so any backing store
/// can serve it.
pub trait ScreenLookup {
    /// Returns the screen with the given id, if it exists.
    fn get_screen(&self, id: &ScreenId) -> Option<&Screen>;
}

impl ScreenLookup for HashMap<ScreenId, Screen> {
    fn get_screen(&self, id: &ScreenId) -> Option<&Screen> {
        self.get(id)
    }
}

impl<T: ScreenLookup + ?Sized> ScreenLookup for &T {
    fn get_screen(&self, id: &ScreenId) -> Option<&Screen> {
        (**self).get_screen(id)
    }
}
