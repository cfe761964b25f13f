//! Open/closed bookkeeping for the "how it works" dialogs.

use std::collections::BTreeSet;

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogSet {
    open: BTreeSet<String>,
}

impl DialogSet {
    /// Open `name`. Returns `false` if it was already open.
    pub fn show(&mut self, name: &str) -> bool {
        let changed = self.open.insert(name.to_string());
        debug!(dialog = name, changed, "dialog shown");
        changed
    }

    /// Close `name`. Returns `false` if it was not open.
    pub fn hide(&mut self, name: &str) -> bool {
        let changed = self.open.remove(name);
        debug!(dialog = name, changed, "dialog hidden");
        changed
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_and_hide_are_idempotent() {
        let mut dialogs = DialogSet::default();
        assert!(dialogs.show("sensors"));
        assert!(!dialogs.show("sensors"));
        assert!(dialogs.is_open("sensors"));
        assert!(dialogs.hide("sensors"));
        assert!(!dialogs.hide("sensors"));
        assert!(!dialogs.is_open("sensors"));
    }
}
