use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::hook::ChangeHook;

/// Per-instance column visibility. All configured keys start visible;
/// toggling one key never touches the others. The state lives and dies with
/// the owning browser instance — it is intentionally not persisted.
#[derive(Default)]
pub struct ColumnVisibility {
    flags: RefCell<BTreeMap<&'static str, bool>>,
    hook: ChangeHook,
}

impl ColumnVisibility {
    pub fn new(keys: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            flags: RefCell::new(keys.into_iter().map(|key| (key, true)).collect()),
            hook: ChangeHook::default(),
        }
    }

    pub fn set_on_change(&self, listener: impl Fn() + 'static) {
        self.hook.set(listener);
    }

    /// Flip visibility of `key`. Unknown keys are ignored.
    pub fn toggle(&self, key: &str) {
        let mut flags = self.flags.borrow_mut();
        match flags.get_mut(key) {
            Some(shown) => *shown = !*shown,
            None => {
                log::debug!("ignoring toggle for unknown column {key:?}");
                return;
            }
        }
        drop(flags);
        self.hook.notify();
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.flags.borrow().get(key).copied().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_columns_start_visible() {
        let columns = ColumnVisibility::new(["name", "status"]);
        assert!(columns.is_visible("name"));
        assert!(columns.is_visible("status"));
    }

    #[test]
    fn toggle_flips_only_the_target_key() {
        let columns = ColumnVisibility::new(["name", "status", "phone"]);
        columns.toggle("status");
        assert!(columns.is_visible("name"));
        assert!(!columns.is_visible("status"));
        assert!(columns.is_visible("phone"));
        columns.toggle("status");
        assert!(columns.is_visible("status"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let columns = ColumnVisibility::new(["name"]);
        columns.toggle("nope");
        assert!(columns.is_visible("name"));
    }
}
