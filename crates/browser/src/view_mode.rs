use std::cell::RefCell;

use crate::hook::ChangeHook;

/// Which sub-view the screen is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode<R> {
    List,
    Create,
    Edit(R),
    /// Read-only: the form gets the record but must not mutate anything.
    View(R),
}

/// Coordinates the list ↔ form toggle for one browser instance.
///
/// Cancel always returns to the list with no side effect. A successful save
/// also returns to the list, but the caller owes the controller a reload —
/// [`ViewModeSwitch::saved`] only performs the mode transition.
pub struct ViewModeSwitch<R> {
    mode: RefCell<ViewMode<R>>,
    hook: ChangeHook,
}

impl<R: Clone> ViewModeSwitch<R> {
    pub fn new() -> Self {
        Self {
            mode: RefCell::new(ViewMode::List),
            hook: ChangeHook::default(),
        }
    }

    pub fn set_on_change(&self, listener: impl Fn() + 'static) {
        self.hook.set(listener);
    }

    pub fn current(&self) -> ViewMode<R> {
        self.mode.borrow().clone()
    }

    pub fn is_list(&self) -> bool {
        matches!(*self.mode.borrow(), ViewMode::List)
    }

    /// Read-only contract flag: while this is true the form collaborator
    /// must not invoke any field-mutation callback.
    pub fn is_read_only(&self) -> bool {
        matches!(*self.mode.borrow(), ViewMode::View(_))
    }

    pub fn open_create(&self) {
        self.transition(ViewMode::Create);
    }

    pub fn open_edit(&self, record: R) {
        self.transition(ViewMode::Edit(record));
    }

    pub fn open_view(&self, record: R) {
        self.transition(ViewMode::View(record));
    }

    pub fn cancel(&self) {
        self.transition(ViewMode::List);
    }

    pub fn saved(&self) {
        self.transition(ViewMode::List);
    }

    fn transition(&self, next: ViewMode<R>) {
        *self.mode.borrow_mut() = next;
        self.hook.notify();
    }
}

impl<R: Clone> Default for ViewModeSwitch<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_list_mode() {
        let switch = ViewModeSwitch::<String>::new();
        assert!(switch.is_list());
        assert!(!switch.is_read_only());
    }

    #[test]
    fn row_actions_enter_the_matching_mode() {
        let switch = ViewModeSwitch::new();
        switch.open_edit("r1".to_string());
        assert_eq!(switch.current(), ViewMode::Edit("r1".to_string()));
        assert!(!switch.is_read_only());

        switch.open_view("r2".to_string());
        assert_eq!(switch.current(), ViewMode::View("r2".to_string()));
        assert!(switch.is_read_only());

        switch.open_create();
        assert_eq!(switch.current(), ViewMode::Create);
    }

    #[test]
    fn cancel_and_saved_both_return_to_list() {
        let switch = ViewModeSwitch::new();
        switch.open_create();
        switch.cancel();
        assert!(switch.is_list());

        switch.open_edit("r1".to_string());
        switch.saved();
        assert!(switch.is_list());
    }
}
