use std::cell::RefCell;
use std::rc::Rc;

/// Re-render hook shared by the stateful browser parts.
///
/// The UI layer registers a single callback; every state mutation fires it.
/// Unset by default so the engine stays usable headless (tests).
#[derive(Default)]
pub(crate) struct ChangeHook {
    listener: RefCell<Option<Rc<dyn Fn()>>>,
}

impl ChangeHook {
    pub fn set(&self, listener: impl Fn() + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn notify(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}
