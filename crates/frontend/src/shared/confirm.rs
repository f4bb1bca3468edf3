use browser::ConfirmPrompt;

/// Destructive-action confirmation backed by the browser's native dialog.
pub struct WindowConfirm;

impl ConfirmPrompt for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(win) => win.confirm_with_message(message).unwrap_or(false),
            None => false,
        }
    }
}
