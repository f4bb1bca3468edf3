use browser::Notices;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// App-wide outcome notifications. Browser controllers publish through the
/// [`Notices`] port; the banner component renders the latest one until it is
/// dismissed or replaced.
#[derive(Clone)]
pub struct NoticeHub {
    current: RwSignal<Option<(NoticeLevel, String)>>,
}

impl NoticeHub {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn publish(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success => log::info!("{message}"),
            NoticeLevel::Error => log::error!("{message}"),
        }
        self.current.set(Some((level, message.to_string())));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Signal<Option<(NoticeLevel, String)>> {
        self.current.into()
    }
}

impl Default for NoticeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl Notices for NoticeHub {
    fn success(&self, message: &str) {
        self.publish(NoticeLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.publish(NoticeLevel::Error, message);
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let hub = use_context::<NoticeHub>().expect("NoticeHub not found in context");
    let current = hub.current();

    view! {
        {move || current.get().map(|(level, message)| {
            let hub = hub.clone();
            let (background, border, color) = match level {
                NoticeLevel::Success => ("#f0fff4", "#9ae6b4", "#22543d"),
                NoticeLevel::Error => ("var(--color-error-50, #fff5f5)", "#feb2b2", "#742a2a"),
            };
            view! {
                <div style=format!(
                    "margin: 12px 20px; padding: 10px 14px; background: {background}; border: 1px solid {border}; color: {color}; border-radius: 8px; display: flex; justify-content: space-between; align-items: center;"
                )>
                    <span>{message}</span>
                    <button
                        style="background: none; border: none; cursor: pointer; font-size: 16px; color: inherit;"
                        on:click=move |_| hub.dismiss()
                        title="Dismiss"
                    >
                        "\u{00d7}"
                    </button>
                </div>
            }
        })}
    }
}
