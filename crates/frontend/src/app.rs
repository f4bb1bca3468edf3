use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::notices::NoticeHub;

#[component]
pub fn App() -> impl IntoView {
    // One notice hub for the whole app; browser pages publish into it.
    provide_context(NoticeHub::new());

    view! {
        <AppRoutes />
    }
}
