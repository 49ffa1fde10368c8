//! Transient status line.

use leptos::prelude::*;

use crate::app::use_app;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Shows the current transient message, if any.
#[component]
pub fn StatusMessage() -> impl IntoView {
    let text = use_app().message.text;

    view! {
        <div class=css::message role="status" aria-live="polite">
            {move || text.get()}
        </div>
    }
}
