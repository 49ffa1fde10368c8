//! Image preview modal.
//!
//! Rendered only while a preview is set, so closing it also drops the
//! image source. A click on the backdrop closes it; clicks inside the
//! dialog do not.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{use_app, use_controller};
use crate::components::icons as ic;
use crate::models::ImagePreview;

stylance::import_crate_style!(css, "src/components/browser/preview.module.css");

#[component]
pub fn PreviewModal() -> impl IntoView {
    let preview = use_app().preview;

    move || {
        preview
            .get()
            .map(|preview| view! { <PreviewDialog preview=preview /> })
    }
}

#[component]
fn PreviewDialog(preview: ImagePreview) -> impl IntoView {
    let controller = use_controller();
    let ImagePreview { src, caption } = preview;
    let alt = caption.clone();

    view! {
        <div class=css::backdrop on:click=move |_| controller.close_preview()>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <button
                    class=css::close
                    title="Close preview"
                    on:click=move |_| controller.close_preview()
                >
                    <Icon icon=ic::CLOSE />
                </button>
                <img class=css::image src=src alt=alt />
                <p class=css::caption>{caption}</p>
            </div>
        </div>
    }
}
