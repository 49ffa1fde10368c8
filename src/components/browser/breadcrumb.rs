//! Breadcrumb component.
//!
//! Displays `/` + the current path with clickable ancestor segments.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{use_app, use_controller};
use crate::utils::path::{Crumb, breadcrumb_text, breadcrumbs};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Breadcrumb of the directory currently displayed.
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_app();
    let current_path = ctx.browser.current_path;

    view! {
        <nav
            class=css::breadcrumb
            aria-label="Current folder"
            title=move || breadcrumb_text(&current_path.get())
        >
            {move || {
                breadcrumbs(&current_path.get())
                    .into_iter()
                    .map(|crumb| {
                        view! {
                            <>
                                {crumb.separated.then(|| view! {
                                    <span class=css::separator>"/"</span>
                                })}
                                <CrumbSegment crumb=crumb />
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// One segment; clickable unless it is the current directory.
#[component]
fn CrumbSegment(crumb: Crumb) -> impl IntoView {
    let controller = use_controller();
    let Crumb { label, target, .. } = crumb;

    match target {
        Some(target) => view! {
            <button
                class=css::segment
                on:click=move |_| {
                    let target = target.clone();
                    spawn_local(async move {
                        controller.navigate(&target).await;
                    });
                }
            >
                {label}
            </button>
        }
        .into_any(),
        None => view! {
            <span class=format!("{} {}", css::segment, css::segmentCurrent)>{label}</span>
        }
        .into_any(),
    }
}
