//! Main browser component.
//!
//! ## Layout
//!
//! Header (title + breadcrumb), toolbar forms, status line, file list.
//! The preview modal overlays everything while an image is shown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use super::{Breadcrumb, FileList, PreviewModal, StatusMessage, Toolbar};
use crate::app::use_controller;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Directory browser view component.
///
/// Loads the root directory once when mounted.
#[component]
pub fn Browser() -> impl IntoView {
    let controller = use_controller();
    spawn_local(async move {
        controller.load_directory("").await;
    });

    view! {
        <div class=css::browser>
            <header class=css::header>
                <span class=css::title>
                    <span class=css::titleIcon><Icon icon=ic::STORAGE /></span>
                    <span>{APP_NAME}</span>
                </span>
                <Breadcrumb />
            </header>

            <Toolbar />
            <StatusMessage />
            <FileList />

            <PreviewModal />
        </div>
    }
}
