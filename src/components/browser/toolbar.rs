//! Toolbar with the create-folder and upload forms.
//!
//! Both forms submit for the directory currently displayed and reset
//! themselves only when the backend accepted the request.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::use_controller;
use crate::components::icons as ic;
use crate::config::fields;

stylance::import_crate_style!(css, "src/components/browser/toolbar.module.css");

/// Toolbar component.
#[component]
pub fn Toolbar() -> impl IntoView {
    view! {
        <div class=css::toolbar>
            <CreateFolderForm />
            <UploadForm />
        </div>
    }
}

#[component]
fn CreateFolderForm() -> impl IntoView {
    let controller = use_controller();
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = name_ref
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();

        spawn_local(async move {
            if controller.create_folder(&name).await
                && let Some(form) = form_ref.get_untracked()
            {
                form.reset();
            }
        });
    };

    view! {
        <form class=css::form node_ref=form_ref on:submit=on_submit>
            <input
                class=css::input
                type="text"
                name=fields::FOLDER
                placeholder="New folder name"
                aria-label="New folder name"
                node_ref=name_ref
            />
            <button class=css::button type="submit">
                <Icon icon=ic::NEW_FOLDER />
                <span>"Create folder"</span>
            </button>
        </form>
    }
}

#[component]
fn UploadForm() -> impl IntoView {
    let controller = use_controller();
    let form_ref = NodeRef::<html::Form>::new();
    let file_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let file = file_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        spawn_local(async move {
            if controller.upload_file(file.as_ref()).await
                && let Some(form) = form_ref.get_untracked()
            {
                form.reset();
            }
        });
    };

    view! {
        <form class=css::form node_ref=form_ref on:submit=on_submit>
            <input
                class=css::fileInput
                type="file"
                name=fields::FILE
                aria-label="File to upload"
                node_ref=file_ref
            />
            <button class=css::button type="submit">
                <Icon icon=ic::UPLOAD />
                <span>"Upload"</span>
            </button>
        </form>
    }
}
