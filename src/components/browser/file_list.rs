//! File list component.
//!
//! Draws the rows produced by [`build_rows`]: parent link first, then one
//! row per entry with its Open / Preview / Delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::{use_app, use_controller};
use crate::components::icons as ic;
use crate::core::{ListRow, RowAction, RowGlyph, build_rows};

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let browser = use_app().browser;

    let rows = Memo::new(move |_| {
        let current = browser.current_path.get();
        browser.entries.with(|entries| build_rows(&current, entries))
    });

    let is_empty = Signal::derive(move || {
        browser.loaded.get() && browser.entries.with(|entries| entries.is_empty())
    });

    view! {
        <div class=css::list role="list" aria-label="Folder contents">
            {move || {
                rows.get()
                    .into_iter()
                    .map(|row| view! { <FileRow row=row /> })
                    .collect_view()
            }}
            <Show when=move || is_empty.get()>
                <div class=css::empty>"This folder is empty"</div>
            </Show>
        </div>
    }
}

#[component]
fn FileRow(row: ListRow) -> impl IntoView {
    let ListRow {
        glyph,
        name,
        meta,
        actions,
    } = row;

    let name_class = match glyph {
        RowGlyph::Parent | RowGlyph::Folder => format!("{} {}", css::name, css::nameDir),
        RowGlyph::Image | RowGlyph::File => css::name.to_string(),
    };

    view! {
        <div class=css::item role="listitem">
            <div class=css::left>
                <span class=css::icon aria-hidden="true"><Icon icon=ic::glyph(glyph) /></span>
                <div class=css::info>
                    <div class=name_class>{name}</div>
                    <div class=css::meta>{meta}</div>
                </div>
            </div>
            <div class=css::actions>
                {actions
                    .into_iter()
                    .map(|action| view! { <RowControl action=action /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Button or link for one row action.
#[component]
fn RowControl(action: RowAction) -> impl IntoView {
    let controller = use_controller();
    let label = action.label();

    match action {
        RowAction::Navigate { path } => view! {
            <button
                class=css::action
                on:click=move |_| {
                    let path = path.clone();
                    spawn_local(async move {
                        controller.navigate(&path).await;
                    });
                }
            >
                <Icon icon=ic::CHEVRON_RIGHT />
                <span>{label}</span>
            </button>
        }
        .into_any(),
        RowAction::OpenRaw { url } => view! {
            <a class=css::action href=url target="_blank" rel="noopener">
                <Icon icon=ic::EXTERNAL_LINK />
                <span>{label}</span>
            </a>
        }
        .into_any(),
        RowAction::Preview { path, name } => view! {
            <button
                class=css::action
                on:click=move |_| controller.preview_image(&path, &name)
            >
                <Icon icon=ic::PREVIEW />
                <span>{label}</span>
            </button>
        }
        .into_any(),
        RowAction::Delete { path, is_dir } => view! {
            <button
                class=format!("{} {}", css::action, css::danger)
                on:click=move |_| {
                    let path = path.clone();
                    spawn_local(async move {
                        controller.delete_item(&path, is_dir).await;
                    });
                }
            >
                <Icon icon=ic::TRASH />
                <span>{label}</span>
            </button>
        }
        .into_any(),
    }
}
