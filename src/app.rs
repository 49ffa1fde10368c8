//! Root application module.
//!
//! Contains the main App component, AppContext definition, BrowserState,
//! and application-level setup logic following Leptos conventions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::Browser;
use crate::config::{APP_NAME, MESSAGE_TIMEOUT_MS};
use crate::core::{BrowserView, Controller, HttpApi};
use crate::models::{DirectoryEntry, ImagePreview, Listing};
use crate::utils::dom;

// ============================================================================
// BrowserState
// ============================================================================

/// Directory state managed with Leptos signals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy (they're just handles to the underlying
/// reactive state).
#[derive(Clone, Copy)]
pub struct BrowserState {
    /// Server-confirmed path of the directory on screen.
    pub current_path: RwSignal<String>,
    /// Entries of that directory, in server order.
    pub entries: RwSignal<Vec<DirectoryEntry>>,
    /// Whether any listing has been received yet.
    pub loaded: RwSignal<bool>,
    /// Latest issued listing ticket.
    ticket: StoredValue<u64>,
}

impl BrowserState {
    /// Creates an empty state at the root, with nothing loaded.
    pub fn new() -> Self {
        Self {
            current_path: RwSignal::new(String::new()),
            entries: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(false),
            ticket: StoredValue::new(0),
        }
    }

    /// Display a listing confirmed by the server.
    pub fn apply(&self, listing: Listing) {
        self.current_path.set(listing.current);
        self.entries.set(listing.items);
        self.loaded.set(true);
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MessageSlot
// ============================================================================

/// Single-slot transient status message.
///
/// Showing a message replaces the pending timer, so an older message's
/// clear can never wipe a newer one early.
#[derive(Clone, Copy)]
pub struct MessageSlot {
    /// Message currently on screen.
    pub text: RwSignal<Option<String>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(None),
            timer: StoredValue::new_local(None),
        }
    }

    /// Show `text` and clear it after `MESSAGE_TIMEOUT_MS`.
    pub fn show(&self, text: String) {
        self.text.set(Some(text));

        let slot = self.text;
        let timeout = Timeout::new(MESSAGE_TIMEOUT_MS, move || slot.set(None));
        // Dropping the previous Timeout cancels it
        self.timer.set_value(Some(timeout));
    }
}

impl Default for MessageSlot {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using [`use_app`].
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Browser state**: current path, entries, request tickets
/// - **Message**: transient status line
/// - **Preview**: image modal, independent of navigation
#[derive(Clone, Copy)]
pub struct AppContext {
    pub browser: BrowserState,
    pub message: MessageSlot,
    pub preview: RwSignal<Option<ImagePreview>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            browser: BrowserState::new(),
            message: MessageSlot::new(),
            preview: RwSignal::new(None),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserView for AppContext {
    fn current_path(&self) -> String {
        self.browser.current_path.get_untracked()
    }

    fn show_listing(&self, listing: Listing) {
        self.browser.apply(listing);
    }

    fn notify(&self, text: String) {
        self.message.show(text);
    }

    fn confirm(&self, prompt: &str) -> bool {
        dom::confirm(prompt)
    }

    fn show_preview(&self, preview: ImagePreview) {
        self.preview.set(Some(preview));
    }

    fn hide_preview(&self) {
        self.preview.set(None);
    }

    fn next_ticket(&self) -> u64 {
        self.browser.ticket.update_value(|t| *t += 1);
        self.browser.ticket.get_value()
    }

    fn latest_ticket(&self) -> u64 {
        self.browser.ticket.get_value()
    }
}

/// Controller wired to the real backend and the reactive context.
pub type AppController = Controller<HttpApi, AppContext>;

/// Get the [`AppContext`] provided by [`App`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext must be provided")
}

/// Get the [`AppController`] provided by [`App`].
pub fn use_controller() -> AppController {
    use_context::<AppController>().expect("AppController must be provided")
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext and AppController
/// - Renders the directory browser
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    provide_context(AppController::new(HttpApi, ctx));

    dom::set_title(APP_NAME);

    view! { <Browser /> }
}
