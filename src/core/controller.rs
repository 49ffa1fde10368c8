//! Directory browser controller.
//!
//! [`Controller`] performs every user-triggered operation: loading and
//! navigating directories, creating folders, uploading, deleting, and the
//! image preview. It owns no state itself; the current path, the rendered
//! entries, the transient message and the modal live behind [`BrowserView`],
//! which the app implements with Leptos signals.
//!
//! ## Request ordering
//!
//! Each listing request takes a ticket from the view. When a response
//! arrives and a newer request has been issued in the meantime, the response
//! is dropped, so the last navigation always wins.

use leptos::logging::{log, warn};

use super::api::FileApi;
use super::error::ApiError;
use crate::config::messages;
use crate::models::{ImagePreview, Listing};
use crate::utils::url::open_url;

/// State sink and user prompt used by [`Controller`].
pub trait BrowserView {
    /// Directory currently displayed (`""` is the root).
    fn current_path(&self) -> String;

    /// Replace the displayed directory with a server-confirmed listing.
    fn show_listing(&self, listing: Listing);

    /// Show a transient status message, replacing any pending one.
    fn notify(&self, text: String);

    /// Ask the user a blocking yes/no question.
    fn confirm(&self, prompt: &str) -> bool;

    /// Open the preview modal.
    fn show_preview(&self, preview: ImagePreview);

    /// Close the preview modal.
    fn hide_preview(&self);

    /// Issue a new listing ticket, invalidating earlier ones.
    fn next_ticket(&self) -> u64;

    /// Most recently issued listing ticket.
    fn latest_ticket(&self) -> u64;
}

/// Confirmation prompt for deleting `path`.
pub fn delete_prompt(path: &str, is_dir: bool) -> String {
    let kind = if is_dir { "folder" } else { "file" };
    format!("Delete {}: {}?", kind, path)
}

/// Directory browser operations over a backend and a view.
#[derive(Clone, Copy, Debug)]
pub struct Controller<A, V> {
    api: A,
    view: V,
}

impl<A: FileApi, V: BrowserView> Controller<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Fetch and display the directory at `path`.
    ///
    /// On failure the current path and the displayed entries stay as they
    /// were and the error is shown as a transient message.
    pub async fn load_directory(&self, path: &str) {
        let ticket = self.view.next_ticket();
        let result = self.api.list(path).await;

        if ticket != self.view.latest_ticket() {
            log!("dropping stale listing for {:?}", path);
            return;
        }

        match result {
            Ok(listing) => self.view.show_listing(listing),
            Err(err) => {
                warn!("listing {:?} failed: {}", path, err);
                self.view.notify(err.user_message(messages::LOAD_FAILED));
            }
        }
    }

    /// Enter `path` (a subdirectory or the parent).
    pub async fn navigate(&self, path: &str) {
        self.load_directory(path).await;
    }

    /// Re-fetch the directory currently displayed.
    pub async fn reload(&self) {
        let path = self.view.current_path();
        self.load_directory(&path).await;
    }

    /// Create folder `name` in the current directory.
    ///
    /// Returns `true` when the folder was created, so the caller can reset
    /// its form.
    pub async fn create_folder(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            self.view.notify(messages::FOLDER_NAME_REQUIRED.to_string());
            return false;
        }

        let parent = self.view.current_path();
        let result = self.api.create_folder(&parent, name).await;
        self.finish_mutation(result, messages::FOLDER_CREATED, messages::CREATE_FAILED)
            .await
    }

    /// Upload `file` into the current directory.
    ///
    /// Returns `true` on success. `None` means nothing was selected.
    pub async fn upload_file(&self, file: Option<&A::Upload>) -> bool {
        let Some(file) = file else {
            self.view.notify(messages::NO_FILE_SELECTED.to_string());
            return false;
        };

        let parent = self.view.current_path();
        let result = self.api.upload(&parent, file).await;
        self.finish_mutation(result, messages::UPLOADED, messages::UPLOAD_FAILED)
            .await
    }

    /// Delete `path` after the user confirms.
    ///
    /// Declining sends no request. The directory is reloaded after the
    /// request whether or not the server accepted it.
    pub async fn delete_item(&self, path: &str, is_dir: bool) {
        if !self.view.confirm(&delete_prompt(path, is_dir)) {
            return;
        }

        match self.api.delete(path).await {
            Ok(()) => self.view.notify(messages::DELETED.to_string()),
            Err(err) => self.report(&err, messages::DELETE_FAILED),
        }
        self.reload().await;
    }

    /// Show `path` in the preview modal, captioned with `name`.
    pub fn preview_image(&self, path: &str, name: &str) {
        let current = self.view.current_path();
        self.view
            .show_preview(ImagePreview::new(open_url(path), name, &current));
    }

    /// Hide the preview modal.
    pub fn close_preview(&self) {
        self.view.hide_preview();
    }

    async fn finish_mutation(
        &self,
        result: Result<(), ApiError>,
        success: &str,
        fallback: &str,
    ) -> bool {
        match result {
            Ok(()) => {
                self.view.notify(success.to_string());
                self.reload().await;
                true
            }
            Err(err) => {
                self.report(&err, fallback);
                false
            }
        }
    }

    fn report(&self, err: &ApiError, fallback: &str) {
        warn!("{}: {}", fallback, err);
        self.view.notify(err.user_message(fallback));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use tokio::sync::oneshot;

    use super::*;
    use crate::models::DirectoryEntry;

    // =========================================================================
    // In-memory backend
    // =========================================================================

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List(String),
        CreateFolder { parent: String, name: String },
        Upload { parent: String, file: String },
        Delete(String),
    }

    #[derive(Default)]
    struct BackendState {
        calls: RefCell<Vec<Call>>,
        listings: RefCell<HashMap<String, Result<Listing, ApiError>>>,
        mutation_error: RefCell<Option<ApiError>>,
        gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    }

    #[derive(Clone, Default)]
    struct MockApi(Rc<BackendState>);

    impl MockApi {
        fn listing(&self, path: &str, result: Result<Listing, ApiError>) {
            self.0.listings.borrow_mut().insert(path.to_string(), result);
        }

        fn fail_mutations(&self, err: ApiError) {
            *self.0.mutation_error.borrow_mut() = Some(err);
        }

        /// Hold the listing for `path` until the returned sender fires.
        fn gate(&self, path: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.0.gates.borrow_mut().insert(path.to_string(), rx);
            tx
        }

        fn calls(&self) -> Vec<Call> {
            self.0.calls.borrow().clone()
        }

        fn mutation_result(&self) -> Result<(), ApiError> {
            match self.0.mutation_error.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    impl FileApi for MockApi {
        type Upload = String;

        async fn list(&self, path: &str) -> Result<Listing, ApiError> {
            self.0.calls.borrow_mut().push(Call::List(path.to_string()));
            let gate = self.0.gates.borrow_mut().remove(path);
            if let Some(rx) = gate {
                let _ = rx.await;
            }
            self.0
                .listings
                .borrow()
                .get(path)
                .cloned()
                .unwrap_or_else(|| {
                    Ok(Listing {
                        current: path.to_string(),
                        items: Vec::new(),
                    })
                })
        }

        async fn create_folder(&self, parent: &str, name: &str) -> Result<(), ApiError> {
            self.0.calls.borrow_mut().push(Call::CreateFolder {
                parent: parent.to_string(),
                name: name.to_string(),
            });
            self.mutation_result()
        }

        async fn upload(&self, parent: &str, file: &String) -> Result<(), ApiError> {
            self.0.calls.borrow_mut().push(Call::Upload {
                parent: parent.to_string(),
                file: file.clone(),
            });
            self.mutation_result()
        }

        async fn delete(&self, path: &str) -> Result<(), ApiError> {
            self.0.calls.borrow_mut().push(Call::Delete(path.to_string()));
            self.mutation_result()
        }
    }

    // =========================================================================
    // In-memory view
    // =========================================================================

    #[derive(Default)]
    struct ViewState {
        current_path: RefCell<String>,
        entries: RefCell<Vec<DirectoryEntry>>,
        messages: RefCell<Vec<String>>,
        prompts: RefCell<Vec<String>>,
        answer: Cell<bool>,
        preview: RefCell<Option<ImagePreview>>,
        ticket: Cell<u64>,
    }

    #[derive(Clone, Default)]
    struct MockView(Rc<ViewState>);

    impl MockView {
        fn at(path: &str) -> Self {
            let view = Self::default();
            *view.0.current_path.borrow_mut() = path.to_string();
            view
        }

        fn answer(&self, yes: bool) {
            self.0.answer.set(yes);
        }

        fn last_message(&self) -> Option<String> {
            self.0.messages.borrow().last().cloned()
        }

        fn path(&self) -> String {
            self.0.current_path.borrow().clone()
        }
    }

    impl BrowserView for MockView {
        fn current_path(&self) -> String {
            self.path()
        }

        fn show_listing(&self, listing: Listing) {
            *self.0.current_path.borrow_mut() = listing.current;
            *self.0.entries.borrow_mut() = listing.items;
        }

        fn notify(&self, text: String) {
            self.0.messages.borrow_mut().push(text);
        }

        fn confirm(&self, prompt: &str) -> bool {
            self.0.prompts.borrow_mut().push(prompt.to_string());
            self.0.answer.get()
        }

        fn show_preview(&self, preview: ImagePreview) {
            *self.0.preview.borrow_mut() = Some(preview);
        }

        fn hide_preview(&self) {
            *self.0.preview.borrow_mut() = None;
        }

        fn next_ticket(&self) -> u64 {
            self.0.ticket.set(self.0.ticket.get() + 1);
            self.0.ticket.get()
        }

        fn latest_ticket(&self) -> u64 {
            self.0.ticket.get()
        }
    }

    fn setup(path: &str) -> (MockApi, MockView, Controller<MockApi, MockView>) {
        let api = MockApi::default();
        let view = MockView::at(path);
        let controller = Controller::new(api.clone(), view.clone());
        (api, view, controller)
    }

    fn png(path: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            path: path.to_string(),
            is_dir: false,
            size: "10KB".to_string(),
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    #[tokio::test]
    async fn test_load_uses_server_path() {
        let (api, view, controller) = setup("");
        api.listing(
            "docs/img/",
            Ok(Listing {
                current: "docs/img".to_string(),
                items: vec![png("docs/img/a.png")],
            }),
        );

        controller.load_directory("docs/img/").await;

        assert_eq!(view.path(), "docs/img");
        assert_eq!(*view.0.entries.borrow(), vec![png("docs/img/a.png")]);
        assert_eq!(api.calls(), vec![Call::List("docs/img/".to_string())]);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_path() {
        let (api, view, controller) = setup("docs");
        *view.0.entries.borrow_mut() = vec![png("docs/a.png")];
        api.listing(
            "secret",
            Err(ApiError::Rejected {
                status: 403,
                message: "permission denied".to_string(),
            }),
        );

        controller.load_directory("secret").await;

        assert_eq!(view.last_message().as_deref(), Some("permission denied"));
        assert_eq!(view.path(), "docs");
        assert_eq!(*view.0.entries.borrow(), vec![png("docs/a.png")]);
    }

    #[tokio::test]
    async fn test_load_network_failure_uses_fallback() {
        let (api, view, controller) = setup("");
        api.listing("x", Err(ApiError::Network("Failed to fetch".to_string())));

        controller.navigate("x").await;

        assert_eq!(view.last_message().as_deref(), Some(messages::LOAD_FAILED));
        assert_eq!(view.path(), "");
    }

    #[tokio::test]
    async fn test_stale_listing_is_dropped() {
        let (api, view, controller) = setup("");
        let release = api.gate("slow");

        let slow = controller.navigate("slow");
        let fast = async {
            controller.navigate("fast").await;
            let _ = release.send(());
        };
        tokio::join!(slow, fast);

        assert_eq!(view.path(), "fast");
        assert_eq!(
            api.calls(),
            vec![Call::List("slow".to_string()), Call::List("fast".to_string())]
        );
    }

    #[tokio::test]
    async fn test_stale_failure_is_not_reported() {
        let (api, view, controller) = setup("");
        api.listing("slow", Err(ApiError::Network("reset".to_string())));
        let release = api.gate("slow");

        let slow = controller.navigate("slow");
        let fast = async {
            controller.navigate("fast").await;
            let _ = release.send(());
        };
        tokio::join!(slow, fast);

        assert_eq!(view.path(), "fast");
        assert!(view.0.messages.borrow().is_empty());
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    #[tokio::test]
    async fn test_create_folder_reloads_current() {
        let (api, view, controller) = setup("docs");

        assert!(controller.create_folder("  drafts ").await);

        assert_eq!(
            api.calls(),
            vec![
                Call::CreateFolder {
                    parent: "docs".to_string(),
                    name: "drafts".to_string()
                },
                Call::List("docs".to_string()),
            ]
        );
        assert_eq!(view.0.messages.borrow()[0], messages::FOLDER_CREATED);
    }

    #[tokio::test]
    async fn test_create_folder_blank_name() {
        let (api, view, controller) = setup("docs");

        assert!(!controller.create_folder("   ").await);

        assert!(api.calls().is_empty());
        assert_eq!(
            view.last_message().as_deref(),
            Some(messages::FOLDER_NAME_REQUIRED)
        );
    }

    #[tokio::test]
    async fn test_create_folder_rejected() {
        let (api, view, controller) = setup("");
        api.fail_mutations(ApiError::Rejected {
            status: 400,
            message: "Folder name required".to_string(),
        });

        assert!(!controller.create_folder("x").await);

        assert_eq!(view.last_message().as_deref(), Some("Folder name required"));
        // No reload after a failed create
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_file() {
        let (api, view, controller) = setup("pics");

        assert!(controller.upload_file(Some(&"cat.jpg".to_string())).await);

        assert_eq!(
            api.calls(),
            vec![
                Call::Upload {
                    parent: "pics".to_string(),
                    file: "cat.jpg".to_string()
                },
                Call::List("pics".to_string()),
            ]
        );
        assert_eq!(view.0.messages.borrow()[0], messages::UPLOADED);
    }

    #[tokio::test]
    async fn test_upload_without_file() {
        let (api, view, controller) = setup("pics");

        assert!(!controller.upload_file(None).await);

        assert!(api.calls().is_empty());
        assert_eq!(
            view.last_message().as_deref(),
            Some(messages::NO_FILE_SELECTED)
        );
    }

    #[tokio::test]
    async fn test_upload_status_failure_uses_status_text() {
        let (api, view, controller) = setup("");
        api.fail_mutations(ApiError::Status {
            status: 413,
            status_text: "Payload Too Large".to_string(),
        });

        assert!(!controller.upload_file(Some(&"big.bin".to_string())).await);
        assert_eq!(view.last_message().as_deref(), Some("Payload Too Large"));
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let (api, view, controller) = setup("docs");
        view.answer(false);

        controller.delete_item("docs/a.txt", false).await;

        assert!(api.calls().is_empty());
        assert_eq!(*view.0.prompts.borrow(), vec!["Delete file: docs/a.txt?"]);
        assert!(view.0.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirmed() {
        let (api, view, controller) = setup("docs");
        view.answer(true);

        controller.delete_item("docs/old", true).await;

        assert_eq!(*view.0.prompts.borrow(), vec!["Delete folder: docs/old?"]);
        assert_eq!(
            api.calls(),
            vec![
                Call::Delete("docs/old".to_string()),
                Call::List("docs".to_string()),
            ]
        );
        assert_eq!(view.0.messages.borrow()[0], messages::DELETED);
    }

    #[tokio::test]
    async fn test_delete_failure_still_reloads() {
        let (api, view, controller) = setup("docs");
        view.answer(true);
        api.fail_mutations(ApiError::Rejected {
            status: 400,
            message: "Directory not empty".to_string(),
        });

        controller.delete_item("docs/full", true).await;

        assert_eq!(view.0.messages.borrow()[0], "Directory not empty");
        assert_eq!(api.calls().last(), Some(&Call::List("docs".to_string())));
    }

    // =========================================================================
    // Preview
    // =========================================================================

    #[test]
    fn test_preview_open_and_close() {
        let (_api, view, controller) = setup("docs/img");

        controller.preview_image("docs/img/a.png", "a.png");
        assert_eq!(
            *view.0.preview.borrow(),
            Some(ImagePreview {
                src: "/open/docs%2Fimg%2Fa.png".to_string(),
                caption: "a.png • docs/img".to_string(),
            })
        );

        controller.close_preview();
        assert_eq!(*view.0.preview.borrow(), None);
    }

    #[test]
    fn test_delete_prompt() {
        assert_eq!(delete_prompt("a/b", true), "Delete folder: a/b?");
        assert_eq!(delete_prompt("a.txt", false), "Delete file: a.txt?");
    }
}
