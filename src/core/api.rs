//! Client for the file-serving backend.
//!
//! [`FileApi`] is the seam between the controller and the network.
//! [`HttpApi`] talks to the real backend with `gloo-net`; tests substitute an
//! in-memory implementation.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData, UrlSearchParams};

use super::error::ApiError;
use crate::config::{endpoints, fields};
use crate::models::{DirectoryEntry, Listing};
use crate::utils::url::{endpoint, list_url};

/// Operations offered by the backend.
///
/// Futures are `!Send`: everything runs on the browser's main thread.
#[allow(async_fn_in_trait)]
pub trait FileApi {
    /// Handle to a user-selected file.
    type Upload;

    /// List the directory at `path`.
    async fn list(&self, path: &str) -> Result<Listing, ApiError>;

    /// Create folder `name` inside `parent`.
    async fn create_folder(&self, parent: &str, name: &str) -> Result<(), ApiError>;

    /// Store `file` inside `parent`.
    async fn upload(&self, parent: &str, file: &Self::Upload) -> Result<(), ApiError>;

    /// Delete the file or (empty) directory at `path`.
    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}

// =============================================================================
// Wire Format
// =============================================================================

/// Body of a successful `/api/list` response.
#[derive(Debug, Deserialize)]
struct ListBody {
    #[serde(default)]
    current: Option<String>,
    #[serde(default)]
    items: Vec<DirectoryEntry>,
}

/// Body shared by error responses and mutation responses.
#[derive(Debug, Default, Deserialize)]
struct StatusBody {
    #[serde(default)]
    ok: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a successful listing body.
pub fn parse_listing(body: &str) -> Result<Listing, ApiError> {
    let list: ListBody =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(Listing {
        current: list.current.unwrap_or_default(),
        items: list.items,
    })
}

/// Build the error for a non-2xx response.
///
/// A JSON body is the server's answer: its `error` string is shown, and a
/// body without one leaves the caller's fallback. The status text is used
/// only when the body is not JSON.
pub fn failure_from_body(status: u16, status_text: &str, body: &str) -> ApiError {
    match serde_json::from_str::<StatusBody>(body) {
        Ok(parsed) => ApiError::Rejected {
            status,
            message: parsed.error.unwrap_or_default(),
        },
        Err(_) => ApiError::Status {
            status,
            status_text: status_text.to_string(),
        },
    }
}

/// Check the body of a 2xx mutation response.
///
/// Only an explicit `"ok": false` counts as a failure; an empty or non-JSON
/// body is accepted.
pub fn check_mutation_body(status: u16, body: &str) -> Result<(), ApiError> {
    let parsed = serde_json::from_str::<StatusBody>(body).unwrap_or_default();
    if parsed.ok == Some(false) {
        return Err(ApiError::Rejected {
            status,
            message: parsed.error.unwrap_or_default(),
        });
    }
    Ok(())
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// [`FileApi`] backed by `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_error(err: JsValue) -> ApiError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown browser error".to_string());
    ApiError::Network(message)
}

/// Read the body and split the response into success text or an error.
async fn read_response(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if !response.ok() {
        return Err(failure_from_body(status, &response.status_text(), &body));
    }
    Ok(body)
}

async fn post(url: &str, body: impl Into<JsValue>) -> Result<(), ApiError> {
    let response = Request::post(url)
        .body(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let status = response.status();
    let body = read_response(response).await?;
    check_mutation_body(status, &body)
}

fn form_params(pairs: &[(&str, &str)]) -> Result<UrlSearchParams, ApiError> {
    let params = UrlSearchParams::new().map_err(js_error)?;
    for (name, value) in pairs {
        params.append(name, value);
    }
    Ok(params)
}

impl FileApi for HttpApi {
    type Upload = File;

    async fn list(&self, path: &str) -> Result<Listing, ApiError> {
        let response = Request::get(&list_url(path))
            .send()
            .await
            .map_err(network)?;
        let body = read_response(response).await?;
        parse_listing(&body)
    }

    async fn create_folder(&self, parent: &str, name: &str) -> Result<(), ApiError> {
        let params = form_params(&[(fields::FOLDER, name), (fields::PATH, parent)])?;
        post(&endpoint(endpoints::CREATE_FOLDER), params).await
    }

    async fn upload(&self, parent: &str, file: &File) -> Result<(), ApiError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(fields::FILE, file, &file.name())
            .map_err(js_error)?;
        form.append_with_str(fields::PATH, parent)
            .map_err(js_error)?;
        post(&endpoint(endpoints::UPLOAD), form).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let params = form_params(&[(fields::PATH, path)])?;
        post(&endpoint(endpoints::DELETE), params).await
    }
}
