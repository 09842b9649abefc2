//! HTTP helpers for JSON APIs with consistent error classification. Feature
//! clients use these helpers so transport, status and decode failures map to
//! [`FetchError`] in one place. Requests carry no body, query or extra headers
//! and rely on the transport's own timeout behavior.

use super::errors::FetchError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

/// Issues a single GET against `url` and decodes a JSON body.
///
/// # Errors
/// Returns [`FetchError::Network`] when the request cannot be sent,
/// [`FetchError::Http`] for any non-2xx status and [`FetchError::Parse`] when
/// the body does not match `T`.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T, FetchError> {
    let response = client.get(url).send().await.map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Maps transport errors into `FetchError` while keeping the transport message.
fn map_request_error(err: reqwest::Error) -> FetchError {
    error!("request failed: {err}");
    FetchError::Network(err.to_string())
}

/// Parses JSON responses and rejects non-success statuses before reading the body.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    debug!("response status: {status}");

    if !status.is_success() {
        error!("unexpected status: {status}");
        return Err(FetchError::Http {
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|err| FetchError::Parse(format!("Failed to decode response: {err}")))
}
