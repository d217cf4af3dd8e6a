//! `reqwest` implementation of [`ContainerApi`].

use labdeck_common::constants::{CREATE_PATH, DELETE_PATH, LIST_PATH};
use labdeck_common::types::{
    ContainerId, CreateRequest, CreateResponse, DeleteRequest, DeleteResponse,
};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::api::ContainerApi;
use crate::error::{ApiError, Result};

/// Backend client over HTTP.
///
/// No timeout is configured: a call fails only when the transport does.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    /// Creates a client for the backend at `base_url`.
    ///
    /// A path prefix in `base_url` is kept: `http://host/admin` calls
    /// `http://host/admin/list`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if `base_url` does not parse or cannot
    /// carry a path.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Same as [`new`](Self::new) with a preconfigured `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if `base_url` does not parse or cannot
    /// carry a path.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let invalid = |message: String| ApiError::InvalidUrl {
            url: base_url.to_string(),
            message,
        };
        let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &'static str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{path}", self.base),
                message: e.to_string(),
            })
    }
}

/// Reads the whole body and decodes it, whatever the status code.
///
/// The backend answers `400` with an `{"error": ...}` body, so a non-2xx
/// status is not a failure on its own.
async fn read_json<T: DeserializeOwned>(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|source| ApiError::Transport { endpoint, source })?;
    tracing::debug!(endpoint, %status, bytes = body.len(), "backend response");
    serde_json::from_slice(&body).map_err(|source| ApiError::Decode { endpoint, source })
}

impl ContainerApi for HttpApi {
    async fn create(&self, count: u32) -> Result<CreateResponse> {
        let url = self.endpoint(CREATE_PATH)?;
        tracing::debug!(%url, count, "POST create");
        let response = self
            .client
            .post(url)
            .json(&CreateRequest { count })
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: CREATE_PATH,
                source,
            })?;
        read_json(CREATE_PATH, response).await
    }

    async fn list(&self) -> Result<serde_json::Value> {
        let url = self.endpoint(LIST_PATH)?;
        tracing::debug!(%url, "GET list");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: LIST_PATH,
                source,
            })?;
        read_json(LIST_PATH, response).await
    }

    async fn delete(&self, ids: &[ContainerId]) -> Result<DeleteResponse> {
        let url = self.endpoint(DELETE_PATH)?;
        tracing::debug!(%url, count = ids.len(), "DELETE containers");
        let response = self
            .client
            .delete(url)
            .json(&DeleteRequest { ids: ids.to_vec() })
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: DELETE_PATH,
                source,
            })?;
        read_json(DELETE_PATH, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let api = HttpApi::new("http://127.0.0.1:5000").expect("valid url");
        assert_eq!(api.base_url().as_str(), "http://127.0.0.1:5000/");
    }

    #[test]
    fn endpoints_keep_path_prefix() {
        let api = HttpApi::new("http://example.test/admin").expect("valid url");
        let url = api.endpoint(LIST_PATH).expect("join failed");
        assert_eq!(url.as_str(), "http://example.test/admin/list");
    }

    #[test]
    fn rejects_unparsable_base_url() {
        let err = HttpApi::new("not a url").expect_err("should fail");
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_base_url_without_path() {
        let err = HttpApi::new("mailto:ops@example.test").expect_err("should fail");
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }
}
