//! Typed wrapper over the Accord REST API.

use std::time::Duration;

use accord_config::ClientConfig;
use accord_core::entities::Msa;
use accord_core::enums::EntityKind;
use accord_core::query::ListQuery;
use accord_core::responses::{ErrorDetail, ListResponse};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client for the configured base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` for a malformed base URL and
    /// `ClientError::Http` if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
            .map_err(|e| ClientError::InvalidUrl(format!("{base}{path}: {e}")))
    }

    /// One page of any resource.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for a non-success response and
    /// `ClientError::Http` for transport or decoding failures.
    pub async fn list<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        query: &ListQuery,
    ) -> Result<ListResponse<T>, ClientError> {
        let mut url = self.url(&format!("/{}", kind.route()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("skip", &query.skip.to_string());
            if let Some(limit) = query.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(sortby) = &query.sortby {
                pairs.append_pair("sortby", sortby);
            }
            if let Some(search) = query.search_term() {
                pairs.append_pair("search", search);
            }
        }

        tracing::debug!(%url, "list");
        let response = self.http.get(url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if the row does not exist.
    pub async fn get<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        id: i64,
    ) -> Result<T, ClientError> {
        let url = self.url(&format!("/{}/{id}", kind.route()))?;
        let response = self.http.get(url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if the row does not exist
    /// and 409 if other rows still reference it.
    pub async fn delete(&self, kind: EntityKind, id: i64) -> Result<(), ClientError> {
        let url = self.url(&format!("/{}/{id}", kind.route()))?;
        let response = self.http.delete(url).send().await?;
        check(response).await?;
        tracing::debug!(resource = %kind, id, "deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// See [`Self::list`].
    pub async fn list_msas(&self, query: &ListQuery) -> Result<ListResponse<Msa>, ClientError> {
        self.list(EntityKind::Msa, query).await
    }

    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn get_msa(&self, id: i64) -> Result<Msa, ClientError> {
        self.get(EntityKind::Msa, id).await
    }

    /// # Errors
    ///
    /// See [`Self::delete`].
    pub async fn delete_msa(&self, id: i64) -> Result<(), ClientError> {
        self.delete(EntityKind::Msa, id).await
    }
}

/// Turn a non-success response into `ClientError::Api`.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorDetail>(&body).map_or_else(
        |_| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            }
        },
        |e| e.detail,
    );
    Err(ClientError::Api { status, detail })
}
