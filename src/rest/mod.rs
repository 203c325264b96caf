pub mod endpoints;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ChronaError, Result};

/// HTTP client wrapper for the Chrona REST API.
#[derive(Debug, Clone)]
pub struct ChronaHttpClient {
    client: Client,
    base_url: String,
}

impl ChronaHttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let resp = self.client.get(&url).query(query).send().await?;
        Self::read_json(resp).await
    }

    /// GET a JSON resource, mapping 404 to `None`.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let resp = self.client.get(&url).query(query).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::read_json(resp).await.map(Some)
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let resp = self.client.post(&url).json(body).send().await?;
        Self::read_json(resp).await
    }

    /// PATCH a JSON body and decode the JSON response.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "PATCH");
        let resp = self.client.patch(&url).json(body).send().await?;
        Self::read_json(resp).await
    }

    /// DELETE a resource. The response body, if any, is discarded.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "DELETE");
        let resp = self.client.delete(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ChronaError::Http {
                status,
                message: body,
            });
        }
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ChronaError::Http {
                status,
                message: body,
            });
        }
        resp.json::<T>().await.map_err(ChronaError::Request)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
