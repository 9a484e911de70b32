//! reqwest-backed client for the catalog backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::catalog::{
    AlbumAction, AlbumId, ArtistId, CatalogAlbum, CatalogApi, CatalogArtist, CatalogError, Page,
    ValidationEnvelope,
};
use crate::config::Config;

/// A client for the crawler's REST backend.
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = self.url(path);
        debug!("catalog GET {} {:?}", url, query);
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("catalog GET {} returned {}", url, status);
            return Err(CatalogError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn page_of<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<T>, CatalogError> {
        self.get_json(
            path,
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    /// Fire a bodyless mutating request and check only the status.
    async fn put_unit(&self, path: &str) -> Result<(), CatalogError> {
        let url = self.url(path);
        debug!("catalog PUT {}", url);
        let response = self.http.put(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("catalog PUT {} returned {}", url, status);
            return Err(CatalogError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn artists(&self, only_added: Option<bool>) -> Result<Vec<CatalogArtist>, CatalogError> {
        let mut query = Vec::new();
        if let Some(only_added) = only_added {
            query.push(("only_added", only_added.to_string()));
        }
        self.get_json("artists", &query).await
    }

    async fn tracked_albums(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<CatalogArtist>, CatalogError> {
        self.page_of("albums/tracked", page, size).await
    }

    async fn ready_albums(&self, page: u32, size: u32) -> Result<Page<CatalogArtist>, CatalogError> {
        self.page_of("albums/ready", page, size).await
    }

    async fn upload_ready_albums(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<CatalogAlbum>, CatalogError> {
        self.page_of("albums/upload/ready", page, size).await
    }

    async fn crawl(
        &self,
        start_id: u64,
        num_crawls: u32,
    ) -> Result<Vec<CatalogArtist>, CatalogError> {
        let url = self.url("crawl");
        debug!("catalog POST {} start_id={} num_crawls={}", url, start_id, num_crawls);
        let response = self
            .http
            .post(&url)
            .query(&[
                ("start_id", start_id.to_string()),
                ("num_crawls", num_crawls.to_string()),
            ])
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        warn!("catalog POST {} returned {}", url, status);
        let body = response.text().await.unwrap_or_default();
        if let Ok(envelope) = serde_json::from_str::<ValidationEnvelope>(&body) {
            let msgs = envelope.detail.into_iter().map(|d| d.msg).collect();
            return Err(CatalogError::Validation(msgs));
        }
        Err(CatalogError::Status(status.as_u16()))
    }

    async fn generate(&self, album_id: AlbumId) -> Result<(), CatalogError> {
        let url = self.url(&format!("album/{album_id}/generate"));
        debug!("catalog POST {}", url);
        let response = self.http.post(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("catalog POST {} returned {}", url, status);
            return Err(CatalogError::Status(status.as_u16()));
        }
        Ok(())
    }

    async fn album_action(
        &self,
        album_id: AlbumId,
        action: AlbumAction,
    ) -> Result<(), CatalogError> {
        self.put_unit(&format!("album/{}/{}", album_id, action.route_suffix()))
            .await
    }

    async fn review_artist(&self, artist_id: ArtistId) -> Result<(), CatalogError> {
        self.put_unit(&format!("artist/{artist_id}/review")).await
    }
}
