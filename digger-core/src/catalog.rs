//! Wire model and collaborator trait for the crawler's catalog backend.
//!
//! The backend owns the catalog; digger only reads pages of it and dispatches
//! small mutating calls (queue an album, review an artist, run a crawl).
//! Everything here is the JSON the backend actually speaks -- display
//! concerns live in digger-ui.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

/// Backend artist identifier.
pub type ArtistId = u64;
/// Backend album identifier.
pub type AlbumId = u64;

/// Errors from catalog backend operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Release kind reported by the catalog. Unknown labels parse as `Other`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Album,
    Ep,
    Single,
    #[serde(other)]
    Other,
}

impl RecordType {
    /// The lowercase label the backend uses, also shown on the badge.
    pub fn label(self) -> &'static str {
        match self {
            RecordType::Album => "album",
            RecordType::Ep => "ep",
            RecordType::Single => "single",
            RecordType::Other => "other",
        }
    }
}

/// An album as the backend reports it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatalogAlbum {
    pub id: AlbumId,
    pub artist_id: ArtistId,
    pub title: String,
    pub image_url: String,
    pub release_date: NaiveDate,
    /// Digital storefront date, when the backend knows it.
    #[serde(default)]
    pub digital_release_date: Option<NaiveDate>,
    pub record_type: RecordType,
    /// Pipeline status label ("", "downloaded", "uploaded", ...).
    #[serde(default)]
    pub status: String,
    /// True once the album has been queued for the distribution pipeline.
    #[serde(default)]
    pub ready_to_add: bool,
}

/// An artist as the backend reports it, with its crawled albums.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatalogArtist {
    pub id: ArtistId,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub nb_album: u32,
    #[serde(default)]
    pub nb_fan: u32,
    #[serde(default)]
    pub albums: Vec<CatalogAlbum>,
}

/// The pagination envelope shared by all paginated endpoints.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    pub size: u32,
}

/// One violated constraint from a rejected crawl request.
///
/// The backend sends FastAPI-style `{detail: [{msg, ...}]}`; only `msg` is
/// interesting, the rest is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct ValidationDetail {
    pub msg: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidationEnvelope {
    pub detail: Vec<ValidationDetail>,
}

/// Pipeline mutation dispatched against a single album.
///
/// Maps one-to-one onto `PUT /album/{id}/<suffix>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlbumAction {
    Add,
    Remove,
    Download,
    Upload,
}

impl AlbumAction {
    /// Path suffix of the backend route for this action.
    pub fn route_suffix(self) -> &'static str {
        match self {
            AlbumAction::Add => "add",
            AlbumAction::Remove => "remove",
            AlbumAction::Download => "download",
            AlbumAction::Upload => "upload",
        }
    }
}

/// The catalog backend as digger consumes it.
///
/// One method per REST call. `CatalogClient` is the real implementation;
/// tests drive the session against mocks of this trait.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// All crawled artists, optionally narrowed to those with queued albums.
    async fn artists(&self, only_added: Option<bool>) -> Result<Vec<CatalogArtist>, CatalogError>;

    /// Unreviewed artists with their tracked albums, paginated.
    async fn tracked_albums(&self, page: u32, size: u32)
        -> Result<Page<CatalogArtist>, CatalogError>;

    /// Artists whose queued albums are awaiting upload, paginated.
    async fn ready_albums(&self, page: u32, size: u32) -> Result<Page<CatalogArtist>, CatalogError>;

    /// Albums ready for upload, paginated.
    async fn upload_ready_albums(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<CatalogAlbum>, CatalogError>;

    /// Crawl a range of artist ids into the catalog. Returns the artists the
    /// crawler actually ingested.
    async fn crawl(&self, start_id: u64, num_crawls: u32)
        -> Result<Vec<CatalogArtist>, CatalogError>;

    /// Generate the distribution artifact for a downloaded album.
    async fn generate(&self, album_id: AlbumId) -> Result<(), CatalogError>;

    /// Dispatch a pipeline mutation for an album.
    async fn album_action(&self, album_id: AlbumId, action: AlbumAction)
        -> Result<(), CatalogError>;

    /// Mark an artist as reviewed, dismissing it from curation.
    async fn review_artist(&self, artist_id: ArtistId) -> Result<(), CatalogError>;
}
