//! Shared test support: an in-memory catalog backend.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use digger_core::{
    AlbumAction, AlbumId, ArtistId, CatalogAlbum, CatalogApi, CatalogArtist, CatalogError, Page,
    RecordType,
};

pub fn album(id: AlbumId, artist_id: ArtistId, ready_to_add: bool) -> CatalogAlbum {
    CatalogAlbum {
        id,
        artist_id,
        title: format!("Album {id}"),
        image_url: format!("https://img.example/album/{id}"),
        release_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        digital_release_date: None,
        record_type: RecordType::Album,
        status: String::new(),
        ready_to_add,
    }
}

pub fn artist(id: ArtistId, albums: Vec<CatalogAlbum>) -> CatalogArtist {
    CatalogArtist {
        id,
        name: format!("Artist {id}"),
        image_url: format!("https://img.example/artist/{id}"),
        nb_album: albums.len() as u32,
        nb_fan: 1000,
        albums,
    }
}

/// How the mock answers `POST /crawl`.
#[derive(Clone, Debug)]
pub enum CrawlBehavior {
    Ok,
    Validation(Vec<String>),
    Status(u16),
}

#[derive(Default)]
struct MockInner {
    artist_rows: Vec<CatalogArtist>,
    album_rows: Vec<CatalogAlbum>,
    page_count: u32,
    fail_fetch: bool,
    failing_albums: HashSet<AlbumId>,
    failing_artists: HashSet<ArtistId>,
    crawl_behavior: Option<CrawlBehavior>,
    calls: Vec<String>,
}

/// In-memory `CatalogApi`. Clones share state so tests can keep a handle
/// after handing one to the session.
#[derive(Clone, Default)]
pub struct MockCatalog {
    inner: Arc<Mutex<MockInner>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artists(artists: Vec<CatalogArtist>) -> Self {
        let mock = Self::new();
        mock.set_artists(artists);
        mock
    }

    pub fn with_albums(albums: Vec<CatalogAlbum>) -> Self {
        let mock = Self::new();
        {
            let mut inner = mock.inner.lock().unwrap();
            inner.page_count = 1;
            inner.album_rows = albums;
        }
        mock
    }

    pub fn set_artists(&self, artists: Vec<CatalogArtist>) {
        let mut inner = self.inner.lock().unwrap();
        inner.page_count = 1;
        inner.artist_rows = artists;
    }

    /// Pretend the catalog has this many pages (every page serves the same
    /// rows).
    pub fn set_page_count(&self, pages: u32) {
        self.inner.lock().unwrap().page_count = pages;
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.inner.lock().unwrap().fail_fetch = fail;
    }

    pub fn set_album_failing(&self, album_id: AlbumId, fail: bool) {
        let mut inner = self.inner.lock().unwrap();
        if fail {
            inner.failing_albums.insert(album_id);
        } else {
            inner.failing_albums.remove(&album_id);
        }
    }

    pub fn set_artist_failing(&self, artist_id: ArtistId, fail: bool) {
        let mut inner = self.inner.lock().unwrap();
        if fail {
            inner.failing_artists.insert(artist_id);
        } else {
            inner.failing_artists.remove(&artist_id);
        }
    }

    pub fn set_crawl_behavior(&self, behavior: CrawlBehavior) {
        self.inner.lock().unwrap().crawl_behavior = Some(behavior);
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn record(&self, call: String) {
        self.inner.lock().unwrap().calls.push(call);
    }

    fn artist_page(&self, endpoint: &str, page: u32, size: u32) -> Result<Page<CatalogArtist>, CatalogError> {
        self.record(format!("{endpoint} page={page} size={size}"));
        let inner = self.inner.lock().unwrap();
        if inner.fail_fetch {
            return Err(CatalogError::Status(500));
        }
        Ok(Page {
            items: inner.artist_rows.clone(),
            page,
            pages: inner.page_count,
            total: inner.artist_rows.len() as u64 * inner.page_count as u64,
            size,
        })
    }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn artists(&self, only_added: Option<bool>) -> Result<Vec<CatalogArtist>, CatalogError> {
        self.record(format!("artists only_added={only_added:?}"));
        Ok(self.inner.lock().unwrap().artist_rows.clone())
    }

    async fn tracked_albums(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<CatalogArtist>, CatalogError> {
        self.artist_page("tracked", page, size)
    }

    async fn ready_albums(&self, page: u32, size: u32) -> Result<Page<CatalogArtist>, CatalogError> {
        self.artist_page("ready", page, size)
    }

    async fn upload_ready_albums(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<CatalogAlbum>, CatalogError> {
        self.record(format!("upload-ready page={page} size={size}"));
        let inner = self.inner.lock().unwrap();
        if inner.fail_fetch {
            return Err(CatalogError::Status(500));
        }
        Ok(Page {
            items: inner.album_rows.clone(),
            page,
            pages: inner.page_count,
            total: inner.album_rows.len() as u64 * inner.page_count as u64,
            size,
        })
    }

    async fn crawl(
        &self,
        start_id: u64,
        num_crawls: u32,
    ) -> Result<Vec<CatalogArtist>, CatalogError> {
        self.record(format!("crawl start_id={start_id} num_crawls={num_crawls}"));
        let behavior = self.inner.lock().unwrap().crawl_behavior.clone();
        match behavior.unwrap_or(CrawlBehavior::Ok) {
            CrawlBehavior::Ok => Ok(Vec::new()),
            CrawlBehavior::Validation(messages) => Err(CatalogError::Validation(messages)),
            CrawlBehavior::Status(status) => Err(CatalogError::Status(status)),
        }
    }

    async fn generate(&self, album_id: AlbumId) -> Result<(), CatalogError> {
        self.record(format!("generate {album_id}"));
        Ok(())
    }

    async fn album_action(
        &self,
        album_id: AlbumId,
        action: AlbumAction,
    ) -> Result<(), CatalogError> {
        self.record(format!("album {album_id} {}", action.route_suffix()));
        if self.inner.lock().unwrap().failing_albums.contains(&album_id) {
            return Err(CatalogError::Status(500));
        }
        Ok(())
    }

    async fn review_artist(&self, artist_id: ArtistId) -> Result<(), CatalogError> {
        self.record(format!("review {artist_id}"));
        if self
            .inner
            .lock()
            .unwrap()
            .failing_artists
            .contains(&artist_id)
        {
            return Err(CatalogError::Status(500));
        }
        Ok(())
    }
}
