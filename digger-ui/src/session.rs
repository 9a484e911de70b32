//! Curation session driver
//!
//! Owns the stores for one view and drives them against a `CatalogApi`:
//! fetch-and-install, ticketed mutation dispatches, crawls, and the mapping
//! of failures onto notices. Every failure is recovered here -- nothing is
//! retried and nothing escalates past a notice or a Rejected row.

use digger_core::{AlbumAction, AlbumId, ArtistId, CatalogApi, CatalogError};
use tracing::{debug, info, warn};

use crate::composer::{
    album_ids_of, compose_album_list, compose_artist_list, AlbumListView, ArtistListView,
    CurationView, ListConfig,
};
use crate::display_types::{Album, Artist, PageSettings};
use crate::paging::clamp_page;
use crate::stores::{CrawlerState, CurationState, Notice, NoticeState};

/// The composed render plan for the session's view.
#[derive(Clone, Debug, PartialEq)]
pub enum ComposedView {
    Artists(ArtistListView),
    Albums(AlbumListView),
}

/// One view's worth of curation state, fed by the catalog backend.
pub struct CurationSession<C> {
    api: C,
    view: CurationView,
    config: ListConfig,
    page_size: u32,
    artists: Vec<Artist>,
    albums: Vec<Album>,
    settings: PageSettings,
    state: CurationState,
    notices: NoticeState,
    crawler: CrawlerState,
}

impl<C: CatalogApi> CurationSession<C> {
    pub fn new(api: C, view: CurationView) -> Self {
        Self {
            api,
            view,
            config: ListConfig::for_view(view),
            page_size: view.default_page_size(),
            artists: Vec::new(),
            albums: Vec::new(),
            settings: PageSettings::default(),
            state: CurationState::new(),
            notices: NoticeState::new(),
            crawler: CrawlerState::new(),
        }
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size.max(1);
        self
    }

    pub fn view(&self) -> CurationView {
        self.view
    }

    pub fn settings(&self) -> PageSettings {
        self.settings
    }

    /// The keyed session state, readable for inspection and tests.
    pub fn state(&self) -> &CurationState {
        &self.state
    }

    pub fn notices(&self) -> &[Notice] {
        self.notices.notices()
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.dismiss(id);
    }

    pub fn crawler(&self) -> &CrawlerState {
        &self.crawler
    }

    pub fn crawler_mut(&mut self) -> &mut CrawlerState {
        &mut self.crawler
    }

    /// Fetch and install a page of the view. A failed fetch keeps the
    /// current rows and surfaces one generic notice.
    pub async fn refresh(&mut self, page: u32) {
        let page = clamp_page(page, self.settings.pages);
        let result = match self.view {
            CurationView::Tracked | CurationView::Ready => {
                let fetched = match self.view {
                    CurationView::Tracked => self.api.tracked_albums(page, self.page_size).await,
                    _ => self.api.ready_albums(page, self.page_size).await,
                };
                fetched.map(|envelope| {
                    let settings = PageSettings::from_envelope(&envelope);
                    let artists: Vec<Artist> =
                        envelope.items.into_iter().map(Artist::from).collect();
                    let artist_ids: Vec<ArtistId> = artists.iter().map(|a| a.id).collect();
                    self.state.install_page(&artist_ids, &album_ids_of(&artists));
                    self.artists = artists;
                    self.settings = settings;
                })
            }
            CurationView::UploadReady => {
                let fetched = self.api.upload_ready_albums(page, self.page_size).await;
                fetched.map(|envelope| {
                    let settings = PageSettings::from_envelope(&envelope);
                    let albums: Vec<Album> = envelope.items.into_iter().map(Album::from).collect();
                    let album_ids: Vec<AlbumId> = albums.iter().map(|a| a.id).collect();
                    self.state.install_page(&[], &album_ids);
                    self.albums = albums;
                    self.settings = settings;
                })
            }
        };

        match result {
            Ok(()) => debug!(
                "installed page {}/{} of {:?}",
                self.settings.page, self.settings.pages, self.view
            ),
            Err(err) => {
                warn!("failed to fetch page {} of {:?}: {}", page, self.view, err);
                self.notices.error("Failed to load the list");
            }
        }
    }

    /// Compose the current rows with their session overlays.
    pub fn compose(&self) -> ComposedView {
        if self.view.lists_artists() {
            ComposedView::Artists(compose_artist_list(
                &self.artists,
                self.settings,
                &self.config,
                &self.state,
            ))
        } else {
            ComposedView::Albums(compose_album_list(
                &self.albums,
                self.settings,
                &self.config,
                &self.state,
            ))
        }
    }

    /// Dispatch a pipeline mutation for an album. Ignored when the album
    /// already has an unresolved dispatch; the failure outcome only shows on
    /// the row itself.
    pub async fn dispatch_album_action(&mut self, album_id: AlbumId, action: AlbumAction) {
        let Some(ticket) = self.state.begin_action(album_id, action) else {
            return;
        };
        let result = self.api.album_action(album_id, action).await;
        if let Err(err) = &result {
            warn!(
                "album {} {} failed: {}",
                album_id,
                action.route_suffix(),
                err
            );
        }
        self.state.resolve_action(ticket, result.is_ok());
    }

    /// Dispatch a review for an artist. On success the artist disappears
    /// from the session; no refetch is triggered.
    pub async fn dispatch_review(&mut self, artist_id: ArtistId) {
        let Some(ticket) = self.state.begin_review(artist_id) else {
            return;
        };
        let result = self.api.review_artist(artist_id).await;
        match &result {
            Ok(()) => info!("artist {} reviewed", artist_id),
            Err(err) => warn!("review of artist {} failed: {}", artist_id, err),
        }
        self.state.resolve_review(ticket, result.is_ok());
    }

    /// Run a crawl with the form's current values, then jump back to the
    /// first page on success. Validation failures surface one notice per
    /// violated constraint.
    pub async fn run_crawl(&mut self) {
        let Some(request) = self.crawler.request() else {
            self.notices.error("Starting artist id is required");
            return;
        };
        match self.api.crawl(request.start_id, request.num_crawls).await {
            Ok(crawled) => {
                info!("crawl ingested {} artists", crawled.len());
                self.notices.info("Crawl ok");
                self.refresh(1).await;
            }
            Err(CatalogError::Validation(messages)) => {
                for message in messages {
                    self.notices.error(message);
                }
            }
            Err(err) => {
                warn!("crawl failed: {}", err);
                self.notices.error("Crawl failed");
            }
        }
    }
}
