//! List composition
//!
//! Folds fetched rows, the keyed session state, and a view's configuration
//! into plain renderable data: per-album controls and title display, per-
//! artist toolbar and visibility filtering, the page window, and the
//! "showing X of Y" summary. Fetched data is never mutated here.

use digger_core::{AlbumAction, AlbumId, ArtistId};

use crate::capabilities::{resolve_actions, ActionCapabilitySet, ActionControl};
use crate::display_types::{Album, Artist, PageSettings};
use crate::paging::{page_window, PagePlan};
use crate::stores::{ArtistVisibility, CurationState, MutationStatus};

/// The three curation views, each with its fixed capability configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurationView {
    /// Unreviewed artists with their tracked albums; albums can be queued.
    Tracked,
    /// Artists whose queued albums await download/upload.
    Ready,
    /// Flat list of albums ready to upload.
    UploadReady,
}

impl CurationView {
    pub fn capabilities(self) -> ActionCapabilitySet {
        match self {
            CurationView::Tracked => ActionCapabilitySet::none().with(AlbumAction::Add),
            CurationView::Ready => ActionCapabilitySet::none()
                .with(AlbumAction::Download)
                .with(AlbumAction::Upload),
            CurationView::UploadReady => ActionCapabilitySet::none()
                .with(AlbumAction::Remove)
                .with(AlbumAction::Download)
                .with(AlbumAction::Upload),
        }
    }

    /// Only the tracked view carries the review toolbar.
    pub fn shows_toolbar(self) -> bool {
        matches!(self, CurationView::Tracked)
    }

    pub fn default_page_size(self) -> u32 {
        match self {
            CurationView::Tracked | CurationView::Ready => 5,
            CurationView::UploadReady => 10,
        }
    }

    /// Whether the view lists artists (with nested albums) or bare albums.
    pub fn lists_artists(self) -> bool {
        !matches!(self, CurationView::UploadReady)
    }
}

/// Per-view composition settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    pub capabilities: ActionCapabilitySet,
    pub show_toolbar: bool,
}

impl ListConfig {
    pub fn for_view(view: CurationView) -> Self {
        Self {
            capabilities: view.capabilities(),
            show_toolbar: view.shows_toolbar(),
        }
    }
}

/// How an album's title renders after its last mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleDisplay {
    Plain,
    /// Marked: the mutation landed.
    Affirmed,
    /// Struck through: the mutation failed.
    Struck,
}

impl From<MutationStatus> for TitleDisplay {
    fn from(status: MutationStatus) -> Self {
        match status {
            MutationStatus::Neutral => TitleDisplay::Plain,
            MutationStatus::Confirmed => TitleDisplay::Affirmed,
            MutationStatus::Rejected => TitleDisplay::Struck,
        }
    }
}

/// One composed album row.
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumRow {
    pub album: Album,
    pub title: TitleDisplay,
    pub controls: Vec<ActionControl>,
    /// A dispatch is unresolved; the shell should swallow further clicks.
    pub busy: bool,
}

/// Review toolbar state for one artist row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReviewControl {
    pub enabled: bool,
}

/// One composed artist row with its album rows.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistRow {
    pub id: ArtistId,
    pub name: String,
    pub image_url: String,
    pub fan_count: u32,
    pub toolbar: Option<ReviewControl>,
    pub albums: Vec<AlbumRow>,
}

/// "Showing X of Y" line under album lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListSummary {
    pub shown: usize,
    pub total: Option<u64>,
}

/// Composed artist-level view.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistListView {
    pub rows: Vec<ArtistRow>,
    pub window: PagePlan,
}

/// Composed album-level view.
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumListView {
    pub rows: Vec<AlbumRow>,
    pub summary: ListSummary,
    pub window: PagePlan,
}

fn album_row(album: &Album, config: &ListConfig, state: &CurationState) -> AlbumRow {
    AlbumRow {
        album: album.clone(),
        title: state.album_status(album.id).into(),
        controls: resolve_actions(&config.capabilities, album.ready_to_add),
        busy: state.action_in_flight(album.id),
    }
}

/// Compose an artist list view. Artists hidden by the review gate are
/// excluded entirely.
pub fn compose_artist_list(
    artists: &[Artist],
    settings: PageSettings,
    config: &ListConfig,
    state: &CurationState,
) -> ArtistListView {
    let rows = artists
        .iter()
        .filter(|artist| state.visibility(artist.id) == ArtistVisibility::Visible)
        .map(|artist| ArtistRow {
            id: artist.id,
            name: artist.name.clone(),
            image_url: artist.image_url.clone(),
            fan_count: artist.fan_count,
            toolbar: config.show_toolbar.then(|| ReviewControl {
                enabled: !state.review_in_flight(artist.id),
            }),
            albums: artist
                .albums
                .iter()
                .map(|album| album_row(album, config, state))
                .collect(),
        })
        .collect();
    ArtistListView {
        rows,
        window: page_window(settings.page, settings.pages),
    }
}

/// Compose a flat album list view.
pub fn compose_album_list(
    albums: &[Album],
    settings: PageSettings,
    config: &ListConfig,
    state: &CurationState,
) -> AlbumListView {
    let rows: Vec<AlbumRow> = albums
        .iter()
        .map(|album| album_row(album, config, state))
        .collect();
    AlbumListView {
        summary: ListSummary {
            shown: rows.len(),
            total: settings.total,
        },
        rows,
        window: page_window(settings.page, settings.pages),
    }
}

/// The album ids a fetched artist page contains, for installation into the
/// curation state.
pub fn album_ids_of(artists: &[Artist]) -> Vec<AlbumId> {
    artists
        .iter()
        .flat_map(|artist| artist.albums.iter().map(|album| album.id))
        .collect()
}
