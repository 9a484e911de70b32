//! Display types for curation views
//!
//! Lightweight view-side copies of the wire model: albums ordered the way
//! the lists render them, badge tones, and catalog deep links. Session
//! status (mutation outcomes, review visibility) is layered on by the
//! composer, never stored here.

use chrono::NaiveDate;
use digger_core::{AlbumId, ArtistId, CatalogAlbum, CatalogArtist, Page, RecordType};

/// Visual tone for the record-type badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Secondary,
    Danger,
}

/// Badge tone for a record type: albums lead, singles stay muted, anything
/// unrecognized is flagged loudly.
pub fn record_type_tone(record_type: RecordType) -> Tone {
    match record_type {
        RecordType::Album => Tone::Primary,
        RecordType::Ep => Tone::Success,
        RecordType::Single => Tone::Secondary,
        RecordType::Other => Tone::Danger,
    }
}

/// Album display info
#[derive(Clone, Debug, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub artist_id: ArtistId,
    pub title: String,
    pub image_url: String,
    pub release_date: NaiveDate,
    pub digital_release_date: Option<NaiveDate>,
    pub record_type: RecordType,
    pub status: String,
    pub ready_to_add: bool,
}

impl Album {
    /// Deep link to the album's page on the public catalog site.
    pub fn catalog_url(&self, site_url: &str) -> String {
        format!("{}/album/{}", site_url.trim_end_matches('/'), self.id)
    }

    pub fn badge_tone(&self) -> Tone {
        record_type_tone(self.record_type)
    }
}

impl From<CatalogAlbum> for Album {
    fn from(album: CatalogAlbum) -> Self {
        Self {
            id: album.id,
            artist_id: album.artist_id,
            title: album.title,
            image_url: album.image_url,
            release_date: album.release_date,
            digital_release_date: album.digital_release_date,
            record_type: album.record_type,
            status: album.status,
            ready_to_add: album.ready_to_add,
        }
    }
}

/// Artist display info, albums ordered newest release first.
#[derive(Clone, Debug, PartialEq)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub image_url: String,
    pub fan_count: u32,
    pub albums: Vec<Album>,
}

impl Artist {
    /// Deep link to the artist's page on the public catalog site.
    pub fn catalog_url(&self, site_url: &str) -> String {
        format!("{}/artist/{}", site_url.trim_end_matches('/'), self.id)
    }
}

impl From<CatalogArtist> for Artist {
    fn from(artist: CatalogArtist) -> Self {
        let mut albums: Vec<Album> = artist.albums.into_iter().map(Album::from).collect();
        albums.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        Self {
            id: artist.id,
            name: artist.name,
            image_url: artist.image_url,
            fan_count: artist.nb_fan,
            albums,
        }
    }
}

/// Paging state of the currently displayed list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageSettings {
    pub page: u32,
    pub pages: u32,
    pub total: Option<u64>,
    pub size: Option<u32>,
}

impl PageSettings {
    pub fn from_envelope<T>(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            pages: page.pages,
            total: Some(page.total),
            size: Some(page.size),
        }
    }
}
