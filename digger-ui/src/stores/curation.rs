//! Per-item curation state machines
//!
//! Two keyed machines over the currently installed page: the mutation-status
//! tracker (album id → Neutral/Confirmed/Rejected, one in-flight dispatch per
//! album) and the review gate (artist id → Visible/Hidden, one-way within the
//! session). Dispatches hand out move-only tickets; a ticket minted before
//! the last page install resolves as a no-op, so late responses from a
//! discarded view cannot touch current state.

use std::collections::{HashMap, HashSet};

use digger_core::{AlbumAction, AlbumId, ArtistId};
use tracing::debug;

/// Display outcome of an album's most recent mutation dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MutationStatus {
    #[default]
    Neutral,
    /// The write landed; the title renders with the affirmative marker.
    Confirmed,
    /// The write failed; the title renders struck through.
    Rejected,
}

/// Whether an artist still participates in the curation session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArtistVisibility {
    #[default]
    Visible,
    /// Reviewed successfully; excluded from composition for the rest of the
    /// session.
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AlbumSlot {
    Settled(MutationStatus),
    InFlight(AlbumAction),
}

/// Proof of an issued album mutation. Move-only: resolving consumes it, so
/// each dispatch gets exactly one terminal transition.
#[derive(Debug)]
pub struct MutationTicket {
    generation: u64,
    album_id: AlbumId,
    action: AlbumAction,
}

impl MutationTicket {
    pub fn album_id(&self) -> AlbumId {
        self.album_id
    }

    pub fn action(&self) -> AlbumAction {
        self.action
    }
}

/// Proof of an issued review mutation.
#[derive(Debug)]
pub struct ReviewTicket {
    generation: u64,
    artist_id: ArtistId,
}

impl ReviewTicket {
    pub fn artist_id(&self) -> ArtistId {
        self.artist_id
    }
}

/// Keyed session state for the currently installed page.
#[derive(Debug, Default)]
pub struct CurationState {
    /// Bumped on every page install; tickets carry the generation they were
    /// minted under.
    generation: u64,
    albums: HashMap<AlbumId, AlbumSlot>,
    artists: HashSet<ArtistId>,
    /// Session-wide: survives page installs, unlike album slots.
    visibility: HashMap<ArtistId, ArtistVisibility>,
    reviews_in_flight: HashSet<ArtistId>,
}

impl CurationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly fetched page.
    ///
    /// Settled statuses are kept for albums still present and dropped for
    /// everything else; in-flight markers are cleared (their tickets are now
    /// stale and will resolve as no-ops). Review visibility is session-wide
    /// and untouched.
    pub fn install_page(&mut self, artist_ids: &[ArtistId], album_ids: &[AlbumId]) {
        self.generation += 1;
        let mut albums = HashMap::with_capacity(album_ids.len());
        for &id in album_ids {
            let slot = match self.albums.get(&id) {
                Some(AlbumSlot::Settled(status)) => AlbumSlot::Settled(*status),
                _ => AlbumSlot::Settled(MutationStatus::Neutral),
            };
            albums.insert(id, slot);
        }
        self.albums = albums;
        self.artists = artist_ids.iter().copied().collect();
        self.reviews_in_flight.clear();
    }

    /// Forget everything, including review visibility. A new session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Displayed status for an album. An in-flight dispatch renders Neutral:
    /// there is no pending visual state.
    pub fn album_status(&self, album_id: AlbumId) -> MutationStatus {
        match self.albums.get(&album_id) {
            Some(AlbumSlot::Settled(status)) => *status,
            Some(AlbumSlot::InFlight(_)) | None => MutationStatus::Neutral,
        }
    }

    pub fn action_in_flight(&self, album_id: AlbumId) -> bool {
        matches!(self.albums.get(&album_id), Some(AlbumSlot::InFlight(_)))
    }

    /// Start an album mutation. Returns None -- and the dispatch must not be
    /// issued -- if the album is not on the installed page or already has an
    /// unresolved dispatch. A fresh dispatch resets the display to Neutral.
    pub fn begin_action(&mut self, album_id: AlbumId, action: AlbumAction) -> Option<MutationTicket> {
        match self.albums.get_mut(&album_id) {
            Some(AlbumSlot::InFlight(_)) => {
                debug!("album {} already has a dispatch in flight", album_id);
                None
            }
            Some(slot) => {
                *slot = AlbumSlot::InFlight(action);
                Some(MutationTicket {
                    generation: self.generation,
                    album_id,
                    action,
                })
            }
            None => {
                debug!("album {} is not on the installed page", album_id);
                None
            }
        }
    }

    /// Settle an album mutation. Stale tickets (minted before the last page
    /// install) are ignored.
    pub fn resolve_action(&mut self, ticket: MutationTicket, success: bool) {
        if ticket.generation != self.generation {
            debug!(
                "ignoring stale mutation response for album {}",
                ticket.album_id
            );
            return;
        }
        let Some(slot) = self.albums.get_mut(&ticket.album_id) else {
            return;
        };
        if *slot == AlbumSlot::InFlight(ticket.action) {
            *slot = AlbumSlot::Settled(if success {
                MutationStatus::Confirmed
            } else {
                MutationStatus::Rejected
            });
        }
    }

    pub fn visibility(&self, artist_id: ArtistId) -> ArtistVisibility {
        self.visibility
            .get(&artist_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn review_in_flight(&self, artist_id: ArtistId) -> bool {
        self.reviews_in_flight.contains(&artist_id)
    }

    /// Start a review. Returns None for artists that are off-page, already
    /// hidden, or mid-review.
    pub fn begin_review(&mut self, artist_id: ArtistId) -> Option<ReviewTicket> {
        if !self.artists.contains(&artist_id) {
            debug!("artist {} is not on the installed page", artist_id);
            return None;
        }
        if self.visibility(artist_id) == ArtistVisibility::Hidden {
            debug!("artist {} is already reviewed", artist_id);
            return None;
        }
        if !self.reviews_in_flight.insert(artist_id) {
            debug!("artist {} already has a review in flight", artist_id);
            return None;
        }
        Some(ReviewTicket {
            generation: self.generation,
            artist_id,
        })
    }

    /// Settle a review. Success hides the artist for the rest of the session;
    /// failure leaves it visible with no other display change.
    pub fn resolve_review(&mut self, ticket: ReviewTicket, success: bool) {
        if ticket.generation != self.generation {
            debug!(
                "ignoring stale review response for artist {}",
                ticket.artist_id
            );
            return;
        }
        self.reviews_in_flight.remove(&ticket.artist_id);
        if success {
            self.visibility
                .insert(ticket.artist_id, ArtistVisibility::Hidden);
        }
    }
}
