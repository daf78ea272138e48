//! Gallery Model
//!
//! The current grid snapshot plus the bookkeeping of the refresh cycle.
//! Every list request is tagged with a refresh token; only the response to
//! the latest issued token is ever applied.

use std::collections::HashMap;

use super::types::{CardImageState, FetchStatus};
use crate::api::Photo;
use crate::logic;
use crate::logic::grid::{GridContent, PhotoCard};
use crate::logic::image::ImageSource;

#[derive(Clone, Debug)]
pub struct GalleryModel {
    /// Cards of the last applied snapshot
    pub grid: GridContent,

    /// Selected card index
    pub selected: Option<usize>,

    /// Latest refresh token handed out
    pub refresh_token: u64,

    /// Outcome of the latest applied list request
    pub fetch_status: FetchStatus,

    /// Image state per photo id, rebuilt on every snapshot
    pub card_images: HashMap<String, CardImageState>,
}

impl GalleryModel {
    pub fn new() -> Self {
        Self {
            grid: GridContent::Empty,
            selected: None,
            refresh_token: 0,
            fetch_status: FetchStatus::Idle,
            card_images: HashMap::new(),
        }
    }

    /// Hand out a new refresh token, superseding all earlier ones
    pub fn next_refresh_token(&mut self) -> u64 {
        self.refresh_token += 1;
        self.fetch_status = FetchStatus::Loading;
        self.refresh_token
    }

    /// Whether a response tagged with `token` may still be applied
    pub fn is_current(&self, token: u64) -> bool {
        token == self.refresh_token
    }

    /// Replace the displayed snapshot
    ///
    /// Discards the previous cards and image states entirely. The selection
    /// keeps its index when it still fits.
    pub fn apply_snapshot(&mut self, photos: &[Photo], base_url: &str, images_enabled: bool) {
        self.grid = logic::grid::build_grid(photos, base_url);
        self.selected = logic::navigation::clamp_selection(self.selected, self.grid.len());

        let initial = if images_enabled {
            CardImageState::Loading(ImageSource::Remote)
        } else {
            CardImageState::Disabled
        };
        self.card_images = self
            .grid
            .cards()
            .iter()
            .map(|card| (card.photo_id.clone(), initial))
            .collect();
    }

    pub fn cards(&self) -> &[PhotoCard] {
        self.grid.cards()
    }

    pub fn selected_card(&self) -> Option<&PhotoCard> {
        self.selected.and_then(|idx| self.grid.cards().get(idx))
    }

    pub fn card_image(&self, photo_id: &str) -> CardImageState {
        self.card_images
            .get(photo_id)
            .copied()
            .unwrap_or(CardImageState::Disabled)
    }

    /// Update a card's image state; ignored for cards not in the snapshot
    pub fn set_card_image(&mut self, photo_id: &str, state: CardImageState) {
        if let Some(slot) = self.card_images.get_mut(photo_id) {
            *slot = state;
        }
    }
}

impl Default for GalleryModel {
    fn default() -> Self {
        Self::new()
    }
}
