//! Refresh cycle
//!
//! fetch → render. Each cycle takes a fresh token; a list result is only
//! applied when its token is still the latest one issued.

use crate::api::Photo;
use crate::model::types::{FetchStatus, Severity};
use crate::services::api::ApiRequest;
use crate::App;

use super::MSG_LOAD_FAILED;

impl App {
    /// Start a refresh cycle
    pub fn refresh(&mut self) {
        let token = self.model.gallery.next_refresh_token();
        tracing::debug!(token, "Refresh requested");
        self.send(ApiRequest::ListPhotos { token });
    }

    /// Apply a list result for refresh `token`
    ///
    /// A failed fetch renders the empty collection and notifies, rather than
    /// leaving the previous snapshot on screen.
    pub(crate) fn apply_list_result(
        &mut self,
        token: u64,
        photos: Result<Vec<Photo>, crate::error::GalleryError>,
    ) {
        if !self.model.gallery.is_current(token) {
            tracing::debug!(
                token,
                latest = self.model.gallery.refresh_token,
                "Discarding stale list result"
            );
            return;
        }

        let photos = match photos {
            Ok(photos) => {
                self.model.gallery.fetch_status = FetchStatus::Loaded {
                    count: photos.len(),
                    at: chrono::Local::now(),
                };
                photos
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load photos");
                self.model.gallery.fetch_status = FetchStatus::Failed {
                    kind: e.kind(),
                    at: chrono::Local::now(),
                };
                self.model.notify(MSG_LOAD_FAILED, Severity::Error);
                Vec::new()
            }
        };

        self.render_snapshot(token, &photos);
    }

    /// Replace the grid with `photos` and start loading their images
    fn render_snapshot(&mut self, token: u64, photos: &[Photo]) {
        let images_enabled = self.images_enabled();
        let base_url = self.base_url().to_string();

        self.image_state_map.clear();
        self.model
            .gallery
            .apply_snapshot(photos, &base_url, images_enabled);

        tracing::debug!(token, count = photos.len(), "Rendered snapshot");

        if images_enabled {
            self.request_card_images(token);
        }
    }
}
