//! Card image loading
//!
//! Bytes come from the API service, decoding happens in
//! `services::images`, and failures walk the fallback chain in
//! `logic::image` (remote → placeholder → unavailable).

use crate::error::GalleryError;
use crate::logic::image::{next_source, ImageSource};
use crate::model::types::CardImageState;
use crate::services::api::ApiRequest;
use crate::services::images::{self, ImageUpdate};
use crate::App;

impl App {
    /// Queue an image fetch for every card of snapshot `token`
    pub(crate) fn request_card_images(&mut self, token: u64) {
        let ids: Vec<String> = self
            .model
            .gallery
            .cards()
            .iter()
            .map(|card| card.photo_id.clone())
            .collect();

        for photo_id in ids {
            self.send(ApiRequest::FetchImage { token, photo_id });
        }
    }

    /// Bytes (or a failure) for one card arrived from the API service
    pub(crate) fn handle_image_result(
        &mut self,
        token: u64,
        photo_id: String,
        bytes: Result<Vec<u8>, GalleryError>,
    ) {
        if !self.model.gallery.is_current(token) {
            return; // Snapshot was replaced while the image was in flight
        }

        match (bytes, self.image_picker.clone()) {
            (Ok(bytes), Some(picker)) => {
                images::spawn_decode(
                    picker,
                    token,
                    photo_id,
                    bytes,
                    self.image_update_tx.clone(),
                );
            }
            (Ok(_), None) => {
                self.model
                    .gallery
                    .set_card_image(&photo_id, CardImageState::Disabled);
            }
            (Err(e), _) => self.image_failed(token, &photo_id, ImageSource::Remote, &e),
        }
    }

    /// Apply decoded images sent back by the decode tasks (non-blocking)
    pub fn drain_image_updates(&mut self) {
        while let Ok(update) = self.image_update_rx.try_recv() {
            self.handle_image_update(update);
        }
    }

    fn handle_image_update(&mut self, update: ImageUpdate) {
        let ImageUpdate {
            token,
            photo_id,
            source,
            result,
        } = update;

        if !self.model.gallery.is_current(token) {
            return;
        }

        match result {
            Ok(protocol) => {
                self.image_state_map.insert(photo_id.clone(), protocol);
                self.model
                    .gallery
                    .set_card_image(&photo_id, CardImageState::Ready(source));
            }
            Err(e) => self.image_failed(token, &photo_id, source, &e),
        }
    }

    /// Move a card to its next image source, or give up on it
    pub(crate) fn image_failed(
        &mut self,
        token: u64,
        photo_id: &str,
        failed: ImageSource,
        error: &GalleryError,
    ) {
        tracing::debug!(%photo_id, ?failed, %error, "Card image failed");

        let placeholder = self.config.placeholder_image.clone();
        let next = next_source(failed, placeholder.is_some());

        match (next, placeholder, self.image_picker.clone()) {
            (Some(ImageSource::Placeholder), Some(path), Some(picker)) => {
                self.model.gallery.set_card_image(
                    photo_id,
                    CardImageState::Loading(ImageSource::Placeholder),
                );
                images::spawn_placeholder_load(
                    picker,
                    token,
                    photo_id.to_string(),
                    path,
                    self.image_update_tx.clone(),
                );
            }
            _ => {
                self.model
                    .gallery
                    .set_card_image(photo_id, CardImageState::Unavailable);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui_image::picker::Picker;
    use tokio::sync::mpsc;

    use super::*;
    use crate::api::Photo;
    use crate::config::Config;
    use crate::error::ErrorDetail;
    use crate::logic::errors::ErrorType;

    #[tokio::test]
    async fn test_broken_placeholder_settles_on_unavailable() {
        let mut placeholder = std::env::temp_dir();
        placeholder.push(format!("photogrid-placeholder-{}.png", std::process::id()));
        tokio::fs::write(&placeholder, b"not an image").await.unwrap();

        let config = Config {
            placeholder_image: Some(placeholder.clone()),
            ..Config::default()
        };
        let (api_tx, mut api_rx) = mpsc::unbounded_channel();
        let mut app = App::new(config, api_tx, Some(Picker::from_fontsize((8, 16))));

        app.refresh();
        let Ok(ApiRequest::ListPhotos { token }) = api_rx.try_recv() else {
            panic!("expected a list request");
        };
        app.apply_list_result(
            token,
            Ok(vec![Photo {
                id: "1".to_string(),
                name: "Cat".to_string(),
            }]),
        );
        assert!(matches!(
            api_rx.try_recv(),
            Ok(ApiRequest::FetchImage { photo_id, .. }) if photo_id == "1"
        ));

        app.handle_image_result(
            token,
            "1".to_string(),
            Err(GalleryError::ImageLoad(ErrorDetail::new(
                ErrorType::NotFound,
                "404 Not Found",
            ))),
        );
        assert_eq!(
            app.model.gallery.card_image("1"),
            CardImageState::Loading(ImageSource::Placeholder)
        );

        let update = tokio::time::timeout(Duration::from_secs(5), app.image_update_rx.recv())
            .await
            .expect("placeholder load finished")
            .expect("update channel open");
        assert_eq!(update.source, ImageSource::Placeholder);
        assert!(update.result.is_err());
        app.handle_image_update(update);

        assert_eq!(
            app.model.gallery.card_image("1"),
            CardImageState::Unavailable
        );
        // The chain ends here: no second placeholder load and no refetch
        assert!(
            tokio::time::timeout(Duration::from_millis(200), app.image_update_rx.recv())
                .await
                .is_err()
        );
        assert!(api_rx.try_recv().is_err());

        let _ = tokio::fs::remove_file(&placeholder).await;
    }
}
