//! Background image decoding
//!
//! Card images arrive as raw bytes from the API service (or are read from
//! the placeholder file) and are decoded off the UI loop. The result is
//! sent back tagged with the refresh token of the snapshot it belongs to.

use std::path::PathBuf;

use anyhow::{Context, Result};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use tokio::sync::mpsc;

use crate::error::{ErrorDetail, GalleryError};
use crate::logic::image::{downscale_target, ImageSource};

/// Decoded image (or failure) for one card
pub struct ImageUpdate {
    pub token: u64,
    pub photo_id: String,
    pub source: ImageSource,
    pub result: Result<StatefulProtocol, GalleryError>,
}

/// Decode `bytes` fetched from the API in the background
pub fn spawn_decode(
    picker: Picker,
    token: u64,
    photo_id: String,
    bytes: Vec<u8>,
    update_tx: mpsc::UnboundedSender<ImageUpdate>,
) {
    tokio::spawn(async move {
        let result = decode(picker, bytes).await;
        let _ = update_tx.send(ImageUpdate {
            token,
            photo_id,
            source: ImageSource::Remote,
            result,
        });
    });
}

/// Read and decode the placeholder file in the background
pub fn spawn_placeholder_load(
    picker: Picker,
    token: u64,
    photo_id: String,
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<ImageUpdate>,
) {
    tokio::spawn(async move {
        let result = match tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read placeholder {}", path.display()))
        {
            Ok(bytes) => decode(picker, bytes).await,
            Err(e) => Err(GalleryError::ImageLoad(ErrorDetail::from(&e))),
        };
        let _ = update_tx.send(ImageUpdate {
            token,
            photo_id,
            source: ImageSource::Placeholder,
            result,
        });
    });
}

async fn decode(picker: Picker, bytes: Vec<u8>) -> Result<StatefulProtocol, GalleryError> {
    let decoded = tokio::task::spawn_blocking(move || decode_blocking(&picker, &bytes)).await;

    match decoded {
        Ok(Ok(protocol)) => Ok(protocol),
        Ok(Err(e)) => Err(GalleryError::ImageLoad(ErrorDetail::from(&e))),
        Err(e) => {
            let e = anyhow::Error::new(e).context("Image decode task failed");
            Err(GalleryError::ImageLoad(ErrorDetail::from(&e)))
        }
    }
}

fn decode_blocking(picker: &Picker, bytes: &[u8]) -> Result<StatefulProtocol> {
    let img = image::load_from_memory(bytes).context("Failed to decode image")?;

    let (max_width, max_height) = downscale_target(picker.font_size());
    let img = if img.width() > max_width || img.height() > max_height {
        tracing::trace!(
            width = img.width(),
            height = img.height(),
            "Pre-downscaling card image"
        );
        img.resize(max_width, max_height, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    Ok(picker.new_resize_protocol(img))
}
