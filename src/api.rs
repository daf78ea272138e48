use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorDetail, GalleryError};
use crate::logic;

/// Photo record as returned by the gallery API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Photo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct PicturesResponse {
    #[serde(default)]
    pictures: Vec<Photo>,
}

/// Parse a list response body, treating a missing `pictures` field as empty
pub fn parse_pictures(body: &str) -> Result<Vec<Photo>> {
    let response: PicturesResponse =
        serde_json::from_str(body).context("Failed to parse pictures response")?;
    Ok(response.pictures)
}

/// Everything needed to send one multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub name: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct GalleryClient {
    base_url: String,
    client: Client,
}

impl GalleryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single photo resource: `{base}/{id}`
    pub fn photo_url(&self, photo_id: &str) -> String {
        photo_url(&self.base_url, photo_id)
    }

    /// URL the image bytes of a photo are served from: `{base}/{id}/image`
    pub fn image_url(&self, photo_id: &str) -> String {
        image_url(&self.base_url, photo_id)
    }

    pub async fn list_photos(&self) -> Result<Vec<Photo>, GalleryError> {
        self.try_list_photos()
            .await
            .map_err(|e| GalleryError::Fetch(ErrorDetail::from(&e)))
    }

    async fn try_list_photos(&self) -> Result<Vec<Photo>> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .context("Failed to request photo list")?
            .error_for_status()?;

        let body = response.text().await.context("Failed to read photo list")?;
        parse_pictures(&body)
    }

    pub async fn upload_photo(&self, payload: UploadPayload) -> Result<(), GalleryError> {
        self.try_upload_photo(payload)
            .await
            .map_err(|e| GalleryError::Upload(ErrorDetail::from(&e)))
    }

    async fn try_upload_photo(&self, payload: UploadPayload) -> Result<()> {
        let file_part = Part::bytes(payload.bytes)
            .file_name(payload.file_name)
            .mime_str(&payload.mime_type)?;

        let form = Form::new()
            .text("name", payload.name)
            .part("file", file_part);

        self.client
            .post(&self.base_url)
            .multipart(form)
            .send()
            .await
            .context("Failed to send upload")?
            .error_for_status()?;

        Ok(())
    }

    pub async fn delete_photo(&self, photo_id: &str) -> Result<(), GalleryError> {
        self.try_delete_photo(photo_id)
            .await
            .map_err(|e| GalleryError::Delete(ErrorDetail::from(&e)))
    }

    async fn try_delete_photo(&self, photo_id: &str) -> Result<()> {
        self.client
            .delete(self.photo_url(photo_id))
            .send()
            .await
            .context("Failed to send delete")?
            .error_for_status()?;

        Ok(())
    }

    pub async fn fetch_image(&self, photo_id: &str) -> Result<Vec<u8>, GalleryError> {
        self.try_fetch_image(photo_id)
            .await
            .map_err(|e| GalleryError::ImageLoad(ErrorDetail::from(&e)))
    }

    async fn try_fetch_image(&self, photo_id: &str) -> Result<Vec<u8>> {
        let bytes = self
            .client
            .get(self.image_url(photo_id))
            .send()
            .await
            .context("Failed to request image")?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(bytes.to_vec())
    }
}

/// Build `{base}/{id}`, percent-encoding the id so it stays one path segment
pub fn photo_url(base_url: &str, photo_id: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(photo_id)
    )
}

pub fn image_url(base_url: &str, photo_id: &str) -> String {
    format!("{}/image", photo_url(base_url, photo_id))
}

/// Read a file from disk and turn it into an upload payload
pub async fn read_upload_payload(name: String, file_path: &str) -> Result<UploadPayload, GalleryError> {
    let path = std::path::Path::new(file_path);
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read upload file {}", file_path))
        .map_err(|e| GalleryError::Upload(ErrorDetail::from(&e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string());

    Ok(UploadPayload {
        name,
        mime_type: logic::file::mime_type_for(&file_name).to_string(),
        file_name,
        bytes,
    })
}
