use std::collections::VecDeque;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{self, GalleryClient, Photo};
use crate::error::GalleryError;
use crate::utils;

/// API request types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// List all photos for the refresh cycle tagged `token`
    ListPhotos { token: u64 },

    /// Read `file_path` from disk and upload it as `name`
    UploadPhoto { name: String, file_path: String },

    DeletePhoto { photo_id: String },

    /// Fetch the image bytes of one card rendered by refresh `token`
    FetchImage { token: u64, photo_id: String },
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ListResult {
        token: u64,
        photos: Result<Vec<Photo>, GalleryError>,
    },

    UploadResult {
        result: Result<(), GalleryError>,
    },

    DeleteResult {
        photo_id: String,
        result: Result<(), GalleryError>,
    },

    ImageResult {
        token: u64,
        photo_id: String,
        bytes: Result<Vec<u8>, GalleryError>,
    },
}

/// Internal message for tracking completed image fetches
pub(crate) enum InternalMessage {
    ImageCompleted,
}

/// API service worker that processes requests in the background
///
/// List, upload and delete requests are dispatched as soon as they arrive.
/// Only image fetches wait in the queue, bounded by `max_image_concurrent`.
pub struct ApiService {
    client: GalleryClient,
    image_queue: VecDeque<ApiRequest>,
    images_in_flight: usize,
    /// Token of the newest list request seen; image fetches for older
    /// refresh cycles are dropped
    latest_list_token: u64,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_image_concurrent: usize,
}

impl ApiService {
    pub(crate) fn new(
        client: GalleryClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            image_queue: VecDeque::new(),
            images_in_flight: 0,
            latest_list_token: 0,
            response_tx,
            completion_tx,
            max_image_concurrent: 8, // Limit concurrent image downloads
        }
    }

    /// Dispatch a request, or queue it if it is an image fetch
    fn enqueue(&mut self, request: ApiRequest) {
        match request {
            ApiRequest::FetchImage { token, ref photo_id }
                if token < self.latest_list_token =>
            {
                tracing::trace!(token, %photo_id, "Dropping image fetch for replaced snapshot");
            }
            ApiRequest::FetchImage { .. } => self.image_queue.push_back(request),
            ApiRequest::ListPhotos { token } => {
                self.latest_list_token = self.latest_list_token.max(token);
                let latest = self.latest_list_token;
                let before = self.image_queue.len();
                self.image_queue.retain(|queued| {
                    !matches!(queued, ApiRequest::FetchImage { token, .. } if *token < latest)
                });
                let dropped = before - self.image_queue.len();
                if dropped > 0 {
                    tracing::debug!(dropped, token, "Dropped queued image fetches");
                }
                self.dispatch(request, false);
            }
            ApiRequest::UploadPhoto { .. } | ApiRequest::DeletePhoto { .. } => {
                self.dispatch(request, false)
            }
        }
    }

    /// Start the next queued image fetch if a slot is free
    fn process_next(&mut self) {
        if self.images_in_flight >= self.max_image_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some(request) = self.image_queue.pop_front() else {
            return; // Queue is empty
        };

        self.images_in_flight += 1;
        self.dispatch(request, true);
    }

    fn dispatch(&self, request: ApiRequest, counted: bool) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // Each request runs independently; nothing is retried
        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);
            if counted {
                let _ = completion_tx.send(InternalMessage::ImageCompleted);
            }
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &GalleryClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::ListPhotos { token } => {
                tracing::debug!(token, "Listing photos");
                let photos = client.list_photos().await;
                ApiResponse::ListResult { token, photos }
            }

            ApiRequest::UploadPhoto { name, file_path } => {
                tracing::debug!(%name, %file_path, "Uploading photo");
                let result = match api::read_upload_payload(name, &file_path).await {
                    Ok(payload) => {
                        tracing::debug!(
                            size = %utils::format_bytes(payload.bytes.len() as u64),
                            mime = %payload.mime_type,
                            "Upload payload read"
                        );
                        client.upload_photo(payload).await
                    }
                    Err(e) => Err(e),
                };
                ApiResponse::UploadResult { result }
            }

            ApiRequest::DeletePhoto { photo_id } => {
                tracing::debug!(%photo_id, "Deleting photo");
                let result = client.delete_photo(&photo_id).await;
                ApiResponse::DeleteResult { photo_id, result }
            }

            ApiRequest::FetchImage { token, photo_id } => {
                let bytes = client.fetch_image(&photo_id).await;
                ApiResponse::ImageResult {
                    token,
                    photo_id,
                    bytes,
                }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: GalleryClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing the image queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        // App dropped its sender: shut down
                        None => break,
                    }
                }

                Some(InternalMessage::ImageCompleted) = completion_rx.recv() => {
                    service.images_in_flight = service.images_in_flight.saturating_sub(1);
                }

                _ = tick.tick() => {
                    while !service.image_queue.is_empty()
                        && service.images_in_flight < service.max_image_concurrent
                    {
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
