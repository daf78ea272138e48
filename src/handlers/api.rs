//! API Response Handler
//!
//! Handles responses from the gallery API background service and routes
//! them to the matching controller flow.

use crate::services::api::ApiResponse;
use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - ListResult: photo list for one refresh cycle (stale tokens dropped)
/// - UploadResult: outcome of the upload form submission
/// - DeleteResult: outcome of a card's delete action
/// - ImageResult: image bytes for one card
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ListResult { token, photos } => {
            app.apply_list_result(token, photos);
        }

        ApiResponse::UploadResult { result } => {
            app.handle_upload_result(result);
        }

        ApiResponse::DeleteResult { photo_id, result } => {
            app.handle_delete_result(&photo_id, result);
        }

        ApiResponse::ImageResult {
            token,
            photo_id,
            bytes,
        } => {
            app.handle_image_result(token, photo_id, bytes);
        }
    }
}
