//! Card delete actions

use crate::error::GalleryError;
use crate::model::types::Severity;
use crate::services::api::ApiRequest;
use crate::App;

use super::{MSG_DELETE_FAILED, MSG_DELETE_OK};

impl App {
    pub fn delete_photo(&mut self, photo_id: String) {
        tracing::info!(%photo_id, "Deleting photo");
        self.send(ApiRequest::DeletePhoto { photo_id });
    }

    pub(crate) fn handle_delete_result(&mut self, photo_id: &str, result: Result<(), GalleryError>) {
        match result {
            Ok(()) => {
                tracing::debug!(%photo_id, "Photo deleted");
                self.model.notify(MSG_DELETE_OK, Severity::Success);
                self.refresh();
            }
            Err(e) => {
                // The grid is not refreshed on failure; the card stays visible
                tracing::error!(%photo_id, error = %e, "Delete failed");
                self.model.notify(MSG_DELETE_FAILED, Severity::Error);
            }
        }
    }
}
