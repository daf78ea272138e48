//! Upload modal and form submission

use crate::error::GalleryError;
use crate::logic;
use crate::model::types::Severity;
use crate::services::api::ApiRequest;
use crate::App;

use super::{MSG_UPLOAD_FAILED, MSG_UPLOAD_OK};

impl App {
    pub fn open_upload_modal(&mut self) {
        self.model.ui.open_upload_modal();
    }

    pub fn close_upload_modal(&mut self) {
        self.model.ui.close_upload_modal();
    }

    /// Submit the upload form as it is right now
    ///
    /// The form is not touched here; it's only reset once the server
    /// accepted the upload.
    pub fn submit_upload(&mut self) {
        let form = &self.model.ui.upload_form;
        let name = form.name.clone();
        let file_path = logic::file::expand_home(&form.file_path);

        tracing::info!(%name, %file_path, "Submitting upload");
        self.send(ApiRequest::UploadPhoto { name, file_path });
    }

    pub(crate) fn handle_upload_result(&mut self, result: Result<(), GalleryError>) {
        match result {
            Ok(()) => {
                self.model.notify(MSG_UPLOAD_OK, Severity::Success);
                self.close_upload_modal();
                self.model.ui.upload_form.reset();
                self.refresh();
            }
            Err(e) => {
                // Modal and form stay as they are so the user can retry
                tracing::error!(error = %e, "Upload failed");
                self.model.notify(MSG_UPLOAD_FAILED, Severity::Error);
            }
        }
    }
}
