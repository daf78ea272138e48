//! App Orchestration Methods
//!
//! `App` is the controller: it owns the pure `Model`, the sender half of the
//! API service channel, and the runtime-only image state. Methods are kept
//! as `impl App` but organized by functional domain:
//! - refresh: the fetch → render cycle
//! - upload: upload modal and form submission
//! - delete: card delete actions
//! - images: card image loading and placeholder fallback
//!
//! Responses from the API service are handled in `crate::handlers`.

pub(crate) mod delete;
pub(crate) mod images;
pub(crate) mod refresh;
pub(crate) mod upload;

use std::collections::HashMap;

use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::logic::grid::CardAction;
use crate::model::Model;
use crate::services::api::ApiRequest;
use crate::services::images::ImageUpdate;

pub const MSG_LOAD_FAILED: &str = "Falha ao carregar fotos";
pub const MSG_UPLOAD_OK: &str = "Foto enviada com sucesso!";
pub const MSG_UPLOAD_FAILED: &str = "Falha ao enviar foto";
pub const MSG_DELETE_OK: &str = "Foto excluída com sucesso!";
pub const MSG_DELETE_FAILED: &str = "Falha ao excluir foto";

pub struct App {
    pub model: Model,

    config: Config,
    api_tx: mpsc::UnboundedSender<ApiRequest>,
    image_picker: Option<Picker>,
    image_update_tx: mpsc::UnboundedSender<ImageUpdate>,
    image_update_rx: mpsc::UnboundedReceiver<ImageUpdate>,

    /// Decoded card images by photo id (StatefulProtocol is not Clone, so
    /// it stays out of the Model)
    pub image_state_map: HashMap<String, StatefulProtocol>,
}

impl App {
    /// Build the controller around an API request channel
    ///
    /// `image_picker` is `None` when the terminal can't show images or
    /// previews are disabled; cards then show a text placeholder.
    pub fn new(
        config: Config,
        api_tx: mpsc::UnboundedSender<ApiRequest>,
        image_picker: Option<Picker>,
    ) -> Self {
        let (image_update_tx, image_update_rx) = mpsc::unbounded_channel();
        let model = Model::new(config.vim_mode, config.toast_duration());

        Self {
            model,
            config,
            api_tx,
            image_picker,
            image_update_tx,
            image_update_rx,
            image_state_map: HashMap::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL of the photo collection, without trailing slash
    pub fn base_url(&self) -> &str {
        self.config.api_url.trim_end_matches('/')
    }

    pub fn images_enabled(&self) -> bool {
        self.image_picker.is_some()
    }

    /// Run the action a card's control was wired to when it was built
    pub fn perform(&mut self, action: CardAction) {
        match action {
            CardAction::Delete { photo_id } => self.delete_photo(photo_id),
        }
    }

    pub fn quit(&mut self) {
        self.model.ui.should_quit = true;
    }

    fn send(&self, request: ApiRequest) {
        if let Err(e) = self.api_tx.send(request) {
            tracing::error!(request = ?e.0, "API service is gone, request dropped");
        }
    }
}
