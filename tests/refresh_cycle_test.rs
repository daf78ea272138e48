//! Refresh cycle tests
//!
//! Every refresh takes a new token and only the list result carrying the
//! latest token is applied. Responses are fed in through the same handler
//! the main loop uses, in whatever order the test needs.

use photogrid::api::Photo;
use photogrid::config::Config;
use photogrid::error::{ErrorDetail, GalleryError};
use photogrid::handlers::handle_api_response;
use photogrid::logic::errors::ErrorType;
use photogrid::logic::grid::{CardAction, GridContent, EMPTY_GRID_MESSAGE};
use photogrid::model::types::{CardImageState, FetchStatus, Severity};
use photogrid::services::{ApiRequest, ApiResponse};
use photogrid::App;
use tokio::sync::mpsc;

fn new_app() -> (App, mpsc::UnboundedReceiver<ApiRequest>) {
    let (api_tx, api_rx) = mpsc::unbounded_channel();
    let app = App::new(Config::default(), api_tx, None);
    (app, api_rx)
}

fn photo(id: &str, name: &str) -> Photo {
    Photo {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn list_token(request: ApiRequest) -> u64 {
    match request {
        ApiRequest::ListPhotos { token } => token,
        other => panic!("expected ListPhotos, got {:?}", other),
    }
}

fn fetch_failure() -> GalleryError {
    GalleryError::Fetch(ErrorDetail::new(
        ErrorType::ConnectionRefused,
        "connection refused",
    ))
}

#[test]
fn test_single_photo_renders_one_card() {
    let (mut app, mut api_rx) = new_app();

    app.refresh();
    let token = list_token(api_rx.try_recv().unwrap());

    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token,
            photos: Ok(vec![photo("1", "Cat")]),
        },
    );

    let cards = app.model.gallery.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Cat");
    assert_eq!(
        cards[0].image_url,
        "http://localhost:4000/pictures/1/image"
    );
    assert_eq!(
        cards[0].action,
        CardAction::Delete {
            photo_id: "1".to_string()
        }
    );
    assert!(matches!(
        app.model.gallery.fetch_status,
        FetchStatus::Loaded { count: 1, .. }
    ));
}

#[test]
fn test_empty_collection_shows_placeholder_state() {
    let (mut app, mut api_rx) = new_app();

    app.refresh();
    let token = list_token(api_rx.try_recv().unwrap());
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token,
            photos: Ok(vec![]),
        },
    );

    assert_eq!(app.model.gallery.grid, GridContent::Empty);
    assert_eq!(app.model.gallery.selected, None);
    assert_eq!(EMPTY_GRID_MESSAGE, "Nenhuma foto encontrada");
}

#[test]
fn test_each_refresh_issues_a_newer_token() {
    let (mut app, mut api_rx) = new_app();

    app.refresh();
    app.refresh();
    app.refresh();

    let tokens: Vec<u64> = (0..3)
        .map(|_| list_token(api_rx.try_recv().unwrap()))
        .collect();
    assert!(tokens[0] < tokens[1] && tokens[1] < tokens[2]);
    assert!(app.model.gallery.is_current(tokens[2]));
    assert!(!app.model.gallery.is_current(tokens[0]));
}

#[test]
fn test_out_of_order_results_keep_latest_snapshot() {
    let (mut app, mut api_rx) = new_app();

    app.refresh();
    let first = list_token(api_rx.try_recv().unwrap());
    app.refresh();
    let second = list_token(api_rx.try_recv().unwrap());

    // Newer request answers first
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token: second,
            photos: Ok(vec![photo("2", "Dog"), photo("3", "Bird")]),
        },
    );
    // Older one arrives late and must be ignored
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token: first,
            photos: Ok(vec![photo("1", "Cat")]),
        },
    );

    let names: Vec<&str> = app
        .model
        .gallery
        .cards()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Dog", "Bird"]);
}

#[test]
fn test_stale_failure_does_not_notify() {
    let (mut app, mut api_rx) = new_app();

    app.refresh();
    let first = list_token(api_rx.try_recv().unwrap());
    app.refresh();
    let second = list_token(api_rx.try_recv().unwrap());

    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token: second,
            photos: Ok(vec![photo("1", "Cat")]),
        },
    );
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token: first,
            photos: Err(fetch_failure()),
        },
    );

    assert!(app.model.ui.notifier.current().is_none());
    assert_eq!(app.model.gallery.cards().len(), 1);
}

#[test]
fn test_fetch_failure_renders_empty_and_notifies() {
    let (mut app, mut api_rx) = new_app();

    // A populated grid first
    app.refresh();
    let token = list_token(api_rx.try_recv().unwrap());
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token,
            photos: Ok(vec![photo("1", "Cat")]),
        },
    );

    app.refresh();
    let token = list_token(api_rx.try_recv().unwrap());
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token,
            photos: Err(fetch_failure()),
        },
    );

    assert!(app.model.gallery.grid.is_empty());
    let toast = app.model.ui.notifier.current().expect("toast shown");
    assert_eq!(toast.message, "Falha ao carregar fotos");
    assert_eq!(toast.severity, Severity::Error);
    assert!(matches!(
        app.model.gallery.fetch_status,
        FetchStatus::Failed {
            kind: ErrorType::ConnectionRefused,
            ..
        }
    ));
}

#[test]
fn test_selection_survives_refresh_when_it_fits() {
    let (mut app, mut api_rx) = new_app();

    app.refresh();
    let token = list_token(api_rx.try_recv().unwrap());
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token,
            photos: Ok(vec![photo("1", "Cat"), photo("2", "Dog"), photo("3", "Bird")]),
        },
    );
    app.model.gallery.selected = Some(2);

    app.refresh();
    let token = list_token(api_rx.try_recv().unwrap());
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token,
            photos: Ok(vec![photo("1", "Cat"), photo("2", "Dog")]),
        },
    );

    assert_eq!(app.model.gallery.selected, Some(1));
}

#[test]
fn test_no_image_requests_without_picker() {
    let (mut app, mut api_rx) = new_app();

    app.refresh();
    let token = list_token(api_rx.try_recv().unwrap());
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token,
            photos: Ok(vec![photo("1", "Cat")]),
        },
    );

    assert!(api_rx.try_recv().is_err());
}

#[test]
fn test_failed_image_without_placeholder_is_unavailable() {
    let (mut app, mut api_rx) = new_app();

    app.refresh();
    let first = list_token(api_rx.try_recv().unwrap());
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token: first,
            photos: Ok(vec![photo("1", "Cat")]),
        },
    );
    let image_error = || {
        GalleryError::ImageLoad(ErrorDetail::new(ErrorType::NotFound, "404 Not Found"))
    };

    app.refresh();
    let second = list_token(api_rx.try_recv().unwrap());
    handle_api_response(
        &mut app,
        ApiResponse::ListResult {
            token: second,
            photos: Ok(vec![photo("1", "Cat")]),
        },
    );

    // Belongs to the replaced snapshot
    handle_api_response(
        &mut app,
        ApiResponse::ImageResult {
            token: first,
            photo_id: "1".to_string(),
            bytes: Err(image_error()),
        },
    );
    assert_eq!(app.model.gallery.card_image("1"), CardImageState::Disabled);

    handle_api_response(
        &mut app,
        ApiResponse::ImageResult {
            token: second,
            photo_id: "1".to_string(),
            bytes: Err(image_error()),
        },
    );
    assert_eq!(app.model.gallery.card_image("1"), CardImageState::Unavailable);
    // Image failures are never toasted
    assert!(app.model.ui.notifier.current().is_none());
}
