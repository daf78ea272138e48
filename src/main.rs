use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use ratatui_image::picker::{Picker, ProtocolType};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use photogrid::{
    api::GalleryClient,
    config::{self, Config},
    handlers,
    services::{self, ApiResponse},
    ui, utils, App,
};

/// Terminal photo gallery
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/photogrid-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Base URL of the photo collection (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,
}

/// Install the file logger; without --debug nothing is recorded
fn setup_tracing(debug: bool) {
    use std::fs::OpenOptions;

    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    if !debug {
        return;
    }

    let log_path = utils::get_debug_log_path();
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("photogrid=debug,info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// Build the image picker, or `None` when previews are disabled
fn setup_image_picker(config: &Config) -> Option<Picker> {
    if !config.image_preview_enabled {
        tracing::info!("Image preview disabled in config");
        return None;
    }

    let mut picker = match Picker::from_query_stdio() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "Image preview: failed to detect terminal");
            Picker::from_fontsize((8, 16)) // Fallback font size
        }
    };

    let font_size = picker.font_size();
    tracing::debug!(width = font_size.0, height = font_size.1, "Image font size");

    match config.image_protocol.to_lowercase().as_str() {
        "auto" => {}
        "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
        "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
        "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
        "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
        unknown => {
            tracing::warn!(protocol = %unknown, "Image preview: unknown protocol, using auto-detect");
        }
    }

    Some(picker)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_tracing(args.debug);
    tracing::info!("Starting photogrid");

    let mut config = match config::get_config_path(args.config)? {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading config");
            Config::load(&path)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }

    let image_picker = setup_image_picker(&config);

    let client = GalleryClient::new(config.api_url.clone());
    tracing::info!(api_url = %client.base_url(), "Using photo API");
    let (api_tx, api_rx) = services::api::spawn_api_service(client);

    let mut app = App::new(config, api_tx, image_picker);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app, api_rx);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    }

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut api_rx: mpsc::UnboundedReceiver<ApiResponse>,
) -> Result<()> {
    // Initial load
    app.refresh();

    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        app.model.ui.notifier.tick(Instant::now());

        if app.model.ui.should_quit {
            break;
        }

        // Handle API responses (non-blocking)
        while let Ok(response) = api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        app.drain_image_updates();

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key),
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    tracing::info!("Quit requested");
    Ok(())
}
