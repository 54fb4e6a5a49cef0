use crate::api::ApiClient;
use crate::artwork::ArtworkLoader;
use crate::config::Config;
use crate::error::AppError;
use crate::fetcher::spawn_fetch;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::list::artwork_bounds;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::CARD_BACKGROUND;
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::task::JoinSet;

pub fn run(config: &Config) -> Result<(), AppError> {
    let client = ApiClient::new(&config.api)?;
    let template = config.artwork_template().unwrap_or_default();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let shutdown = ShutdownCoordinator::new();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.handle());

    {
        let signal_tx = events.sender();
        runtime.spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = signal_tx.send(AppEvent::Shutdown);
            }
        });
    }

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(template, &config.ui);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        let body = body_rect(Rect::new(0, 0, cols, rows));
        app.on_resize(body.width.max(1), body.height.max(1));
    }

    // First frame shows the spinner before the request goes out.
    terminal.draw(|frame| draw(frame, &app))?;

    let list_tx = events.sender();
    let fetch = spawn_fetch(runtime.handle(), client.clone(), shutdown.handle(), move |intent| {
        let _ = list_tx.send(AppEvent::List(intent));
    });

    let loader = ArtworkLoader::new(
        client.http().clone(),
        artwork_bounds(config.ui.card_width, config.ui.card_height),
        CARD_BACKGROUND,
    );
    let mut artwork_tasks = JoinSet::new();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                let body = body_rect(Rect::new(0, 0, cols, rows));
                app.on_resize(body.width.max(1), body.height.max(1));
            }
            Ok(AppEvent::List(intent)) => {
                let urls = app.on_list_intent(intent);
                if !urls.is_empty() {
                    let artwork_tx = events.sender();
                    loader.spawn_all(
                        &mut artwork_tasks,
                        runtime.handle(),
                        urls,
                        &shutdown.handle(),
                        move |intent| {
                            let _ = artwork_tx.send(AppEvent::Artwork(intent));
                        },
                    );
                }
            }
            Ok(AppEvent::Artwork(intent)) => app.on_artwork_intent(intent),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Nothing may outlive the view that consumes its results.
    shutdown.signal();
    fetch.abort();
    artwork_tasks.abort_all();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(250));
    Ok(())
}
