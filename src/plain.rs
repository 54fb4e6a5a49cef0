//! Non-interactive mode: one fetch cycle, final view printed as text.

use std::io::Write;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::AppError;
use crate::fetcher::run_fetch;
use crate::pokemon::{capitalize_words, render_cards, ArtworkTemplate, GridItem};
use crate::ui::header::TITLE;
use crate::ui::list::{Display, ListReducer, ListViewState};
use crate::ui::mvi::dispatch;

/// Runs one fetch cycle and folds its intents into a view state.
pub async fn fetch_view_state(client: &ApiClient) -> ListViewState {
    let mut state = ListViewState::default();
    run_fetch(client, |intent| dispatch::<ListReducer>(&mut state, intent)).await;
    state
}

/// Text form of the view: title, then the error or one line per card.
pub fn render_plain(state: &ListViewState, template: &ArtworkTemplate) -> String {
    let mut out = format!("{TITLE}\n");
    match state.display() {
        Display::Spinner => out.push_str("Loading...\n"),
        Display::Error(message) => {
            out.push_str(message);
            out.push('\n');
        }
        Display::Grid(results) => {
            for item in render_cards(results, template).items {
                let line = match item {
                    GridItem::Card(card) => format!(
                        "#{}  {}  {}",
                        card.key,
                        capitalize_words(&card.label),
                        card.image_url
                    ),
                    GridItem::Rejected(entry) => {
                        format!("!  {}  {}", entry.name, entry.error)
                    }
                };
                out.push_str(&line);
                out.push('\n');
            }
        }
    }
    out
}

/// Returns `false` when the fetch failed.
pub fn run_plain(config: &Config, out: &mut impl Write) -> Result<bool, AppError> {
    let client = ApiClient::new(&config.api)?;
    let template = config.artwork_template().unwrap_or_default();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let state = runtime.block_on(fetch_view_state(&client));
    out.write_all(render_plain(&state, &template).as_bytes())?;
    out.flush()?;
    Ok(state.error_message().is_none())
}
