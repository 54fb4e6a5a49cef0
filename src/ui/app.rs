use crate::config::UiConfig;
use crate::pokemon::{render_cards, ArtworkTemplate, CardGrid};
use crate::ui::gallery::{ArtworkGallery, ArtworkIntent, ArtworkReducer};
use crate::ui::list::{grid_columns, visible_rows, ListIntent, ListReducer, ListView, ListViewState};
use crate::ui::mvi::dispatch;
use crossterm::event::{KeyCode, KeyEvent};

pub struct App {
    should_quit: bool,
    /// List view state (MVI pattern).
    list: ListViewState,
    /// Artwork per image URL (MVI pattern).
    gallery: ArtworkGallery,
    /// Cards derived from the loaded list; empty otherwise.
    grid: CardGrid,
    template: ArtworkTemplate,
    artwork_enabled: bool,
    card_width: u16,
    card_height: u16,
    spinner_tick: usize,
    scroll_row: usize,
    body_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(template: ArtworkTemplate, ui: &UiConfig) -> Self {
        Self {
            should_quit: false,
            list: ListViewState::default(),
            gallery: ArtworkGallery::default(),
            grid: CardGrid::default(),
            template,
            artwork_enabled: ui.artwork,
            card_width: ui.card_width,
            card_height: ui.card_height,
            spinner_tick: 0,
            scroll_row: 0,
            body_size: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn list_state(&self) -> &ListViewState {
        &self.list
    }

    pub fn grid(&self) -> &CardGrid {
        &self.grid
    }

    pub fn gallery(&self) -> &ArtworkGallery {
        &self.gallery
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    pub fn list_view(&self) -> ListView<'_> {
        ListView {
            state: &self.list,
            grid: &self.grid,
            gallery: &self.gallery,
            spinner_tick: self.spinner_tick,
            scroll_row: self.scroll_row,
            card_width: self.card_width,
            card_height: self.card_height,
        }
    }

    pub fn on_tick(&mut self) {
        if self.list.is_loading() || self.gallery.pending_count() > 0 {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Body size in cells.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.body_size = Some((cols, rows));
        self.scroll_row = self.scroll_row.min(self.max_scroll());
    }

    /// Applies a fetch cycle event.
    ///
    /// Returns the artwork URLs that should be downloaded now. They are
    /// already marked pending in the gallery.
    pub fn on_list_intent(&mut self, intent: ListIntent) -> Vec<String> {
        let was_loaded = matches!(self.list, ListViewState::Loaded { .. });
        dispatch::<ListReducer>(&mut self.list, intent);
        let is_loaded = matches!(self.list, ListViewState::Loaded { .. });

        if !is_loaded {
            if was_loaded {
                self.grid = CardGrid::default();
                self.scroll_row = 0;
            }
            return Vec::new();
        }
        if was_loaded {
            // Loaded content never changes in place.
            return Vec::new();
        }

        self.grid = render_cards(self.list.results(), &self.template);
        self.scroll_row = 0;
        if !self.artwork_enabled {
            return Vec::new();
        }

        let mut urls: Vec<String> = Vec::new();
        for card in self.grid.cards() {
            if !self.gallery.contains(&card.image_url) && !urls.contains(&card.image_url) {
                urls.push(card.image_url.clone());
            }
        }
        if !urls.is_empty() {
            dispatch::<ArtworkReducer>(
                &mut self.gallery,
                ArtworkIntent::Requested { urls: urls.clone() },
            );
        }
        urls
    }

    pub fn on_artwork_intent(&mut self, intent: ArtworkIntent) {
        dispatch::<ArtworkReducer>(&mut self.gallery, intent);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let page = self.page_rows();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_to(self.scroll_row.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_to(self.scroll_row + 1),
            KeyCode::PageUp => self.scroll_to(self.scroll_row.saturating_sub(page)),
            KeyCode::PageDown => self.scroll_to(self.scroll_row + page),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(usize::MAX),
            _ => {}
        }
    }

    fn scroll_to(&mut self, row: usize) {
        self.scroll_row = row.min(self.max_scroll());
    }

    fn page_rows(&self) -> usize {
        self.body_size
            .map(|(_, rows)| visible_rows(rows, self.card_height))
            .unwrap_or(1)
    }

    fn max_scroll(&self) -> usize {
        let Some((cols, rows)) = self.body_size else {
            return 0;
        };
        let columns = grid_columns(cols, self.card_width);
        let total_rows = self.grid.len().div_ceil(columns);
        total_rows.saturating_sub(visible_rows(rows, self.card_height))
    }
}
