//! Body rendering: spinner, error banner or card grid.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::artwork::{Thumbnail, ThumbnailBounds};
use crate::pokemon::{capitalize_words, Card, CardGrid, GridItem, RejectedEntry};
use crate::ui::gallery::{ArtworkGallery, ArtworkStatus};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    rgb, CARD_BACKGROUND, CARD_BG, CARD_BORDER, CARD_LABEL, HEADER_TEXT, SPINNER, STATUS_ERROR,
};

use super::state::{Display, ListViewState};

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LOADING_TEXT: &str = "Loading Pokémon...";

/// Number of card columns that fit in `width`, never less than one.
pub fn grid_columns(width: u16, card_width: u16) -> usize {
    usize::from((width / card_width.max(1)).max(1))
}

/// Number of card rows that fit in `height`, never less than one.
pub fn visible_rows(height: u16, card_height: u16) -> usize {
    usize::from((height / card_height.max(1)).max(1))
}

/// Pixel box for artwork inside a card: borders and the label row excluded.
pub fn artwork_bounds(card_width: u16, card_height: u16) -> ThumbnailBounds {
    ThumbnailBounds {
        width: u32::from(card_width.saturating_sub(2)),
        height: u32::from(card_height.saturating_sub(3)) * 2,
    }
}

pub struct ListView<'a> {
    pub state: &'a ListViewState,
    pub grid: &'a CardGrid,
    pub gallery: &'a ArtworkGallery,
    pub spinner_tick: usize,
    pub scroll_row: usize,
    pub card_width: u16,
    pub card_height: u16,
}

pub fn render_list_body(frame: &mut Frame<'_>, area: Rect, view: ListView<'_>) {
    frame.render_widget(view, area);
}

impl Widget for ListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        match self.state.display() {
            Display::Spinner => render_spinner(area, buf, self.spinner_tick),
            Display::Error(message) => render_error(area, buf, message),
            Display::Grid(_) => self.render_grid(area, buf),
        }
    }
}

impl ListView<'_> {
    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let columns = grid_columns(area.width, self.card_width);
        let grid_width = (columns as u16).saturating_mul(self.card_width).min(area.width);
        let left = area.x + (area.width - grid_width) / 2;

        let items = self.grid.items.iter().skip(self.scroll_row * columns);
        for (index, item) in items.enumerate() {
            let row = (index / columns) as u16;
            let col = (index % columns) as u16;
            let y = area.y.saturating_add(row.saturating_mul(self.card_height));
            if y >= area.bottom() {
                break;
            }
            let x = left + col * self.card_width;
            let card_area = Rect {
                x,
                y,
                width: self.card_width,
                height: self.card_height,
            }
            .intersection(area);
            if card_area.is_empty() {
                continue;
            }

            match item {
                GridItem::Card(card) => self.render_card(card, card_area, buf),
                GridItem::Rejected(entry) => render_rejected(entry, card_area, buf),
            }
        }
    }

    fn render_card(&self, card: &Card, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_BORDER))
            .style(Style::default().bg(CARD_BG))
            .title(Line::styled(
                format!("#{}", card.key),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let label_area = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };
        let art_area = Rect {
            height: inner.height - 1,
            ..inner
        };

        match self.gallery.status(&card.image_url) {
            Some(ArtworkStatus::Ready(thumbnail)) => draw_thumbnail(thumbnail, art_area, buf),
            Some(ArtworkStatus::Pending) => {
                let frame = SPINNER_FRAMES[self.spinner_tick % SPINNER_FRAMES.len()];
                render_centered_symbol(frame, Style::default().fg(SPINNER), art_area, buf);
            }
            Some(ArtworkStatus::Missing) => {
                let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
                render_centered_symbol("?", style, art_area, buf);
            }
            None => {}
        }

        Paragraph::new(capitalize_words(&card.label))
            .alignment(Alignment::Center)
            .style(Style::default().fg(CARD_LABEL).add_modifier(Modifier::BOLD))
            .render(label_area, buf);
    }
}

fn render_spinner(area: Rect, buf: &mut Buffer, tick: usize) {
    let frame = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(frame, Style::default().fg(SPINNER)),
        Span::raw(" "),
        Span::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)),
    ]);
    let width = line.width() as u16;
    Paragraph::new(line).render(centered_rect_by_size(area, width, 1), buf);
}

fn render_error(area: Rect, buf: &mut Buffer, message: &str) {
    let banner = centered_rect_by_size(area, area.width.saturating_sub(4), 3);
    Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD))
        .render(banner, buf);
}

fn render_rejected(entry: &RejectedEntry, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(STATUS_ERROR))
        .style(Style::default().bg(CARD_BG))
        .title(Line::styled("#?", Style::default().fg(STATUS_ERROR)));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::styled(
            capitalize_words(&entry.name),
            Style::default().fg(CARD_LABEL).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            entry.error.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn render_centered_symbol(symbol: &str, style: Style, area: Rect, buf: &mut Buffer) {
    let target = centered_rect_by_size(area, 1, 1);
    if target.is_empty() {
        return;
    }
    if let Some(cell) = buf.cell_mut((target.x, target.y)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

/// Draws two pixel rows per cell with upper half blocks.
fn draw_thumbnail(thumbnail: &Thumbnail, area: Rect, buf: &mut Buffer) {
    let cols = thumbnail.width().min(u32::from(area.width)) as u16;
    let rows = thumbnail.height().div_ceil(2).min(u32::from(area.height)) as u16;
    let origin = centered_rect_by_size(area, cols, rows);

    for cy in 0..rows {
        for cx in 0..cols {
            let px = u32::from(cx);
            let top_y = u32::from(cy) * 2;
            let Some(top) = thumbnail.pixel(px, top_y) else {
                continue;
            };
            let bottom = thumbnail.pixel(px, top_y + 1).unwrap_or(CARD_BACKGROUND);
            if let Some(cell) = buf.cell_mut((origin.x + cx, origin.y + cy)) {
                cell.set_symbol("▀").set_fg(rgb(top)).set_bg(rgb(bottom));
            }
        }
    }
}
