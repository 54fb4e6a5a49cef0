use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TITLE_BLUE, TITLE_GREEN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Pokémon List";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// `count` is the number of loaded entries, once there are any.
    pub fn widget(&self, count: Option<usize>) -> Paragraph<'static> {
        let bold = Modifier::BOLD;
        let mut spans = vec![
            Span::raw("  "),
            Span::styled("Pokémon", Style::default().fg(TITLE_BLUE).add_modifier(bold)),
            Span::raw(" "),
            Span::styled("List", Style::default().fg(TITLE_GREEN).add_modifier(bold)),
        ];
        if let Some(count) = count {
            spans.push(Span::styled(
                "  │  ",
                Style::default().fg(HEADER_SEPARATOR),
            ));
            spans.push(Span::styled(
                format!("{count} loaded"),
                Style::default().fg(HEADER_TEXT),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
