use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list::{render_list_body, ListViewState};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let count = matches!(app.list_state(), ListViewState::Loaded { .. }).then(|| app.grid().len());
    frame.render_widget(Header::new().widget(count), header);

    frame.render_widget(Clear, body);
    render_list_body(frame, body, app.list_view());

    frame.render_widget(Footer::new().widget(footer), footer);
}
