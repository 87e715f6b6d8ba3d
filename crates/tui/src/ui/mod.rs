pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, route::Route};

use components::hints::{self, common};

use theme::Theme;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();
    let banner_height = components::banner::height(&state.banners);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Info bar
            Constraint::Length(banner_height), // Banners
            Constraint::Min(0),                // Screen
            Constraint::Length(1),             // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::banner::render(frame, layout[1], &state.banners, &theme);

    match (&state.route, state.editor.as_ref()) {
        (Route::EditCategory { .. }, Some(editor)) => {
            screens::edit_category::render(frame, layout[2], editor, &theme)
        }
        _ => screens::categories::render(frame, layout[2], &theme),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("Servidor", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.base_url)),
        Span::styled("Rota", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}", state.route.path())),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = match state.route {
        Route::EditCategory { .. } => common::category_form(),
        Route::Categories => common::listing(),
    };
    let bar = Paragraph::new(Line::from(hints::hints_to_spans(&hints, theme)));
    frame.render_widget(bar, area);
}
