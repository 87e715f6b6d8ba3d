use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" Categorias ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from("Lista de categorias."),
        Line::styled(
            "Abra o editor com --categoria-id <id>.",
            Style::default().fg(theme.text_muted),
        ),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(content, area);
}
