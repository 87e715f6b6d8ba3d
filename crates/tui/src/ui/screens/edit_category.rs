use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    app::editor::{CategoryEditor, Field, Phase},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, editor: &CategoryEditor, theme: &Theme) {
    let title = match editor.loaded().and_then(|category| category.id) {
        Some(id) => format!(" Editar Categoria #{id} "),
        None => " Editar Categoria ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status
            Constraint::Min(0),
            Constraint::Length(1), // Actions
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Nome da Categoria",
            Style::default().fg(theme.text_muted),
        )),
        rows[0],
    );

    let focused = matches!(editor.phase(), Phase::Editing | Phase::Loading);
    render_input(
        frame,
        rows[1],
        editor.form().value(Field::Nome),
        focused,
        theme,
    );

    if let Some(status) = status_line(editor) {
        frame.render_widget(
            Paragraph::new(Span::styled(status, Style::default().fg(theme.text_muted))),
            rows[2],
        );
    }

    let actions = Line::from(vec![
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" Cancelar   "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" Salvar"),
    ]);
    frame.render_widget(
        Paragraph::new(actions).alignment(Alignment::Right),
        rows[4],
    );
}

fn status_line(editor: &CategoryEditor) -> Option<&'static str> {
    match editor.phase() {
        Phase::Loading => Some("Carregando categoria…"),
        Phase::Submitting => Some("Salvando…"),
        Phase::Done => Some("Voltando para a lista…"),
        Phase::Editing if editor.is_new() => Some("Nova categoria"),
        Phase::Editing | Phase::Failed => None,
    }
}

fn render_input(frame: &mut Frame<'_>, area: Rect, value: &str, focused: bool, theme: &Theme) {
    let border = if focused { theme.accent } else { theme.border };
    let cursor = if focused { "│" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let content = Line::from(vec![
        Span::styled(
            value.to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ]);
    frame.render_widget(Paragraph::new(content).block(block), area);
}
