use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    app::banner::{Banner, BannerKind, Banners},
    ui::theme::Theme,
};

const BANNER_HEIGHT: u16 = 3;

/// Rows needed to show every visible banner.
pub fn height(banners: &Banners) -> u16 {
    banners.iter().count() as u16 * BANNER_HEIGHT
}

pub fn render(frame: &mut Frame<'_>, area: Rect, banners: &Banners, theme: &Theme) {
    let visible: Vec<&Banner> = banners.iter().collect();
    if visible.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(visible.iter().map(|_| Constraint::Length(BANNER_HEIGHT)))
        .split(area);

    for (banner, row) in visible.into_iter().zip(rows.iter()) {
        render_banner(frame, *row, banner, theme);
    }
}

fn render_banner(frame: &mut Frame<'_>, area: Rect, banner: &Banner, theme: &Theme) {
    let (label, color) = match banner.kind {
        BannerKind::Success => ("ok", theme.positive),
        BannerKind::Error => ("erro", theme.error),
    };
    let style = Style::default().fg(color);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);
    let line = Line::from(vec![
        Span::styled(format!("{label} "), style.add_modifier(Modifier::BOLD)),
        Span::styled(banner.message.as_str(), Style::default().fg(theme.text)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
