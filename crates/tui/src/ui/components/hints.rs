use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(hint_separator(theme));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

pub mod common {
    use super::KeyHint;

    /// Edit form: save, back to the listing, quit.
    pub fn category_form() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "Salvar"),
            KeyHint::new("Esc", "Cancelar"),
            KeyHint::new("Ctrl+C", "sair"),
        ]
    }

    pub fn listing() -> Vec<KeyHint> {
        vec![KeyHint::new("q", "sair")]
    }
}
