use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, modal_open: bool, has_selection: bool) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    // The modal swallows every key, so only its own hints apply
    if modal_open {
        return vec![
            key("Enter"),
            Span::raw(":Enviar  "),
            key("Tab"),
            Span::raw(":Campo  "),
            key("Esc"),
            Span::raw(":Fechar  "),
            key("^C"),
            Span::raw(":Sair"),
        ];
    }

    let mut hotkey_spans = vec![];

    if vim_mode {
        hotkey_spans.extend(vec![key("hjkl"), Span::raw(":Nav  ")]);
    } else {
        hotkey_spans.extend(vec![key("←↑↓→"), Span::raw(":Nav  ")]);
    }

    hotkey_spans.extend(vec![
        key("a"),
        Span::raw(":Enviar  "),
        key("r"),
        Span::raw(":Atualizar  "),
    ]);

    // Delete only makes sense with a card under the cursor
    if has_selection {
        hotkey_spans.extend(vec![key("d"), Span::raw(":Excluir  ")]);
    }

    hotkey_spans.extend(vec![key("q"), Span::raw(":Sair")]);

    hotkey_spans
}

/// Render the one-line hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, modal_open: bool, has_selection: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, modal_open, has_selection)))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}
