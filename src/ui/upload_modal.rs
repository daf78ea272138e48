use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::logic;
use crate::model::types::{FormField, UploadForm};

/// Render the upload form, centred over the grid
pub fn render_upload_modal(f: &mut Frame, form: &UploadForm) {
    let modal_area = logic::layout::upload_modal_rect(f.area());

    let modal = Paragraph::new(build_form_lines(form)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Enviar foto")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, modal_area);
    f.render_widget(modal, modal_area);

    let close = Paragraph::new(Span::styled(
        logic::layout::MODAL_CLOSE_LABEL,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(close, logic::layout::modal_close_rect(f.area()));
}

fn build_form_lines(form: &UploadForm) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::raw(""),
        field_label("Nome", form.focused == FormField::Name),
        field_value(&form.name, form.focused == FormField::Name),
        Line::raw(""),
        field_label("Arquivo", form.focused == FormField::FilePath),
        field_value(&form.file_path, form.focused == FormField::FilePath),
    ];

    let path = form.file_path.trim();
    if !path.is_empty() && !logic::file::is_image_file(path) {
        lines.push(Line::from(Span::styled(
            "  Extensão não reconhecida como imagem",
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::raw(""));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  Enter", Style::default().fg(Color::Yellow)),
        Span::raw(":Enviar  "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(":Campo  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(":Fechar"),
    ]));

    lines
}

fn field_label(label: &'static str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(format!("  {}:", label), style))
}

fn field_value(value: &str, focused: bool) -> Line<'static> {
    // Cursor marker on the field being edited
    let text = if focused {
        format!("  > {}_", value)
    } else {
        format!("    {}", value)
    };
    let style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(Span::styled(text, style))
}
