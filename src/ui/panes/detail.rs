//! Detail pane: everything known about the selected value

use super::{border_style, clamp_scroll};
use crate::diag::catalog::{Catalog, Entry};
use crate::diag::report;
use crate::ui::theme::DEFAULT_THEME;
use crate::value::{Kind, Value};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

fn predicate_flags(v: Value) -> [(Kind, bool); 13] {
    [
        (Kind::Nul, v.is_nul()),
        (Kind::NanMarker, v.is_nan_marker()),
        (Kind::Nil, v.is_nil()),
        (Kind::Bool, v.is_bool()),
        (Kind::Int, v.is_int()),
        (Kind::Num, v.is_num()),
        (Kind::Instance, v.is_instance()),
        (Kind::Callable, v.is_callable()),
        (Kind::Opaque, v.is_opaque()),
        (Kind::Bytes, v.is_bytes()),
        (Kind::Sequence, v.is_sequence()),
        (Kind::Record, v.is_record()),
        (Kind::Indirect, v.is_indirect()),
    ]
}

/// Render the detail pane for `entry`
pub fn render_detail_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    entry: Option<&Entry>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match entry {
        Some(e) => format!(" '{}' ", e.label),
        None => " Detail ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let Some(entry) = entry else {
        let paragraph = Paragraph::new("(nothing selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);
    let mut lines: Vec<Line> = Vec::new();
    for text in report::describe_entry(catalog, entry)
        .into_iter()
        .chain(report::describe_layout(entry.value))
    {
        let line = match text.split_once(": ") {
            Some((key, rest)) => Line::from(vec![
                Span::styled(format!("{}: ", key), label_style),
                Span::styled(rest.to_string(), value_style),
            ]),
            None => Line::from(Span::styled(text, value_style)),
        };
        lines.push(line);
    }

    lines.push(Line::default());
    let flags: Vec<Span> = predicate_flags(entry.value)
        .iter()
        .flat_map(|(kind, set)| {
            let style = if *set {
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            [Span::styled(kind.name(), style), Span::raw(" ")]
        })
        .collect();
    lines.push(Line::from(flags));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
