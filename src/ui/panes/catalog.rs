//! Catalog pane: every sample value, grouped

use super::{border_style, clamp_scroll};
use crate::diag::catalog::{Catalog, Group};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the catalog pane. `scroll_offset` is adjusted to keep `selected`
/// in view.
pub fn render_catalog_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Values ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut rows: Vec<ListItem> = Vec::new();
    let mut selected_row = 0;
    let mut index = 0;
    for group in Group::ALL {
        rows.push(ListItem::new(Line::from(Span::styled(
            format!("** {} **", group),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ))));
        for entry in catalog.group(group) {
            let kind = entry.value.kind();
            let mut line = Line::from(vec![
                Span::styled(
                    format!(" {:<9}", kind.name()),
                    Style::default().fg(DEFAULT_THEME.kind_color(kind)),
                ),
                Span::styled(entry.label.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]);
            if index == selected {
                selected_row = rows.len();
                line = line.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                );
            }
            rows.push(ListItem::new(line));
            index += 1;
        }
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if selected_row < *scroll_offset {
        *scroll_offset = selected_row;
    } else if selected_row >= *scroll_offset + visible_height {
        *scroll_offset = selected_row + 1 - visible_height;
    }
    clamp_scroll(scroll_offset, rows.len(), visible_height);

    let visible: Vec<ListItem> = rows
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();
    frame.render_widget(List::new(visible).block(block), area);
}
