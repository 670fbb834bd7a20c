//! Search pane: lower bound of an adjustable target in a sorted sequence

use super::border_style;
use crate::search::{bfind_with, cmp, Strategy};
use crate::ui::theme::DEFAULT_THEME;
use crate::value::Value;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Data needed to render the search pane
pub struct SearchRenderData<'a> {
    pub sequence: &'a [Value],
    pub target: i64,
}

/// Render the search pane
pub fn render_search_pane(
    frame: &mut Frame,
    area: Rect,
    data: SearchRenderData,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Lower Bound ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let target = Value::int(data.target);
    let found: Vec<(Strategy, usize)> = Strategy::ALL
        .iter()
        .map(|&s| (s, bfind_with(s, data.sequence, target, cmp::int_less)))
        .collect();
    let at = found[0].1;

    let mut cells = vec![Span::styled("seq: ", Style::default().fg(DEFAULT_THEME.comment))];
    for (i, v) in data.sequence.iter().enumerate() {
        if i == at {
            cells.push(Span::styled(
                "| ",
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        cells.push(Span::styled(
            format!("{} ", v.as_int()),
            Style::default().fg(DEFAULT_THEME.number),
        ));
    }
    if at == data.sequence.len() {
        cells.push(Span::styled(
            "|",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled("target: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                data.target.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.number)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(cells),
    ];
    for (strategy, index) in &found {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", strategy.name()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(index.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }
    let agree = found.iter().all(|(_, i)| *i == at);
    lines.push(if agree {
        Line::from(Span::styled("strategies agree", Style::default().fg(DEFAULT_THEME.success)))
    } else {
        Line::from(Span::styled("strategies DISAGREE", Style::default().fg(DEFAULT_THEME.error)))
    });

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
