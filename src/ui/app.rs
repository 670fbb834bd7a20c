//! Main TUI application state and logic

use crate::diag::catalog::Catalog;
use crate::diag::constants::TICK_RATE_MS;
use crate::value::{Value, INT_MAX, INT_MIN};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Sorted sequence the search pane looks the target up in
const SEARCH_KEYS: [i64; 8] = [5, 10, 10, 10, 20, 20, 20, 30];

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Catalog,
    Detail,
    Search,
}

impl FocusedPane {
    /// Move focus to the next pane (catalog -> detail -> search)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Detail,
            FocusedPane::Detail => FocusedPane::Search,
            FocusedPane::Search => FocusedPane::Catalog,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Search,
            FocusedPane::Detail => FocusedPane::Catalog,
            FocusedPane::Search => FocusedPane::Detail,
        }
    }
}

/// The main application state
pub struct App {
    /// Sample values being browsed
    pub catalog: Catalog,

    /// Index of the selected catalog entry
    pub selected: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub catalog_scroll: usize,
    pub detail_scroll: usize,

    /// Sequence and target shown in the search pane
    pub search_sequence: Vec<Value>,
    pub search_target: i64,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        App {
            catalog,
            selected: 0,
            focused_pane: FocusedPane::Catalog,
            catalog_scroll: 0,
            detail_scroll: 0,
            search_sequence: SEARCH_KEYS.iter().map(|&k| Value::int(k)).collect(),
            search_target: 10,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(TICK_RATE_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        // Right column: Detail (top) | Search (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(8)])
            .split(columns[1]);

        super::panes::render_catalog_pane(
            frame,
            columns[0],
            &self.catalog,
            self.selected,
            self.focused_pane == FocusedPane::Catalog,
            &mut self.catalog_scroll,
        );

        super::panes::render_detail_pane(
            frame,
            right_rows[0],
            &self.catalog,
            self.catalog.get(self.selected),
            self.focused_pane == FocusedPane::Detail,
            &mut self.detail_scroll,
        );

        super::panes::render_search_pane(
            frame,
            right_rows[1],
            super::panes::SearchRenderData {
                sequence: &self.search_sequence,
                target: self.search_target,
            },
            self.focused_pane == FocusedPane::Search,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected,
            self.catalog.len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Catalog => self.select(self.selected.saturating_sub(1)),
                FocusedPane::Detail => {
                    self.detail_scroll = self.detail_scroll.saturating_sub(1);
                }
                FocusedPane::Search => self.nudge_target(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Catalog => self.select(self.selected + 1),
                FocusedPane::Detail => {
                    self.detail_scroll = self.detail_scroll.saturating_add(1);
                }
                FocusedPane::Search => self.nudge_target(-1),
            },
            KeyCode::Char('+') | KeyCode::Char('=') => self.nudge_target(1),
            KeyCode::Char('-') => self.nudge_target(-1),
            KeyCode::Left => self.jump_group(false),
            KeyCode::Right => self.jump_group(true),
            KeyCode::Home | KeyCode::Backspace => self.select(0),
            KeyCode::End | KeyCode::Enter => self.select(self.catalog.len().saturating_sub(1)),
            _ => {}
        }
    }

    /// Select entry `index`, clamped to the catalog
    fn select(&mut self, index: usize) {
        let last = self.catalog.len().saturating_sub(1);
        self.selected = index.min(last);
        self.detail_scroll = 0;
        if let Some(entry) = self.catalog.get(self.selected) {
            self.status_message = format!("{} ({})", entry.label, entry.value.name());
        }
    }

    /// Select the first entry of the next (or previous) group
    fn jump_group(&mut self, forward: bool) {
        let entries = self.catalog.entries();
        let Some(current) = entries.get(self.selected).map(|e| e.group) else {
            return;
        };
        let target = if forward {
            entries
                .iter()
                .skip(self.selected)
                .position(|e| e.group != current)
                .map(|offset| self.selected + offset)
        } else {
            // Start of the current group, then the start of the one before it.
            let start = entries[..self.selected]
                .iter()
                .rposition(|e| e.group != current)
                .map_or(0, |i| i + 1);
            if start == self.selected && start > 0 {
                let prev = entries[start - 1].group;
                Some(
                    entries[..start]
                        .iter()
                        .rposition(|e| e.group != prev)
                        .map_or(0, |i| i + 1),
                )
            } else {
                Some(start)
            }
        };
        if let Some(index) = target {
            self.select(index);
        }
    }

    fn nudge_target(&mut self, delta: i64) {
        self.search_target = (self.search_target + delta).clamp(INT_MIN, INT_MAX);
        self.status_message = format!("Search target {}", self.search_target);
    }
}
