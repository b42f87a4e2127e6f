use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::app::InputMode;

/// Top-level screen areas
pub struct TuiLayout {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl TuiLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Mode tabs
                Constraint::Min(0),    // Content
                Constraint::Length(4), // Status bar
            ])
            .split(area);

        Self {
            tab_bar: chunks[0],
            content: chunks[1],
            status_bar: chunks[2],
        }
    }

    pub fn render_tab_bar(&self, f: &mut Frame, mode: InputMode) {
        let tabs = Tabs::new(InputMode::TITLES.to_vec())
            .block(Block::default().borders(Borders::ALL).title("📊 Simple Stock Analyzer"))
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .select(mode.index());

        f.render_widget(tabs, self.tab_bar);
    }

    pub fn render_status_bar(&self, f: &mut Frame, status_line: Line<'static>) {
        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let hint = |t: &'static str| Span::styled(t, Style::default().fg(Color::Gray));

        let content = vec![
            Line::from(vec![
                key("Tab", Color::Yellow),
                hint(" switch mode • "),
                key("↑/↓", Color::Yellow),
                hint(" move • "),
                key("Enter", Color::Green),
                hint(" analyse • "),
                key("Del", Color::Magenta),
                hint(" clear • "),
                key("Esc", Color::Red),
                hint(" quit"),
            ]),
            status_line,
        ];

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, self.status_bar);
    }

    /// Input pane on the left, results on the right
    pub fn split_content(&self) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(self.content);
        (chunks[0], chunks[1])
    }
}

/// Score header, explanations and chart stacked in the result pane
pub struct ResultLayout {
    pub summary: Rect,
    pub explanations: Rect,
    pub chart: Rect,
}

impl ResultLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(9),
                Constraint::Min(6),
            ])
            .split(area);

        Self {
            summary: chunks[0],
            explanations: chunks[1],
            chart: chunks[2],
        }
    }
}
