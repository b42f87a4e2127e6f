/// Reusable widgets and styling helpers for the analyzer screens
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use super::app::AppStatus;
use crate::models::{StrengthOverview, Tone, Verdict};

/// Chart values are fractional; bars are drawn in hundredths
const BAR_SCALE: f64 = 100.0;

pub fn verdict_style(verdict: Verdict) -> Style {
    let color = match verdict {
        Verdict::Good => Color::Green,
        Verdict::Average => Color::Yellow,
        Verdict::Risky => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Caution => Color::Yellow,
        Tone::Negative => Color::Red,
    }
}

/// One colored line per status
pub fn status_line(status: &AppStatus) -> Line<'static> {
    let (text, color) = match status {
        AppStatus::Idle => ("Ready".to_string(), Color::Cyan),
        AppStatus::Loading { operation } => (format!("⏳ {}...", operation), Color::Yellow),
        AppStatus::Success { message } => (format!("✅ {}", message), Color::Green),
        AppStatus::Warning { message } => (format!("⚠ {}", message), Color::Yellow),
        AppStatus::Error { message } => (format!("❌ {}", message), Color::Red),
    };
    Line::from(Span::styled(text, Style::default().fg(color)))
}

/// Bar chart of the four strength values on a fixed 0-2 axis
pub fn strength_chart(chart: &StrengthOverview) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = chart
        .bars()
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value((value * BAR_SCALE).round() as u64)
                .text_value(format!("{:.1}", value))
                .label(Line::from(*label))
                .style(Style::default().fg(bar_color(*value)))
        })
        .collect();

    BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("📊 Strength Overview"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .max((StrengthOverview::MAX * BAR_SCALE) as u64)
}

fn bar_color(value: f64) -> Color {
    if value >= 1.5 {
        Color::Green
    } else if value >= 0.75 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Render an empty result pane with a hint
pub fn render_placeholder(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL).title("📌 Final Result"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(paragraph, area);
}
