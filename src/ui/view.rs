use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::{InputMode, StockHealthApp};
use super::components::{render_placeholder, status_line, strength_chart, tone_color, verdict_style};
use super::layout::{ResultLayout, TuiLayout};
use crate::models::HealthReport;
use crate::report::{AnalysisOutput, DISCLAIMER};

/// Draw the whole screen
pub fn render(f: &mut Frame, app: &StockHealthApp) {
    let layout = TuiLayout::new(f.area());
    layout.render_tab_bar(f, app.mode);

    let (input_area, result_area) = layout.split_content();
    match app.mode {
        InputMode::Manual => render_manual_form(f, input_area, app),
        InputMode::Live => render_ticker_input(f, input_area, app),
    }

    match &app.output {
        Some(output) => render_result(f, result_area, output),
        None => render_placeholder(
            f,
            result_area,
            "Fill in the numbers (or fetch a stock) and press Enter.",
        ),
    }

    layout.render_status_bar(f, status_line(&app.status));
}

fn render_manual_form(f: &mut Frame, area: Rect, app: &StockHealthApp) {
    let selected = app.form.selected();
    let items: Vec<ListItem> = app
        .form
        .entries()
        .enumerate()
        .flat_map(|(index, (field, value))| {
            let is_selected = index == selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let value_style = if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let shown = if value.is_empty() { "0" } else { value };
            let cursor = if is_selected { "▏" } else { "" };

            [
                ListItem::new(Line::from(Span::styled(
                    format!("{}{}", marker, field.label()),
                    Style::default().fg(Color::Gray),
                ))),
                ListItem::new(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{}{}", shown, cursor), value_style),
                ])),
            ]
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🔢 Enter values manually"),
    );
    f.render_widget(list, area);
}

fn render_ticker_input(f: &mut Frame, area: Rect, app: &StockHealthApp) {
    let mut lines = vec![
        Line::from("Enter stock name (Alpha Vantage format)"),
        Line::from(Span::styled("e.g. IBM, TCS.BSE, RELIANCE.BSE", Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::raw("Stock: "),
            Span::styled(
                format!("{}▏", app.ticker),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if !app.live_enabled() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Live data disabled: set ALPHA_VANTAGE_API_KEY",
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🌐 Fetch live data using stock name"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_result(f: &mut Frame, area: Rect, output: &AnalysisOutput) {
    let layout = ResultLayout::new(area);
    let report = &output.report;

    render_summary(f, layout.summary, output.symbol.as_deref(), report);
    render_explanations(f, layout.explanations, report);
    f.render_widget(strength_chart(&report.chart), layout.chart);
}

fn render_summary(f: &mut Frame, area: Rect, symbol: Option<&str>, report: &HealthReport) {
    let title = match symbol {
        Some(symbol) => format!("📌 Final Result: {}", symbol),
        None => "📌 Final Result".to_string(),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Score: {} / {}", report.score, HealthReport::MAX_SCORE),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(report.verdict.to_string(), verdict_style(report.verdict))),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

fn render_explanations(f: &mut Frame, area: Rect, report: &HealthReport) {
    let mut lines: Vec<Line> = report
        .explanations
        .iter()
        .map(|e| {
            Line::from(Span::styled(
                format!("• {}", e),
                Style::default().fg(tone_color(e.tone)),
            ))
        })
        .collect();
    lines.push(Line::from(Span::styled(DISCLAIMER, Style::default().fg(Color::DarkGray))));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🧠 Explained in Simple Words"),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
