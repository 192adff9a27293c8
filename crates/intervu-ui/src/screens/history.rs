use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let records = shell.history_records();
    let mut lines: Vec<Line> = vec![
        Line::from("Review your past performance and track your improvements."),
        Line::default(),
    ];
    if records.is_empty() {
        lines.push(Line::from("No completed sessions yet."));
    } else {
        lines.push(Line::from(format!(
            "{:<24} {:<16} {:<12} {}",
            "Role", "Date", "Status", "Score"
        )));
        for record in &records {
            let score = record
                .score
                .map(|value| value.to_string())
                .unwrap_or_else(|| "—".to_owned());
            lines.push(Line::from(format!(
                "{:<24} {:<16} {:<12} {}",
                record.role, record.date, record.status, score
            )));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from("e  export CSV    n  new interview"));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title("Session History")
                .borders(Borders::ALL),
        ),
        area,
    );
}
