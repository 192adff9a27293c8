use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let completed = shell.finished_sessions.len();
    let mut lines: Vec<Line> = vec![
        Line::from(format!("Completed sessions this run: {completed}")),
        Line::default(),
    ];
    if completed == 0 {
        lines.push(Line::from(
            "No sessions yet. Start a mock interview to get feedback.",
        ));
    } else {
        for record in &shell.finished_sessions {
            lines.push(Line::from(format!("  {} — {}", record.role, record.status)));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(
        "n  new interview    i  interviews    h  history    o  notifications    p  profile",
    ));

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title("Dashboard").borders(Borders::ALL)),
        area,
    );
}
