use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let mut lines: Vec<Line> = vec![
        Line::from("Your interview tracks and upcoming practice."),
        Line::default(),
    ];
    if shell.finished_sessions.is_empty() {
        lines.push(Line::from(
            "Nothing scheduled. Press n to set up a new mock interview.",
        ));
    } else {
        for record in &shell.finished_sessions {
            lines.push(Line::from(format!("  {} — {}", record.role, record.status)));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title("Interviews").borders(Borders::ALL)),
        area,
    );
}
