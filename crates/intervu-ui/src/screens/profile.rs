use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let lines: Vec<Line> = vec![
        Line::from("Practice account"),
        Line::default(),
        Line::from(format!(
            "Sessions completed this run: {}",
            shell.finished_sessions.len()
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title("Profile").borders(Borders::ALL)),
        area,
    );
}
