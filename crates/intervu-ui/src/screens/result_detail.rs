use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let mut lines: Vec<Line> = vec![Line::from("Feedback for your latest answer."), Line::default()];
    if let Some(question) = shell.store.current_question() {
        lines.push(Line::from(format!("Question: {}", question.text)));
        lines.push(Line::default());
    }
    if let Some(secs) = shell.answer.answered_secs() {
        lines.push(Line::from(format!(
            "Answer length: {} seconds",
            secs
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(
        "f  open the final report    s  back to the summary",
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Result").borders(Borders::ALL)),
        area,
    );
}
