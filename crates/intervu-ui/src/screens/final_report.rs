use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let lines: Vec<Line> = report_lines(shell).into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((shell.scroll, 0))
            .block(Block::default().title("Final Report").borders(Borders::ALL)),
        area,
    );
}

/// The report content, also handed to the PDF collaborator on download.
pub(crate) fn report_lines(shell: &ShellState) -> Vec<String> {
    let mut lines = vec!["Session report".to_owned(), String::new()];
    match shell.last_config.as_ref() {
        Some(config) => {
            lines.push(format!("Role: {}", config.role));
            lines.push(format!("Difficulty: {}", config.difficulty.as_str()));
            lines.push(format!("Questions: {}", config.question_count));
        }
        None => {
            lines.push("No session has been run yet.".to_owned());
        }
    }
    lines.push(String::new());
    if let Some(session) = shell.store.active() {
        lines.push(format!("Session id: {}", session.session_id().as_str()));
        lines.push(String::new());
        for (index, question) in session.questions().iter().enumerate() {
            lines.push(format!("{}. {}", index + 1, question.text));
        }
    }
    lines.push(String::new());
    lines.push("d  download as PDF    h  back to dashboard".to_owned());
    lines
}
