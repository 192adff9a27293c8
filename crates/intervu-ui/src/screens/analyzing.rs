use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let indicator = if shell.analyzing_in_flight() {
        "● ● ●"
    } else {
        "· · ·"
    };
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Analyzing your answer...",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Our AI is processing your response to generate detailed"),
        Line::from("feedback on pacing, tone, and technical accuracy."),
        Line::default(),
        Line::from(indicator),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title("Analyzing").borders(Borders::ALL)),
        area,
    );
}
