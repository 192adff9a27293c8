use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::chrome::BRAND;
use crate::shell::ShellState;

// The landing view draws its own hero instead of the shared chrome.
pub(crate) fn render(frame: &mut Frame, area: Rect, _shell: &ShellState) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Ace your next interview with AI-powered practice."),
        Line::default(),
        Line::from("Run a mock interview, get instant feedback, and track"),
        Line::from("your progress across sessions."),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" log in    "),
            Span::styled("s", Style::default().fg(Color::Cyan)),
            Span::raw(" sign up    "),
            Span::styled("p", Style::default().fg(Color::Cyan)),
            Span::raw(" pricing    "),
            Span::styled("a", Style::default().fg(Color::Cyan)),
            Span::raw(" about"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
