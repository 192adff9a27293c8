use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use intervu_core::{Difficulty, Role, STANDARD_QUESTION_COUNT};

use crate::shell::{SetupFocus, ShellState};

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let mut lines = vec![
        Line::from("Configure the parameters for your new mock interview session."),
        Line::default(),
        choice_row(
            "1. Select Role",
            shell.setup_focus == SetupFocus::Role,
            Role::ALL
                .iter()
                .map(|role| (role.label(), *role == shell.setup.role)),
        ),
        Line::default(),
        choice_row(
            "2. Choose Difficulty",
            shell.setup_focus == SetupFocus::Difficulty,
            Difficulty::ALL
                .iter()
                .map(|level| (level.as_str(), *level == shell.setup.difficulty)),
        ),
        Line::default(),
        Line::from(format!(
            "3. Number of Questions     Standard Session — {STANDARD_QUESTION_COUNT} Questions"
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" Begin Session"),
        ]),
    ];
    if let Some(error) = shell.session_error.as_deref() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title("Set Up Interview")
                .borders(Borders::ALL),
        ),
        area,
    );
}

fn choice_row<'a>(
    title: &'a str,
    focused: bool,
    options: impl Iterator<Item = (&'a str, bool)>,
) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            title,
            if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            },
        ),
        Span::raw("     "),
    ];
    for (label, selected) in options {
        if selected {
            spans.push(Span::styled(
                format!("[{label}]"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {label} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
