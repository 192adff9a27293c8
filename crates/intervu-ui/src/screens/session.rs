use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use intervu_core::{format_clock, AnswerPhase};

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let role_label = shell
        .last_config
        .as_ref()
        .map(|config| config.role.as_str())
        .unwrap_or("practice");
    let title = format!("Active Session — {role_label}");

    let mut lines: Vec<Line> = Vec::new();

    if shell.creating_session {
        lines.push(Line::from("Starting..."));
        lines.push(Line::default());
        lines.push(Line::from("Requesting your question set from the server."));
    } else if let Some(error) = shell.session_error.as_deref() {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::default());
        lines.push(Line::from("Press r to retry, or Esc to go back."));
    } else if let Some((position, total)) = shell.store.progress() {
        lines.push(Line::from(Span::styled(
            format!("Question {position} of {total}"),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::default());
        if let Some(question) = shell.store.current_question() {
            lines.push(Line::from(Span::styled(
                question.text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::default());
        lines.push(timer_line(shell));
        lines.push(Line::default());
        lines.push(controls_line(shell));
    } else {
        lines.push(Line::from("No active session."));
        lines.push(Line::default());
        lines.push(Line::from("Go back to the setup screen to begin one."));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(title).borders(Borders::ALL)),
        area,
    );
}

fn timer_line(shell: &ShellState) -> Line<'static> {
    let clock = format_clock(shell.answer.elapsed_secs());
    if shell.answer.is_recording() {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Red)),
            Span::styled(clock, Style::default().fg(Color::Red)),
            Span::raw("  Listening... speak clearly."),
        ])
    } else {
        Line::from(vec![
            Span::styled("○ ", Style::default().fg(Color::DarkGray)),
            Span::styled(clock, Style::default().fg(Color::DarkGray)),
        ])
    }
}

fn controls_line(shell: &ShellState) -> Line<'static> {
    let text = match shell.answer.phase() {
        AnswerPhase::Idle => "Space  start your answer",
        AnswerPhase::Recording => "Space  stop recording",
        AnswerPhase::Answered => {
            if shell.store.is_last_question() {
                "r  re-record    Enter  Finish Interview"
            } else {
                "r  re-record    Enter  Next Question"
            }
        }
    };
    Line::from(text)
}
