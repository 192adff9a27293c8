use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use intervu_core::{annotate, HighlightKind, HighlightPhrase};

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let phrases = emphasis_phrases(shell);
    let mut lines: Vec<Line> = vec![
        Line::from("A detailed look at the questions from your session."),
        Line::default(),
    ];
    match shell.store.active() {
        Some(session) => {
            for (index, question) in session.questions().iter().enumerate() {
                lines.push(highlighted_line(
                    format!("{}. {}", index + 1, question.text),
                    &phrases,
                ));
            }
        }
        None => {
            lines.push(Line::from("No session to summarize yet."));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(
        "v  view result detail    d  export PDF    h  dashboard",
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((shell.scroll, 0))
            .block(
                Block::default()
                    .title("Interview Summary")
                    .borders(Borders::ALL),
            ),
        area,
    );
}

/// Plain-text form of the summary, handed to the PDF collaborator.
pub(crate) fn summary_lines(shell: &ShellState) -> Vec<String> {
    let mut lines = vec!["Interview summary".to_owned(), String::new()];
    match shell.store.active() {
        Some(session) => {
            for (index, question) in session.questions().iter().enumerate() {
                lines.push(format!("{}. {}", index + 1, question.text));
            }
        }
        None => lines.push("No session to summarize yet.".to_owned()),
    }
    lines
}

/// Terms worth emphasizing in question text: the chosen role and
/// difficulty, annotated as keyword spans.
fn emphasis_phrases(shell: &ShellState) -> Vec<HighlightPhrase> {
    let mut phrases = Vec::new();
    if let Some(config) = shell.last_config.as_ref() {
        phrases.push(HighlightPhrase::new(
            config.role.clone(),
            HighlightKind::Keyword,
        ));
        phrases.push(HighlightPhrase::new(
            config.difficulty.as_str(),
            HighlightKind::Keyword,
        ));
    }
    phrases
}

fn highlighted_line(text: String, phrases: &[HighlightPhrase]) -> Line<'static> {
    let spans = annotate(&text, phrases)
        .into_iter()
        .map(|span| match span.highlight {
            Some(HighlightKind::Keyword) => {
                Span::styled(span.text, Style::default().fg(Color::Yellow))
            }
            Some(HighlightKind::Negative) => {
                Span::styled(span.text, Style::default().fg(Color::Red))
            }
            None => Span::raw(span.text),
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlighted_line_styles_only_the_matched_phrase() {
        let phrases = vec![HighlightPhrase::new("backend", HighlightKind::Keyword)];
        let line = highlighted_line("1. Design a backend cache.".to_owned(), &phrases);
        let styled: Vec<_> = line
            .spans
            .iter()
            .filter(|span| span.style.fg == Some(Color::Yellow))
            .collect();
        assert_eq!(styled.len(), 1);
        assert_eq!(styled[0].content.as_ref(), "backend");
    }
}
