use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use intervu_core::AppView;

use crate::shell::ShellState;

// One renderer serves every public marketing page; the router still lists
// each view explicitly so the enumeration stays exhaustively matched.
pub(crate) fn render(frame: &mut Frame, area: Rect, shell: &ShellState, view: AppView) {
    let body = match view {
        AppView::Pricing => "Simple plans for individuals and teams.",
        AppView::Enterprise => "Interview readiness programs for whole organizations.",
        AppView::About => "We help candidates practice until interviews feel routine.",
        AppView::Blog => "Notes on interviewing, practice techniques, and hiring.",
        AppView::Contact => "Questions? We'd love to hear from you.",
        AppView::Privacy => "How we handle your data.",
        AppView::Terms => "The agreement covering your use of the service.",
        _ => "",
    };
    let lines: Vec<Line> = vec![
        Line::from(body),
        Line::default(),
        Line::from("l  log in    s  sign up    Esc  back"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((shell.scroll, 0))
            .block(Block::default().title(view.label()).borders(Borders::ALL)),
        area,
    );
}
