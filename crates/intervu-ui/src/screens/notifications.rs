use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shell::ShellState;

pub(crate) fn render(frame: &mut Frame, area: Rect, _shell: &ShellState) {
    frame.render_widget(
        Paragraph::new("You're all caught up.").block(
            Block::default()
                .title("Notifications")
                .borders(Borders::ALL),
        ),
        area,
    );
}
