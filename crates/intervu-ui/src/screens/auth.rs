use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shell::ShellState;

// Authentication is mocked client-side; continuing simply enters the
// authenticated area.
pub(crate) fn render_login(frame: &mut Frame, area: Rect, _shell: &ShellState) {
    let body = Paragraph::new(vec![
        "Welcome back.".into(),
        "".into(),
        "Press Enter to log in and open your dashboard.".into(),
        "Press s if you need an account instead.".into(),
    ])
    .block(Block::default().title("Log In").borders(Borders::ALL));
    frame.render_widget(body, area);
}

pub(crate) fn render_signup(frame: &mut Frame, area: Rect, _shell: &ShellState) {
    let body = Paragraph::new(vec![
        "Create your account.".into(),
        "".into(),
        "Press Enter to sign up and open your dashboard.".into(),
        "Press l if you already have an account.".into(),
    ])
    .block(Block::default().title("Sign Up").borders(Borders::ALL));
    frame.render_widget(body, area);
}
