use ratatui::layout::Rect;
use ratatui::Frame;

use intervu_core::AppView;

use crate::shell::ShellState;

pub(crate) mod analyzing;
pub(crate) mod auth;
pub(crate) mod dashboard;
pub(crate) mod final_report;
pub(crate) mod history;
pub(crate) mod interviews;
pub(crate) mod landing;
pub(crate) mod marketing;
pub(crate) mod notifications;
pub(crate) mod profile;
pub(crate) mod result_detail;
pub(crate) mod session;
pub(crate) mod setup;
pub(crate) mod summary;

/// Exactly one screen per view. No wildcard arm: a new `AppView` variant
/// fails to compile until its screen is wired here.
pub(crate) fn render_screen(frame: &mut Frame, area: Rect, shell: &ShellState) {
    match shell.current_view() {
        AppView::Landing => landing::render(frame, area, shell),
        AppView::Login => auth::render_login(frame, area, shell),
        AppView::Signup => auth::render_signup(frame, area, shell),
        AppView::Dashboard => dashboard::render(frame, area, shell),
        AppView::Setup => setup::render(frame, area, shell),
        AppView::Session => session::render(frame, area, shell),
        AppView::Analyzing => analyzing::render(frame, area, shell),
        AppView::Result => result_detail::render(frame, area, shell),
        AppView::Report => final_report::render(frame, area, shell),
        AppView::Summary => summary::render(frame, area, shell),
        AppView::Interviews => interviews::render(frame, area, shell),
        AppView::History => history::render(frame, area, shell),
        AppView::Notifications => notifications::render(frame, area, shell),
        AppView::Profile => profile::render(frame, area, shell),
        AppView::Pricing => marketing::render(frame, area, shell, AppView::Pricing),
        AppView::Enterprise => marketing::render(frame, area, shell, AppView::Enterprise),
        AppView::About => marketing::render(frame, area, shell, AppView::About),
        AppView::Blog => marketing::render(frame, area, shell, AppView::Blog),
        AppView::Contact => marketing::render(frame, area, shell, AppView::Contact),
        AppView::Privacy => marketing::render(frame, area, shell, AppView::Privacy),
        AppView::Terms => marketing::render(frame, area, shell, AppView::Terms),
    }
}
