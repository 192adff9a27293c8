use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use intervu_core::{AppView, Chrome};

use crate::shell::ShellState;

pub(crate) const BRAND: &str = "InterVu AI";

/// Splits the frame into header / content / footer areas. The header row
/// collapses to nothing on the landing view, which draws its own hero.
pub(crate) fn frame_areas(area: Rect, view: AppView) -> (Rect, Rect, Rect) {
    let header_height = match view.chrome() {
        Chrome::App | Chrome::Public => 3,
        Chrome::None => 0,
    };
    let [header, content, footer] =
        Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(area);
    (header, content, footer)
}

pub(crate) fn render_header(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let view = shell.current_view();
    match view.chrome() {
        Chrome::None => {}
        Chrome::App => {
            let tabs = [
                (AppView::Dashboard, "Dashboard"),
                (AppView::Interviews, "Interviews"),
                (AppView::History, "History"),
                (AppView::Profile, "Profile"),
            ];
            let mut spans = vec![
                Span::styled(BRAND, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("   "),
            ];
            for (tab_view, label) in tabs {
                let style = if tab_view == view {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(label, style));
                spans.push(Span::raw("  "));
            }
            frame.render_widget(
                Paragraph::new(Line::from(spans))
                    .block(Block::default().borders(Borders::ALL)),
                area,
            );
        }
        Chrome::Public => {
            let line = Line::from(vec![
                Span::styled(BRAND, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("   "),
                Span::styled("l", Style::default().fg(Color::Cyan)),
                Span::raw(" Log In   "),
                Span::styled("s", Style::default().fg(Color::Cyan)),
                Span::raw(" Sign Up"),
            ]);
            frame.render_widget(
                Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
                area,
            );
        }
    }
}

pub(crate) fn render_footer(frame: &mut Frame, area: Rect, shell: &ShellState) {
    let footer_text = format!(
        "status: {} | {} | {}",
        shell.status,
        shell.current_view().label(),
        view_help(shell)
    );
    frame.render_widget(
        Paragraph::new(footer_text).block(Block::default().title("shell").borders(Borders::ALL)),
        area,
    );
}

fn view_help(shell: &ShellState) -> &'static str {
    match shell.current_view() {
        AppView::Landing => "Enter log in | s sign up | q quit",
        AppView::Login | AppView::Signup => "Enter continue | Esc back | q quit",
        AppView::Dashboard => "n new interview | i interviews | h history | q quit",
        AppView::Setup => "arrows choose | Enter begin | Esc back",
        AppView::Session => "Space record/stop | r re-record | Enter next | Esc back",
        AppView::Analyzing => "analyzing...",
        AppView::Result => "f final report | s summary | Esc back",
        AppView::Report => "d download PDF | h dashboard | Esc back",
        AppView::Summary => "v view result | d export PDF | h dashboard",
        AppView::Interviews => "n new interview | Esc back",
        AppView::History => "e export CSV | n new interview | Esc back",
        AppView::Notifications | AppView::Profile => "Esc back | q quit",
        AppView::Pricing
        | AppView::Enterprise
        | AppView::About
        | AppView::Blog
        | AppView::Contact
        | AppView::Privacy
        | AppView::Terms => "l log in | s sign up | Esc back",
    }
}
